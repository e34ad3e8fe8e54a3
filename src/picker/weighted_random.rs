use super::entry::Entry;
use super::error::{PickError, Result};
use rand::Rng;

///
/// Returns the entry whose slice of `[0, total)` contains `value`.
///
/// Entries own consecutive half-open slices as wide as their quality, so a
/// zero quality entry can never match. If rounding leaves `value` past the
/// last slice, the last entry with a positive quality is used instead.
///
pub fn entry_at(entries: &[Entry], value: f64) -> Option<&Entry> {
    let mut current_weight = 0.0;
    for entry in entries {
        current_weight += entry.quality;
        if value < current_weight {
            return Some(entry);
        }
    }
    let fallback = entries.iter().rev().find(|entry| entry.quality > 0.0);
    if let Some(entry) = fallback {
        log::warn!(
            "Value {} did not match any entry, total was {}; using {:?}",
            value,
            current_weight,
            entry.name
        );
    }
    fallback
}

///
/// Draws one name, with each entry's chance proportional to its quality.
///
pub fn weighted_random<R: Rng + ?Sized>(entries: Vec<Entry>, rng: &mut R) -> Result<String> {
    if entries.is_empty() {
        return Err(PickError::NoEntries);
    }
    let total_weight: f64 = entries.iter().map(|entry| entry.quality).sum();
    if total_weight.is_infinite() {
        return Err(PickError::WeightOverflow);
    }
    // Also catches NaN
    if !(total_weight > 0.0) {
        return Err(PickError::ZeroTotalWeight);
    }

    let value = rng.gen_range(0.0..total_weight);
    log::debug!("Drew {} from [0, {})", value, total_weight);
    // None needs every quality to be zero, which the check above already rejected
    entry_at(&entries, value)
        .map(|entry| entry.name.clone())
        .ok_or(PickError::ZeroTotalWeight)
}
