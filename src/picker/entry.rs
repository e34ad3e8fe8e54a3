use super::error::{PickError, Result};
use super::token::Token;

pub const DEFAULT_QUALITY: f64 = 1.0;

/// A name that can be picked, and its weight
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub quality: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, quality: f64) -> Entry {
        Entry {
            name: name.into(),
            quality,
        }
    }
}

///
/// Folds tokens into entries, in the order the names were given.
///
/// A quality applies to the name straight after it. Names without one get
/// `DEFAULT_QUALITY`.
///
pub fn build_entries(tokens: Vec<Token>) -> Result<Vec<Entry>> {
    let (entries, pending) = tokens.into_iter().try_fold(
        (Vec::new(), None),
        |(mut entries, pending): (Vec<Entry>, Option<f64>), token| -> Result<_> {
            match (token, pending) {
                (Token::Name(name), pending) => {
                    entries.push(Entry::new(name, pending.unwrap_or(DEFAULT_QUALITY)));
                    Ok((entries, None))
                }
                (Token::Quality(new), Some(held)) => {
                    Err(PickError::DuplicateQuality { held, new })
                }
                (Token::Quality(quality), None) => Ok((entries, Some(quality))),
            }
        },
    )?;

    if let Some(quality) = pending {
        return Err(PickError::OrphanedQuality(quality));
    }
    for entry in &entries {
        log::trace!("Entry {:?} with quality {}", entry.name, entry.quality);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::token::tokenize;

    fn entries_for(words: &[&str]) -> Result<Vec<Entry>> {
        build_entries(tokenize(words)?)
    }

    #[test]
    fn test_names_default_to_one() {
        let entries = entries_for(&["Alice", "Bob", "Carl", "Dan"]).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|entry| entry.quality == 1.0));
    }

    #[test]
    fn test_inline_quality_applies_to_next_name() {
        assert_eq!(
            entries_for(&["-q2.5", "Alice"]).unwrap(),
            vec![Entry::new("Alice", 2.5)]
        );
    }

    #[test]
    fn test_separate_quality_applies_to_next_name() {
        assert_eq!(
            entries_for(&["-q", "3", "Bob"]).unwrap(),
            vec![Entry::new("Bob", 3.0)]
        );
    }

    #[test]
    fn test_mixed_order_is_kept() {
        assert_eq!(
            entries_for(&["Alice", "-q2", "Bob"]).unwrap(),
            vec![Entry::new("Alice", 1.0), Entry::new("Bob", 2.0)]
        );
    }

    #[test]
    fn test_duplicate_quality() {
        assert_eq!(
            entries_for(&["-q1", "-q2", "Carl"]),
            Err(PickError::DuplicateQuality {
                held: 1.0,
                new: 2.0
            })
        );
    }

    #[test]
    fn test_orphaned_quality() {
        assert_eq!(entries_for(&["-q5"]), Err(PickError::OrphanedQuality(5.0)));
        assert_eq!(
            entries_for(&["Alice", "-q", "5"]),
            Err(PickError::OrphanedQuality(5.0))
        );
    }

    #[test]
    fn test_same_name_twice_is_two_entries() {
        assert_eq!(
            entries_for(&["Alice", "-q3", "Alice"]).unwrap(),
            vec![Entry::new("Alice", 1.0), Entry::new("Alice", 3.0)]
        );
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(build_entries(vec![]).unwrap(), vec![]);
    }

    #[test]
    fn test_duplicate_message_names_both_values() {
        assert_eq!(
            entries_for(&["-q1", "-q2.5", "Carl"])
                .unwrap_err()
                .to_string(),
            "Quality is already specified (1), cannot override with 2.5"
        );
    }
}
