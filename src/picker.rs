pub mod entry;
pub mod error;
pub mod token;
pub mod weighted_random;

pub use entry::{build_entries, Entry};
pub use error::{PickError, Result};
pub use token::{tokenize, Token};
pub use weighted_random::{entry_at, weighted_random};

use rand::Rng;

///
/// Runs the whole pipeline over the raw command line words:
/// words -> tokens -> entries -> one name drawn from `rng`.
///
pub fn pick<S, R>(words: &[S], rng: &mut R) -> Result<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let tokens = tokenize(words)?;
    log::debug!("Parsed {} tokens", tokens.len());
    let entries = build_entries(tokens)?;
    log::debug!("Built {} entries", entries.len());
    weighted_random(entries, rng)
}
