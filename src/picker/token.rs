use super::error::{PickError, Result};

const QUALITY_OPTION: &str = "-q";

/// A single parsed command line word.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Name(String),
    /// Weight for the next name
    Quality(f64),
}

///
/// Parses a quality value. Anything that is not a finite number `>= 0` is rejected.
///
pub fn parse_quality(text: &str) -> Result<f64> {
    let quality: f64 = text
        .parse()
        .map_err(|_| PickError::InvalidQualityFormat(text.to_string()))?;
    if !quality.is_finite() || quality < 0.0 {
        return Err(PickError::InvalidQualityRange(text.to_string()));
    }
    Ok(quality)
}

///
/// Converts raw words into tokens.
///
/// `-q <number>` and `-q<number>` both become a `Token::Quality`, any other
/// word starting with `-` is an error, and everything else is a `Token::Name`.
///
pub fn tokenize<S: AsRef<str>>(words: &[S]) -> Result<Vec<Token>> {
    let (tokens, expecting_quality) = words.iter().try_fold(
        (Vec::with_capacity(words.len()), false),
        |(mut tokens, expecting_quality), word| -> Result<(Vec<Token>, bool)> {
            let word: &str = word.as_ref();
            if expecting_quality {
                tokens.push(Token::Quality(parse_quality(word)?));
                return Ok((tokens, false));
            }
            if !word.starts_with('-') {
                tokens.push(Token::Name(word.to_string()));
                return Ok((tokens, false));
            }
            match word.strip_prefix(QUALITY_OPTION) {
                None => Err(PickError::UnexpectedOption(word.to_string())),
                Some("") => Ok((tokens, true)),
                Some(inline) => {
                    tokens.push(Token::Quality(parse_quality(inline)?));
                    Ok((tokens, false))
                }
            }
        },
    )?;

    if expecting_quality {
        return Err(PickError::MissingQualityValue);
    }
    for token in &tokens {
        log::trace!("Token {:?}", token);
    }
    Ok(tokens)
}
