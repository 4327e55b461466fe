use crate::validator::ValidationError;

/// A enum that contains the different types of errors that the library
/// returns as part of Result's.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidLength(Vec<ValidationError>),
    EmptyAlphabet,
    SamplingIndexOutOfRange { index: usize, alphabet_len: usize },
    Generic(&'static str),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidLength(errors)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidLength(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message()).collect();
                write!(f, "{}", messages.join(", "))
            }
            Self::EmptyAlphabet => write!(f, "no character class selected"),
            Self::SamplingIndexOutOfRange {
                index,
                alphabet_len,
            } => {
                write!(
                    f,
                    "sampled index {index} outside alphabet of {alphabet_len} characters"
                )
            }
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
