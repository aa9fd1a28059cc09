use std::fmt::{Debug, Display};

/// Everything that can go wrong while deriving a key or handling a password
/// hash record. None of these are retryable; no partial output is ever
/// produced.
pub enum Error {
    /// The (N, r, p) triple violates the scrypt parameter constraints or
    /// does not fit the address space.
    InvalidParams,
    /// The requested key length is zero or above (2^32 - 1) * 32 bytes.
    InvalidOutputLen,
    /// A password hash record failed to parse.
    MalformedRecord,
    /// The secure random source failed while drawing a salt.
    Rng(rand_core::Error),
    /// The mixing array could not be allocated. The parameters were legal;
    /// the host simply lacks the memory.
    OutOfMemory,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParams => f.write_str("invalid cost parameters"),
            Self::InvalidOutputLen => {
                f.write_str("derived key length must be between 1 and (2^32 - 1) * 32 bytes")
            }
            Self::MalformedRecord => f.write_str("malformed password hash record"),
            Self::Rng(e) => write!(f, "random source failure: {e}"),
            Self::OutOfMemory => f.write_str("not enough memory for the mixing array"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rng(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(value: rand_core::Error) -> Self {
        Self::Rng(value)
    }
}
