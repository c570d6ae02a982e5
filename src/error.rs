use core::fmt;

/// Copy result type alias
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Compact copy error codes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Error {
    /// Requested size and the most both buffers can hold, in the operation's unit.
    SizeOutOfBounds(usize, usize) = 1,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeOutOfBounds(requested, available) => {
                write!(f, "Copy size out of bounds: requested {}, available {}", requested, available)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_sizes() {
        let err = Error::SizeOutOfBounds(20, 16);
        assert_eq!(err.to_string(), "Copy size out of bounds: requested 20, available 16");
    }
}
