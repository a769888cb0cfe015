use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    NegativeLength { len: usize, target: i128 },
    LengthOverflow { len: usize, target: i128 },
    OutOfMemory { len: usize, target: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength { len, target } => {
                write!(f, "cannot resize bitset of {len} bits to negative length {target}")
            }
            Self::LengthOverflow { len, target } => {
                write!(f, "cannot resize bitset of {len} bits to {target} bits: length overflow")
            }
            Self::OutOfMemory { len, target } => {
                write!(f, "cannot resize bitset of {len} bits to {target} bits: out of memory")
            }
        }
    }
}

impl std::error::Error for Error {}
