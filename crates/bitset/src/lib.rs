//! A resizable set of boolean flags addressed by integer index.
//!
//! Flags are stored one per slot. Indices may be any integer type (or a
//! caller-defined enum convertible to `usize`), and indices outside the
//! bitset are ignored rather than treated as errors:
//!
//! ```
//! use bitset::Bitset;
//!
//! let mut flags = Bitset::initial(5, [0, 2, 4]);
//! assert!(flags.all([0, 2, 4]));
//! assert!(!flags.any([1, 3]));
//!
//! flags.flip([1, 9]);
//! assert_eq!(flags.to_string(), "Bitset{1, 1, 1, 0, 1}");
//! ```
mod macros;

pub mod bitset;
pub use bitset::Bitset;

pub mod error;
pub use error::Error;
