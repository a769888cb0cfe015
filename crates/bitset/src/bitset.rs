use std::fmt;

use log::{debug, trace};

use crate::{Error, macros::try_usize};

/// A fixed-length collection of flags, one `bool` per slot.
///
/// The length only changes through [Bitset::resize] and friends, which return
/// a new bitset and leave the receiver alone. [Bitset::set], [Bitset::clear]
/// and [Bitset::flip] mutate in place. Every operation that takes indices
/// silently skips the ones that are out of range.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Bitset {
    bits: Box<[bool]>,
}

impl Bitset {
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![false; len].into_boxed_slice(),
        }
    }

    /// Create a bitset of `len` bits with the given bits set.
    pub fn initial(len: usize, bits: impl IntoIterator<Item = impl TryInto<usize>>) -> Self {
        let mut bs = Self::new(len);
        bs.set(bits);
        bs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Copy the bitset into one of `len` bits. Bits past the old length are
    /// cleared, bits past the new length are dropped.
    pub fn resize(&self, len: usize) -> Self {
        trace!("resizing bitset from {} to {} bits", self.len(), len);
        let mut bits = vec![false; len];
        let n = len.min(self.len());
        bits[..n].copy_from_slice(&self.bits[..n]);
        Self {
            bits: bits.into_boxed_slice(),
        }
    }

    /// Copy the bitset, grown by `n` bits. A negative `n` shrinks it, and the
    /// length is clamped to zero.
    ///
    /// # Panics
    /// If the new length exceeds `isize::MAX`, like [Vec] does.
    pub fn grow(&self, n: isize) -> Self {
        self.clamped(n as i128)
    }

    /// # Panics
    /// If `n` is negative enough that the new length exceeds `isize::MAX`.
    pub fn shrink(&self, n: isize) -> Self {
        self.clamped(-(n as i128))
    }

    /// Like [Bitset::resize], but reports allocation failure instead of
    /// aborting.
    pub fn try_resize(&self, len: usize) -> Result<Self, Error> {
        let mut bits = Vec::new();
        if bits.try_reserve_exact(len).is_err() {
            return Err(Error::OutOfMemory {
                len: self.len(),
                target: len,
            });
        }
        let n = len.min(self.len());
        bits.extend_from_slice(&self.bits[..n]);
        bits.resize(len, false);
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Like [Bitset::grow], but never clamps, panics or aborts.
    pub fn try_grow(&self, n: isize) -> Result<Self, Error> {
        self.try_resize(self.offset(n as i128)?)
    }

    pub fn try_shrink(&self, n: isize) -> Result<Self, Error> {
        self.try_resize(self.offset(-(n as i128))?)
    }

    fn offset(&self, delta: i128) -> Result<usize, Error> {
        let len = self.len();
        let target = len as i128 + delta;
        if target < 0 {
            return Err(Error::NegativeLength { len, target });
        }
        // Slices are bounded by isize::MAX bytes.
        match isize::try_from(target) {
            Ok(target) => Ok(target as usize),
            Err(_) => Err(Error::LengthOverflow { len, target }),
        }
    }

    fn clamped(&self, delta: i128) -> Self {
        match self.offset(delta) {
            Ok(len) => self.resize(len),
            Err(Error::NegativeLength { len, target }) => {
                debug!("clamping bitset of {len} bits to 0 bits (requested {target})");
                Self::new(0)
            }
            Err(error) => panic!("bitset capacity overflow: {error}"),
        }
    }

    #[inline]
    fn slot(&self, n: impl TryInto<usize>) -> Option<&bool> {
        self.bits.get(try_usize!(n)?)
    }

    #[inline]
    fn slot_mut(&mut self, n: impl TryInto<usize>) -> Option<&mut bool> {
        self.bits.get_mut(try_usize!(n)?)
    }

    pub fn set(&mut self, bits: impl IntoIterator<Item = impl TryInto<usize>>) {
        for bit in bits {
            if let Some(slot) = self.slot_mut(bit) {
                *slot = true;
            }
        }
    }

    pub fn clear(&mut self, bits: impl IntoIterator<Item = impl TryInto<usize>>) {
        for bit in bits {
            if let Some(slot) = self.slot_mut(bit) {
                *slot = false;
            }
        }
    }

    /// Toggle each of `bits`. A bit listed twice is toggled twice.
    pub fn flip(&mut self, bits: impl IntoIterator<Item = impl TryInto<usize>>) {
        for bit in bits {
            if let Some(slot) = self.slot_mut(bit) {
                *slot = !*slot;
            }
        }
    }

    /// Whether every in-range bit of `bits` is set. True for an empty list.
    pub fn all(&self, bits: impl IntoIterator<Item = impl TryInto<usize>>) -> bool {
        bits.into_iter().all(|bit| self.slot(bit).copied().unwrap_or(true))
    }

    /// Whether any in-range bit of `bits` is set. False for an empty list.
    pub fn any(&self, bits: impl IntoIterator<Item = impl TryInto<usize>>) -> bool {
        bits.into_iter().any(|bit| self.slot(bit).copied().unwrap_or(false))
    }

    /// False when out of range.
    #[inline]
    pub fn get(&self, n: impl TryInto<usize>) -> bool {
        self.slot(n).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Indices of the set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(n, bit)| bit.then_some(n))
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bitset{")?;
        for (n, bit) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("}")
    }
}

impl From<Vec<bool>> for Bitset {
    fn from(value: Vec<bool>) -> Self {
        Self {
            bits: value.into_boxed_slice(),
        }
    }
}

impl From<Bitset> for Vec<bool> {
    fn from(value: Bitset) -> Self {
        value.bits.into_vec()
    }
}

impl FromIterator<bool> for Bitset {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
