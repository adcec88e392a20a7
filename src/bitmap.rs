use crate::error::{Result, SlotBitmapError};
use core::fmt::{Debug, Formatter};

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// This is the amount of space a page header has to reserve for a bitmap
/// tracking `bit_count` slots.
///
/// # Examples
/// ```
/// use slot_bitmap::byte_len;
///
/// assert_eq!(byte_len(0), 0);
/// assert_eq!(byte_len(9), 2);
/// assert_eq!(byte_len(16), 2);
/// assert_eq!(byte_len(17), 3);
/// ```
pub const fn byte_len(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// A slot occupancy bitmap laid over a borrowed byte buffer.
///
/// Bit `i` lives in byte `i / 8` at bit position `i % 8`, least significant
/// bit first. A set bit marks an occupied slot.
///
/// The bitmap never copies or owns its storage: every write goes straight to
/// the caller's buffer, typically a region of a page header, so the page sees
/// the new state as soon as the bitmap is dropped. The `'buf` lifetime ties
/// the bitmap to that buffer.
///
/// Padding bits past `bit_count` in the last byte are never written and are
/// ignored by [`find_first_unset`], whatever their value.
///
/// # Examples
/// ```
/// use slot_bitmap::{byte_len, SlotBitmap};
///
/// let mut header = [0u8; byte_len(12)];
/// {
///     let mut slots = SlotBitmap::new(12, &mut header);
///     slots.set(0).unwrap();
///     slots.set(9).unwrap();
///     assert_eq!(slots.find_first_unset(), Ok(1));
/// }
/// assert_eq!(header, [0b0000_0001, 0b0000_0010]);
/// ```
///
/// The bitmap cannot outlive the buffer it was bound to:
/// ```compile_fail
/// use slot_bitmap::SlotBitmap;
///
/// let slots = {
///     let mut header = [0u8; 4];
///     SlotBitmap::new(32, &mut header)
/// };
/// drop(slots);
/// ```
///
/// [`find_first_unset`]: SlotBitmap::find_first_unset
pub struct SlotBitmap<'buf> {
    bit_count: usize,
    bytes: &'buf mut [u8],
}

impl<'buf> SlotBitmap<'buf> {
    /// Binds a bitmap of `bit_count` bits to `bytes`.
    ///
    /// The buffer is neither cleared nor inspected; whatever bits it already
    /// holds are the initial state. The caller guarantees `bytes` is at least
    /// [`byte_len(bit_count)`](byte_len) long. This is checked in debug
    /// builds only; use [`checked_new`] to validate the length up front.
    ///
    /// # Panics
    /// With an undersized buffer, debug builds panic here and release builds
    /// panic on the first access to a byte the buffer does not have.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::SlotBitmap;
    ///
    /// let mut page = [0b0000_0101u8];
    /// let slots = SlotBitmap::new(8, &mut page);
    /// assert_eq!(slots.test(2), Ok(true));
    /// assert_eq!(slots.test(1), Ok(false));
    /// ```
    ///
    /// [`checked_new`]: SlotBitmap::checked_new
    #[inline]
    pub fn new(bit_count: usize, bytes: &'buf mut [u8]) -> Self {
        debug_assert!(
            bytes.len() >= byte_len(bit_count),
            "buffer of {} bytes cannot hold {bit_count} bits",
            bytes.len()
        );
        Self { bit_count, bytes }
    }

    /// Binds a bitmap like [`new`], but returns `None` if `bytes` is shorter
    /// than [`byte_len(bit_count)`](byte_len).
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::SlotBitmap;
    ///
    /// let mut short = [0u8; 2];
    /// assert!(SlotBitmap::checked_new(17, &mut short).is_none());
    ///
    /// let mut exact = [0u8; 3];
    /// assert!(SlotBitmap::checked_new(17, &mut exact).is_some());
    /// ```
    ///
    /// [`new`]: SlotBitmap::new
    pub fn checked_new(bit_count: usize, bytes: &'buf mut [u8]) -> Option<Self> {
        if bytes.len() < byte_len(bit_count) {
            return None;
        }
        Some(Self { bit_count, bytes })
    }

    /// Returns the number of slots tracked by this bitmap.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Returns the bytes that hold the logical bits, padding included.
    ///
    /// Any bytes of the buffer beyond [`byte_len(bit_count)`](byte_len) are
    /// not part of the bitmap and are left out.
    pub fn as_bytes(&self) -> &[u8] {
        let used = byte_len(self.bit_count).min(self.bytes.len());
        &self.bytes[..used]
    }

    /// Marks slot `idx` as occupied.
    ///
    /// Only the addressed bit changes; the rest of its byte is preserved.
    ///
    /// # Errors
    /// Returns [`SlotBitmapError::OutOfRange`] if `idx >= bit_count`, in
    /// which case the buffer is not touched.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::{SlotBitmap, SlotBitmapError};
    ///
    /// let mut page = [0u8; 1];
    /// let mut slots = SlotBitmap::new(5, &mut page);
    /// slots.set(4).unwrap();
    /// assert_eq!(slots.test(4), Ok(true));
    /// assert_eq!(
    ///     slots.set(5),
    ///     Err(SlotBitmapError::OutOfRange { index: 5, bit_count: 5 })
    /// );
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) -> Result<()> {
        self.check_bounds(idx)?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.bytes[byte_idx] |= 1 << bit_idx;
        Ok(())
    }

    /// Marks slot `idx` as free.
    ///
    /// # Errors
    /// Returns [`SlotBitmapError::OutOfRange`] if `idx >= bit_count`, in
    /// which case the buffer is not touched.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::SlotBitmap;
    ///
    /// let mut page = [0xFFu8];
    /// let mut slots = SlotBitmap::new(8, &mut page);
    /// slots.unset(3).unwrap();
    /// assert_eq!(slots.test(3), Ok(false));
    /// assert_eq!(slots.find_first_unset(), Ok(3));
    /// ```
    #[inline]
    pub fn unset(&mut self, idx: usize) -> Result<()> {
        self.check_bounds(idx)?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.bytes[byte_idx] &= !(1 << bit_idx);
        Ok(())
    }

    /// Returns `true` if slot `idx` is occupied.
    ///
    /// # Errors
    /// Returns [`SlotBitmapError::OutOfRange`] if `idx >= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::{SlotBitmap, SlotBitmapError};
    ///
    /// let mut page = [0b1000_0000u8];
    /// let slots = SlotBitmap::new(8, &mut page);
    /// assert_eq!(slots.test(7), Ok(true));
    /// assert_eq!(slots.test(0), Ok(false));
    /// assert!(matches!(slots.test(8), Err(SlotBitmapError::OutOfRange { .. })));
    /// ```
    #[inline]
    pub fn test(&self, idx: usize) -> Result<bool> {
        self.check_bounds(idx)?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        Ok(self.bytes[byte_idx] & 1 << bit_idx != 0)
    }

    /// Returns the lowest free slot index.
    ///
    /// Scans whole bytes from the front and skips fully occupied ones, then
    /// takes the lowest zero bit of the first byte that has one. Runs in
    /// O(b) where b is [`byte_len(bit_count)`](byte_len).
    ///
    /// # Errors
    /// Returns [`SlotBitmapError::Full`] if every slot in `[0, bit_count)` is
    /// occupied, including when `bit_count == 0`. Zero padding bits in the
    /// last byte do not count as free slots.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::{SlotBitmap, SlotBitmapError};
    ///
    /// let mut page = [0xFF, 0b0000_1011];
    /// let mut slots = SlotBitmap::new(12, &mut page);
    /// assert_eq!(slots.find_first_unset(), Ok(10));
    ///
    /// slots.set(10).unwrap();
    /// slots.set(11).unwrap();
    /// assert_eq!(slots.find_first_unset(), Err(SlotBitmapError::Full { bit_count: 12 }));
    /// ```
    pub fn find_first_unset(&self) -> Result<usize> {
        let used = byte_len(self.bit_count);
        for (byte_idx, byte) in self.bytes.iter().take(used).enumerate() {
            if *byte != u8::MAX {
                let bit = (!byte).trailing_zeros() as usize;
                let idx = byte_idx * 8 + bit;
                // only the last byte can yield a padding bit here
                if idx >= self.bit_count {
                    break;
                }
                return Ok(idx);
            }
        }
        Err(SlotBitmapError::Full {
            bit_count: self.bit_count,
        })
    }

    /// Finds the lowest free slot, marks it occupied and returns its index.
    ///
    /// # Errors
    /// Returns [`SlotBitmapError::Full`] if no slot is free; the buffer is
    /// left unchanged.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::SlotBitmap;
    ///
    /// let mut page = [0b0000_0011u8];
    /// let mut slots = SlotBitmap::new(4, &mut page);
    /// assert_eq!(slots.claim_first_unset(), Ok(2));
    /// assert_eq!(slots.claim_first_unset(), Ok(3));
    /// assert!(slots.claim_first_unset().is_err());
    /// ```
    pub fn claim_first_unset(&mut self) -> Result<usize> {
        let idx = self.find_first_unset()?;
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.bytes[byte_idx] |= 1 << bit_idx;
        Ok(idx)
    }

    #[inline]
    fn check_bounds(&self, idx: usize) -> Result<()> {
        if idx >= self.bit_count {
            return Err(SlotBitmapError::OutOfRange {
                index: idx,
                bit_count: self.bit_count,
            });
        }
        Ok(())
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }
}

impl Debug for SlotBitmap<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for i in 0..self.bit_count {
            let (byte_idx, bit_idx) = Self::idxs(i);
            if bit_idx == 0 {
                if i != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}: ")?;
            }
            let bit = self.bytes[byte_idx] & 1 << bit_idx != 0;
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, " <- MSB")
    }
}
