use thiserror::Error;

/// Result type returned by every fallible [`SlotBitmap`](crate::SlotBitmap)
/// operation.
pub type Result<T> = core::result::Result<T, SlotBitmapError>;

/// Outcome of a failed bitmap operation.
///
/// Both variants are detected before any write, so a failed call never leaves
/// the buffer partially modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotBitmapError {
    /// A slot index at or past the end of the bitmap was addressed.
    #[error("index {index} out of bitmap's boundary ({bit_count} bits)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of bits the bitmap manages.
        bit_count: usize,
    },

    /// Every slot is occupied.
    #[error("bitmap is full ({bit_count} bits)")]
    Full {
        /// Number of bits the bitmap manages.
        bit_count: usize,
    },
}

impl SlotBitmapError {
    /// Returns `true` for conditions a caller is expected to handle, such as
    /// moving on to a fresh page when the current one is [`Full`].
    ///
    /// [`Full`]: SlotBitmapError::Full
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Full { .. })
    }

    /// Renders the error through the [`log`] facade.
    ///
    /// Bitmap operations never log on their own; callers that want a
    /// diagnostic for an outcome call this. `Full` is reported as a warning,
    /// `OutOfRange` as an error.
    ///
    /// # Examples
    /// ```
    /// use slot_bitmap::SlotBitmap;
    ///
    /// let mut page = [0xFFu8];
    /// let mut slots = SlotBitmap::new(8, &mut page);
    /// if let Err(err) = slots.claim_first_unset() {
    ///     err.report();
    /// }
    /// ```
    pub fn report(&self) {
        if self.is_recoverable() {
            log::warn!(target: "slot_bitmap", "slot bitmap warning: {self}");
        } else {
            log::error!(target: "slot_bitmap", "slot bitmap error: {self}");
        }
    }
}
