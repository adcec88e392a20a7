//! A bit-packed slot allocation bitmap over a borrowed page buffer.
//! `no_std`, no heap / `alloc`, no `unsafe`.
//!
//! A record page keeps one bit per fixed-size slot in its header.
//! [`SlotBitmap`] binds to that header region without copying it and answers
//! the questions a record manager asks: is slot `i` occupied, mark it, free
//! it, and which slot is the lowest free one.
//!
//! # Examples
//! ```
//! use slot_bitmap::{byte_len, SlotBitmap, SlotBitmapError};
//!
//! const SLOTS: usize = 3;
//! let mut header = [0u8; byte_len(SLOTS)];
//! let mut slots = SlotBitmap::new(SLOTS, &mut header);
//!
//! assert_eq!(slots.claim_first_unset(), Ok(0));
//! assert_eq!(slots.claim_first_unset(), Ok(1));
//! assert_eq!(slots.claim_first_unset(), Ok(2));
//! assert_eq!(slots.claim_first_unset(), Err(SlotBitmapError::Full { bit_count: 3 }));
//!
//! slots.unset(1).unwrap();
//! assert_eq!(slots.find_first_unset(), Ok(1));
//! ```
//!
//! # Bit layout
//!
//! Bit `i` is bit `i % 8` (least significant first) of byte `i / 8`. Code that
//! reads the raw header bytes directly must use the same convention.
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Works on any `&mut [u8]`, the bitmap never owns its storage
//! - Checked single-bit `set`, `unset` and `test`
//! - Byte-at-a-time `find_first_unset` that ignores padding bits
//! - Typed errors ([`SlotBitmapError`]) with optional reporting through `log`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

mod bitmap;
mod error;

pub use bitmap::{SlotBitmap, byte_len};
pub use error::{Result, SlotBitmapError};
