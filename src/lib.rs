//! A fast bit-vector map over the 256 values of an 8-bit byte.
//!
//! A [`Charmap`] stores 256 bits in eight `u32` words. Bit `b` of word `w`
//! corresponds to byte value `32 * w + b`, so tables can be written by hand
//! as word literals:
//!
//! ```
//! use charmap::Charmap;
//!
//! // '0'..='9' are 0x30..=0x39, bits 16..=25 of the second word.
//! const DIGIT: Charmap = Charmap::from_words([0, 0x03FF_0000, 0, 0, 0, 0, 0, 0]);
//!
//! assert!(DIGIT.contains(b'7'));
//! assert!(!DIGIT.contains(b'a'));
//! assert_eq!(DIGIT, Charmap::from_bytes(b"0123456789"));
//! ```

#![no_std]

#[rustfmt::skip]
mod tables;

use core::ffi::CStr;
use core::fmt::{self, Debug};

pub use tables::{
    ASCII_ALPHA, ASCII_ALPHANUMERIC, ASCII_DIGIT, ASCII_HEXDIGIT, ASCII_WHITESPACE,
    URL_GEN_DELIMS, URL_RESERVED, URL_SUB_DELIMS, URL_UNRESERVED,
};

/// Set of byte values, answering membership in constant time.
///
/// Immutable once built. The value is 32 bytes of plain data and is `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Charmap {
    words: [u32; 8],
}

impl Charmap {
    /// Builds a charmap from eight words, lowest byte values first.
    ///
    /// `words[0]` holds the bits for 0x00 (NUL) through 0x1F (US), with NUL in
    /// the least significant bit. `words[7]` holds 0xE0 through 0xFF.
    pub const fn from_words(words: [u32; 8]) -> Self {
        Charmap { words }
    }

    /// Builds a charmap containing every byte of `bytes`.
    ///
    /// NUL is not treated as a terminator; a zero byte in `bytes` becomes a
    /// member like any other.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = [0u32; 8];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            words[(b >> 5) as usize] |= 1 << (b & 0x1f);
            i += 1;
        }
        Charmap { words }
    }

    /// Builds a charmap from the bytes preceding the first NUL.
    ///
    /// Scanning stops at the first zero byte, or at the end of `bytes` if
    /// there is none. NUL is therefore never a member; use
    /// [`Charmap::from_bytes`] when it needs to be.
    pub const fn from_nul_terminated(bytes: &[u8]) -> Self {
        let mut len = 0;
        while len < bytes.len() && bytes[len] != 0 {
            len += 1;
        }
        let mut words = [0u32; 8];
        let mut i = 0;
        while i < len {
            let b = bytes[i];
            words[(b >> 5) as usize] |= 1 << (b & 0x1f);
            i += 1;
        }
        Charmap { words }
    }

    /// Builds a charmap from the contents of a C string, excluding its NUL.
    pub fn from_cstr(s: &CStr) -> Self {
        Charmap::from_bytes(s.to_bytes())
    }

    #[inline]
    pub const fn contains(&self, c: u8) -> bool {
        (self.words[(c >> 5) as usize] >> (c & 0x1f)) & 1 != 0
    }

    /// Returns true if and only if some byte is a member of both maps.
    ///
    /// This is an existence test; the intersection itself is never built.
    pub const fn intersects_with(&self, other: &Charmap) -> bool {
        let mut i = 0;
        while i < 8 {
            if self.words[i] & other.words[i] != 0 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true if no byte is a member.
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < 8 {
            if self.words[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Debug for Charmap {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut set = formatter.debug_set();
        for b in 0..=u8::MAX {
            if self.contains(b) {
                set.entry(&b);
            }
        }
        set.finish()
    }
}
