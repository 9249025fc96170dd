//! Packing and unpacking of color channels into 32-bit words.
//!
//! Layout of a packed word (most significant byte first):
//!
//! ```text
//! bits  31..24  23..16  15..8  7..0
//!       alpha   red     green  blue
//! ```
//!
//! Alpha 0 is fully transparent, 255 fully opaque. Channels are `u8`, so a
//! channel can never spill into its neighbour when packed.

/// Red, green, blue.
pub type Rgb = [u8; 3];

/// Alpha, red, green, blue (alpha first).
pub type Argb = [u8; 4];

/// Alpha value forced by [`encode_rgb`].
pub const OPAQUE: u8 = 0xFF;

/// Extract `[r, g, b]` from a packed word, ignoring alpha.
#[inline]
pub const fn decode_rgb(word: u32) -> Rgb {
    [(word >> 16) as u8, (word >> 8) as u8, word as u8]
}

/// Extract `[a, r, g, b]` from a packed word.
#[inline]
pub const fn decode_argb(word: u32) -> Argb {
    [(word >> 24) as u8, (word >> 16) as u8, (word >> 8) as u8, word as u8]
}

/// Pack an RGB triple as a fully opaque word.
#[inline]
pub const fn encode_rgb(rgb: Rgb) -> u32 {
    let [r, g, b] = rgb;
    encode_argb([OPAQUE, r, g, b])
}

/// Pack an ARGB quadruple, alpha taken as given.
#[inline]
pub const fn encode_argb(argb: Argb) -> u32 {
    let [a, r, g, b] = argb;
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Alpha channel of a packed word.
#[inline]
pub const fn alpha(word: u32) -> u8 {
    (word >> 24) as u8
}
