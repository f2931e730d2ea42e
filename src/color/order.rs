//! Byte layout of a pixel inside a 32-bit strip word

/// Channel order used when packing a [`Pixel`](super::Pixel) into a word
///
/// The order depends on how the physical strip is wired, so it is fixed
/// once per deployment and never switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// `0xWWRRGGBB`, white in the most significant byte
    #[default]
    Wrgb,
    /// `0xBBGGRRWW`, blue in the most significant byte
    Bgrw,
}

/// Channel order selected at build time with the `bgrw` feature
pub const DEFAULT_CHANNEL_ORDER: ChannelOrder = if cfg!(feature = "bgrw") {
    ChannelOrder::Bgrw
} else {
    ChannelOrder::Wrgb
};

impl ChannelOrder {
    /// Bit offsets of the white, red, green and blue bytes
    pub(crate) const fn shifts(self) -> [u32; 4] {
        match self {
            Self::Wrgb => [24, 16, 8, 0],
            Self::Bgrw => [0, 8, 16, 24],
        }
    }
}
