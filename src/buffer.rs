//! Fixed-length pixel storage
//!
//! The buffer lives inline in a `heapless::Vec`, so `N` is the longest strip
//! the render sink can address. The length is chosen once at creation.

use heapless::Vec;

use crate::color::{ChannelOrder, Pixel};
use crate::error::{Error, Result};

/// Ordered pixels, one per physical LED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: Vec<Pixel, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer of `count` pixels with every channel off
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 || count > N {
            return Err(Error::InvalidLength { count, max: N });
        }
        let mut pixels = Vec::new();
        pixels
            .resize(count, Pixel::OFF)
            .map_err(|()| Error::InvalidLength { count, max: N })?;
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false, a buffer holds at least one pixel
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Pixel> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn set(&mut self, index: usize, pixel: Pixel) -> Result<()> {
        let len = self.len();
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = pixel;
        Ok(())
    }

    /// Write the same pixel to every position
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Replace every pixel one-for-one
    ///
    /// Nothing is written if the lengths differ.
    pub fn copy_from(&mut self, pixels: &[Pixel]) -> Result<()> {
        if pixels.len() != self.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: pixels.len(),
            });
        }
        self.pixels.copy_from_slice(pixels);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Pack every pixel into the front of `words`
    ///
    /// Returns the encoded prefix of `words`, or `LengthMismatch` if `words`
    /// is shorter than the buffer.
    pub fn encode_into<'w>(
        &self,
        order: ChannelOrder,
        words: &'w mut [u32],
    ) -> Result<&'w [u32]> {
        let err = Error::LengthMismatch {
            expected: self.len(),
            actual: words.len(),
        };
        let words = words.get_mut(..self.len()).ok_or(err)?;
        for (word, pixel) in words.iter_mut().zip(&self.pixels) {
            *word = pixel.to_word(order);
        }
        Ok(words)
    }
}
