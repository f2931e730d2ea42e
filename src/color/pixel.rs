use super::{ChannelOrder, Rgb};

/// One of the four color channels of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    White,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Self; 4] = [Self::White, Self::Red, Self::Green, Self::Blue];

    /// Channels ramped by gradient seeding
    pub const RAMPED: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

/// Four-channel color of a single LED
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub white: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Dim white preset
pub const DIM_WHITE: Pixel = Pixel::new(0x10, 0, 0, 0);
/// Dim red preset
pub const DIM_RED: Pixel = Pixel::new(0, 0x20, 0, 0);
/// Dim green preset
pub const DIM_GREEN: Pixel = Pixel::new(0, 0, 0x20, 0);
/// Dim blue preset
pub const DIM_BLUE: Pixel = Pixel::new(0, 0, 0, 0x20);

impl Pixel {
    /// All channels off
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    pub const fn new(white: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            white,
            red,
            green,
            blue,
        }
    }

    /// Create a pixel with the white channel off
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(0, red, green, blue)
    }

    /// Pack the pixel into a strip word using the given channel order
    pub const fn to_word(self, order: ChannelOrder) -> u32 {
        let [w, r, g, b] = order.shifts();
        (self.white as u32) << w
            | (self.red as u32) << r
            | (self.green as u32) << g
            | (self.blue as u32) << b
    }

    /// Unpack a strip word produced with the given channel order
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_word(word: u32, order: ChannelOrder) -> Self {
        let [w, r, g, b] = order.shifts();
        Self {
            white: (word >> w) as u8,
            red: (word >> r) as u8,
            green: (word >> g) as u8,
            blue: (word >> b) as u8,
        }
    }

    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::White => self.white,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub const fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::White => &mut self.white,
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }
}

impl From<Rgb> for Pixel {
    fn from(color: Rgb) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

/// Drops the white channel
impl From<Pixel> for Rgb {
    fn from(pixel: Pixel) -> Self {
        Rgb {
            r: pixel.red,
            g: pixel.green,
            b: pixel.blue,
        }
    }
}
