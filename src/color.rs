//! Color type for the monochrome panel
//!
//! The E0213A367 only shows black and white. Pixels are bit-packed, eight
//! per byte, MSB first:
//!
//! | Color | BW RAM bit |
//! |-------|------------|
//! | Black | 0          |
//! | White | 1          |
//!
//! ## Example
//!
//! ```
//! use e0213a367::Color;
//!
//! assert_eq!(Color::Black.bw_byte(), 0x00);
//! assert_eq!(Color::White.bw_byte(), 0xFF);
//! ```

/// Colors supported by the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    #[default]
    White,
}

impl Color {
    /// Byte value that fills eight pixels with this color in BW RAM
    pub fn bw_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

// `BinaryColor::On` draws ink.
#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::On,
            Color::White => Self::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bw_bytes() {
        assert_eq!(Color::Black.bw_byte(), 0x00);
        assert_eq!(Color::White.bw_byte(), 0xFF);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_binary_color_conversion() {
        use embedded_graphics::pixelcolor::BinaryColor;

        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(Color::from(BinaryColor::Off), Color::White);
        assert_eq!(BinaryColor::from(Color::Black), BinaryColor::On);
        assert_eq!(BinaryColor::from(Color::White), BinaryColor::Off);
    }
}
