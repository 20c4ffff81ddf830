//! Plain RGBA color value shared by map labels and empire banners.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Decodes a packed `0xAARRGGBB` pixel.
    pub const fn from_argb(pixel: u32) -> Self {
        Self {
            a: (pixel >> 24) as u8,
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Light colors need dark text drawn over them.
    pub const fn is_light(self) -> bool {
        self.r as u32 + self.g as u32 + self.b as u32 > 320
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_channels() {
        let color = Rgb::from_argb(0x80_10_20_30);
        assert_eq!(color, Rgb::new(0x10, 0x20, 0x30).with_alpha(0x80));
        assert_eq!(color.to_argb(), 0x80_10_20_30);
    }

    #[test]
    fn lightness_threshold() {
        assert!(!Rgb::new(100, 100, 120).is_light());
        assert!(Rgb::new(100, 100, 121).is_light());
        assert!(Rgb::WHITE.is_light());
    }
}
