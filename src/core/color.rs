//! Color values and the random source that picks each day's color

use std::fmt;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::AppError;

const MAX_RGB: u32 = 0xFF_FFFF;

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Color {
    pub(crate) const WHITE: Color = Color::new(255, 255, 255);
    pub(crate) const BLACK: Color = Color::new(0, 0, 0);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build a color from the low 24 bits of `value` (0xRRGGBB)
    pub(crate) fn from_u24(value: u32) -> Self {
        Color::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Uniform draw over the full 24-bit color space
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::from_u24(rng.random_range(0..=MAX_RGB))
    }

    /// Parse `#RRGGBB` or `RRGGBB`, either case
    pub(crate) fn from_hex(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidHex {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Color::from_u24(value))
    }

    /// Canonical `#RRGGBB` form, uppercase and zero padded
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Convert a hex color string to its three channels
pub(crate) fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), AppError> {
    let color = Color::from_hex(hex)?;
    Ok((color.r, color.g, color.b))
}

/// Supplies the color for a newly generated record
pub(crate) trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Random colors drawn from any `rand` generator
pub(crate) struct RandomColors<R> {
    rng: R,
}

impl RandomColors<ThreadRng> {
    pub(crate) fn thread() -> Self {
        RandomColors { rng: rand::rng() }
    }
}

impl RandomColors<StdRng> {
    /// Reproducible sequence for a given seed
    pub(crate) fn seeded(seed: u64) -> Self {
        RandomColors {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Color {
        Color::random(&mut self.rng)
    }
}
