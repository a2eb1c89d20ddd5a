//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.

pub use rgb::*;

/// A color packed as 4 floats representing RGBA channels.
///
/// Note that the color is assumed to be in SRGB format. Interpolation between
/// colors happens directly on the SRGB channels.
#[repr(C)]
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub [f32; 4]);

impl Color {
    /// The color black with full opacity
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// The color white with full opacity
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    /// A color with no opacity
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    /// Creates a [`Color`] from its SRGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// Creates an opaque [`Color`] from 8 bit SRGB components.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgba8(r, g, b, 255)
    }

    /// Creates a [`Color`] from 8 bit SRGBA components.
    pub fn from_srgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        RGBA8 { r, g, b, a }.into()
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    pub fn b(&self) -> f32 {
        self.0[2]
    }
    pub fn a(&self) -> f32 {
        self.0[3]
    }

    pub fn a_mut(&mut self) -> &mut f32 {
        &mut self.0[3]
    }

    /// Returns this color with its alpha channel multiplied by `alpha_multiplier`.
    pub fn mul_alpha(mut self, alpha_multiplier: f32) -> Self {
        *self.a_mut() *= alpha_multiplier.clamp(0.0, 1.0);
        self
    }

    /// Linearly interpolates between `self` and `other`. `u` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, u: f32) -> Color {
        let u = u.clamp(0.0, 1.0);
        let one_minus_u = 1.0 - u;

        Color([
            self.0[0] * one_minus_u + other.0[0] * u,
            self.0[1] * one_minus_u + other.0[1] * u,
            self.0[2] * one_minus_u + other.0[2] * u,
            self.0[3] * one_minus_u + other.0[3] * u,
        ])
    }

    /// Converts back to 8 bit SRGBA components.
    pub fn to_srgba8(self) -> RGBA8 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBA8 {
            r: channel(self.r()),
            g: channel(self.g()),
            b: channel(self.b()),
            a: channel(self.a()),
        }
    }
}

impl From<RGB8> for Color {
    fn from(color: RGB8) -> Self {
        Self::from(RGBA8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 255,
        })
    }
}

impl From<RGBA8> for Color {
    fn from(color: RGBA8) -> Self {
        const RECIP: f32 = 1.0 / 255.0;
        Self([
            f32::from(color.r) * RECIP,
            f32::from(color.g) * RECIP,
            f32::from(color.b) * RECIP,
            f32::from(color.a) * RECIP,
        ])
    }
}

impl From<[f32; 3]> for Color {
    fn from(color: [f32; 3]) -> Self {
        Self([color[0], color[1], color[2], 1.0])
    }
}

impl From<[f32; 4]> for Color {
    fn from(color: [f32; 4]) -> Self {
        Self(color)
    }
}
