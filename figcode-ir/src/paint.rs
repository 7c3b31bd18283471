//! Fill paints and colors.

use serde::{Deserialize, Serialize};

/// An RGBA color with channels in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// The 8-bit red, green and blue channels.
    pub fn rgb8(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// The 8-bit alpha channel.
    pub fn alpha8(&self) -> u8 {
        channel(self.a)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Lowercase `#rrggbb` hex, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS color: hex when opaque, `rgba()` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            let (r, g, b) = self.rgb8();
            format!("rgba({}, {}, {}, {})", r, g, b, round2(self.a))
        }
    }

    /// Squared euclidean distance in 8-bit RGB space.
    pub fn distance_sq(&self, other: &Color) -> u32 {
        let (r1, g1, b1) = self.rgb8();
        let (r2, g2, b2) = other.rgb8();
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(r1, r2) + d(g1, g2) + d(b1, b2)
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A fill applied to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Paint {
    /// A solid color, optionally bound to a named color variable.
    Solid {
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variable: Option<String>,
    },
    /// An image fill. Image bytes never enter the IR.
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from_rgb8(255, 0, 128).to_hex(), "#ff0080");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_to_css_with_alpha() {
        let color = Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 0.5,
        };
        assert_eq!(color.to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
    }

    #[test]
    fn test_channels_are_clamped() {
        let color = Color::rgb(1.5, -0.2, 0.5);
        assert_eq!(color.rgb8(), (255, 0, 128));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Color::BLACK.distance_sq(&Color::BLACK), 0);
        assert_eq!(Color::BLACK.distance_sq(&Color::WHITE), 3 * 255 * 255);
    }
}
