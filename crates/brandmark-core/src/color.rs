use serde::{Deserialize, Serialize};

/// An RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_channels(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::from_channels(c)
    }
}

/// Linear interpolation between two integers, truncated toward zero.
///
/// `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: i32, b: i32, t: f64) -> i32 {
    (a as f64 + (b - a) as f64 * t) as i32
}

/// Channel-wise [`lerp`] between two colours.
///
/// Extrapolated channels are clamped into the `u8` range.
pub fn color_lerp(c1: Color, c2: Color, t: f64) -> Color {
    let from = c1.channels();
    let to = c2.channels();
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = lerp(from[i] as i32, to[i] as i32, t).clamp(0, 255) as u8;
    }
    Color::from_channels(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURPLE: Color = Color::rgb(139, 92, 246);
    const BLUE: Color = Color::rgb(60, 131, 246);

    #[test]
    fn test_lerp_truncates() {
        assert_eq!(lerp(0, 10, 0.25), 2);
        assert_eq!(lerp(10, 0, 0.25), 7);
        assert_eq!(lerp(139, 60, 0.5), 99);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let pairs = [
            (PURPLE, BLUE),
            (Color::rgba(0, 0, 0, 0), Color::rgba(255, 255, 255, 255)),
            (Color::rgba(255, 7, 64, 1), Color::rgba(3, 200, 64, 254)),
        ];
        for (c1, c2) in pairs {
            assert_eq!(color_lerp(c1, c2, 0.0), c1);
            assert_eq!(color_lerp(c1, c2, 1.0), c2);
        }
    }

    #[test]
    fn test_color_lerp_stays_between_endpoints() {
        let c1 = Color::rgba(255, 7, 64, 1);
        let c2 = Color::rgba(3, 200, 64, 254);
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let c = color_lerp(c1, c2, t).channels();
            for i in 0..4 {
                let lo = c1.channels()[i].min(c2.channels()[i]);
                let hi = c1.channels()[i].max(c2.channels()[i]);
                assert!(
                    (lo..=hi).contains(&c[i]),
                    "channel {} out of range at t={}: {}",
                    i,
                    t,
                    c[i]
                );
            }
        }
    }

    #[test]
    fn test_color_lerp_midpoint() {
        assert_eq!(color_lerp(PURPLE, BLUE, 0.5), Color::rgb(99, 111, 246));
    }

    #[test]
    fn test_color_lerp_extrapolation_clamps() {
        let c = color_lerp(Color::rgb(0, 100, 200), Color::rgb(255, 100, 250), 2.0);
        assert_eq!(c, Color::rgb(255, 100, 255));
    }
}
