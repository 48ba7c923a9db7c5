//! sRGB colors for appearance parameters and material tints.

/// Color in gamma-encoded sRGB, each channel in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels (e.g. `Color::rgb8(0x42, 0x68, 0xff)` for `#4268ff`)
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Encode linear-light channels (e.g. glTF material factors) to sRGB
    pub fn from_linear(rgb: [f32; 3]) -> Self {
        Self::new(
            linear_to_srgb(rgb[0]),
            linear_to_srgb(rgb[1]),
            linear_to_srgb(rgb[2]),
        )
    }

    /// Channel-wise interpolation; `t = 0` and `t = 1` return the endpoints exactly
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp_clamped(self.r, other.r, t),
            g: lerp_clamped(self.g, other.g, t),
            b: lerp_clamped(self.b, other.b, t),
        }
    }

    /// Decode to linear light (sRGB transfer function), for shading on an sRGB surface
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}

/// `a*(1-t) + b*t`, kept inside `[min(a,b), max(a,b)]`
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    let value = a * (1.0 - t) + b * t;
    value.clamp(a.min(b), a.max(b))
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Color::rgb8(0x00, 0xff, 0xff);
        let b = Color::rgb8(0x42, 0x68, 0xff);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_stays_between_endpoints() {
        let a = 0.1_f32;
        let b = 0.7_f32;
        for step in 0..=100 {
            let v = lerp_clamped(b, a, step as f32 / 100.0);
            assert!((a..=b).contains(&v), "{} escaped [{}, {}]", v, a, b);
        }
    }

    #[test]
    fn test_linear_conversion() {
        assert_eq!(Color::WHITE.to_linear(), [1.0, 1.0, 1.0]);
        let [r, _, _] = Color::new(0.5, 0.0, 0.0).to_linear();
        assert!((r - 0.214).abs() < 1e-3);
    }

    #[test]
    fn test_linear_factor_encodes_to_srgb() {
        let white = Color::from_linear([1.0, 1.0, 1.0]);
        assert!((white.r - 1.0).abs() < 1e-5);
        assert_eq!(Color::from_linear([0.0, 0.0, 0.0]), Color::new(0.0, 0.0, 0.0));

        // Linear 0.214 is sRGB 0.5
        let half = Color::from_linear([0.214, 0.214, 0.214]);
        assert!((half.r - 0.5).abs() < 1e-3);

        let original = Color::rgb8(0x42, 0x68, 0xff);
        let back = Color::from_linear(original.to_linear());
        assert!((back.r - original.r).abs() < 1e-4);
        assert!((back.g - original.g).abs() < 1e-4);
        assert!((back.b - original.b).abs() < 1e-4);
    }
}
