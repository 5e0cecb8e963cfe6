//! Hue-based swatch colors.

use peniko::Color;

/// A color in hue/saturation/brightness form. All components are 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    /// Fully saturated, full brightness color at a hue.
    pub fn pure(hue: f32) -> Self {
        Self {
            hue,
            saturation: 1.0,
            brightness: 1.0,
        }
    }

    /// Convert to an opaque RGB color.
    pub fn to_color(self) -> Color {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

/// Hue fraction of swatch `index` out of `count` evenly spaced swatches.
pub fn hue_fraction(index: usize, count: u32) -> f32 {
    index as f32 / count as f32
}

/// HSB to RGB conversion.
///
/// The hue wraps around, so only its fractional part matters. Each channel is
/// rounded as `floor(x * 255 + 0.5)`.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Color {
    if saturation == 0.0 {
        let v = channel(brightness);
        return Color::from_rgba8(v, v, v, 255);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as i32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Color::from_rgba8(channel(r), channel(g), channel(b), 255)
}

fn channel(x: f32) -> u8 {
    (x * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        let rgba = color.to_rgba8();
        (rgba.r, rgba.g, rgba.b)
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb(hsb_to_rgb(0.0, 1.0, 1.0)), (255, 0, 0));
        assert_eq!(rgb(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0)), (0, 255, 0));
        assert_eq!(rgb(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0)), (0, 0, 255));
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(rgb(hsb_to_rgb(1.0 / 6.0, 1.0, 1.0)), (255, 255, 0));
        assert_eq!(rgb(hsb_to_rgb(0.5, 1.0, 1.0)), (0, 255, 255));
        assert_eq!(rgb(hsb_to_rgb(5.0 / 6.0, 1.0, 1.0)), (255, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(rgb(hsb_to_rgb(1.0, 1.0, 1.0)), (255, 0, 0));
        assert_eq!(rgb(hsb_to_rgb(1.5, 1.0, 1.0)), (0, 255, 255));
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(rgb(hsb_to_rgb(0.3, 0.0, 0.5)), (128, 128, 128));
        assert_eq!(rgb(hsb_to_rgb(0.7, 0.0, 0.0)), (0, 0, 0));
    }

    #[test]
    fn test_swatch_three_of_sixteen() {
        let hue = hue_fraction(3, 16);
        assert!((hue - 0.1875).abs() < f32::EPSILON);
        assert_eq!(rgb(Hsb::pure(hue).to_color()), (223, 255, 0));
    }

    #[test]
    fn test_opaque() {
        assert_eq!(hsb_to_rgb(0.42, 1.0, 1.0).to_rgba8().a, 255);
    }

    #[test]
    fn test_hue_fraction() {
        assert_eq!(hue_fraction(0, 16), 0.0);
        assert!((hue_fraction(8, 16) - 0.5).abs() < f32::EPSILON);
        assert!((hue_fraction(1, 3) - 1.0 / 3.0).abs() < f32::EPSILON);
    }
}
