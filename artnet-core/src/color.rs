//! Color values and their DMX byte representation.

/// A color component tag used to describe which DMX channel a fixture expects a
/// component on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    /// Red component.
    Red,
    /// Green component.
    Green,
    /// Blue component.
    Blue,
    /// Dedicated white channel of an RGBW fixture.
    White,
}

/// An RGBA color with components normalized to [0, 1].
///
/// This is the value the UI hands over; hue/saturation/brightness are derived from the
/// stored RGB components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Color {
    /// Creates a color, clamping every component to [0, 1].
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
            alpha: clamp(alpha),
        }
    }

    /// Returns the red, green, blue and alpha components.
    pub const fn rgba(&self) -> (f32, f32, f32, f32) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Returns hue, saturation, brightness and alpha.
    ///
    /// Hue is in [0, 1) turns. An achromatic color reports hue 0 and saturation 0.
    pub fn hsva(&self) -> (f32, f32, f32, f32) {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;

        let brightness = max;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == self.red {
            ((self.green - self.blue) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.green {
            ((self.blue - self.red) / delta + 2.0) / 6.0
        } else {
            ((self.red - self.green) / delta + 4.0) / 6.0
        };

        (hue, saturation, brightness, self.alpha)
    }

    /// The value for a dedicated white channel, if this color is achromatic.
    ///
    /// Only a pure gray (hue 0, saturation 0) maps onto the white channel; any hint of
    /// chroma keeps the color on the RGB channels. There is no partial white blending
    /// for near-gray colors.
    pub fn achromatic_white(&self) -> Option<u8> {
        let (hue, saturation, brightness, _) = self.hsva();
        (hue == 0.0 && saturation == 0.0).then(|| scale_component(brightness))
    }
}

/// Scales a normalized component to a DMX byte.
///
/// Truncates instead of rounding for wire compatibility with existing fixtures.
pub(crate) fn scale_component(component: f32) -> u8 {
    (component * 255.0) as u8
}

fn clamp(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_clamped() {
        let color = Color::new(-0.5, 1.5, 0.25, 2.0);
        assert_eq!(color.rgba(), (0.0, 1.0, 0.25, 1.0));
    }

    #[test]
    fn gray_is_achromatic() {
        let color = Color::new(0.5, 0.5, 0.5, 1.0);
        let (hue, saturation, brightness, _) = color.hsva();

        assert_eq!(hue, 0.0);
        assert_eq!(saturation, 0.0);
        assert_eq!(brightness, 0.5);
        assert_eq!(color.achromatic_white(), Some(127));
    }

    #[test]
    fn black_and_white_are_achromatic() {
        assert_eq!(Color::new(0.0, 0.0, 0.0, 1.0).achromatic_white(), Some(0));
        assert_eq!(Color::new(1.0, 1.0, 1.0, 1.0).achromatic_white(), Some(255));
    }

    #[test]
    fn saturated_color_has_no_white() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).achromatic_white(), None);
        // Near-gray is not blended either.
        assert_eq!(Color::new(0.5, 0.5, 0.51, 1.0).achromatic_white(), None);
    }

    #[test]
    fn hsv_of_primaries() {
        let (hue, saturation, brightness, _) = Color::new(1.0, 0.0, 0.0, 1.0).hsva();
        assert_eq!((hue, saturation, brightness), (0.0, 1.0, 1.0));

        let (hue, ..) = Color::new(0.0, 1.0, 0.0, 1.0).hsva();
        assert!((hue - 1.0 / 3.0).abs() < 1e-6);

        let (hue, ..) = Color::new(0.0, 0.0, 1.0, 1.0).hsva();
        assert!((hue - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn scaling_truncates() {
        assert_eq!(scale_component(1.0), 255);
        assert_eq!(scale_component(0.999), 254);
        assert_eq!(scale_component(0.0), 0);
    }
}
