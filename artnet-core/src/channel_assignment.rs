//! Mapping of color components onto DMX channel offsets.

use heapless::Vec;

use crate::color::{Color, ColorChannel, scale_component};

/// The ordered mapping from DMX channel offsets to color components for one fixture.
///
/// Position `i` names the component carried on the fixture's channel offset `i`.
/// Valid assignments are exactly Red/Green/Blue in any order (RGB fixtures) or all
/// four channels in any order (RGBW fixtures). Validation happens once here, at
/// configuration time, so the per-frame send path can never abort on a bad
/// assignment loaded from stored configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAssignment {
    inner: Vec<ColorChannel, { Self::CAPACITY }>,
}

impl ChannelAssignment {
    /// The maximum number of channels an assignment can map.
    pub const CAPACITY: usize = 4;

    /// Creates a validated assignment from the given channel ordering.
    ///
    /// # Errors
    /// InvalidLength: the ordering is not 3 or 4 channels long.
    /// DuplicateChannel: the same component appears twice.
    /// UnexpectedWhite: a 3 channel ordering contains White (which would leave an RGB
    /// component without a channel).
    pub fn new(channels: &[ColorChannel]) -> Result<Self, ChannelAssignmentError> {
        if !(3..=4).contains(&channels.len()) {
            return Err(ChannelAssignmentError::InvalidLength(channels.len()));
        }

        for (i, channel) in channels.iter().enumerate() {
            if channels[..i].contains(channel) {
                return Err(ChannelAssignmentError::DuplicateChannel(*channel));
            }
        }

        if channels.len() == 3 && channels.contains(&ColorChannel::White) {
            return Err(ChannelAssignmentError::UnexpectedWhite);
        }

        let inner = Vec::from_slice(channels).map_err(|()| ChannelAssignmentError::InvalidLength(channels.len()))?;
        Ok(Self { inner })
    }

    /// Returns the number of DMX channels this assignment maps (3 or 4).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns false; a valid assignment always maps at least 3 channels.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether this assignment drives an RGBW fixture.
    pub fn includes_white(&self) -> bool {
        self.inner.contains(&ColorChannel::White)
    }

    /// The channel ordering as a slice.
    pub fn channels(&self) -> &[ColorChannel] {
        &self.inner
    }

    /// Converts a color into the byte values for this fixture's channels, ordered by
    /// destination channel offset.
    ///
    /// RGB components are scaled to [0, 255] with truncation. For an RGBW assignment
    /// an achromatic color is carried entirely on the white channel (RGB zeroed);
    /// any chromatic color is carried on the RGB channels with white zeroed.
    pub fn channel_values(&self, color: &Color) -> Vec<u8, { Self::CAPACITY }> {
        let (red, green, blue, _) = color.rgba();
        let white = if self.includes_white() { color.achromatic_white() } else { None };

        self.inner
            .iter()
            .map(|channel| match (channel, white) {
                (ColorChannel::White, derived) => derived.unwrap_or(0),
                (_, Some(_)) => 0,
                (ColorChannel::Red, None) => scale_component(red),
                (ColorChannel::Green, None) => scale_component(green),
                (ColorChannel::Blue, None) => scale_component(blue),
            })
            .collect()
    }
}

/// Error for creation of [ChannelAssignment].
#[derive(Debug, thiserror::Error)]
pub enum ChannelAssignmentError {
    /// Only RGB (3 channels) and RGBW (4 channels) fixtures are supported.
    ///
    /// # Arguments
    /// 0: The number of channels given
    #[error("Channel assignment must map 3 or 4 channels, got {0}")]
    InvalidLength(usize),

    /// Each color component may occupy at most one channel.
    ///
    /// # Arguments
    /// 0: The component that appeared more than once
    #[error("Channel assignment contains duplicate channel {0:?}")]
    DuplicateChannel(ColorChannel),

    /// A 3 channel assignment must be exactly Red, Green and Blue.
    #[error("A 3 channel assignment must not contain White")]
    UnexpectedWhite,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorChannel::{Blue, Green, Red, White};

    #[test]
    fn rgb_identity_order() {
        let assignment = ChannelAssignment::new(&[Red, Green, Blue]).unwrap();
        let values = assignment.channel_values(&Color::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(&values[..], &[255, 0, 0]);
    }

    #[test]
    fn rgb_permuted_order() {
        // Green lands at offset 2 because that is where the fixture expects it.
        let assignment = ChannelAssignment::new(&[Blue, Red, Green]).unwrap();
        let values = assignment.channel_values(&Color::new(0.0, 1.0, 0.0, 1.0));

        assert_eq!(&values[..], &[0, 0, 255]);
    }

    #[test]
    fn rgbw_achromatic_color_uses_white_channel() {
        let assignment = ChannelAssignment::new(&[Red, Green, Blue, White]).unwrap();
        let brightness = 0.8;
        let values = assignment.channel_values(&Color::new(brightness, brightness, brightness, 1.0));

        assert_eq!(&values[..], &[0, 0, 0, (brightness * 255.0) as u8]);
    }

    #[test]
    fn rgbw_saturated_color_zeroes_white_channel() {
        let assignment = ChannelAssignment::new(&[White, Red, Green, Blue]).unwrap();
        let values = assignment.channel_values(&Color::new(1.0, 0.5, 0.25, 1.0));

        assert_eq!(&values[..], &[0, 255, 127, 63]);
    }

    #[test]
    fn rejects_invalid_lengths() {
        assert!(matches!(
            ChannelAssignment::new(&[Red, Green]),
            Err(ChannelAssignmentError::InvalidLength(2))
        ));
        assert!(matches!(
            ChannelAssignment::new(&[Red, Green, Blue, White, Red]),
            Err(ChannelAssignmentError::InvalidLength(5))
        ));
        assert!(matches!(ChannelAssignment::new(&[]), Err(ChannelAssignmentError::InvalidLength(0))));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(matches!(
            ChannelAssignment::new(&[Red, Red, Blue]),
            Err(ChannelAssignmentError::DuplicateChannel(Red))
        ));
        assert!(matches!(
            ChannelAssignment::new(&[Red, Green, Blue, Blue]),
            Err(ChannelAssignmentError::DuplicateChannel(Blue))
        ));
    }

    #[test]
    fn rejects_white_in_rgb_assignment() {
        assert!(matches!(
            ChannelAssignment::new(&[Red, Green, White]),
            Err(ChannelAssignmentError::UnexpectedWhite)
        ));
    }
}
