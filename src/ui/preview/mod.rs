// SPDX-License-Identifier: MPL-2.0
//! Modal video-preview overlay.
//!
//! A full-screen dim overlay hosting a video surface with computed
//! dimensions, a playback bar, a dismiss control, and a loading
//! indicator shown until the surface reports media metadata.

pub mod component;
pub mod layout;
pub mod playback_bar;

pub use component::{Effect, Message, State, ViewEnv};

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Frames of the text-based loading spinner.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the spinner glyph for an animation frame counter.
#[must_use]
pub(crate) fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Semi-transparent black backdrop dimming the screen behind the modal.
pub(crate) fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.5,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Opaque region reserved for the external playback surface.
pub(crate) fn surface_slot_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_glyph_cycles_through_frames() {
        assert_eq!(spinner_glyph(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_glyph(SPINNER_FRAMES.len()), SPINNER_FRAMES[0]);
        assert_eq!(spinner_glyph(3), SPINNER_FRAMES[3]);
    }
}
