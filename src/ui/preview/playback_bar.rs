// SPDX-License-Identifier: MPL-2.0
//! Playback bar UI: play/pause toggle, time readout, and seek slider.

use iced::widget::{button, container, mouse_area, row, slider, text, Id, Row, Text};
use iced::{Background, Color, Element, Length, Theme};

/// Identifier of the seek track container, used to measure its on-screen
/// geometry when a press lands on it.
pub const TRACK_ID: &str = "preview-seek-track";

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

/// Messages emitted by the playback bar widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    ToggleTransport,

    /// Seek preview - slider is being dragged (visual feedback only).
    /// Position in seconds.
    SeekPreview(f64),

    /// Commit seek - slider released, perform actual seek to preview position.
    SeekCommit,

    /// A press landed on the seek track; the component measures the track
    /// and converts the press into a coarse seek.
    TrackPressed,
}

/// Snapshot of the playback state the bar renders from.
#[derive(Debug, Clone)]
pub struct BarState {
    /// Is the transport paused?
    pub paused: bool,

    /// Current playback position in seconds.
    pub position_secs: f64,

    /// Total duration in seconds, when metadata has arrived.
    pub duration_secs: Option<f64>,

    /// Preview position during seek drag in seconds, if any.
    /// When Some, the slider shows this position instead of playback position.
    pub seek_preview: Option<f64>,
}

/// Renders the playback bar row: toggle, `elapsed / total` label, slider.
pub fn view<'a>(state: &BarState) -> Element<'a, Message> {
    let toggle_glyph = if state.paused { "▶" } else { "⏸" };
    let toggle = button(Text::new(toggle_glyph).size(16))
        .on_press(Message::ToggleTransport)
        .padding(6);

    let time_display = text(format!(
        "{} / {}",
        format_clock(state.position_secs),
        state
            .duration_secs
            .map(format_clock)
            .unwrap_or_else(|| "00:00".to_string()),
    ))
    .size(12);

    // Slider bounds come from the floored duration; zero before metadata.
    let slider_max = slider_max_secs(state.duration_secs);
    let slider_position = state.seek_preview.unwrap_or(state.position_secs);

    let seek_slider = slider(0.0..=slider_max, slider_position, Message::SeekPreview)
        .on_release(Message::SeekCommit)
        .step(SLIDER_STEP_SECS)
        .width(Length::Fill);

    // The track is wrapped in a mouse_area so a press anywhere on it can
    // be converted into a coarse seek after measuring the track bounds.
    let track = mouse_area(
        container(seek_slider)
            .id(Id::new(TRACK_ID))
            .width(Length::Fill),
    )
    .on_press(Message::TrackPressed);

    let bar: Row<'a, Message> = row![toggle, time_display, track]
        .spacing(8)
        .padding(6)
        .align_y(iced::Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .style(bar_background)
        .into()
}

/// Slate background behind the playback controls.
fn bar_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0x70, 0x80, 0x90))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// The slider maximum: floored whole seconds of the duration, zero when
/// metadata is absent.
#[must_use]
pub fn slider_max_secs(duration_secs: Option<f64>) -> f64 {
    duration_secs.map_or(0.0, f64::floor)
}

/// Formats a position as `MM:SS`, both fields zero-padded.
///
/// Minutes are unbounded; there is no hour rollover.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{:02}:{:02}", minutes, secs)
}
