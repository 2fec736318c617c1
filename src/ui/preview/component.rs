// SPDX-License-Identifier: MPL-2.0
//! Preview modal component encapsulating state and update logic.
//!
//! The component owns every piece of preview state and re-initializes it
//! on each close. The host owns the `source` and the visibility flag and
//! reacts to [`Effect::Dismissed`].

use crate::config;
use crate::media::{MediaSource, VideoMetadata};
use crate::surface::{SurfaceEvent, SurfaceHandle};
use crate::ui::preview::{self, layout, playback_bar};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Id, Space, Stack, Text};
use iced::{event, mouse, window, Element, Length, Point, Rectangle, Size, Subscription, Task};

/// Messages consumed by the preview component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The host opened the overlay; arms a fresh preview cycle.
    Opened,
    /// The dismiss control was pressed.
    CloseRequested,
    /// Playback bar interactions.
    PlaybackBar(playback_bar::Message),
    /// An event emitted by the playback surface.
    Playback(SurfaceEvent),
    /// The seek track was measured after a press landed on it.
    TrackMeasured {
        press_x: f32,
        bounds: Option<Rectangle>,
    },
    /// Raw window/mouse events routed in by the host.
    RawEvent(event::Event),
    /// Advances the loading spinner animation.
    SpinnerTick,
}

/// Side effects the host should perform after handling a preview message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user requested dismissal; the host hides the overlay.
    Dismissed,
}

/// Environment information required to render the preview.
pub struct ViewEnv<'a> {
    /// The media the host wants previewed. Absent (or empty) sources
    /// suppress rendering of the player entirely.
    pub source: Option<&'a MediaSource>,
}

/// Complete preview component state.
#[derive(Debug)]
pub struct State {
    /// Liveness gate: every state mutation is dropped once this is false.
    mounted: bool,

    /// True until the surface reports media metadata.
    is_loading: bool,

    /// Metadata reported by the surface, absent until the load event.
    metadata: Option<VideoMetadata>,

    /// On-screen render size of the video surface.
    display_size: Size,

    /// Playback cursor in seconds, driven by progress events. The
    /// surface's reported value is trusted verbatim; no clamping.
    current_position: f64,

    /// Transport state. The open-cycle default honors the autoplay
    /// preference; end-of-media always forces it back to paused.
    paused: bool,

    /// Preview position while the slider is being dragged.
    seek_preview: Option<f64>,

    /// Command channel to the playback surface, when attached.
    surface: Option<SurfaceHandle>,

    /// Last known window size; the fit bounding box derives from it.
    window_size: Size,

    /// Last known cursor position, used to resolve track presses.
    cursor_position: Option<Point>,

    /// Current frame of the loading spinner animation.
    spinner_frame: usize,

    /// Whether a fresh open cycle starts unpaused.
    autoplay: bool,
}

impl Default for State {
    fn default() -> Self {
        let window_size = Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        );
        Self {
            mounted: false,
            is_loading: true,
            metadata: None,
            display_size: layout::bounding_box(window_size),
            current_position: 0.0,
            paused: true,
            seek_preview: None,
            surface: None,
            window_size,
            cursor_position: None,
            spinner_frame: 0,
            autoplay: false,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the command channel to the playback surface.
    pub fn attach_surface(&mut self, surface: SurfaceHandle) {
        self.surface = Some(surface);
    }

    /// Sets whether an open cycle starts unpaused.
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn current_position(&self) -> f64 {
        self.current_position
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn display_size(&self) -> Size {
        self.display_size
    }

    #[must_use]
    pub fn seek_preview(&self) -> Option<f64> {
        self.seek_preview
    }

    /// Restores every preview field to its initial value. The window
    /// size, surface handle, and autoplay preference are environment,
    /// not preview state, and survive the reset.
    fn reset(&mut self) {
        self.is_loading = true;
        self.metadata = None;
        self.display_size = layout::bounding_box(self.window_size);
        self.current_position = 0.0;
        self.paused = !self.autoplay;
        self.seek_preview = None;
        self.spinner_frame = 0;
    }

    /// Arms a fresh preview cycle and sets the liveness gate.
    fn open(&mut self) {
        self.reset();
        self.mounted = true;
    }

    /// Resets state (behind the liveness gate) and clears the gate, so
    /// events still in flight from the closed cycle are dropped.
    fn close(&mut self) {
        if self.mounted {
            self.reset();
        }
        self.mounted = false;
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Opened => {
                self.open();
                (Effect::None, Task::none())
            }
            Message::CloseRequested => {
                // The reset is gated, the dismissal effect is not: a
                // second close still tells the host to hide the overlay
                // and leaves the already-reset state untouched.
                self.close();
                (Effect::Dismissed, Task::none())
            }
            Message::PlaybackBar(bar_message) => self.handle_bar_message(bar_message),
            Message::Playback(surface_event) => {
                self.handle_surface_event(surface_event);
                (Effect::None, Task::none())
            }
            Message::TrackMeasured { press_x, bounds } => {
                self.handle_track_measured(press_x, bounds);
                (Effect::None, Task::none())
            }
            Message::RawEvent(raw) => {
                self.handle_raw_event(&raw);
                (Effect::None, Task::none())
            }
            Message::SpinnerTick => {
                if self.mounted && self.is_loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_bar_message(&mut self, message: playback_bar::Message) -> (Effect, Task<Message>) {
        match message {
            playback_bar::Message::ToggleTransport => {
                // The toggle is live before metadata loads: the bar
                // renders whenever a source exists, independent of the
                // loading flag.
                if self.mounted {
                    self.paused = !self.paused;
                    if let Some(surface) = &self.surface {
                        let _ = surface.set_paused(self.paused);
                    }
                }
                (Effect::None, Task::none())
            }
            playback_bar::Message::SeekPreview(position_secs) => {
                if self.mounted {
                    self.seek_preview = Some(position_secs);
                }
                (Effect::None, Task::none())
            }
            playback_bar::Message::SeekCommit => {
                // Release-seek targets the exact dragged value,
                // fractional seconds included; press-seek (below) rounds
                // to whole seconds.
                if let Some(target_secs) = self.seek_preview {
                    if let Some(surface) = &self.surface {
                        let _ = surface.seek(target_secs);
                    }
                }
                if self.mounted {
                    self.seek_preview = None;
                }
                (Effect::None, Task::none())
            }
            playback_bar::Message::TrackPressed => {
                // Press-in on the track: measure its geometry first, then
                // convert the press position into a seek target.
                let Some(cursor) = self.cursor_position else {
                    return (Effect::None, Task::none());
                };
                let press_x = cursor.x;
                let task = container::visible_bounds(Id::new(playback_bar::TRACK_ID))
                    .map(move |bounds| Message::TrackMeasured { press_x, bounds });
                (Effect::None, task)
            }
        }
    }

    fn handle_surface_event(&mut self, surface_event: SurfaceEvent) {
        // Post-teardown events are dropped silently; a progress tick or a
        // late load arriving after close must neither mutate nor panic.
        if !self.mounted {
            return;
        }

        match surface_event {
            SurfaceEvent::Loaded(metadata) => {
                self.is_loading = false;
                self.metadata = Some(metadata);

                let natural = Size::new(
                    metadata.natural_width as f32,
                    metadata.natural_height as f32,
                );
                self.display_size =
                    layout::fit_preview(natural, layout::bounding_box(self.window_size));
            }
            SurfaceEvent::Progress { position_secs } => {
                self.current_position = position_secs;
            }
            SurfaceEvent::Ended => {
                self.paused = true;
                if let Some(surface) = &self.surface {
                    let _ = surface.set_paused(true);
                }
            }
        }
    }

    fn handle_track_measured(&mut self, press_x: f32, bounds: Option<Rectangle>) {
        let Some(bounds) = bounds else { return };
        let Some(metadata) = &self.metadata else {
            return;
        };

        let offset = (press_x - bounds.x - config::SEEK_THUMB_CORRECTION).floor();

        // Presses past the end of the track issue no seek; only the
        // upper bound is guarded.
        if offset < bounds.width {
            let fraction = f64::from(offset) / f64::from(bounds.width);
            let target_secs = (fraction * metadata.duration_secs).round();
            if let Some(surface) = &self.surface {
                let _ = surface.seek(target_secs);
            }
        }
    }

    fn handle_raw_event(&mut self, raw: &event::Event) {
        // Window and cursor tracking is environment state, outside the
        // liveness gate: the window size must stay current for the next
        // open cycle even while the overlay is hidden.
        match raw {
            event::Event::Window(window::Event::Resized(size)) => {
                self.window_size = *size;
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(*position);
            }
            _ => {}
        }
    }

    /// Spinner animation ticks while the overlay is waiting on metadata.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.mounted && self.is_loading {
            iced::time::every(std::time::Duration::from_millis(config::SPINNER_TICK_MILLIS))
                .map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the dim overlay: dismiss control, surface slot, playback
    /// bar, and the loading indicator while metadata is pending.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let close_button = button(Text::new("✕").size(24))
            .on_press(Message::CloseRequested)
            .padding(6);
        let close_row = Container::new(close_button)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(10);

        let mut body = Column::new()
            .width(Length::Fill)
            .padding(10)
            .align_x(Horizontal::Center);

        if let Some(source) = env.source {
            if source.is_renderable() {
                // The engine owns the pixels; the component reserves and
                // sizes the region it will render into.
                let surface_slot = Container::new(Space::new())
                    .width(Length::Fixed(self.display_size.width))
                    .height(Length::Fixed(self.display_size.height))
                    .style(preview::surface_slot_style);

                let bar_state = playback_bar::BarState {
                    paused: self.paused,
                    position_secs: self.current_position,
                    duration_secs: self.metadata.map(|m| m.duration_secs),
                    seek_preview: self.seek_preview,
                };
                let bar = playback_bar::view(&bar_state).map(Message::PlaybackBar);

                body = body.push(surface_slot).push(bar);
            }
        }

        let content: Element<'a, Message> = if self.is_loading {
            let spinner = Container::new(
                Text::new(preview::spinner_glyph(self.spinner_frame)).size(40),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

            Stack::new().push(body).push(spinner).into()
        } else {
            body.into()
        };

        let column = Column::new()
            .width(Length::Fill)
            .push(close_row)
            .push(content);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .style(preview::backdrop_style)
            .into()
    }
}
