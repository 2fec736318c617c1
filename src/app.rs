// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the preview overlay.
//!
//! The `App` owns the host-side inputs of the preview (the media source
//! and the visibility flag), reacts to the dismissal effect, and keeps
//! the diagnostics activity trail current. Policy decisions (window
//! sizing, preference loading, command draining) stay close to the main
//! update loop so user-facing behavior is easy to audit.

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::diagnostics::{ActivityKind, ActivityLog};
use crate::media::MediaSource;
use crate::surface::{self, SurfaceCommand};
use crate::ui::preview;
use crate::ui::preview::playback_bar;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{event, mouse, time, window, Element, Length, Subscription, Task, Theme};
use std::path::Path;
use tokio::sync::mpsc::UnboundedReceiver;

/// Interval at which pending surface commands are drained into the
/// activity log.
const COMMAND_DRAIN_MILLIS: u64 = 100;

/// Root Iced application state bridging the preview overlay, persisted
/// preferences, and diagnostics.
pub struct App {
    preview: preview::State,
    source: Option<MediaSource>,
    show_preview: bool,
    activity: ActivityLog,
    /// Engine side of the surface command channel. A real embedding
    /// hands this to its playback engine; the demo shell drains it into
    /// the activity log so issued commands stay observable.
    surface_rx: Option<UnboundedReceiver<SurfaceCommand>>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Preview(preview::Message),
    OpenPreview,
    Tick(std::time::Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional media path to preview.
    pub file_path: Option<String>,
    /// Start an open cycle unpaused, overriding the preference file.
    pub autoplay: bool,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        let (handle, rx) = surface::channel();
        let mut preview = preview::State::new();
        preview.attach_surface(handle);

        Self {
            preview,
            source: None,
            show_preview: false,
            activity: ActivityLog::default(),
            surface_rx: Some(rx),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the preference
    /// file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App::default();
        app.source = flags
            .file_path
            .as_deref()
            .map(|p| MediaSource::from_path(Path::new(p)));
        app.preview
            .set_autoplay(flags.autoplay || config.autoplay.unwrap_or(false));
        if let Some(capacity) = config.activity_capacity {
            app.activity = ActivityLog::with_capacity(capacity);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Glance")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPreview => {
                if self
                    .source
                    .as_ref()
                    .is_some_and(MediaSource::is_renderable)
                {
                    self.show_preview = true;
                    self.activity.record(ActivityKind::PreviewOpened);
                    let (_effect, task) = self.preview.handle_message(preview::Message::Opened);
                    return task.map(Message::Preview);
                }
                Task::none()
            }
            Message::Preview(preview_message) => {
                self.note_preview_activity(&preview_message);

                let (effect, task) = self.preview.handle_message(preview_message);
                if effect == preview::Effect::Dismissed {
                    self.show_preview = false;
                    self.activity.record(ActivityKind::PreviewDismissed);
                }
                task.map(Message::Preview)
            }
            Message::Tick(_now) => {
                self.drain_surface_commands();
                Task::none()
            }
        }
    }

    /// Records notable preview interactions before they are handled, while
    /// the pre-interaction state (e.g. the dragged slider value) is still
    /// available.
    fn note_preview_activity(&mut self, message: &preview::Message) {
        match message {
            preview::Message::PlaybackBar(playback_bar::Message::ToggleTransport) => {
                self.activity.record(ActivityKind::TransportToggled);
            }
            preview::Message::PlaybackBar(playback_bar::Message::SeekCommit) => {
                if let Some(target_secs) = self.preview.seek_preview() {
                    self.activity.record(ActivityKind::SeekCommitted { target_secs });
                }
            }
            preview::Message::Playback(crate::surface::SurfaceEvent::Loaded(metadata)) => {
                self.activity.record(ActivityKind::MediaReady {
                    duration_secs: metadata.duration_secs,
                });
            }
            _ => {}
        }
    }

    fn drain_surface_commands(&mut self) {
        if let Some(rx) = &mut self.surface_rx {
            while let Ok(command) = rx.try_recv() {
                let kind = match command {
                    SurfaceCommand::Seek { target_secs } => {
                        ActivityKind::SeekIssued { target_secs }
                    }
                    SurfaceCommand::SetPaused(paused) => ActivityKind::TransportSet { paused },
                };
                self.activity.record(kind);
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let spinner = self.preview.subscription().map(Message::Preview);

        if self.show_preview {
            // While the overlay is visible the preview needs cursor
            // positions (to resolve track presses) and window resizes.
            let events = event::listen_with(|event, _status, _window| match &event {
                event::Event::Window(window::Event::Resized(_))
                | event::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                    Some(Message::Preview(preview::Message::RawEvent(event.clone())))
                }
                _ => None,
            });
            let tick = time::every(std::time::Duration::from_millis(COMMAND_DRAIN_MILLIS))
                .map(Message::Tick);

            Subscription::batch([spinner, events, tick])
        } else {
            // Window size must stay current for the next open cycle.
            let events = event::listen_with(|event, _status, _window| match &event {
                event::Event::Window(window::Event::Resized(_)) => {
                    Some(Message::Preview(preview::Message::RawEvent(event.clone())))
                }
                _ => None,
            });

            Subscription::batch([spinner, events])
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let base = self.base_view();

        if self.show_preview {
            let overlay = self
                .preview
                .view(preview::ViewEnv {
                    source: self.source.as_ref(),
                })
                .map(Message::Preview);

            Stack::new().push(base).push(overlay).into()
        } else {
            base
        }
    }

    fn base_view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(16)
            .align_x(Horizontal::Center)
            .push(Text::new("Iced Glance").size(28));

        match &self.source {
            Some(source) if source.is_renderable() => {
                column = column
                    .push(Text::new(source.uri.as_str()).size(14))
                    .push(button(Text::new("Open preview")).on_press(Message::OpenPreview));
            }
            _ => {
                column = column.push(
                    Text::new("Pass a media path on the command line to preview it.").size(14),
                );
            }
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}
