// SPDX-License-Identifier: MPL-2.0
//! `iced_glance` is a modal video-preview overlay built with the Iced GUI
//! framework.
//!
//! The overlay hosts a video surface with computed dimensions, a playback
//! bar (play/pause, elapsed/total readout, seek slider), a dismiss
//! control, and a loading indicator. Decoding and rendering are delegated
//! to an external playback engine behind the `surface` command/event
//! boundary.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod media;
pub mod surface;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
