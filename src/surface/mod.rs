// SPDX-License-Identifier: MPL-2.0
//! Command/event boundary to the external playback surface.
//!
//! The preview never decodes or renders video itself. It issues commands
//! (seek, paused flag) through a [`SurfaceHandle`] and consumes the events
//! the engine emits (metadata loaded, progress ticks, end of media). The
//! embedding application owns the engine side of the channel.

use crate::media::VideoMetadata;
use tokio::sync::mpsc;

/// Commands the preview issues to the playback surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// Seek to an absolute position in seconds.
    Seek { target_secs: f64 },
    /// Update the paused/unpaused render flag.
    SetPaused(bool),
}

/// Events the playback surface emits toward the preview.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Media metadata became available.
    Loaded(VideoMetadata),
    /// Periodic progress tick with the current playback position.
    Progress { position_secs: f64 },
    /// Playback reached the end of the media.
    Ended,
}

/// Handle for sending commands to the playback surface from the UI.
/// This is cloneable and can be stored in the preview state.
#[derive(Debug, Clone)]
pub struct SurfaceHandle {
    tx: mpsc::UnboundedSender<SurfaceCommand>,
}

impl SurfaceHandle {
    /// Sends a command to the playback surface.
    ///
    /// A torn-down engine is not an error the UI can act on, so callers
    /// typically discard the result.
    pub fn send(&self, command: SurfaceCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Playback surface not running".to_string())
    }

    /// Seeks to an absolute position in seconds.
    pub fn seek(&self, target_secs: f64) -> Result<(), String> {
        self.send(SurfaceCommand::Seek { target_secs })
    }

    /// Updates the paused render flag.
    pub fn set_paused(&self, paused: bool) -> Result<(), String> {
        self.send(SurfaceCommand::SetPaused(paused))
    }
}

/// Creates the command channel between the preview and a playback engine.
///
/// The handle goes to the preview; the receiver goes to whatever engine
/// the embedding application wires up.
pub fn channel() -> (SurfaceHandle, mpsc::UnboundedReceiver<SurfaceCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SurfaceHandle { tx }, rx)
}
