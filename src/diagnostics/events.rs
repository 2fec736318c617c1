// SPDX-License-Identifier: MPL-2.0
//! Activity event types for diagnostic tracking.
//!
//! These events capture meaningful user interactions and the commands
//! issued to the playback surface, so a host can attach the recent
//! activity trail to bug reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single activity entry the preview or its host can record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityKind {
    /// The preview overlay was opened.
    PreviewOpened,

    /// The preview overlay was dismissed.
    PreviewDismissed,

    /// The play/pause control was toggled.
    TransportToggled,

    /// Media metadata arrived and the preview left the loading state.
    MediaReady {
        /// Reported duration in seconds.
        duration_secs: f64,
    },

    /// The user released the seek slider.
    SeekCommitted {
        /// Target position in seconds.
        target_secs: f64,
    },

    /// A seek command was issued to the playback surface.
    SeekIssued {
        /// Target position in seconds.
        target_secs: f64,
    },

    /// The paused render flag was sent to the playback surface.
    TransportSet {
        /// The new paused state.
        paused: bool,
    },
}

/// A timestamped activity entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    /// Wall-clock time the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl ActivityEvent {
    /// Creates an entry stamped with the current wall-clock time.
    #[must_use]
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
