// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for layout and behavior constants.
//!
//! This module serves as the single source of truth for the numeric
//! constants used across the application.

// ==========================================================================
// Window
// ==========================================================================

/// Default window width at startup.
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Default window height at startup.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 400;

// ==========================================================================
// Preview Layout
// ==========================================================================

/// Horizontal margin subtracted from the window width when sizing the
/// preview surface bounding box.
pub const PREVIEW_HORIZONTAL_MARGIN: f32 = 20.0;

/// The preview surface may occupy at most `window_height / PREVIEW_HEIGHT_DIVISOR`.
pub const PREVIEW_HEIGHT_DIVISOR: f32 = 1.5;

// ==========================================================================
// Seek Bar
// ==========================================================================

/// Correction subtracted from a press position on the seek track to
/// account for the slider thumb radius.
pub const SEEK_THUMB_CORRECTION: f32 = 14.0;

// ==========================================================================
// Loading Indicator
// ==========================================================================

/// Interval between spinner animation frames, in milliseconds.
pub const SPINNER_TICK_MILLIS: u64 = 80;

// ==========================================================================
// Diagnostics
// ==========================================================================

/// Default capacity of the activity log ring buffer.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 256;
