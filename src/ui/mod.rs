// SPDX-License-Identifier: MPL-2.0
//! UI components of the application.

pub mod preview;
