// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the UI state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod drag;

pub use drag::DragTracker;
