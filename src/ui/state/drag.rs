// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Turns pointer-drag translations into the lens offset. The offset is
//! measured from the viewport center.

use iced::Vector;

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Tracks the lens offset across successive drags.
///
/// While idle, `offset == committed_offset`. While dragging,
/// `offset == committed_offset + translation` where `translation` is the
/// distance travelled since the drag started.
#[derive(Debug, Clone)]
pub struct DragTracker {
    phase: DragPhase,

    /// Live lens offset, what gets rendered
    offset: Vector,

    /// Offset at the end of the last drag, baseline for the next one
    committed_offset: Vector,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            offset: Vector::ZERO,
            committed_offset: Vector::ZERO,
        }
    }
}

impl DragTracker {
    /// Applies the translation reported since the drag started.
    ///
    /// The first report of a drag starts dragging.
    pub fn drag_moved(&mut self, translation: Vector) {
        self.phase = DragPhase::Dragging;
        self.offset = self.committed_offset + translation;
    }

    /// Commits the live offset as the baseline for the next drag.
    ///
    /// Returns the committed offset, or `None` if no drag was in progress.
    pub fn drag_ended(&mut self) -> Option<Vector> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.phase = DragPhase::Idle;
        self.committed_offset = self.offset;
        Some(self.committed_offset)
    }

    /// Moves the lens back to the viewport center.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn committed_offset(&self) -> Vector {
        self.committed_offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }
}
