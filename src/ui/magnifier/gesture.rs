// SPDX-License-Identifier: MPL-2.0
//! Transparent canvas that turns pointer drags into lens translations.
//!
//! The surface also reports its own size, so the compositor always renders
//! at the size the lens area actually occupies.

use super::Message;
use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::widget::Action;
use iced::{Point, Rectangle, Renderer, Size, Theme};

/// Canvas program stacked over the composited frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureSurface;

/// Per-widget gesture state kept by Iced between events.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureState {
    /// Absolute cursor position of the left press starting the drag.
    press_origin: Option<Point>,
    /// Last bounds size published as `ViewportResized`.
    last_size: Option<Size>,
}

impl GestureState {
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Feeds one event through the gesture recognizer.
    ///
    /// Returns the message to publish and whether the event was consumed.
    /// Pointer handling always runs first; a size change seen on an event
    /// that already publishes a drag message is reported on the next one.
    pub fn process(
        &mut self,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<(Message, bool)> {
        if let iced::Event::Mouse(mouse_event) = event {
            if let Some(published) = self.process_mouse(mouse_event, bounds, cursor) {
                return Some(published);
            }
        }

        let size = bounds.size();
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            return Some((Message::ViewportResized(size), false));
        }

        None
    }

    fn process_mouse(
        &mut self,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<(Message, bool)> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                // Only presses inside the lens area start a drag
                let position = cursor.position_over(bounds)?;
                self.press_origin = Some(position);
                None
            }
            mouse::Event::CursorMoved { position } => {
                let origin = self.press_origin?;
                Some((Message::DragMoved(*position - origin), true))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.press_origin.take()?;
                Some((Message::DragEnded, true))
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for GestureSurface {
    type State = GestureState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let press_inside = matches!(
            event,
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        ) && cursor.is_over(bounds);

        match state.process(event, bounds, cursor) {
            Some((message, captured)) if captured || press_inside => {
                Some(Action::publish(message).and_capture())
            }
            Some((message, _)) => Some(Action::publish(message)),
            None if press_inside => Some(Action::capture()),
            None => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_pressed() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Vector;

    const BOUNDS: Rectangle = Rectangle {
        x: 10.0,
        y: 20.0,
        width: 400.0,
        height: 300.0,
    };

    fn mouse(event: mouse::Event) -> iced::Event {
        iced::Event::Mouse(event)
    }

    fn settled() -> GestureState {
        let mut state = GestureState::default();
        let _ = state.process(
            &mouse(mouse::Event::CursorEntered),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        state
    }

    #[test]
    fn first_event_reports_viewport_size() {
        let mut state = GestureState::default();
        let published = state.process(
            &mouse(mouse::Event::CursorEntered),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert!(matches!(
            published,
            Some((Message::ViewportResized(size), false)) if size == BOUNDS.size()
        ));

        // Same size again publishes nothing
        let again = state.process(
            &mouse(mouse::Event::CursorEntered),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert!(again.is_none());
    }

    #[test]
    fn drag_publishes_translation_from_press_origin() {
        let mut state = settled();
        let press_at = Point::new(100.0, 100.0);

        let pressed = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(press_at),
        );
        assert!(pressed.is_none());
        assert!(state.is_pressed());

        let moved = state.process(
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(120.0, 90.0),
            }),
            BOUNDS,
            mouse::Cursor::Available(Point::new(120.0, 90.0)),
        );
        assert!(matches!(
            moved,
            Some((Message::DragMoved(v), true)) if v == Vector::new(20.0, -10.0)
        ));

        let released = state.process(
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(120.0, 90.0)),
        );
        assert!(matches!(released, Some((Message::DragEnded, true))));
        assert!(!state.is_pressed());
    }

    #[test]
    fn drag_keeps_tracking_outside_bounds() {
        let mut state = settled();
        let _ = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(400.0, 300.0)),
        );

        let outside = Point::new(900.0, 700.0);
        let moved = state.process(
            &mouse(mouse::Event::CursorMoved { position: outside }),
            BOUNDS,
            mouse::Cursor::Available(outside),
        );
        assert!(matches!(
            moved,
            Some((Message::DragMoved(v), true)) if v == Vector::new(500.0, 400.0)
        ));
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let mut state = settled();
        let _ = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(0.0, 0.0)),
        );
        assert!(!state.is_pressed());

        let moved = state.process(
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(50.0, 50.0),
            }),
            BOUNDS,
            mouse::Cursor::Available(Point::new(50.0, 50.0)),
        );
        assert!(moved.is_none());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = settled();
        let released = state.process(
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(50.0, 50.0)),
        );
        assert!(released.is_none());
    }

    #[test]
    fn release_with_new_bounds_still_ends_drag() {
        let mut state = settled();
        let _ = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(100.0, 100.0)),
        );

        let shrunk = Rectangle {
            height: 260.0,
            ..BOUNDS
        };
        let released = state.process(
            &mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            shrunk,
            mouse::Cursor::Available(Point::new(100.0, 100.0)),
        );
        assert!(matches!(released, Some((Message::DragEnded, true))));
        assert!(!state.is_pressed());

        // The new size follows on the next event, with no drag in flight
        let moved = state.process(
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(200.0, 200.0),
            }),
            shrunk,
            mouse::Cursor::Available(Point::new(200.0, 200.0)),
        );
        assert!(matches!(
            moved,
            Some((Message::ViewportResized(size), false)) if size == shrunk.size()
        ));

        let moved_again = state.process(
            &mouse(mouse::Event::CursorMoved {
                position: Point::new(210.0, 210.0),
            }),
            shrunk,
            mouse::Cursor::Available(Point::new(210.0, 210.0)),
        );
        assert!(moved_again.is_none());
    }

    #[test]
    fn press_on_fresh_surface_starts_drag_and_reports_size() {
        let mut state = GestureState::default();
        let pressed = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(100.0, 100.0)),
        );
        assert!(matches!(
            pressed,
            Some((Message::ViewportResized(size), false)) if size == BOUNDS.size()
        ));
        assert!(state.is_pressed());
    }

    #[test]
    fn right_button_does_not_drag() {
        let mut state = settled();
        let _ = state.process(
            &mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(100.0, 100.0)),
        );
        assert!(!state.is_pressed());
    }
}
