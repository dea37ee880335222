// SPDX-License-Identifier: MPL-2.0
//! Interactive canvas that renders the displayed image and reports gestures.
//!
//! The pane owns no viewport state: it draws the image where the viewer's
//! [`ViewportState`] puts it and publishes raw gestures (drag, wheel, pinch,
//! double tap, resize) for the viewer to apply.

use crate::config::{PIXEL_SCROLL_ZOOM_FACTOR, WHEEL_ZOOM_FACTOR};
use crate::ui::state::{PinchTracker, ViewportState};
use crate::ui::viewer::component::Message;
use iced::touch::{self, Finger};
use iced::widget::canvas;
use iced::widget::image::{FilterMethod, Handle};
use iced::advanced::mouse;
use iced::widget::Action;
use iced::{Point, Rectangle, Size};

/// Gestures published by the pane, in pane-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Resized(Size),
    DragStarted(Point),
    DragMoved(Point),
    DragEnded,
    Zoomed { factor: f32, anchor: Point },
    DoubleTapped(Point),
}

/// Canvas program drawing one image through a viewport.
pub struct Pane<'a> {
    pub handle: &'a Handle,
    pub viewport: &'a ViewportState,
}

/// Per-widget interaction state kept by Iced between events.
#[derive(Debug, Default)]
pub struct PaneState {
    bounds: Option<Size>,
    last_click: Option<mouse::Click>,
    dragging: bool,
    primary_finger: Option<Finger>,
    pinch: PinchTracker,
}

fn publish(event: Event) -> Option<Action<Message>> {
    Some(Action::publish(Message::Pane(event)).and_capture())
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// Zoom factor for one wheel event.
#[must_use]
pub fn wheel_factor(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => WHEEL_ZOOM_FACTOR.powf(y),
        mouse::ScrollDelta::Pixels { y, .. } => PIXEL_SCROLL_ZOOM_FACTOR.powf(y / 100.0),
    }
}

impl Pane<'_> {
    /// Registers a press and returns whether it completes a double tap.
    fn register_press(state: &mut PaneState, position: Point) -> bool {
        let click = mouse::Click::new(position, mouse::Button::Left, state.last_click);
        state.last_click = Some(click);
        matches!(click.kind(), mouse::click::Kind::Double)
    }

    fn update_mouse(
        state: &mut PaneState,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                if Self::register_press(state, position) {
                    state.dragging = false;
                    return publish(Event::DoubleTapped(position));
                }
                state.dragging = true;
                publish(Event::DragStarted(position))
            }
            mouse::Event::CursorMoved { position } if state.dragging => {
                publish(Event::DragMoved(local(*position, bounds)))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft
                if state.dragging =>
            {
                state.dragging = false;
                publish(Event::DragEnded)
            }
            mouse::Event::WheelScrolled { delta } => {
                let anchor = cursor.position_in(bounds)?;
                publish(Event::Zoomed {
                    factor: wheel_factor(*delta),
                    anchor,
                })
            }
            _ => None,
        }
    }

    fn update_touch(
        state: &mut PaneState,
        event: &touch::Event,
        bounds: Rectangle,
    ) -> Option<Action<Message>> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if !bounds.contains(position) {
                    return None;
                }
                let position = local(position, bounds);
                state.pinch.press(id, position);

                if state.pinch.is_pinching() {
                    state.primary_finger = None;
                    state.dragging = false;
                    return publish(Event::DragEnded);
                }
                if Self::register_press(state, position) {
                    return publish(Event::DoubleTapped(position));
                }
                state.primary_finger = Some(id);
                state.dragging = true;
                publish(Event::DragStarted(position))
            }
            touch::Event::FingerMoved { id, position } => {
                let position = local(position, bounds);
                if let Some(step) = state.pinch.moved(id, position) {
                    return publish(Event::Zoomed {
                        factor: step.factor,
                        anchor: step.anchor,
                    });
                }
                if state.primary_finger != Some(id) {
                    return None;
                }
                publish(Event::DragMoved(position))
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                state.pinch.lift(id);
                if state.primary_finger == Some(id) {
                    state.primary_finger = None;
                    state.dragging = false;
                    return publish(Event::DragEnded);
                }
                None
            }
        }
    }
}

impl canvas::Program<Message> for Pane<'_> {
    type State = PaneState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        // Report layout changes first; the triggering event is dropped.
        if state.bounds != Some(bounds.size()) {
            state.bounds = Some(bounds.size());
            return Some(Action::publish(Message::Pane(Event::Resized(bounds.size()))));
        }

        match event {
            iced::Event::Mouse(mouse_event) => Self::update_mouse(state, mouse_event, bounds, cursor),
            iced::Event::Touch(touch_event) => Self::update_touch(state, touch_event, bounds),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Until the viewer has seen the real bounds, draw with a fitted copy.
        let rect = if self.viewport.bounds() == Some(bounds.size()) {
            self.viewport.image_rect()
        } else {
            let mut preview = self.viewport.clone();
            preview.set_bounds(bounds.size());
            preview.image_rect()
        };

        if let Some(rect) = rect {
            let filter = if self.viewport.scale() >= 1.0 {
                FilterMethod::Nearest
            } else {
                FilterMethod::Linear
            };
            frame.draw_image(
                rect,
                canvas::Image::new(self.handle.clone()).filter_method(filter),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        let (min, max) = self.viewport.offset_limits();
        let can_pan = max.x > min.x || max.y > min.y;
        match (state.dragging, can_pan) {
            (true, true) => mouse::Interaction::Grabbing,
            (false, true) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
