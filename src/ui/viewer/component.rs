// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The viewer never talks to the image source itself. Asking for a new image
//! returns an [`Effect::Acquire`] tagged with a [`RequestId`]; the host runs
//! the acquisition and feeds the outcome back as [`Message::Acquired`]. Only
//! the answer to the most recent request is applied.

use crate::application::port::{AcquisitionSource, SourceError};
use crate::application::{RequestId, RequestTracker};
use crate::domain::ImageData;
use crate::ui::image_handle;
use crate::ui::notifications::Notification;
use crate::ui::state::{DragState, ViewportState, ZoomMultiple};
use crate::ui::viewer::pane;
use iced::widget::image::Handle;
use iced::Size;

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Ask the host for a new image from `source`.
    RequestAcquisition(AcquisitionSource),
    /// Answer from the image source for a previously issued request.
    Acquired {
        request: RequestId,
        source: AcquisitionSource,
        result: Result<ImageData, SourceError>,
    },
    /// Abandon the pending acquisition; its answer will be ignored.
    CancelAcquisition,
    /// Return to fit-to-bounds, centered.
    FitToBounds,
    /// Gesture reported by the image pane.
    Pane(pane::Event),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run an acquisition against the image source and answer with
    /// [`Message::Acquired`] carrying the same `request`.
    Acquire {
        request: RequestId,
        source: AcquisitionSource,
    },
    /// A new image is displayed; the host may keep it for bookkeeping.
    ImageLoaded(ImageData),
    /// Show a non-fatal notice to the user.
    Notify(Notification),
}

/// Display phase of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loaded,
}

/// Complete viewer state.
#[derive(Debug, Clone, Default)]
pub struct State {
    image: Option<ImageData>,
    handle: Option<Handle>,
    viewport: ViewportState,
    drag: DragState,
    requests: RequestTracker,
    pending_source: Option<AcquisitionSource>,
}

impl State {
    #[must_use]
    pub fn new(max_zoom: ZoomMultiple) -> Self {
        Self {
            viewport: ViewportState::new(max_zoom),
            ..Self::default()
        }
    }

    /// Replaces the displayed image and resets the viewport to fit, centered.
    ///
    /// `None` or a zero-sized image empties the viewer.
    pub fn load_image(&mut self, image: Option<ImageData>) {
        let image = image.filter(|image| !image.is_empty());
        self.handle = image.as_ref().map(image_handle::to_handle);
        self.viewport.reset(
            image
                .as_ref()
                .map(|image| Size::new(image.width() as f32, image.height() as f32)),
        );
        self.drag.stop();
        self.image = image;
    }

    /// Issues a new acquisition request, superseding any pending one.
    pub fn request_acquisition(&mut self, source: AcquisitionSource) -> Effect {
        let request = self.requests.issue();
        self.pending_source = Some(source);
        log::debug!("Viewer acquisition {request} from {}", source.label());
        Effect::Acquire { request, source }
    }

    /// Invalidates the pending acquisition, if any.
    pub fn cancel_acquisition(&mut self) {
        if let Some(request) = self.requests.cancel() {
            log::debug!("Viewer acquisition {request} cancelled");
        }
        self.pending_source = None;
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::RequestAcquisition(source) => self.request_acquisition(source),
            Message::Acquired {
                request,
                source,
                result,
            } => self.on_acquired(request, source, result),
            Message::CancelAcquisition => {
                self.cancel_acquisition();
                Effect::None
            }
            Message::FitToBounds => {
                self.viewport.fit();
                Effect::None
            }
            Message::Pane(event) => {
                self.handle_pane(event);
                Effect::None
            }
        }
    }

    fn on_acquired(
        &mut self,
        request: RequestId,
        source: AcquisitionSource,
        result: Result<ImageData, SourceError>,
    ) -> Effect {
        if !self.requests.complete(request) {
            return Effect::None;
        }
        self.pending_source = None;

        match result {
            Ok(image) => {
                log::info!(
                    "Loaded {}x{} image from {}",
                    image.width(),
                    image.height(),
                    source.label()
                );
                self.load_image(Some(image.clone()));
                Effect::ImageLoaded(image)
            }
            Err(err) if err.is_cancellation() => Effect::None,
            Err(err @ SourceError::AccessDenied(_)) => Effect::Notify(Notification::error(
                format!("No access to the {}: {err}", source.label()),
            )),
            Err(err) => Effect::Notify(Notification::warning(format!(
                "Could not get an image from the {}: {err}",
                source.label()
            ))),
        }
    }

    fn handle_pane(&mut self, event: pane::Event) {
        match event {
            pane::Event::Resized(size) => self.viewport.set_bounds(size),
            pane::Event::DragStarted(position) => {
                self.drag.start(position, self.viewport.offset());
            }
            pane::Event::DragMoved(position) => {
                if let Some(offset) = self.drag.calculate_offset(position) {
                    self.viewport.set_offset(offset);
                }
            }
            pane::Event::DragEnded => self.drag.stop(),
            pane::Event::Zoomed { factor, anchor } => {
                // A drag anchored at the old scale would jump after zooming.
                self.drag.stop();
                self.viewport.zoom_at(factor, anchor);
            }
            pane::Event::DoubleTapped(anchor) => {
                self.drag.stop();
                self.viewport.toggle_zoom_at(anchor);
            }
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.image.is_some() {
            Phase::Loaded
        } else {
            Phase::Empty
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns whether an acquisition is in flight.
    #[must_use]
    pub fn is_acquiring(&self) -> bool {
        self.requests.is_pending()
    }

    /// Request whose answer the viewer is waiting for.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.requests.pending()
    }

    /// Source of the pending acquisition, if any.
    #[must_use]
    pub fn pending_source(&self) -> Option<AcquisitionSource> {
        self.pending_source
    }
}
