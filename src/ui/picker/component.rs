// SPDX-License-Identifier: MPL-2.0
//! Picker component encapsulating selection state and update logic.
//!
//! Candidates live in one `Vec` in library order and are addressed by index.
//! Enumeration and resolution go through the host as [`Effect`]s tagged with
//! a [`RequestId`]; stale answers are dropped.

use crate::application::port::SourceError;
use crate::application::{RequestId, RequestTracker, Resolution};
use crate::domain::{ImageData, ImageId, LibraryEntry};
use crate::ui::image_handle;
use crate::ui::notifications::Notification;
use iced::widget::image::Handle;
use std::collections::HashMap;
use thiserror::Error;

/// Host-provided picker settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerConfig {
    /// Upper bound on the number of selected images. `None` is unbounded.
    pub max_selectable: Option<usize>,
}

/// Errors reported by selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can select up to {max} images")]
    LimitExceeded { max: usize },
}

/// One library image offered for selection.
#[derive(Debug, Clone)]
pub struct CandidateImage {
    id: ImageId,
    thumbnail: ImageData,
    handle: Handle,
    selected: bool,
}

impl CandidateImage {
    fn from_entry(entry: LibraryEntry) -> Self {
        Self {
            handle: image_handle::to_handle(&entry.thumbnail),
            id: entry.id,
            thumbnail: entry.thumbnail,
            selected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn thumbnail(&self) -> &ImageData {
        &self.thumbnail
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Lifecycle of the picker flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Not initialized yet.
    #[default]
    Idle,
    /// Waiting for the library listing.
    Loading,
    /// Candidates are listed and selectable.
    Ready,
    /// The listing failed; candidates are empty.
    Failed(SourceError),
    /// Waiting for the selected images to resolve.
    Finalizing,
    /// Chosen images were handed over.
    Finished,
    /// The user abandoned the flow.
    Cancelled,
}

/// Messages emitted by the picker views or fed back by the host.
#[derive(Debug, Clone)]
pub enum Message {
    /// (Re)load the library listing.
    Initialize,
    /// Library listing for a previously issued request.
    Enumerated {
        request: RequestId,
        result: Result<Vec<LibraryEntry>, SourceError>,
    },
    /// Flip the selection of the candidate at this library position.
    Toggle(usize),
    /// Commit the selection.
    Finalize,
    /// Per-identifier resolution outcomes for a finalize request.
    Resolved {
        request: RequestId,
        results: Vec<Resolution>,
    },
    /// Abandon the flow.
    Cancel,
}

/// Side effects the application should perform after handling a picker message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// List the library and answer with [`Message::Enumerated`].
    Enumerate { request: RequestId },
    /// Resolve `ids` in order and answer with [`Message::Resolved`].
    Resolve { request: RequestId, ids: Vec<ImageId> },
    /// The flow finished with these images, in library order.
    Chosen(Vec<ImageData>),
    /// The flow was cancelled; nothing was chosen.
    Cancelled,
    /// Show a non-fatal notice to the user.
    Notify(Notification),
}

/// Complete picker state.
#[derive(Debug, Clone, Default)]
pub struct State {
    config: PickerConfig,
    candidates: Vec<CandidateImage>,
    status: Status,
    requests: RequestTracker,
}

impl State {
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Requests a fresh library listing. Previous candidates are dropped.
    pub fn initialize(&mut self) -> Effect {
        let request = self.requests.issue();
        self.candidates.clear();
        self.status = Status::Loading;
        log::debug!("Picker enumeration {request}");
        Effect::Enumerate { request }
    }

    /// Flips the selection flag at `index`.
    ///
    /// Unknown indices are ignored. Selecting beyond `max_selectable` is
    /// rejected; deselecting always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::LimitExceeded`] when the toggle would select
    /// more images than allowed. The selection is left unchanged.
    pub fn toggle_selection(&mut self, index: usize) -> Result<(), SelectionError> {
        let selected_count = self.selected_count();
        let Some(candidate) = self.candidates.get_mut(index) else {
            return Ok(());
        };

        if !candidate.selected {
            if let Some(max) = self.config.max_selectable {
                if selected_count >= max {
                    return Err(SelectionError::LimitExceeded { max });
                }
            }
        }

        candidate.selected = !candidate.selected;
        Ok(())
    }

    /// Flips the selection flag of the candidate named `id`.
    ///
    /// # Errors
    ///
    /// Same as [`State::toggle_selection`].
    pub fn toggle_selection_by_id(&mut self, id: &ImageId) -> Result<(), SelectionError> {
        match self.position_of(id) {
            Some(index) => self.toggle_selection(index),
            None => Ok(()),
        }
    }

    /// Commits the current selection and asks the host to resolve it.
    ///
    /// With nothing selected the flow finishes at once with no images.
    pub fn finalize(&mut self) -> Effect {
        let ids = self.selected_ids();
        if ids.is_empty() {
            self.requests.cancel();
            self.status = Status::Finished;
            log::info!("Picker finished with no selection");
            return Effect::Chosen(Vec::new());
        }

        let request = self.requests.issue();
        self.status = Status::Finalizing;
        log::debug!("Picker resolution {request} for {} images", ids.len());
        Effect::Resolve { request, ids }
    }

    /// Discards all selection state and ends the flow without a result.
    pub fn cancel(&mut self) -> Effect {
        if let Some(request) = self.requests.cancel() {
            log::debug!("Picker request {request} cancelled");
        }
        for candidate in &mut self.candidates {
            candidate.selected = false;
        }
        self.status = Status::Cancelled;
        Effect::Cancelled
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Initialize => self.initialize(),
            Message::Enumerated { request, result } => self.on_enumerated(request, result),
            Message::Toggle(index) => match self.toggle_selection(index) {
                Ok(()) => Effect::None,
                Err(err) => Effect::Notify(Notification::warning(err.to_string())),
            },
            Message::Finalize => self.finalize(),
            Message::Resolved { request, results } => self.on_resolved(request, results),
            Message::Cancel => self.cancel(),
        }
    }

    fn on_enumerated(
        &mut self,
        request: RequestId,
        result: Result<Vec<LibraryEntry>, SourceError>,
    ) -> Effect {
        if !self.requests.complete(request) {
            return Effect::None;
        }

        match result {
            Ok(entries) => {
                log::info!("Picker listed {} library images", entries.len());
                self.candidates = entries.into_iter().map(CandidateImage::from_entry).collect();
                self.status = Status::Ready;
                Effect::None
            }
            Err(err) => {
                log::error!("Library enumeration failed: {err}");
                self.candidates.clear();
                let message = if err.is_access_denied() {
                    format!("No access to the photo library: {err}")
                } else {
                    format!("Could not list the photo library: {err}")
                };
                self.status = Status::Failed(err);
                Effect::Notify(Notification::error(message))
            }
        }
    }

    fn on_resolved(&mut self, request: RequestId, results: Vec<Resolution>) -> Effect {
        if !self.requests.complete(request) {
            return Effect::None;
        }

        let positions: HashMap<&ImageId, usize> = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| (&candidate.id, index))
            .collect();

        let mut resolved: Vec<(usize, ImageData)> = results
            .into_iter()
            .filter_map(|Resolution { id, result }| match result {
                Ok(image) => Some((positions.get(&id).copied().unwrap_or(usize::MAX), image)),
                Err(err) => {
                    log::warn!("Dropping {id} from the chosen images: {err}");
                    None
                }
            })
            .collect();
        resolved.sort_by_key(|(position, _)| *position);

        let chosen: Vec<ImageData> = resolved.into_iter().map(|(_, image)| image).collect();
        log::info!("Picker finished with {} images", chosen.len());
        self.status = Status::Finished;
        Effect::Chosen(chosen)
    }

    #[must_use]
    pub fn candidates(&self) -> &[CandidateImage] {
        &self.candidates
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn config(&self) -> PickerConfig {
        self.config
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.selected).count()
    }

    /// Identifiers of the selected candidates, in library order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ImageId> {
        self.candidates
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id.clone())
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.candidates.get(index).is_some_and(|c| c.selected)
    }

    /// Returns whether another unselected candidate may still be selected.
    #[must_use]
    pub fn can_select_more(&self) -> bool {
        self.config
            .max_selectable
            .is_none_or(|max| self.selected_count() < max)
    }

    /// Returns whether a listing or resolution is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.requests.is_pending()
    }

    /// Request whose answer the picker is waiting for.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.requests.pending()
    }

    fn position_of(&self, id: &ImageId) -> Option<usize> {
        self.candidates.iter().position(|c| &c.id == id)
    }
}
