// SPDX-License-Identifier: MPL-2.0
//! Background work against the image source.
//!
//! Every provider call runs off the update loop: blocking file I/O and
//! decoding on tokio's blocking pool, the library chooser through `rfd`.
//! Each task answers with a component message carrying the request id it was
//! started for, so components can drop stale answers.

use super::Message;
use crate::application::port::{AcquisitionSource, ImageSource, SourceError};
use crate::application::{resolve_in_order, RequestId};
use crate::domain::{ImageData, ImageId};
use crate::infrastructure::filesystem::IMAGE_EXTENSIONS;
use crate::ui::{picker, viewer};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

pub type SharedSource = Arc<dyn ImageSource>;

/// Runs a blocking provider call on the blocking pool.
async fn run_blocking<T, F>(call: F) -> Result<T, SourceError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, SourceError> + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .unwrap_or_else(|err| Err(SourceError::Io(err.to_string())))
}

fn acquired(
    request: RequestId,
    source: AcquisitionSource,
) -> impl Fn(Result<ImageData, SourceError>) -> Message {
    move |result| {
        Message::Viewer(viewer::Message::Acquired {
            request,
            source,
            result,
        })
    }
}

/// Starts the acquisition the viewer asked for.
///
/// The library flow lets the user pick one file from `library_dir`; closing
/// the chooser answers with [`SourceError::Cancelled`].
pub fn acquire(
    image_source: SharedSource,
    library_dir: Option<PathBuf>,
    request: RequestId,
    source: AcquisitionSource,
) -> Task<Message> {
    match source {
        AcquisitionSource::Camera => Task::perform(
            async move { run_blocking(move || image_source.capture()).await },
            acquired(request, source),
        ),
        AcquisitionSource::Library => Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Choose an image")
                    .add_filter("Images", IMAGE_EXTENSIONS);

                if let Some(dir) = library_dir.filter(|dir| dir.exists()) {
                    dialog = dialog.set_directory(&dir);
                }

                let Some(file) = dialog.pick_file().await else {
                    return Err(SourceError::Cancelled);
                };
                let id = ImageId::from(file.path());
                run_blocking(move || image_source.resolve(&id)).await
            },
            acquired(request, source),
        ),
    }
}

/// Resolves a known image id for the viewer (start-up path, chosen strip).
pub fn open(image_source: SharedSource, request: RequestId, id: ImageId) -> Task<Message> {
    Task::perform(
        async move { run_blocking(move || image_source.resolve(&id)).await },
        acquired(request, AcquisitionSource::Library),
    )
}

/// Lists the library for the picker.
pub fn enumerate(image_source: SharedSource, request: RequestId) -> Task<Message> {
    Task::perform(
        async move { run_blocking(move || image_source.enumerate_library()).await },
        move |result| Message::Picker(picker::Message::Enumerated { request, result }),
    )
}

/// Resolves the picker's committed selection, keeping its order.
pub fn resolve(image_source: SharedSource, request: RequestId, ids: Vec<ImageId>) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || resolve_in_order(image_source.as_ref(), &ids))
                .await
                .unwrap_or_else(|err| {
                    log::error!("Resolution task failed: {err}");
                    Vec::new()
                })
        },
        move |results| Message::Picker(picker::Message::Resolved { request, results }),
    )
}
