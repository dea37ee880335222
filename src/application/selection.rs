// SPDX-License-Identifier: MPL-2.0
//! Resolution of a committed selection.
//!
//! The picker hands over the selected identifiers in library order; this
//! use case resolves each one through the [`ImageSource`] and reports the
//! per-identifier outcome. Policy (skip failures) stays with the picker.

use crate::application::port::{ImageSource, SourceError};
use crate::domain::{ImageData, ImageId};

/// Outcome of resolving one selected identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub id: ImageId,
    pub result: Result<ImageData, SourceError>,
}

/// Resolves `ids` one after another, preserving their order.
///
/// A failure for one identifier does not stop the others.
pub fn resolve_in_order(source: &dyn ImageSource, ids: &[ImageId]) -> Vec<Resolution> {
    ids.iter()
        .map(|id| Resolution {
            id: id.clone(),
            result: source.resolve(id),
        })
        .collect()
}
