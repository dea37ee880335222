// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`request`]: Request-generation tracking for asynchronous provider calls
//! - [`selection`]: Materialising a committed selection through the source
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_picker::application::RequestTracker;
//!
//! let mut tracker = RequestTracker::new();
//! let camera = tracker.issue();
//! let library = tracker.issue();
//!
//! // The camera answer arrives late and is ignored.
//! assert!(tracker.complete(library));
//! assert!(!tracker.complete(camera));
//! ```

pub mod port;
pub mod request;
pub mod selection;

pub use request::{RequestId, RequestTracker};
pub use selection::{resolve_in_order, Resolution};
