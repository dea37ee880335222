// SPDX-License-Identifier: MPL-2.0
//! Errors raised while reading and writing the settings file.
//!
//! Image provider failures are not reported here; they use
//! [`crate::application::port::SourceError`].

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid settings file: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("settings could not be encoded: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl Error {
    /// Adapter for `map_err` that tags an I/O failure with its path.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path) -> impl FnOnce(toml::de::Error) -> Self + '_ {
        move |source| Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_error_names_the_path() {
        let err = Error::io(Path::new("/etc/picker.toml"))(std::io::Error::other("denied"));
        let text = err.to_string();
        assert!(text.contains("/etc/picker.toml"), "{text}");
        assert!(text.contains("denied"), "{text}");
        assert!(err.source().is_some());
    }

    #[test]
    fn parse_error_keeps_toml_cause() {
        let cause = toml::from_str::<toml::Table>("max_selectable = = 3").unwrap_err();
        let err = Error::parse(Path::new("settings.toml"))(cause);
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("settings.toml is not a valid settings file"));
    }
}
