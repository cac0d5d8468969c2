//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the glimpse crate.
#[derive(Debug)]
pub enum GlimpseError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An image source could not be decoded.
    ImageDecode {
        /// Slot index of the image that failed.
        index: usize,
        /// Decoder message.
        message: String,
    },
    /// A required host element (container, link) was not found.
    MissingElement(String),
    /// A JavaScript call failed in the browser host.
    Js(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GlimpseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ImageDecode { index, message } => {
                write!(f, "image {index} could not be decoded: {message}")
            }
            Self::MissingElement(what) => {
                write!(f, "required element not found: {what}")
            }
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlimpseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GlimpseError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GlimpseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_names_the_failed_slot() {
        let err = GlimpseError::ImageDecode {
            index: 2,
            message: "bad header".to_owned(),
        };
        assert_eq!(err.to_string(), "image 2 could not be decoded: bad header");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: GlimpseError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(GlimpseError::MissingElement("main".to_owned())
            .source()
            .is_none());
    }
}
