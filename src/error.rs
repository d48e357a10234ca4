//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! A controller that never clears BUSY is not an error at this layer: the
//! default busy-wait blocks until it does. Opt into a bound with
//! [`Interface::set_busy_timeout`](crate::Interface::set_busy_timeout).
//!
//! ## Example
//!
//! ```
//! use e0213a367::{Builder, BuilderError, Target};
//!
//! // Missing target
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingTarget)));
//!
//! // Fast mode is not available on this panel
//! let result = Builder::new().target(Target::WirelessPaper).fast_mode(true).build();
//! assert!(result.is_err());
//! ```

use crate::config::Target;
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Fast mode was requested on a target that does not support it
    FastModeUnsupported,
    /// Pixel buffer is smaller than the addressed window
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::FastModeUnsupported => write!(f, "Fast mode not supported on this target"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Target was not specified
    ///
    /// [`Builder::target()`](crate::config::Builder::target) must be called before building.
    MissingTarget,
    /// Fast mode was requested but the target lacks the capability
    FastModeUnsupported {
        /// Target that rejected the request
        target: Target,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "Target must be specified"),
            Self::FastModeUnsupported { target } => {
                write!(f, "Fast mode is not supported on {target:?}")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
