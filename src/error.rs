//! Error type shared by every preview builder.
//!
//! One enum covers the whole build path. The two domain kinds mirror the
//! failure modes a dispatch layer cares about: a builder whose external
//! tool is missing ([`PreviewError::DependencyNotFound`]) and a tool that
//! ran but could not produce the intermediate file
//! ([`PreviewError::IntermediateBuildFailed`]). Everything else is
//! propagation: I/O errors and version-string parse failures pass through
//! untranslated.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    /// The external executable a builder requires is not on the search
    /// path. Raised by `check_dependencies`, not by the build operation.
    #[error("this builder requires {executable} to be available")]
    DependencyNotFound { executable: String },

    /// The external tool ran but exited nonzero while producing the
    /// intermediate raster file. Carries the tool's exit status.
    #[error("building PNG intermediate file failed with {status}")]
    IntermediateBuildFailed { status: ExitStatus },

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// No builder supports the given input file.
    #[error("no preview builder supports {0}")]
    UnsupportedInput(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Version(#[from] std::num::ParseFloatError),
}

impl PreviewError {
    /// Exit code of a failed intermediate build, if the tool exited
    /// normally (rather than dying to a signal).
    pub fn intermediate_exit_code(&self) -> Option<i32> {
        match self {
            PreviewError::IntermediateBuildFailed { status } => status.code(),
            _ => None,
        }
    }
}
