//! # svg-preview
//!
//! JPEG preview generation for SVG files. Rasterization is delegated to
//! the Inkscape CLI; the resulting PNG intermediate is fit-resized and
//! encoded by a pure-Rust raster builder. Both halves implement the same
//! [`PreviewBuilder`] trait, so a dispatch layer can treat them (and any
//! future format strategies) interchangeably, keyed on MIME type and
//! priority weight.
//!
//! # Architecture: Adapter Over an External Tool
//!
//! ```text
//! input.svg --inkscape--> scoped tmp .png --image crate--> cache/preview.jpg
//!            (subprocess)  (RAII, always    (fit-resize,
//!                           removed)         JPEG encode)
//! ```
//!
//! The crate deliberately contains no SVG rendering logic. Inkscape owns
//! that; this code owns configuration resolution (which CLI flag set the
//! installed Inkscape release understands), subprocess invocation and exit
//! status translation, the lifetime of the intermediate file, and the
//! delegation handoff.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`builder`] | [`PreviewBuilder`] trait + [`PreviewParams`] — the strategy seam |
//! | [`inkscape`] | SVG adapter: version→flags resolution, command assembly, subprocess run |
//! | [`raster`] | Terminal raster→JPEG builder (decode, flatten, resize, encode) |
//! | [`dims`] | [`ImgDims`] and pure fit-within-bounds math |
//! | [`error`] | [`PreviewError`] — the two domain failure kinds plus propagation |
//!
//! # Design Decisions
//!
//! ## Explicit Version Injection
//!
//! Inkscape 0.9x and 1.x disagree on export flags. The installed version
//! is read from `INKSCAPE_VERSION` exactly once, at the composition
//! boundary ([`inkscape::get_inkscape_version`]), and passed into
//! [`InkscapePreviewBuilder::new`]. Option-set selection and command
//! assembly are pure functions over that value.
//!
//! ## Scoped Intermediate File
//!
//! The PNG handed between the two builders is a `tempfile::NamedTempFile`:
//! removed on drop whether the build succeeds, the tool exits nonzero, or
//! an error propagates mid-way. No partial output survives a failed call.
//!
//! ## Dependency Checks Are Eager, Not Inline
//!
//! [`PreviewBuilder::check_dependencies`] is the only place a missing
//! executable becomes [`PreviewError::DependencyNotFound`]. The build path
//! does not re-check; callers that skip the check get the raw spawn error.

pub mod builder;
pub mod dims;
pub mod error;
pub mod inkscape;
pub mod raster;

pub use builder::{PreviewBuilder, PreviewParams};
pub use dims::ImgDims;
pub use error::PreviewError;
pub use inkscape::InkscapePreviewBuilder;
pub use raster::RasterPreviewBuilder;
