//! Preview builder trait and shared parameter types.
//!
//! The [`PreviewBuilder`] trait is the seam between the (out-of-scope)
//! dispatch layer and the individual conversion strategies. Every builder
//! exposes the same descriptor surface — label, supported MIME types,
//! weight, dependency check — plus the one build operation, so a registry
//! can select builders interchangeably for a given input MIME type.
//!
//! Two implementations live in this crate:
//! [`RasterPreviewBuilder`](crate::raster::RasterPreviewBuilder) (pure
//! Rust, terminal) and
//! [`InkscapePreviewBuilder`](crate::inkscape::InkscapePreviewBuilder)
//! (external tool, delegates to the raster builder).

use crate::dims::ImgDims;
use crate::error::PreviewError;
use std::path::{Path, PathBuf};

/// Everything a build operation needs besides the source file itself.
///
/// These travel unchanged through delegation: an adapter that produces an
/// intermediate file hands the same params to its delegate so the final
/// artifact lands where the original caller asked.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewParams {
    /// Stem of the output file, without extension.
    pub preview_name: String,
    /// Directory the final preview is written into.
    pub cache_path: PathBuf,
    /// Page to render for multi-page sources. Raster builders ignore it.
    pub page_id: i32,
    /// Output extension, `.jpg` by default.
    pub extension: String,
    /// Requested dimensions; `None` means the builder's default size.
    pub size: Option<ImgDims>,
    /// MIME type of the source, advisory only.
    pub mimetype: String,
}

impl PreviewParams {
    pub fn new(preview_name: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            preview_name: preview_name.into(),
            cache_path: cache_path.into(),
            page_id: -1,
            extension: ".jpg".to_string(),
            size: None,
            mimetype: String::new(),
        }
    }
}

/// A strategy that converts one input format into a JPEG preview.
///
/// The descriptor methods take `&self` so builders stay object-safe and a
/// dispatch layer can hold them as trait objects keyed by MIME type.
pub trait PreviewBuilder: Sync {
    /// Human-readable builder name for capability listings.
    fn label(&self) -> &'static str;

    /// MIME types this builder accepts as input.
    fn supported_mimetypes(&self) -> &'static [&'static str];

    /// Priority weight when several builders claim the same MIME type.
    /// Higher wins.
    fn weight(&self) -> u32;

    /// Verify the builder's external dependencies are available.
    ///
    /// Fails with [`PreviewError::DependencyNotFound`] when an executable
    /// is missing. Builders with no external dependencies succeed
    /// unconditionally. The build operation does not re-run this check.
    fn check_dependencies(&self) -> Result<(), PreviewError>;

    /// Human-readable version string for the builder's dependencies.
    fn dependencies_versions(&self) -> Result<String, PreviewError>;

    /// Build a JPEG preview of `file_path` into
    /// `params.cache_path/params.preview_name + params.extension`.
    ///
    /// Returns the path of the written preview.
    fn build_jpeg_preview(
        &self,
        file_path: &Path,
        params: &PreviewParams,
    ) -> Result<PathBuf, PreviewError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock builder that records build calls without executing them.
    /// Uses Mutex (not RefCell) so it stays Sync like real builders.
    #[derive(Default)]
    pub struct MockBuilder {
        pub calls: Mutex<Vec<RecordedBuild>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedBuild {
        pub file_path: PathBuf,
        pub params: PreviewParams,
    }

    impl MockBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get_calls(&self) -> Vec<RecordedBuild> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PreviewBuilder for MockBuilder {
        fn label(&self) -> &'static str {
            "Mock builder"
        }

        fn supported_mimetypes(&self) -> &'static [&'static str] {
            &["image/png"]
        }

        fn weight(&self) -> u32 {
            0
        }

        fn check_dependencies(&self) -> Result<(), PreviewError> {
            Ok(())
        }

        fn dependencies_versions(&self) -> Result<String, PreviewError> {
            Ok("mock".to_string())
        }

        fn build_jpeg_preview(
            &self,
            file_path: &Path,
            params: &PreviewParams,
        ) -> Result<PathBuf, PreviewError> {
            self.calls.lock().unwrap().push(RecordedBuild {
                file_path: file_path.to_path_buf(),
                params: params.clone(),
            });
            Ok(params
                .cache_path
                .join(format!("{}{}", params.preview_name, params.extension)))
        }
    }

    #[test]
    fn params_defaults() {
        let params = PreviewParams::new("preview", "/cache");
        assert_eq!(params.extension, ".jpg");
        assert_eq!(params.page_id, -1);
        assert_eq!(params.size, None);
        assert_eq!(params.mimetype, "");
    }

    #[test]
    fn mock_records_build_calls() {
        let mock = MockBuilder::new();
        let params = PreviewParams::new("p", "/cache");

        let out = mock
            .build_jpeg_preview(Path::new("/tmp/in.png"), &params)
            .unwrap();

        assert_eq!(out, PathBuf::from("/cache/p.jpg"));
        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].file_path, PathBuf::from("/tmp/in.png"));
        assert_eq!(calls[0].params, params);
    }
}
