//! Vector preview builder — rasterizes SVG through the Inkscape CLI.
//!
//! Inkscape does the hard part (SVG rendering); this module only assembles
//! the invocation, runs it, and hands the intermediate PNG to the raster
//! builder for the final fit-resize and JPEG encode. The intermediate file
//! is a named temp file owned by the build call and removed on every exit
//! path, including tool failure.
//!
//! Inkscape changed its export flags in 1.0: the 0.9x series used `-e` for
//! PNG output, 1.x uses `--export-type=png -o`. Which set to use is
//! decided by a version value resolved once at the composition boundary
//! (`INKSCAPE_VERSION` env var, default `1.0`) and injected into the
//! builder, so option selection itself stays pure and testable.

use crate::builder::{PreviewBuilder, PreviewParams};
use crate::error::PreviewError;
use crate::raster::RasterPreviewBuilder;
use std::ffi::{OsStr, OsString};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const INKSCAPE_EXECUTABLE: &str = "inkscape";

/// Environment variable naming the installed Inkscape release.
pub const INKSCAPE_VERSION_VAR: &str = "INKSCAPE_VERSION";
pub const DEFAULT_INKSCAPE_VERSION: &str = "1.0";

/// Export options for the 0.9x series: area-cropped export, short-form
/// output flag.
pub const INKSCAPE_092_SVG_TO_PNG_OPTIONS: &[&str] = &["--export-area-drawing", "-e"];

/// Export options for 1.0 and later: explicit export type, long-form
/// output flag.
pub const INKSCAPE_100_SVG_TO_PNG_OPTIONS: &[&str] =
    &["--export-area-drawing", "--export-type=png", "-o"];

/// Parse a version value as read from the environment.
///
/// `None` (variable unset) resolves to [`DEFAULT_INKSCAPE_VERSION`].
/// Malformed values propagate the parse error untranslated.
pub fn parse_inkscape_version(raw: Option<&str>) -> Result<f32, ParseFloatError> {
    raw.unwrap_or(DEFAULT_INKSCAPE_VERSION).trim().parse()
}

/// Read the Inkscape version from the process environment.
///
/// Call this once at the composition boundary and hand the value to
/// [`InkscapePreviewBuilder::new`]; everything downstream is pure.
pub fn get_inkscape_version() -> Result<f32, ParseFloatError> {
    parse_inkscape_version(std::env::var(INKSCAPE_VERSION_VAR).ok().as_deref())
}

/// Select the SVG→PNG option set for an Inkscape version.
///
/// Exactly two buckets: below 1.0 is legacy, everything else (including
/// unexpected values) is modern.
pub fn get_inkscape_svg_to_png_options(version: f32) -> &'static [&'static str] {
    if version < 1.0 {
        INKSCAPE_092_SVG_TO_PNG_OPTIONS
    } else {
        INKSCAPE_100_SVG_TO_PNG_OPTIONS
    }
}

/// Assemble the rasterization argv: `[executable, input, options…, output]`.
///
/// Inkscape is sensitive to flag placement — the input path comes before
/// the options, the output path is always the final token (the `-e`/`-o`
/// flag it follows names the output file).
pub fn generate_inkscape_command(
    executable: &OsStr,
    input_path: &Path,
    output_path: &Path,
    options: &[&str],
) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(options.len() + 3);
    argv.push(executable.to_os_string());
    argv.push(input_path.into());
    argv.extend(options.iter().map(OsString::from));
    argv.push(output_path.into());
    argv
}

/// SVG preview builder backed by the Inkscape CLI.
///
/// Holds its resolved version and its raster delegate explicitly. Use
/// [`from_env`](Self::from_env) at the composition boundary, or
/// [`new`](Self::new) with an already-resolved version.
pub struct InkscapePreviewBuilder {
    version: f32,
    executable: PathBuf,
    delegate: Box<dyn PreviewBuilder>,
}

impl InkscapePreviewBuilder {
    /// Builder for a known Inkscape version, delegating to the pure-Rust
    /// raster builder.
    pub fn new(version: f32) -> Self {
        Self {
            version,
            executable: PathBuf::from(INKSCAPE_EXECUTABLE),
            delegate: Box::new(RasterPreviewBuilder::new()),
        }
    }

    /// Builder configured from `INKSCAPE_VERSION`, defaulting to 1.0.
    pub fn from_env() -> Result<Self, PreviewError> {
        Ok(Self::new(get_inkscape_version()?))
    }

    /// Override the executable path. Lets tests substitute a fake tool and
    /// deployments point at a non-PATH install.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Override the raster delegate the intermediate PNG is handed to.
    pub fn with_delegate(mut self, delegate: Box<dyn PreviewBuilder>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl Default for InkscapePreviewBuilder {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PreviewBuilder for InkscapePreviewBuilder {
    fn label(&self) -> &'static str {
        "Vector images - based on Inkscape"
    }

    fn supported_mimetypes(&self) -> &'static [&'static str] {
        &["image/svg+xml", "image/svg"]
    }

    fn weight(&self) -> u32 {
        70
    }

    fn check_dependencies(&self) -> Result<(), PreviewError> {
        which::which(&self.executable)
            .map(|_| ())
            .map_err(|_| PreviewError::DependencyNotFound {
                executable: self.executable.display().to_string(),
            })
    }

    fn dependencies_versions(&self) -> Result<String, PreviewError> {
        let resolved =
            which::which(&self.executable).map_err(|_| PreviewError::DependencyNotFound {
                executable: self.executable.display().to_string(),
            })?;
        let output = Command::new(&resolved).arg("--version").output()?;
        if !output.status.success() {
            return Err(std::io::Error::other(format!(
                "{} --version exited with {}",
                resolved.display(),
                output.status
            ))
            .into());
        }
        Ok(format!(
            "{} from {}",
            String::from_utf8_lossy(&output.stdout).trim(),
            resolved.display()
        ))
    }

    /// Rasterize the SVG to a scoped temp PNG, then delegate.
    ///
    /// The executable's presence is not re-checked here (that is
    /// `check_dependencies`' job): a missing tool surfaces as the raw
    /// spawn error. A nonzero exit is terminal for this call; retry or
    /// builder fallback is the caller's decision.
    fn build_jpeg_preview(
        &self,
        file_path: &Path,
        params: &PreviewParams,
    ) -> Result<PathBuf, PreviewError> {
        // Removed on drop — success, tool failure, or early return alike
        let tmp_png = tempfile::Builder::new()
            .prefix("svg-preview-")
            .suffix(".png")
            .tempfile()?;

        let options = get_inkscape_svg_to_png_options(self.version);
        let argv = generate_inkscape_command(
            self.executable.as_os_str(),
            file_path,
            tmp_png.path(),
            options,
        );

        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(PreviewError::IntermediateBuildFailed { status });
        }

        self.delegate.build_jpeg_preview(tmp_png.path(), params)
    }
}
