use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use svg_preview::{
    ImgDims, InkscapePreviewBuilder, PreviewBuilder, PreviewError, PreviewParams,
    RasterPreviewBuilder,
};

#[derive(Parser)]
#[command(name = "svg-preview")]
#[command(about = "Generate JPEG previews from SVG (via Inkscape) and raster images")]
#[command(long_about = "\
Generate JPEG previews from SVG and raster images.

SVG files are rasterized through the Inkscape CLI and then resized/encoded
in-process; raster files (PNG, JPEG, WebP, ...) skip straight to the
resize/encode step. Run 'svg-preview check' to verify Inkscape is installed.

Set INKSCAPE_VERSION (default 1.0) if your Inkscape predates the 1.0 CLI:
the 0.9x series uses different export flags.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a JPEG preview for an image file
    Build {
        /// Source image (SVG or raster)
        file: PathBuf,

        /// Directory the preview is written into
        #[arg(long, default_value = "previews")]
        out_dir: PathBuf,

        /// Output file stem; defaults to the source file stem
        #[arg(long)]
        name: Option<String>,

        /// Preview width in pixels
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Preview height in pixels
        #[arg(long, requires = "width")]
        height: Option<u32>,

        /// Page to render for multi-page sources
        #[arg(long, default_value_t = -1)]
        page: i32,
    },
    /// Verify external dependencies and report their versions
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            file,
            out_dir,
            name,
            width,
            height,
            page,
        } => {
            let mimetype =
                mimetype_for(&file).ok_or_else(|| PreviewError::UnsupportedInput(file.clone()))?;

            // Environment read happens here, once; builders get values
            let builders: Vec<Box<dyn PreviewBuilder>> = vec![
                Box::new(InkscapePreviewBuilder::from_env()?),
                Box::new(RasterPreviewBuilder::new()),
            ];
            let builder = builders
                .iter()
                .filter(|b| b.supported_mimetypes().contains(&mimetype))
                .max_by_key(|b| b.weight())
                .ok_or_else(|| PreviewError::UnsupportedInput(file.clone()))?;

            let stem = name.unwrap_or_else(|| {
                file.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "preview".to_string())
            });
            let mut params = PreviewParams::new(stem, out_dir);
            params.page_id = page;
            params.mimetype = mimetype.to_string();
            if let (Some(w), Some(h)) = (width, height) {
                params.size = Some(ImgDims::new(w, h));
            }

            let output = builder.build_jpeg_preview(&file, &params)?;
            println!("{}", output.display());
        }
        Command::Check => {
            let builders: Vec<Box<dyn PreviewBuilder>> = vec![
                Box::new(InkscapePreviewBuilder::from_env()?),
                Box::new(RasterPreviewBuilder::new()),
            ];

            let mut missing = false;
            for builder in &builders {
                match builder.check_dependencies() {
                    Ok(()) => {
                        let versions = builder
                            .dependencies_versions()
                            .unwrap_or_else(|e| format!("version query failed: {e}"));
                        println!("ok       {} — {}", builder.label(), versions);
                    }
                    Err(e) => {
                        missing = true;
                        println!("missing  {} — {}", builder.label(), e);
                    }
                }
            }
            if missing {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Map a file extension to the MIME type used for builder selection.
fn mimetype_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    Some(match ext.as_str() {
        "svg" | "svgz" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        _ => return None,
    })
}
