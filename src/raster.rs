//! Raster preview builder — pure Rust, zero external dependencies.
//!
//! Terminal strategy of the preview pipeline: takes a raster source (PNG,
//! JPEG, WebP, ...), fit-resizes it to the requested dimensions, and
//! encodes the JPEG preview into the cache directory. Adapters that first
//! rasterize another format (see
//! [`InkscapePreviewBuilder`](crate::inkscape::InkscapePreviewBuilder))
//! delegate their intermediate file here.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode | `image` crate (pure Rust decoders) |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Alpha flattening | per-pixel blend onto white (JPEG has no alpha) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use crate::builder::{PreviewBuilder, PreviewParams};
use crate::dims::{ImgDims, fit_within};
use crate::error::PreviewError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// JPEG encoding quality for previews.
const JPEG_QUALITY: u8 = 85;

const SUPPORTED_MIMETYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/tiff",
    "image/bmp",
];

/// Pure Rust raster-to-JPEG preview builder.
pub struct RasterPreviewBuilder;

impl RasterPreviewBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterPreviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode a raster image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, PreviewError> {
    image::ImageReader::open(path)
        .map_err(PreviewError::Io)?
        .decode()
        .map_err(|e| PreviewError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Flatten transparency onto a white background.
///
/// JPEG cannot carry an alpha channel, and `to_rgb8` would blend
/// transparent regions to black. Previews follow the lightbox convention:
/// white.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        out.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}

impl PreviewBuilder for RasterPreviewBuilder {
    fn label(&self) -> &'static str {
        "Raster images - pure Rust"
    }

    fn supported_mimetypes(&self) -> &'static [&'static str] {
        SUPPORTED_MIMETYPES
    }

    fn weight(&self) -> u32 {
        50
    }

    fn check_dependencies(&self) -> Result<(), PreviewError> {
        // Decoders and encoder are statically linked
        Ok(())
    }

    fn dependencies_versions(&self) -> Result<String, PreviewError> {
        Ok("image crate (pure Rust, statically linked)".to_string())
    }

    fn build_jpeg_preview(
        &self,
        file_path: &Path,
        params: &PreviewParams,
    ) -> Result<PathBuf, PreviewError> {
        let size = params.size.unwrap_or_default();

        let img = load_image(file_path)?;
        let flat = flatten_onto_white(&img);

        let ImgDims { width, height } = fit_within(flat.dimensions(), size);
        let resized = image::imageops::resize(&flat, width, height, FilterType::Lanczos3);

        std::fs::create_dir_all(&params.cache_path)?;
        let output_path = params
            .cache_path
            .join(format!("{}{}", params.preview_name, params.extension));

        let file = File::create(&output_path)?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
        resized
            .write_with_encoder(encoder)
            .map_err(|e| PreviewError::Encode {
                path: output_path.clone(),
                message: e.to_string(),
            })?;

        Ok(output_path)
    }
}
