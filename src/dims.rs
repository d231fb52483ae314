//! Preview dimension types and pure fit calculations.
//!
//! All functions here are pure and testable without any I/O or images.

/// A width/height pair describing a requested or computed preview size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImgDims {
    pub width: u32,
    pub height: u32,
}

impl ImgDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for ImgDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Default for ImgDims {
    /// The preview size substituted when a caller requests none.
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

/// Calculate the largest dimensions that fit within `bounds` while
/// preserving the source aspect ratio.
///
/// One dimension matches the bound exactly, the other may fall short.
/// Upscaling is allowed: previews of tiny sources are still rendered at
/// the requested size.
///
/// # Examples
/// ```
/// # use svg_preview::dims::{ImgDims, fit_within};
/// // 800x600 source into a 256x256 box → 256x192
/// assert_eq!(
///     fit_within((800, 600), ImgDims::new(256, 256)),
///     ImgDims::new(256, 192)
/// );
/// ```
pub fn fit_within(source: (u32, u32), bounds: ImgDims) -> ImgDims {
    let (src_w, src_h) = source;
    let src_aspect = src_w as f64 / src_h as f64;

    if src_aspect > bounds.ratio() {
        // Source is wider: width matches the bound, height shrinks
        let w = bounds.width;
        let h = ((w as f64 / src_aspect).round() as u32).max(1);
        ImgDims::new(w, h)
    } else {
        // Source is taller or equal: height matches the bound
        let h = bounds.height;
        let w = ((h as f64 * src_aspect).round() as u32).max(1);
        ImgDims::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preview_size() {
        assert_eq!(ImgDims::default(), ImgDims::new(256, 256));
    }

    #[test]
    fn fit_landscape_into_square() {
        // 800x600 (4:3) → 256 box: width pinned, height 192
        assert_eq!(
            fit_within((800, 600), ImgDims::new(256, 256)),
            ImgDims::new(256, 192)
        );
    }

    #[test]
    fn fit_portrait_into_square() {
        // 600x800 (3:4) → 256 box: height pinned, width 192
        assert_eq!(
            fit_within((600, 800), ImgDims::new(256, 256)),
            ImgDims::new(192, 256)
        );
    }

    #[test]
    fn fit_same_aspect_is_exact() {
        assert_eq!(
            fit_within((1024, 768), ImgDims::new(512, 384)),
            ImgDims::new(512, 384)
        );
    }

    #[test]
    fn fit_upscales_small_source() {
        // 100x50 into 400x400 → 400x200
        assert_eq!(
            fit_within((100, 50), ImgDims::new(400, 400)),
            ImgDims::new(400, 200)
        );
    }

    #[test]
    fn fit_never_collapses_to_zero() {
        // Extreme aspect: 4000x1 into 64x64 rounds height to 1, not 0
        let dims = fit_within((4000, 1), ImgDims::new(64, 64));
        assert_eq!(dims.width, 64);
        assert_eq!(dims.height, 1);
    }

    #[test]
    fn display_formats_as_wxh() {
        assert_eq!(ImgDims::new(320, 240).to_string(), "320x240");
    }
}
