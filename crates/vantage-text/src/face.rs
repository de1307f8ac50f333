//! Font face facade over the rasterization library.
//!
//! This is the only module that talks to [`fontdue`]; everything else
//! consumes the typed surface below and never sees raw font internals.
//! One [`FontFace`] decodes one font file and rasterizes one character
//! at a time into a tightly packed single-channel coverage bitmap plus
//! metrics, which is exactly what the glyph atlas uploads to the GPU.

use std::path::Path;

use fontdue::{Font, FontSettings};
use vantage_core::math::IVec2;

use crate::error::{TextError, TextResult};

/// Default rasterization height in pixels.
pub const DEFAULT_PIXEL_SIZE: f32 = 48.0;

/// One rasterized character: coverage bitmap plus layout metrics.
///
/// Rows are tightly packed, one byte per pixel, top row first. A glyph
/// with no visible shape (e.g. the space character) has `width` and
/// `height` of zero but still carries a meaningful `advance`.
#[derive(Debug, Clone)]
pub struct RasterizedGlyph {
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// `width * height` coverage bytes, 0 = transparent, 255 = opaque.
    pub coverage: Vec<u8>,
    /// Offset from the pen origin to the bitmap's top-left corner:
    /// x is the left side bearing, y the distance from the baseline up
    /// to the top row.
    pub bearing: IVec2,
    /// Horizontal pen advance in pixels.
    pub advance: f32,
}

/// A loaded font face configured for a fixed pixel size.
#[derive(Debug)]
pub struct FontFace {
    font: Font,
    pixel_size: f32,
    family_name: Option<String>,
    style_name: Option<String>,
}

impl FontFace {
    /// Load a font face from a TrueType/OpenType file.
    ///
    /// Fails with [`TextError::FontFileNotFound`] or
    /// [`TextError::InvalidFontData`]; both are fatal to construction.
    pub fn load(path: impl AsRef<Path>) -> TextResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TextError::FontFileNotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        let mut face = Self::from_bytes(data)?;

        // The rasterization library does not expose the font's name
        // table, so family/style labels are best-effort, derived from
        // the file stem ("DejaVuSans-Bold" -> "DejaVuSans" / "Bold").
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            match stem.split_once('-') {
                Some((family, style)) => {
                    face.family_name = Some(family.to_owned());
                    face.style_name = Some(style.to_owned());
                }
                None => face.family_name = Some(stem.to_owned()),
            }
        }

        tracing::debug!(
            path = %path.display(),
            family = face.family_name.as_deref().unwrap_or("<unknown>"),
            "loaded font face"
        );
        Ok(face)
    }

    /// Parse a font face from raw font data.
    pub fn from_bytes(data: Vec<u8>) -> TextResult<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|err| TextError::InvalidFontData(err.to_string()))?;

        Ok(Self {
            font,
            pixel_size: DEFAULT_PIXEL_SIZE,
            family_name: None,
            style_name: None,
        })
    }

    /// Configure the rasterization size in pixels.
    ///
    /// Mirrors the usual width/height pair where a zero width means
    /// "derive from height"; only one dimension is meaningful since
    /// glyphs scale uniformly.
    pub fn set_pixel_size(&mut self, width: u32, height: u32) {
        let size = if height > 0 { height } else { width };
        if size > 0 {
            self.pixel_size = size as f32;
        }
    }

    /// The configured rasterization height in pixels.
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// Whether the face defines a glyph for `c`.
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    /// Rasterize one character at the configured pixel size.
    ///
    /// Returns `None` when the face does not map the character; this is
    /// the per-character, non-fatal failure mode.
    pub fn rasterize(&self, c: char) -> Option<RasterizedGlyph> {
        if !self.has_glyph(c) {
            return None;
        }

        let (metrics, coverage) = self.font.rasterize(c, self.pixel_size);

        Some(RasterizedGlyph {
            width: metrics.width as u32,
            height: metrics.height as u32,
            coverage,
            // ymin is the bitmap bottom relative to the baseline, so the
            // top bearing is height above baseline minus the descent part.
            bearing: IVec2::new(metrics.xmin, metrics.ymin + metrics.height as i32),
            advance: metrics.advance_width,
        })
    }

    /// Face ascent in pixels at the configured size.
    pub fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.pixel_size)
            .map(|m| m.ascent)
            .unwrap_or(0.0)
    }

    /// Face descent in pixels at the configured size (negative below the
    /// baseline).
    pub fn descent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.pixel_size)
            .map(|m| m.descent)
            .unwrap_or(0.0)
    }

    /// Recommended baseline-to-baseline distance in pixels.
    pub fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.pixel_size)
            .map(|m| m.new_line_size)
            .unwrap_or(self.pixel_size)
    }

    /// Whether the face carries scalable outlines. Always true for the
    /// formats the rasterizer accepts.
    pub fn is_scalable(&self) -> bool {
        true
    }

    /// Whether the face carries fixed-size bitmap strikes. The
    /// rasterizer only loads outline fonts, so this is always false.
    pub fn has_fixed_sizes(&self) -> bool {
        false
    }

    /// Whether the face carries color glyph data. Not supported by the
    /// rasterizer, so always false.
    pub fn has_color(&self) -> bool {
        false
    }

    /// Whether the face defines kerning, probed via a common pair.
    pub fn has_kerning(&self) -> bool {
        self.font
            .horizontal_kern('A', 'V', self.pixel_size)
            .is_some()
    }

    /// Best-effort family name (see [`FontFace::load`]).
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Best-effort style name (see [`FontFace::load`]).
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Locate a usable TrueType font on the host, or `None` on machines
    /// without one (tests that need a real font skip themselves then).
    fn find_system_font() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ];
        CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    #[test]
    fn missing_file_is_font_file_not_found() {
        let err = FontFace::load("/definitely/not/here.ttf").unwrap_err();
        assert!(matches!(err, TextError::FontFileNotFound(_)));
    }

    #[test]
    fn garbage_data_is_invalid_font_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();

        let err = FontFace::load(file.path()).unwrap_err();
        assert!(matches!(err, TextError::InvalidFontData(_)));
    }

    #[test]
    fn rasterizes_visible_glyph_with_coverage() {
        let Some(path) = find_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let face = FontFace::load(path).unwrap();

        let glyph = face.rasterize('A').expect("face should map 'A'");
        assert!(glyph.width > 0);
        assert!(glyph.height > 0);
        assert_eq!(glyph.coverage.len(), (glyph.width * glyph.height) as usize);
        assert!(glyph.advance > 0.0);
        assert!(glyph.coverage.iter().any(|&b| b > 0));
    }

    #[test]
    fn space_has_advance_but_no_pixels() {
        let Some(path) = find_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let face = FontFace::load(path).unwrap();

        let glyph = face.rasterize(' ').expect("face should map space");
        assert_eq!(glyph.width * glyph.height, 0);
        assert!(glyph.advance > 0.0);
    }

    #[test]
    fn dejavu_advance_matches_metrics_table() {
        // DejaVuSans: 'A' has an advance of 1401 font units at 2048
        // units per em, so 1401 * 48 / 2048 px at pixel size 48.
        let path = PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
        if !path.exists() {
            eprintln!("DejaVuSans not installed, skipping");
            return;
        }
        let mut face = FontFace::load(path).unwrap();
        face.set_pixel_size(0, 48);

        let glyph = face.rasterize('A').unwrap();
        assert!((glyph.advance - 32.8359375).abs() < 1e-3);
    }

    #[test]
    fn pixel_size_scales_metrics() {
        let Some(path) = find_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let mut face = FontFace::load(path).unwrap();

        face.set_pixel_size(0, 48);
        let big = face.rasterize('A').unwrap();
        face.set_pixel_size(0, 24);
        let small = face.rasterize('A').unwrap();

        assert!(big.height > small.height);
        assert!(big.advance > small.advance);
        assert!(face.ascent() > 0.0);
        assert!(face.line_height() > 0.0);
    }

    #[test]
    fn face_flags_reflect_outline_fonts() {
        let Some(path) = find_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let face = FontFace::load(path).unwrap();

        assert!(face.is_scalable());
        assert!(!face.has_fixed_sizes());
        assert!(!face.has_color());
        assert!(face.family_name().is_some());
    }
}
