use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use fontdue::{Font as FontdueFont, FontSettings, Metrics};
use thiserror::Error;

use super::canvas::Canvas;
use super::colors::Color;

/// Coverage above this paints a pixel; glyphs are drawn without blending.
const COVERAGE_THRESHOLD: u8 = 128;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("no default font available: {0}")]
    NotFound(String),
    #[error("failed to load font data: {0}")]
    Load(String),
    #[error("failed to parse font: {0}")]
    Parse(String),
}

/// Ink bounds of laid-out text, relative to the text origin. `right` and
/// `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// One rasterized glyph positioned relative to the text origin
struct PlacedGlyph {
    x: i32,
    y: i32,
    metrics: Metrics,
    coverage: Vec<u8>,
}

/// TrueType font used for the icon label, rasterized with fontdue
pub struct LabelFont {
    font: FontdueFont,
    px: f32,
    /// Distance from the top of the line box to the baseline
    ascent: f32,
}

impl LabelFont {
    /// Load the system's default sans-serif face
    pub fn load_default(px: f32) -> Result<Self, FontError> {
        let source = SystemSource::new();
        let handle = source
            .select_best_match(&[FamilyName::SansSerif], &Properties::new())
            .map_err(|e| FontError::NotFound(e.to_string()))?;

        let font_index = match &handle {
            Handle::Path { font_index, .. } | Handle::Memory { font_index, .. } => *font_index,
        };

        let font = handle.load().map_err(|e| FontError::Load(e.to_string()))?;
        log::debug!("Default font: {}", font.full_name());

        let font_bytes = font
            .copy_font_data()
            .ok_or_else(|| FontError::Load("font data unavailable".to_string()))?;

        Self::from_bytes(font_bytes.as_slice(), font_index, px)
    }

    pub fn from_bytes(font_data: &[u8], collection_index: u32, px: f32) -> Result<Self, FontError> {
        let settings = FontSettings {
            collection_index,
            ..FontSettings::default()
        };
        let font = FontdueFont::from_bytes(font_data, settings)
            .map_err(|e| FontError::Parse(e.to_string()))?;

        let face = ttf_parser::Face::parse(font_data, collection_index)
            .map_err(|e| FontError::Parse(format!("{:?}", e)))?;
        let ascent = face.ascender() as f32 * px / face.units_per_em() as f32;

        log::debug!("Label font metrics: px={}, ascent={:.1}px", px, ascent);

        Ok(Self { font, px, ascent })
    }

    /// Lay out `text` on one line starting at origin `(0, 0)`, the top-left
    /// corner of the line box.
    fn layout(&self, text: &str) -> Vec<PlacedGlyph> {
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f32;
        let mut previous: Option<char> = None;

        for ch in text.chars() {
            if let Some(prev) = previous {
                pen_x += self.font.horizontal_kern(prev, ch, self.px).unwrap_or(0.0);
            }

            let (metrics, coverage) = self.font.rasterize(ch, self.px);

            // fontdue's ymin is the distance from the baseline up to the
            // bottom of the glyph, so the top sits ymin + height above it.
            let x = (pen_x + metrics.xmin as f32).round() as i32;
            let y = self.ascent.round() as i32 - metrics.ymin - metrics.height as i32;

            pen_x += metrics.advance_width;
            previous = Some(ch);

            glyphs.push(PlacedGlyph { x, y, metrics, coverage });
        }

        glyphs
    }

    /// Ink bounding box of `text` drawn at origin `(0, 0)`
    pub fn text_bbox(&self, text: &str) -> TextBox {
        let mut bbox: Option<TextBox> = None;

        for glyph in self.layout(text) {
            if glyph.metrics.width == 0 || glyph.metrics.height == 0 {
                continue;
            }
            let right = glyph.x + glyph.metrics.width as i32;
            let bottom = glyph.y + glyph.metrics.height as i32;

            bbox = Some(match bbox {
                None => TextBox { left: glyph.x, top: glyph.y, right, bottom },
                Some(b) => TextBox {
                    left: b.left.min(glyph.x),
                    top: b.top.min(glyph.y),
                    right: b.right.max(right),
                    bottom: b.bottom.max(bottom),
                },
            });
        }

        bbox.unwrap_or_default()
    }

    /// Draw `text` with its origin at `(x, y)`. Only glyph pixels are
    /// written; everything else is left untouched.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
        for glyph in self.layout(text) {
            let width = glyph.metrics.width;
            for gy in 0..glyph.metrics.height {
                for gx in 0..width {
                    if glyph.coverage[gy * width + gx] > COVERAGE_THRESHOLD {
                        canvas.set_pixel(x + glyph.x + gx as i32, y + glyph.y + gy as i32, color);
                    }
                }
            }
        }
    }
}
