mod canvas;
mod colors;
mod truetype_font;

use canvas::Canvas;
use colors::{Color, BACKGROUND, FOREGROUND};
use truetype_font::{LabelFont, TextBox};

use image::RgbaImage;

/// Side of the square icon in pixels
pub const ICON_SIZE: u32 = 32;

/// Inset of the background circle from each edge
pub const MARGIN: i32 = 2;

pub const LABEL: &str = "FP";

/// Pixel size of the label font
pub const LABEL_PX: f32 = 10.0;

/// The centered label is moved up by this many pixels
pub const LABEL_RAISE: i32 = 2;

/// Dots standing in for the label when no font can be loaded: top of the F,
/// the P, and the lower arm of the F.
pub const FALLBACK_DOTS: [[i32; 4]; 3] = [[8, 10, 12, 14], [16, 10, 20, 14], [8, 18, 12, 22]];

/// Where the label's glyphs come from, resolved once per render
pub enum GlyphSource {
    Font(LabelFont),
    Missing,
}

impl GlyphSource {
    /// Best-effort lookup of the default font. Failure is not an error, it
    /// just selects the fallback drawing.
    pub fn resolve() -> Self {
        match LabelFont::load_default(LABEL_PX) {
            Ok(font) => GlyphSource::Font(font),
            Err(e) => {
                log::warn!("{}; drawing fallback dots instead of the label", e);
                GlyphSource::Missing
            }
        }
    }
}

/// Draws the favicon: a filled circle with a centered two letter label
pub struct IconRenderer {
    size: u32,
    margin: i32,
    label: &'static str,
    background: Color,
    foreground: Color,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            margin: MARGIN,
            label: LABEL,
            background: BACKGROUND,
            foreground: FOREGROUND,
        }
    }
}

impl IconRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> RgbaImage {
        self.render_with(&GlyphSource::resolve())
    }

    pub fn render_with(&self, glyphs: &GlyphSource) -> RgbaImage {
        let mut canvas = Canvas::new(self.size);

        let far = self.size as i32 - self.margin;
        canvas.fill_ellipse([self.margin, self.margin, far, far], self.background);

        match glyphs {
            GlyphSource::Font(font) => {
                let bbox = font.text_bbox(self.label);
                let (x, y) = label_origin(self.size, &bbox);
                log::debug!("Label '{}' bbox {:?}, drawn at ({}, {})", self.label, bbox, x, y);
                font.draw_text(&mut canvas, x, y, self.label, self.foreground);
            }
            GlyphSource::Missing => {
                for dot in FALLBACK_DOTS {
                    canvas.fill_ellipse(dot, self.foreground);
                }
            }
        }

        canvas.into_image()
    }
}

/// Origin that centers a text box on the icon, nudged up by `LABEL_RAISE`.
/// Uses floor division so oversized labels still center symmetrically.
fn label_origin(size: u32, bbox: &TextBox) -> (i32, i32) {
    let size = size as i32;
    let x = (size - bbox.width()).div_euclid(2);
    let y = (size - bbox.height()).div_euclid(2) - LABEL_RAISE;
    (x, y)
}
