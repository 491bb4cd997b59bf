use image::RgbaImage;

use super::colors::{Color, TRANSPARENT};

/// Square RGBA raster the icon is drawn on. Writes outside the raster are
/// clipped.
#[derive(Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            Some(*self.image.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Fill the ellipse inscribed in the inclusive box `[x0, y0, x1, y1]`.
    ///
    /// A pixel is painted when its center lies inside the ellipse, so the
    /// painted extent along each axis is exactly `x0..=x1` / `y0..=y1`.
    pub fn fill_ellipse(&mut self, bounds: [i32; 4], color: Color) {
        let [x0, y0, x1, y1] = bounds;
        if x1 < x0 || y1 < y0 {
            return;
        }

        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        let rx = (x1 - x0 + 1) as f32 / 2.0;
        let ry = (y1 - y0 + 1) as f32 / 2.0;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 - cx) / rx;
                let dy = (y as f32 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
