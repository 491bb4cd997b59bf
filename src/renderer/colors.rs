use image::Rgba;

/// RGBA color, one byte per channel
pub type Color = Rgba<u8>;

/// Opaque color from three channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Blue-500, close to the app's theme
pub const BACKGROUND: Color = rgb(59, 130, 246);

pub const FOREGROUND: Color = rgb(255, 255, 255);

pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);
