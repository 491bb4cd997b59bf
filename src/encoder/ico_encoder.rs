use anyhow::{bail, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, RgbaImage};
use std::io::Write;

/// Largest side an ICO directory entry can describe
const MAX_ICO_SIDE: u32 = 256;

/// Write `image` as an ICO container with one entry per requested size.
///
/// Entries are stored as embedded PNG streams. Duplicate sizes collapse to
/// one entry, and an entry whose size differs from the image is resampled.
pub fn write_ico<W: Write>(writer: W, image: &RgbaImage, sizes: &[(u32, u32)]) -> Result<()> {
    let mut wanted: Vec<(u32, u32)> = Vec::with_capacity(sizes.len());
    for &(width, height) in sizes {
        if width == 0 || height == 0 || width > MAX_ICO_SIDE || height > MAX_ICO_SIDE {
            bail!("ICO entries must be between 1x1 and 256x256, got {}x{}", width, height);
        }
        if !wanted.contains(&(width, height)) {
            wanted.push((width, height));
        }
    }
    if wanted.is_empty() {
        bail!("ICO needs at least one size");
    }

    let mut frames = Vec::with_capacity(wanted.len());
    for (width, height) in wanted {
        let frame = if image.dimensions() == (width, height) {
            IcoFrame::as_png(image.as_raw(), width, height, ExtendedColorType::Rgba8)?
        } else {
            let resized = imageops::resize(image, width, height, FilterType::Nearest);
            IcoFrame::as_png(resized.as_raw(), width, height, ExtendedColorType::Rgba8)?
        };
        frames.push(frame);
    }

    IcoEncoder::new(writer).encode_images(&frames)?;
    Ok(())
}
