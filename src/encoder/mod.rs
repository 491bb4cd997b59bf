mod ico_encoder;

pub use ico_encoder::write_ico;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Where the frontend serves its favicon from, relative to the repository root
pub const ICO_PATH: &str = "frontend/public/favicon.ico";
pub const PNG_PATH: &str = "frontend/public/favicon.png";

/// Size directive for the ICO container
pub const ICO_SIZES: &[(u32, u32)] = &[(32, 32)];

/// On-disk encoding of the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat<'a> {
    Ico { sizes: &'a [(u32, u32)] },
    Png,
}

impl IconFormat<'_> {
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Ico { .. } => "ico",
            IconFormat::Png => "png",
        }
    }
}

/// Encode `image` into `writer`
pub fn encode<W: Write>(image: &RgbaImage, writer: W, format: IconFormat<'_>) -> Result<()> {
    match format {
        IconFormat::Ico { sizes } => write_ico(writer, image, sizes),
        IconFormat::Png => {
            PngEncoder::new(writer).write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )?;
            Ok(())
        }
    }
}

/// Write `image` to `path`, creating or truncating the file. The parent
/// directory must already exist.
pub fn save(image: &RgbaImage, path: &Path, format: IconFormat<'_>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    encode(image, &mut writer, format)
        .with_context(|| format!("Failed to encode {} as {}", path.display(), format.extension()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(32, 32, |x, y| {
            let dx = x as i32 - 16;
            let dy = y as i32 - 16;
            if dx * dx + dy * dy <= 14 * 14 {
                Rgba([59, 130, 246, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn ico_and_png_decode_to_the_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let ico = dir.path().join("favicon.ico");
        let png = dir.path().join("favicon.png");
        let image = sample();

        save(&image, &ico, IconFormat::Ico { sizes: ICO_SIZES }).unwrap();
        save(&image, &png, IconFormat::Png).unwrap();

        let from_ico = image::load(
            std::io::BufReader::new(File::open(&ico).unwrap()),
            ImageFormat::Ico,
        )
        .unwrap()
        .to_rgba8();
        let from_png = image::open(&png).unwrap().to_rgba8();

        assert_eq!(from_ico.dimensions(), (32, 32));
        assert_eq!(from_ico, from_png);
        assert_eq!(from_png, image);
    }

    #[test]
    fn saving_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let image = sample();

        for format in [IconFormat::Ico { sizes: ICO_SIZES }, IconFormat::Png] {
            let path = dir.path().join(format!("favicon.{}", format.extension()));
            save(&image, &path, format).unwrap();
            let first = std::fs::read(&path).unwrap();
            save(&image, &path, format).unwrap();
            let second = std::fs::read(&path).unwrap();
            assert_eq!(first, second, "{} output differs", format.extension());
        }
    }

    #[test]
    fn missing_directory_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("frontend").join("public");
        let path = missing.join("favicon.ico");

        let err = save(&sample(), &path, IconFormat::Ico { sizes: ICO_SIZES }).unwrap_err();
        assert!(err.to_string().contains("favicon.ico"));
        assert!(!missing.exists());
    }

    #[test]
    fn png_starts_with_signature() {
        let mut bytes = Vec::new();
        encode(&sample(), &mut bytes, IconFormat::Png).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
