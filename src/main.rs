use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod cli;
mod encoder;
mod renderer;

use encoder::{IconFormat, ICO_PATH, ICO_SIZES, PNG_PATH};
use renderer::IconRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _args = cli::Args::parse();

    println!("Creando favicon personalizado para Family Points...");

    let favicon = IconRenderer::new().render();

    encoder::save(&favicon, Path::new(ICO_PATH), IconFormat::Ico { sizes: ICO_SIZES })?;

    // Also keep a PNG next to it for reference
    encoder::save(&favicon, Path::new(PNG_PATH), IconFormat::Png)?;

    println!("✅ Favicon creado exitosamente:");
    println!("  - /{}", ICO_PATH);
    println!("  - /{}", PNG_PATH);

    Ok(())
}
