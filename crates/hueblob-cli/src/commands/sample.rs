use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hueblob_core::color::rgb_to_hsv;
use hueblob_core::io::image_io::load_rgba;

#[derive(Args)]
pub struct SampleArgs {
    /// Input image
    pub file: PathBuf,

    /// Pixel column
    pub x: u32,

    /// Pixel row
    pub y: u32,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    let img = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (w, h) = img.dimensions();
    if args.x >= w || args.y >= h {
        bail!("Pixel ({}, {}) is outside the {}x{} image", args.x, args.y, w, h);
    }

    let [r, g, b, _] = img.get_pixel(args.x, args.y).0;
    let hsv = rgb_to_hsv(r, g, b);

    println!("RGB:  {r} {g} {b}");
    println!("HSV:  {hsv}");
    println!();
    println!("[target]");
    println!("hue = {}", hsv.hue);
    println!("saturation = {}", hsv.saturation);
    println!("value = {}", hsv.value);

    Ok(())
}
