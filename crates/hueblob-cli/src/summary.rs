use std::path::Path;

use console::Style;
use hueblob_core::detection::{AreaMode, Blob, DetectorConfig};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &DetectorConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Hueblob Detector"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Target"),
        s.value.apply_to(config.target)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tolerance"),
        s.value.apply_to(format!(
            "\u{00b1}{:.1}\u{00b0} \u{00b1}{:.3} \u{00b1}{:.3}",
            config.tolerance.hue, config.tolerance.saturation, config.tolerance.value
        ))
    );

    let min_area = match config.area_mode {
        AreaMode::Absolute => format!("{} px", config.min_area),
        AreaMode::RelativeToLargest => format!("{} \u{00d7} largest", config.min_area),
    };
    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Min area"),
        s.value.apply_to(min_area),
        config.area_method
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Contours"),
        s.value.apply_to(config.approximation)
    );

    if config.downsample_levels > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Downsample"),
            s.value
                .apply_to(format!("1/{}", config.scale_factor()))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Downsample"),
            s.disabled.apply_to("off")
        );
    }

    if config.dilate_radius > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Dilate"),
            s.value.apply_to(format!("radius {}", config.dilate_radius))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Dilate"),
            s.disabled.apply_to("off")
        );
    }
    println!();
}

pub fn print_frame_blobs(path: &Path, width: u32, height: u32, blobs: &[Blob]) {
    let s = Styles::new();

    println!(
        "  {} {}",
        s.path.apply_to(path.display()),
        s.label.apply_to(format!("({width}x{height}, {} blobs)", blobs.len()))
    );

    if blobs.is_empty() {
        println!("    {}", s.disabled.apply_to("no blobs"));
        return;
    }

    println!(
        "    {}",
        s.header.apply_to(format!(
            "{:>4} {:>10} {:>10} {:>8} {:>8} {:>10}",
            "#", "x", "y", "width", "height", "area"
        ))
    );
    for (i, blob) in blobs.iter().enumerate() {
        println!(
            "    {:>4} {:>10.2} {:>10.2} {:>8.0} {:>8.0} {:>10.1}",
            i, blob.x, blob.y, blob.width, blob.height, blob.area
        );
    }
}
