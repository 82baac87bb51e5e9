use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hueblob_core::detection::{
    AreaMethod, AreaMode, ContourApproximation, DetectorConfig, FrameProcessor,
};
use hueblob_core::io::image_io::{load_rgba, save_png};
use hueblob_core::io::overlay::{draw_blobs, MARKER_COLOR};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::summary::{print_config_summary, print_frame_blobs};

#[derive(Args)]
pub struct DetectArgs {
    /// Input images, processed in order as a frame sequence
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// TOML detector configuration (see `hueblob config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target hue in degrees [0, 360)
    #[arg(long)]
    pub hue: Option<f32>,

    /// Target saturation [0, 1]
    #[arg(long)]
    pub saturation: Option<f32>,

    /// Target value [0, 1]
    #[arg(long)]
    pub value: Option<f32>,

    /// Hue tolerance in degrees
    #[arg(long)]
    pub hue_tolerance: Option<f32>,

    /// Saturation tolerance
    #[arg(long)]
    pub saturation_tolerance: Option<f32>,

    /// Value tolerance
    #[arg(long)]
    pub value_tolerance: Option<f32>,

    /// Minimum blob area in pixels (or fraction of the largest with --relative-area)
    #[arg(long, allow_hyphen_values = true)]
    pub min_area: Option<f32>,

    /// Interpret --min-area as a fraction of the largest blob in each frame
    #[arg(long)]
    pub relative_area: bool,

    /// Measure area as the boundary polygon instead of the pixel count
    #[arg(long)]
    pub polygon_area: bool,

    /// Collapse straight boundary runs to their end points
    #[arg(long)]
    pub simple_contours: bool,

    /// Number of 2x pyramid reductions before detection
    #[arg(long)]
    pub downsample: Option<u32>,

    /// Mask dilation radius in pixels
    #[arg(long)]
    pub dilate: Option<u32>,

    /// Directory to write annotated PNGs into
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Print the flat [x, y, width, height, area] encoding instead of a table
    #[arg(long)]
    pub flat: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = build_config(args)?;
    print_config_summary(&config);

    let processor = FrameProcessor::new(config).context("Invalid detector configuration")?;
    processor.enable();

    if let Some(ref dir) = args.overlay {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create overlay directory {}", dir.display()))?;
    }

    let pb = if args.images.len() > 1 {
        let pb = ProgressBar::new(args.images.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("Detecting [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for path in &args.images {
        let img = load_rgba(path).with_context(|| format!("Failed to load {}", path.display()))?;
        let (w, h) = img.dimensions();

        processor
            .process(img.as_raw(), w, h)
            .with_context(|| format!("Failed to process {}", path.display()))?;
        let blobs = processor.latest_blobs();

        pb.suspend(|| {
            if args.flat {
                println!("{}: {:?}", path.display(), processor.latest_blob_data());
            } else {
                print_frame_blobs(path, w, h, &blobs);
            }
        });

        if let Some(ref dir) = args.overlay {
            let mut annotated = img.clone();
            draw_blobs(&mut annotated, &blobs, MARKER_COLOR);
            let out = overlay_path(dir, path);
            save_png(&annotated, &out)
                .with_context(|| format!("Failed to write overlay {}", out.display()))?;
            info!(path = %out.display(), "Overlay saved");
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}

/// Start from the config file (or defaults) and apply command-line overrides.
fn build_config(args: &DetectArgs) -> Result<DetectorConfig> {
    let mut config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => DetectorConfig::default(),
    };

    if let Some(h) = args.hue {
        config.target.hue = h;
    }
    if let Some(s) = args.saturation {
        config.target.saturation = s;
    }
    if let Some(v) = args.value {
        config.target.value = v;
    }
    if let Some(t) = args.hue_tolerance {
        config.tolerance.hue = t;
    }
    if let Some(t) = args.saturation_tolerance {
        config.tolerance.saturation = t;
    }
    if let Some(t) = args.value_tolerance {
        config.tolerance.value = t;
    }
    if let Some(a) = args.min_area {
        config.min_area = a;
    }
    if args.relative_area {
        config.area_mode = AreaMode::RelativeToLargest;
    }
    if args.polygon_area {
        config.area_method = AreaMethod::Polygon;
    }
    if args.simple_contours {
        config.approximation = ContourApproximation::Simple;
    }
    if let Some(n) = args.downsample {
        config.downsample_levels = n;
    }
    if let Some(r) = args.dilate {
        config.dilate_radius = r;
    }

    Ok(config)
}

fn overlay_path(dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    dir.join(format!("{stem}_blobs.png"))
}
