use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use rayon::prelude::*;
use runblob_core::io::load_label_image;
use runblob_core::pipeline::{BlobConfig, BlobPipeline};
use runblob_core::regions::{Region, SortPasses};
use runblob_core::runs::Connectivity;
use tracing::info;

use crate::summary::{print_config_summary, print_frame_report, FrameReport};

#[derive(Args)]
pub struct RegionsArgs {
    /// Label images (8-bit gray values are color classes)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Blob config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the minimum region area in pixels
    #[arg(long)]
    pub min_area: Option<u32>,

    /// Bound the sort to this many merge passes (default: full sort)
    #[arg(long)]
    pub passes: Option<u32>,

    /// Treat diagonal neighbours as connected
    #[arg(long)]
    pub eight: bool,

    /// Show at most N regions per color
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Only show this color class
    #[arg(long)]
    pub color: Option<u8>,
}

pub fn run(args: &RegionsArgs) -> Result<()> {
    let config = build_config(args)?;
    config.validate()?;
    print_config_summary(&config);

    info!(files = args.files.len(), "Processing label images");

    // One pipeline (and its arenas) per worker thread.
    let reports: Vec<Result<FrameReport>> = args
        .files
        .par_iter()
        .map_init(
            || BlobPipeline::new(config.clone()),
            |pipeline, path| {
                let pipeline = pipeline
                    .as_mut()
                    .map_err(|e| anyhow!("Failed to build pipeline: {e}"))?;
                process_file(pipeline, path, args)
            },
        )
        .collect();

    for report in reports {
        print_frame_report(&report?, args.top);
    }

    Ok(())
}

fn build_config(args: &RegionsArgs) -> Result<BlobConfig> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(min_area) = args.min_area {
        config.min_area = min_area;
    }
    if let Some(passes) = args.passes {
        config.sort_passes = SortPasses::Bounded(passes);
    }
    if args.eight {
        config.connectivity = Connectivity::Eight;
    }
    Ok(config)
}

fn process_file(
    pipeline: &mut BlobPipeline,
    path: &Path,
    args: &RegionsArgs,
) -> Result<FrameReport> {
    let image =
        load_label_image(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let summary = pipeline
        .process_frame(&image)
        .with_context(|| format!("Failed to process {}", path.display()))?;

    let colors: Vec<(u8, usize, Vec<Region>)> = (0..pipeline.colors().num_colors())
        .map(|c| c as u8)
        .filter(|&c| args.color.map_or(true, |wanted| wanted == c))
        .filter_map(|c| {
            let list = pipeline.color_list(c)?;
            if list.is_empty() {
                return None;
            }
            let shown = pipeline.iter_color(c).take(args.top).copied().collect();
            Some((c, list.len(), shown))
        })
        .collect();

    Ok(FrameReport {
        path: path.to_path_buf(),
        width: image.width(),
        height: image.height(),
        summary,
        colors,
    })
}
