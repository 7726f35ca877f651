use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use runblob_core::io::load_label_image;
use runblob_core::pipeline::BlobPipeline;
use runblob_core::regions::Region;

#[derive(Args)]
pub struct BenchArgs {
    /// Label image (8-bit gray values are color classes)
    pub file: PathBuf,

    /// Blob config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value = "200")]
    pub frames: usize,
}

fn snapshot(pipeline: &BlobPipeline) -> Vec<Region> {
    (0..pipeline.colors().num_colors())
        .flat_map(|c| pipeline.iter_color(c as u8).copied())
        .collect()
}

/// Mean frame time in milliseconds; 0 when no frames ran.
fn mean_frame_ms(total: Duration, frames: usize) -> f64 {
    if frames == 0 {
        return 0.0;
    }
    total.as_secs_f64() / frames as f64 * 1e3
}

pub fn run(args: &BenchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let image = load_label_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let mut pipeline = BlobPipeline::new(config)?;

    let reference = pipeline.process_frame(&image)?;
    let reference_regions = snapshot(&pipeline);

    let pb = ProgressBar::new(args.frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Processing frames");

    let mut total = Duration::ZERO;
    let mut fastest = Duration::MAX;
    let mut slowest = Duration::ZERO;

    for frame in 0..args.frames {
        let start = Instant::now();
        let summary = pipeline.process_frame(&image)?;
        let elapsed = start.elapsed();

        total += elapsed;
        fastest = fastest.min(elapsed);
        slowest = slowest.max(elapsed);

        if summary != reference || snapshot(&pipeline) != reference_regions {
            pb.abandon();
            bail!("Frame {frame} differs from the first frame");
        }
        pb.set_position(frame as u64 + 1);
    }
    pb.finish_with_message("Done");

    println!("\nImage:       {}x{}", image.width(), image.height());
    println!("Runs:        {}", reference.runs);
    println!("Regions:     {} ({} kept)", reference.regions, reference.kept_regions);
    println!("Frames:      {}", args.frames);
    if args.frames > 0 {
        println!("Mean frame:  {:.3} ms", mean_frame_ms(total, args.frames));
        println!("Fastest:     {:.3} ms", fastest.as_secs_f64() * 1e3);
        println!("Slowest:     {:.3} ms", slowest.as_secs_f64() * 1e3);
    }
    println!("Output identical across all frames");

    Ok(())
}
