use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use runblob_core::io::load_label_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Label image (8-bit gray values are color classes)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_label_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let total = (image.width() * image.height()).max(1);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!();
    println!("{:>6}  {:>10}  {:>7}", "Class", "Pixels", "Share");
    println!("{}", "-".repeat(27));

    for (label, &count) in image.histogram().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let share = count as f64 / total as f64 * 100.0;
        println!("{:>6}  {:>10}  {:>6.2}%", label, count, share);
    }

    Ok(())
}
