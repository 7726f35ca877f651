use std::path::PathBuf;

use console::Style;
use runblob_core::pipeline::{BlobConfig, FrameSummary};
use runblob_core::regions::Region;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow().bold(),
            path: Style::new().underlined(),
        }
    }
}

/// Regions of one processed label image, ready for printing.
pub struct FrameReport {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub summary: FrameSummary,
    /// (color, regions in bucket, leading regions of the bucket)
    pub colors: Vec<(u8, usize, Vec<Region>)>,
}

pub fn print_config_summary(config: &BlobConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Blob Extraction"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Run arena"),
        s.value.apply_to(config.max_runs)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Region arena"),
        s.value.apply_to(config.max_regions)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Colors"),
        s.value.apply_to(config.num_colors)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Min area"),
        s.value.apply_to(format!("{} px", config.min_area))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Connectivity"),
        s.method.apply_to(config.connectivity)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sort"),
        s.method.apply_to(config.sort_passes)
    );
    println!();
}

pub fn print_frame_report(report: &FrameReport, top: usize) {
    let s = Styles::new();
    let summary = &report.summary;

    println!(
        "  {}  {}",
        s.path.apply_to(report.path.display()),
        s.label
            .apply_to(format!("{}x{}", report.width, report.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Runs"),
        s.value.apply_to(summary.runs)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Regions"),
        s.value.apply_to(format!(
            "{} ({} kept)",
            summary.regions, summary.kept_regions
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max area"),
        s.value.apply_to(summary.max_area)
    );
    if summary.run_coverage.is_truncated() {
        println!("    {}", s.warning.apply_to("run arena full, frame truncated"));
    }
    if summary.region_coverage.is_truncated() {
        println!(
            "    {}",
            s.warning.apply_to("region arena full, regions dropped")
        );
    }
    println!();

    for (color, count, regions) in &report.colors {
        println!(
            "    {} {}",
            s.header.apply_to(format!("Color {color}")),
            s.label.apply_to(format!(
                "({count} regions, showing {})",
                regions.len().min(top)
            ))
        );
        println!(
            "      {:>8}  {:>21}  {:>17}",
            "Area", "Bounding box", "Centroid"
        );
        for r in regions {
            println!(
                "      {:>8}  {:>21}  {:>17}",
                r.area,
                format!("({},{})-({},{})", r.x1, r.y1, r.x2, r.y2),
                format!("({:.1}, {:.1})", r.cen_x, r.cen_y)
            );
        }
        println!();
    }
}
