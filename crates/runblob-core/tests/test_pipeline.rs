mod common;

use approx::assert_relative_eq;
use common::{areas, checkerboard, image_from_rows, squares};
use runblob_core::arena::Coverage;
use runblob_core::error::RunblobError;
use runblob_core::frame::ClassifiedImage;
use runblob_core::pipeline::{BlobConfig, BlobPipeline};
use runblob_core::regions::{Region, SortPasses};

fn small_config() -> BlobConfig {
    BlobConfig {
        max_runs: 4096,
        max_regions: 1024,
        num_colors: 8,
        ..BlobConfig::default()
    }
}

fn snapshot(pipeline: &BlobPipeline) -> Vec<Vec<Region>> {
    (0..pipeline.config().num_colors as u8)
        .map(|c| pipeline.iter_color(c).copied().collect())
        .collect()
}

#[test]
fn test_pipeline_sorted_per_color() {
    let mut pipeline = BlobPipeline::new(small_config()).unwrap();
    let img = squares(&[2, 6, 3, 5]);
    let summary = pipeline.process_frame(&img).unwrap();

    assert!(!summary.is_truncated());
    assert_eq!(areas(pipeline.iter_color(1)), vec![36, 25, 9, 4]);
    assert_eq!(pipeline.color_list(1).unwrap().len(), 4);
    assert_eq!(summary.kept_regions, 5);
    assert_eq!(summary.max_area as usize, img.width() * img.height() - 74);
}

#[test]
fn test_pipeline_min_area_drops_small_blobs() {
    let config = BlobConfig {
        min_area: 9,
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();
    pipeline.process_frame(&squares(&[2, 6, 3, 1])).unwrap();

    assert_eq!(areas(pipeline.iter_color(1)), vec![36, 9]);
}

#[test]
fn test_pipeline_region_geometry() {
    let mut pipeline = BlobPipeline::new(small_config()).unwrap();
    let img = image_from_rows(&[
        "......", //
        ".33...", //
        ".333..", //
        "......",
    ]);
    pipeline.process_frame(&img).unwrap();

    let blob = pipeline.iter_color(3).next().unwrap();
    assert_eq!((blob.x1, blob.y1, blob.x2, blob.y2), (1, 1, 3, 2));
    assert_eq!(blob.area, 5);
    assert_relative_eq!(blob.cen_x, (1.0 + 2.0 + 1.0 + 2.0 + 3.0) / 5.0);
    assert_relative_eq!(blob.cen_y, (1.0 * 2.0 + 2.0 * 3.0) / 5.0);
}

#[test]
fn test_pipeline_is_deterministic() {
    let img = image_from_rows(&[
        "1122..3.", //
        "1.22.333", //
        "11..44.3", //
        "..5544..",
    ]);

    let mut pipeline = BlobPipeline::new(small_config()).unwrap();
    let first = pipeline.process_frame(&img).unwrap();
    let first_regions = snapshot(&pipeline);

    // Same arenas, reused.
    let second = pipeline.process_frame(&img).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_regions, snapshot(&pipeline));

    // Fresh arenas.
    let mut fresh = BlobPipeline::new(small_config()).unwrap();
    assert_eq!(fresh.process_frame(&img).unwrap(), first);
    assert_eq!(snapshot(&fresh), first_regions);
}

#[test]
fn test_pipeline_frames_do_not_leak_into_each_other() {
    let mut pipeline = BlobPipeline::new(small_config()).unwrap();
    pipeline.process_frame(&squares(&[4, 4, 4])).unwrap();
    assert_eq!(pipeline.color_list(1).unwrap().len(), 3);

    pipeline
        .process_frame(&ClassifiedImage::filled(10, 10, 0))
        .unwrap();
    assert!(pipeline.color_list(1).unwrap().is_empty());
    assert_eq!(areas(pipeline.iter_color(0)), vec![100]);
}

#[test]
fn test_pipeline_run_overflow_is_safe() {
    let config = BlobConfig {
        max_runs: 50,
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();
    let summary = pipeline.process_frame(&checkerboard(20, 20)).unwrap();

    assert_eq!(summary.run_coverage, Coverage::Truncated);
    assert_eq!(summary.runs, 50);
    assert_eq!(pipeline.runs().used(), 50);
    // Every truncated run is a 1-pixel region of its own.
    assert_eq!(summary.regions, 50);
    assert_eq!(summary.kept_regions, 50);
    assert_eq!(summary.max_area, 1);
    let total: usize = pipeline.colors().buckets().iter().map(|b| b.len()).sum();
    assert_eq!(total, 50);
}

#[test]
fn test_pipeline_region_overflow_is_safe() {
    let config = BlobConfig {
        max_regions: 7,
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();
    let summary = pipeline.process_frame(&checkerboard(8, 8)).unwrap();

    assert_eq!(summary.run_coverage, Coverage::Complete);
    assert_eq!(summary.region_coverage, Coverage::Truncated);
    assert_eq!(summary.regions, 7);
    assert!(summary.is_truncated());
}

#[test]
fn test_pipeline_rejects_label_outside_color_range() {
    let config = BlobConfig {
        num_colors: 2,
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();
    let err = pipeline
        .process_frame(&image_from_rows(&["0019"]))
        .unwrap_err();
    assert!(matches!(err, RunblobError::InvalidColor { color: 9, .. }));
}

#[test]
fn test_pipeline_bounded_sort_passes() {
    let config = BlobConfig {
        sort_passes: SortPasses::Bounded(0),
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();
    let summary = pipeline.process_frame(&squares(&[1, 3, 2])).unwrap();

    assert_eq!(summary.sort_passes, 0);
    // Unsorted: front insertion order, i.e. reverse raster order of roots.
    assert_eq!(areas(pipeline.iter_color(1)), vec![4, 9, 1]);
}

#[test]
fn test_pipeline_visit_generation() {
    let mut pipeline = BlobPipeline::new(small_config()).unwrap();
    pipeline.process_frame(&squares(&[2, 3])).unwrap();

    let first = pipeline.color_list(1).unwrap().first().unwrap();
    let regions = pipeline.regions_mut();
    assert!(regions[first].visit(1));
    assert!(!regions[first].visit(1));
}

#[test]
fn test_pipeline_reuses_arena_storage_across_frames() {
    let config = BlobConfig {
        max_runs: 20_000,
        max_regions: 5_000,
        ..small_config()
    };
    let mut pipeline = BlobPipeline::new(config).unwrap();

    let busy = checkerboard(60, 60);
    pipeline.process_frame(&busy).unwrap();
    let runs_ptr = pipeline.runs().as_slice().as_ptr();
    let regions_ptr = pipeline.regions().as_slice().as_ptr();

    let summary = pipeline.process_frame(&squares(&[5, 9, 3])).unwrap();
    assert!(summary.runs < 3600);
    assert_eq!(pipeline.runs().as_slice().as_ptr(), runs_ptr);
    assert_eq!(pipeline.regions().as_slice().as_ptr(), regions_ptr);

    pipeline.process_frame(&busy).unwrap();
    assert_eq!(pipeline.runs().used(), 3600);
    assert_eq!(pipeline.runs().as_slice().as_ptr(), runs_ptr);
    assert_eq!(pipeline.regions().as_slice().as_ptr(), regions_ptr);
    assert_eq!(pipeline.runs().capacity(), 20_000);
    assert_eq!(pipeline.regions().capacity(), 5_000);
}
