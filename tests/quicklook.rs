mod common;

use common::{TEST_GT, read_band_f32, write_raster};
use gdal::{Dataset, Metadata};
use insarviz::{QuicklookParams, quicklook_to_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn quicklook_writes_png_and_flags_zero_pixels_in_the_mask() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("filt_topophase.flat.tif");
    // One exact zero marks missing data; the rest is valid
    let pixels = vec![0.0f32, 3.0, -4.0, 5.0];
    write_raster(&input, 2, 2, &[pixels], Some(TEST_GT), true);

    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).expect("create out dir");
    let output = out_dir.join("filt_topophase.flat.tif");

    let params = QuicklookParams {
        title: "TEST IFG".to_string(),
        draw_colorbar: true,
        ..Default::default()
    };
    quicklook_to_path(&input, &output, None, &params).expect("quicklook");

    assert!(out_dir.join("filt_topophase.flat.png").is_file());
    assert!(output.is_file());
    assert_eq!(common::band_count(&output), 3);

    let (amplitude, gt, projection, size) = read_band_f32(&output, 1);
    let (phase, _, _, _) = read_band_f32(&output, 2);
    let (mask, _, _, _) = read_band_f32(&output, 3);
    assert_eq!(size, (2, 2));
    assert_eq!(gt, TEST_GT);
    assert!(!projection.is_empty());

    // The zero pixel is excluded from the data and flagged invalid
    assert!(amplitude[0].is_nan());
    assert_eq!(&amplitude[1..], &[3.0, 4.0, 5.0]);
    assert!(phase[0].is_nan());
    assert_eq!(phase[1], 0.0);
    assert_eq!(phase[2], std::f32::consts::PI);
    assert_eq!(mask, vec![0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn quicklook_band_descriptions_are_fixed() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("input.tif");
    write_raster(&input, 2, 2, &[vec![1.0f32; 4]], Some(TEST_GT), true);
    let output = dir.path().join("quicklook.tif");

    quicklook_to_path(&input, &output, None, &QuicklookParams::default()).expect("quicklook");

    let ds = Dataset::open(&output).expect("open quicklook");
    let expected = ["Amplitude", "Phase [rad]", "Valid data mask"];
    for (i, expected) in expected.iter().enumerate() {
        let band = ds.rasterband(i + 1).expect("band");
        assert_eq!(band.description().expect("description"), *expected);
    }
}

#[test]
fn ungeoreferenced_input_borrows_the_reference_georef() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("igram.tif");
    let reference = dir.path().join("scene_dem.wgs84.vrt");
    write_raster(&input, 2, 2, &[vec![1.0f32; 4]], None, false);
    write_raster(&reference, 2, 2, &[vec![200.0f32; 4]], Some(TEST_GT), true);
    let output = dir.path().join("quicklook.tif");

    quicklook_to_path(&input, &output, Some(&reference), &QuicklookParams::default())
        .expect("quicklook");

    let (_, gt, projection, _) = read_band_f32(&output, 1);
    assert_eq!(gt, TEST_GT);
    assert!(!projection.is_empty());
}

#[test]
fn quicklook_defaults_to_wgs84_when_no_projection_is_known() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("input.tif");
    // Real transform but no spatial reference
    write_raster(&input, 2, 2, &[vec![1.0f32; 4]], Some(TEST_GT), false);
    let output = dir.path().join("quicklook.tif");

    quicklook_to_path(&input, &output, None, &QuicklookParams::default()).expect("quicklook");

    let (_, _, projection, _) = read_band_f32(&output, 1);
    assert!(projection.contains("WGS") || projection.contains("4326"));
}
