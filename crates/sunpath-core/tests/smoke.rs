// File: crates/sunpath-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use sunpath_core::{RenderOptions, Sample, SunPathChart};

fn morning() -> Vec<Sample> {
    vec![
        Sample::new(5.0, None, None, "05:00"),
        Sample::new(6.0, Some(-1.0), Some(60.0), "06:00"),
        Sample::new(7.0, Some(10.0), Some(70.0), "07:00"),
        Sample::new(8.0, Some(21.0), Some(80.0), "08:00"),
        Sample::new(9.0, Some(32.5), Some(92.0), "09:00"),
    ]
}

#[test]
fn render_smoke_png() {
    let chart = SunPathChart::new(morning()).with_selected_time("07:10");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
