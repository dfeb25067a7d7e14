// File: crates/sunpath-core/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and the sky gradient at the edges.

use sunpath_core::{RenderOptions, Sample, SunPathChart};

#[test]
fn render_rgba8_buffer() {
    let chart = SunPathChart::new(vec![
        Sample::new(6.0, Some(0.0), None, "06:00"),
        Sample::new(12.0, Some(60.0), None, "12:00"),
    ]);

    let mut opts = RenderOptions::default();
    opts.width = 240;
    opts.height = 120;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Gradient is opaque and bluer at the top than at the bottom.
    let top = &px[stride + 4..stride + 8];
    let bottom_row = (h as usize - 2) * stride;
    let bottom = &px[bottom_row + 4..bottom_row + 8];
    assert_eq!(top[3], 255);
    assert_eq!(bottom[3], 255);
    assert!(top[2] > bottom[2], "top {top:?} should be bluer than bottom {bottom:?}");
    assert!(top[0] < bottom[0], "bottom {bottom:?} should be redder than top {top:?}");
}
