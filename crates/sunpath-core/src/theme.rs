// File: crates/sunpath-core/src/theme.rs
// Summary: Colour themes for sun path rendering (sky, path, sun marker, grid).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Gradient colour at the top edge.
    pub sky: skia::Color,
    /// Gradient colour at the bottom edge.
    pub horizon_glow: skia::Color,
    pub horizon_line: skia::Color,
    pub path_stroke: skia::Color,
    pub sun_fill: skia::Color,
    pub sun_stroke: skia::Color,
    pub sun_glow: skia::Color,
    pub sun_rays: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
}

impl Theme {
    /// Daylight sky fading into a salmon horizon.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            sky: skia::Color::from_argb(255, 0x87, 0xce, 0xeb),
            horizon_glow: skia::Color::from_argb(255, 0xff, 0xa0, 0x7a),
            horizon_line: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            path_stroke: skia::Color::from_argb(255, 0xff, 0xa5, 0x00),
            sun_fill: skia::Color::from_argb(255, 0xff, 0xd7, 0x00),
            sun_stroke: skia::Color::from_argb(255, 0xff, 0xa5, 0x00),
            sun_glow: skia::Color::from_argb(153, 0xff, 0xd7, 0x00),  // 0.6 alpha
            sun_rays: skia::Color::from_argb(128, 0xff, 0xa5, 0x00),  // 0.5 alpha
            grid: skia::Color::from_argb(26, 0, 0, 0),                // 0.1 alpha
            axis_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
        }
    }

    pub fn dusk() -> Self {
        Self {
            name: "dusk",
            sky: skia::Color::from_argb(255, 0x1b, 0x1f, 0x3b),
            horizon_glow: skia::Color::from_argb(255, 0xd9, 0x6c, 0x4a),
            horizon_line: skia::Color::from_argb(255, 0xc8, 0xc8, 0xd0),
            path_stroke: skia::Color::from_argb(255, 0xff, 0xb3, 0x47),
            sun_fill: skia::Color::from_argb(255, 0xff, 0xd7, 0x00),
            sun_stroke: skia::Color::from_argb(255, 0xff, 0x8c, 0x00),
            sun_glow: skia::Color::from_argb(153, 0xff, 0xd7, 0x00),
            sun_rays: skia::Color::from_argb(128, 0xff, 0x8c, 0x00),
            grid: skia::Color::from_argb(40, 255, 255, 255),
            axis_label: skia::Color::from_argb(255, 0xe6, 0xe6, 0xee),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            sky: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            horizon_glow: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            horizon_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            path_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            sun_fill: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            sun_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            sun_glow: skia::Color::from_argb(200, 0xff, 0xff, 0x00),
            sun_rays: skia::Color::from_argb(200, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(80, 255, 255, 255),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dusk(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
