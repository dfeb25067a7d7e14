// File: crates/sunpath-core/src/scale.rs
// Summary: Linear range mapping and the hour (X) / altitude (Y) chart scales.

/// Hour-of-day domain of the X axis.
pub const HOUR_DOMAIN: (f64, f64) = (0.0, 24.0);
/// Altitude domain of the Y axis, in degrees.
pub const ALTITUDE_DOMAIN: (f64, f64) = (-90.0, 90.0);

/// Map `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
/// Output ranges may be inverted (`out_min > out_max`).
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Pixel mapping for one chart surface: hours span the full width,
/// altitude spans the full height with +90° at the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    pub width: f64,
    pub height: f64,
}

impl ChartScale {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn x(&self, hour: f64) -> f64 {
        map_range(hour, HOUR_DOMAIN.0, HOUR_DOMAIN.1, 0.0, self.width)
    }

    #[inline]
    pub fn y(&self, altitude: f64) -> f64 {
        map_range(altitude, ALTITUDE_DOMAIN.0, ALTITUDE_DOMAIN.1, self.height, 0.0)
    }

    /// Screen point of an (hour, altitude) pair.
    #[inline]
    pub fn to_px(&self, hour: f64, altitude: f64) -> (f32, f32) {
        (self.x(hour) as f32, self.y(altitude) as f32)
    }

    /// Y of the horizon (altitude 0°), which is the vertical midpoint.
    pub fn horizon_y(&self) -> f64 { self.y(0.0) }
}
