/// Weekly downloads at which ramp-up saturates.
pub const SATURATION_DOWNLOADS: f64 = 100_000_000.0;

pub fn ramp_up(weekly_downloads: f64) -> f64 {
    // max before min: NaN collapses to 0 instead of 1
    (weekly_downloads / SATURATION_DOWNLOADS).max(0.0).min(1.0)
}
