pub const BUS_FACTOR_WEIGHT: f64 = 0.3;
pub const RESPONSIVE_MAINTAINER_WEIGHT: f64 = 0.3;
pub const RAMP_UP_WEIGHT: f64 = 0.2;
pub const CORRECTNESS_WEIGHT: f64 = 0.1;

/// Weighted sum of the sub-scores, gated by the license score.
///
/// The weights add up to 0.9 and are not renormalised. Terms are summed
/// largest weight first so that all-ones input gives exactly 0.9.
pub fn net_score(ls: f64, bf: f64, rm: f64, cs: f64, ru: f64) -> f64 {
    ls * (bf * BUS_FACTOR_WEIGHT
        + rm * RESPONSIVE_MAINTAINER_WEIGHT
        + ru * RAMP_UP_WEIGHT
        + cs * CORRECTNESS_WEIGHT)
}
