/// The only license accepted as compliant.
pub const REQUIRED_LICENSE: &str = "GNU Lesser General Public License v2.1";

/// 1.0 when the README names the required license verbatim, else 0.0.
pub fn license_check(readme: &str) -> f64 {
    if readme.contains(REQUIRED_LICENSE) {
        1.0
    } else {
        0.0
    }
}
