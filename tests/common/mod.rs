/*!
 * Common test utilities for the argguard test suite
 */

use rand::Rng;

/// Install a test logger once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random strictly positive double spanning several magnitudes
pub fn random_positive(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>() + f64::from(rng.random_range(1..i32::MAX - 1))
}

/// Random strictly negative double spanning several magnitudes
pub fn random_negative(rng: &mut impl Rng) -> f64 {
    -random_positive(rng)
}

/// Names with one missing and one blank entry
pub fn names_with_gaps() -> Vec<Option<String>> {
    vec![
        Some("ada".to_string()),
        None,
        Some("   ".to_string()),
        Some("grace".to_string()),
    ]
}
