use crate::utils;

/// Acceptance threshold used when none is configured.
pub const DEFAULT_THETA: f64 = 0.5;

/// Fraction of the particle extent added around it when deriving root bounds.
pub const DEFAULT_BOUNDS_PADDING: f64 = 0.05;

/// Edge length used for a root cube around particles that span no volume at all.
pub const MIN_ROOT_LENGTH: f64 = 1.0;

pub const DEFAULT_APPROXIMATOR_CONFIG: utils::ApproximatorConfig = utils::ApproximatorConfig {
    theta: DEFAULT_THETA,
    bounds_padding: DEFAULT_BOUNDS_PADDING,
    bounds_policy: utils::BoundsPolicy::Lenient,
    filler_scale: 1.0,
};
