// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_APPROXIMATOR_CONFIG,
    errors::BarnesHutError
};

/// What to do with a particle that falls outside the root cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Drop the particle and keep going. Callers that jitter particles slightly past the
    /// bounds they picked rely on this.
    Lenient,
    /// Report the particle as `BarnesHutError::PositionOutOfBounds`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximatorConfig {
    /// Multipole acceptance threshold. Smaller is more exact and slower.
    pub theta: f64,
    /// Fraction of the particle extent added around it when bounds are derived automatically.
    pub bounds_padding: f64,
    pub bounds_policy: BoundsPolicy,
    /// Upper bound of each component of the filler force returned for degenerate queries.
    pub filler_scale: f64,
}


impl Default for ApproximatorConfig {
    fn default() -> Self {
        DEFAULT_APPROXIMATOR_CONFIG
    }
}

impl ApproximatorConfig {
    /// Builds a configuration, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_barnes_hut::utils::{ApproximatorConfig, BoundsPolicy};
    ///
    /// let config = ApproximatorConfig::new(Some(0.8), None, Some(BoundsPolicy::Strict), None);
    /// assert_eq!(config.theta, 0.8);
    /// assert_eq!(config.bounds_padding, 0.05);
    /// assert_eq!(config.bounds_policy, BoundsPolicy::Strict);
    /// ```
    pub fn new(
        theta: Option<f64>,
        bounds_padding: Option<f64>,
        bounds_policy: Option<BoundsPolicy>,
        filler_scale: Option<f64>,
    ) -> Self {
        let default = DEFAULT_APPROXIMATOR_CONFIG;
        Self {
            theta: theta.unwrap_or(default.theta),
            bounds_padding: bounds_padding.unwrap_or(default.bounds_padding),
            bounds_policy: bounds_policy.unwrap_or(default.bounds_policy),
            filler_scale: filler_scale.unwrap_or(default.filler_scale),
        }
    }

    /// Checks that every value is usable by the approximator.
    ///
    /// # Errors
    /// Returns `InvalidTheta` for a non-positive or non-finite theta.
    /// Returns `InvalidRootLength` for a negative or non-finite padding.
    /// Returns `InvalidFillerScale` for a negative or non-finite filler scale.
    pub fn validate(&self) -> Result<(), BarnesHutError> {
        validate_theta(self.theta)?;
        if !self.bounds_padding.is_finite() || self.bounds_padding < 0.0 {
            return Err(BarnesHutError::InvalidRootLength(self.bounds_padding));
        }
        if !self.filler_scale.is_finite() || self.filler_scale < 0.0 {
            return Err(BarnesHutError::InvalidFillerScale(self.filler_scale));
        }
        Ok(())
    }

    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    pub fn with_bounds_policy(mut self, bounds_policy: BoundsPolicy) -> Self {
        self.bounds_policy = bounds_policy;
        self
    }
}

pub(crate) fn validate_theta(theta: f64) -> Result<(), BarnesHutError> {
    if !theta.is_finite() || theta <= 0.0 {
        return Err(BarnesHutError::InvalidTheta(theta));
    }
    Ok(())
}
