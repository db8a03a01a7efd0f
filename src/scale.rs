//! Scale functions for data-to-pixel mappings.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` min equals max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert_relative_eq!(scale.scale(5.0), 50.0);
        assert_relative_eq!(scale.scale(0.0), 0.0);
        assert_relative_eq!(scale.scale(10.0), 100.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Screen coordinates: larger data values map to smaller y
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap();
        assert_relative_eq!(scale.scale(0.0), 100.0);
        assert_relative_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert_relative_eq!(scale.invert(scale.scale(3.0)), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    }

    #[test]
    fn test_linear_scale_accessors() {
        let scale = LinearScale::new((1.0, 2.0), (3.0, 4.0)).unwrap();
        assert_eq!(scale.domain(), (1.0, 2.0));
        assert_eq!(scale.range(), (3.0, 4.0));
    }
}
