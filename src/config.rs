use crate::Error;

/// Number of values the pipeline generates by default.
pub const DEFAULT_LEN: usize = 100_000;

/// Inclusive lower bound of the generated values.
pub const MIN_VALUE: f64 = 1.0;

/// Exclusive upper bound of the generated values.
pub const MAX_VALUE: f64 = 1_000_000.0;

/// Shape of the generated input. Values are drawn uniformly from `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    len: usize,
    min: f64,
    max: f64,
}

impl Config {
    pub fn new(len: usize, min: f64, max: f64) -> Result<Self, Error> {
        // The width must be finite too, rand can't sample from e.g. [-f64::MAX, f64::MAX).
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(Error::InvalidRange { min, max });
        }

        Ok(Self { len, min, max })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.len(), 100_000);
        assert_eq!(config.min(), 1.0);
        assert_eq!(config.max(), 1_000_000.0);
        assert_eq!(Config::new(DEFAULT_LEN, MIN_VALUE, MAX_VALUE).unwrap(), config);
    }

    #[test]
    fn rejects_bad_ranges() {
        for (min, max) in [
            (5.0, 5.0),
            (10.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
            (-f64::MAX, f64::MAX),
            (f64::MIN, f64::MAX / 2.0),
        ] {
            assert!(matches!(
                Config::new(10, min, max),
                Err(Error::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn wide_finite_range_is_valid() {
        let config = Config::new(1, -f64::MAX / 2.0, f64::MAX / 2.0).unwrap();
        assert!((config.max() - config.min()).is_finite());
    }

    #[test]
    fn zero_len_is_valid() {
        assert_eq!(Config::new(0, 1.0, 2.0).unwrap().len(), 0);
    }
}
