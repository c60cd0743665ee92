use approx::relative_eq;
use ndarray::Array1;

use crate::error::{ConfigError, ConfigResult};

pub trait ArrayExt {
    // Largest value, or an error naming `field` if the array is empty.
    fn peak(&self, field: &'static str) -> ConfigResult<f64>;
    fn floor(&self, field: &'static str) -> ConfigResult<f64>;
    fn cumsum(&self) -> Array1<f64>;
    // Shift so the first element is zero, preserving relative spacing.
    fn shift_to_origin(self, field: &'static str) -> ConfigResult<Array1<f64>>;
    fn is_uniform(&self) -> bool;
}

impl ArrayExt for Array1<f64> {
    fn peak(&self, field: &'static str) -> ConfigResult<f64> {
        self.iter()
            .copied()
            .max_by(f64::total_cmp)
            .ok_or(ConfigError::EmptySequence(field))
    }

    fn floor(&self, field: &'static str) -> ConfigResult<f64> {
        self.iter()
            .copied()
            .min_by(f64::total_cmp)
            .ok_or(ConfigError::EmptySequence(field))
    }

    fn cumsum(&self) -> Array1<f64> {
        self.iter()
            .scan(0., |acc, &x| {
                *acc += x;
                Some(*acc)
            })
            .collect()
    }

    fn shift_to_origin(self, field: &'static str) -> ConfigResult<Array1<f64>> {
        let first = *self.iter().next().ok_or(ConfigError::EmptySequence(field))?;
        Ok(self - first)
    }

    fn is_uniform(&self) -> bool {
        match self.iter().next() {
            Some(first) => self.iter().all(|x| relative_eq!(*x, *first)),
            None => true,
        }
    }
}
