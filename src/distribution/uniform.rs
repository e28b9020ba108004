use super::Distribution;
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use rand::Rng;
use std::fmt;

/// 均匀分布U(low, high)。
/// 注意边界约定：抽样取`low + r·(high - low)`（r ∈ [0, 1)），
/// 而密度只在`low <= x < high`上非零，即上界在密度中是开的。
#[derive(Debug, Clone)]
pub struct Uniform {
    low: Tensor,
    high: Tensor,
    mean: Tensor,
    variance: Tensor,
}

impl Uniform {
    pub fn new(low: &Tensor, high: &Tensor) -> Self {
        Self {
            low: low.clone(),
            high: high.clone(),
            mean: (high + low) / 2.,
            variance: (high - low).square() / 12.,
        }
    }

    pub fn new_scalar(low: f32, high: f32) -> Self {
        Self::new(&Tensor::from(low), &Tensor::from(high))
    }

    pub fn low(&self) -> &Tensor {
        &self.low
    }

    pub fn high(&self) -> &Tensor {
        &self.high
    }
}

impl Distribution for Uniform {
    fn name(&self) -> &str {
        "Uniform"
    }

    fn address_suffix(&self) -> &str {
        "_Uniform"
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tensor, DistributionError> {
        let r = Tensor::new_uniform(self.mean.shape(), rng);
        Ok(&self.low + r * (&self.high - &self.low))
    }

    /// ln(1[low <= x < high]) - ln(high - low)
    fn log_prob(&self, value: &Tensor) -> Result<Tensor, DistributionError> {
        let inside = value.ge(&self.low) * value.lt(&self.high);
        Ok(inside.ln() - (&self.high - &self.low).ln())
    }

    fn mean(&self) -> Result<Tensor, DistributionError> {
        Ok(self.mean.clone())
    }

    fn variance(&self) -> Result<Tensor, DistributionError> {
        Ok(self.variance.clone())
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform(low:{}, high:{})", self.low, self.high)
    }
}
