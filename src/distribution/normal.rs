use super::{Distribution, LN_SQRT_2PI};
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use rand::Rng;
use std::f32::consts::SQRT_2;
use std::fmt;

/// 正态分布N(mean, stddev²)，`mean`与`stddev`可以是任意可相互广播的张量
#[derive(Debug, Clone)]
pub struct Normal {
    mean: Tensor,
    stddev: Tensor,
}

impl Normal {
    pub fn new(mean: &Tensor, stddev: &Tensor) -> Self {
        Self {
            mean: mean.clone(),
            stddev: stddev.clone(),
        }
    }

    /// 以纯数作为参数，得到形状为[1]的正态分布
    pub fn new_scalar(mean: f32, stddev: f32) -> Self {
        Self::new(&Tensor::from(mean), &Tensor::from(stddev))
    }

    /// 与`like`形状相同的标准正态分布N(0, 1)
    pub fn standard_like(like: &Tensor) -> Self {
        Self::new(&like.zeros_like(), &like.ones_like())
    }

    /// 对数密度：-(x-μ)²/(2σ²) - ln σ - ln√(2π)
    pub(crate) fn log_density(&self, value: &Tensor) -> Tensor {
        let z = (value - &self.mean) / &self.stddev;
        z.square() * -0.5 - self.stddev.ln() - LN_SQRT_2PI
    }

    /// 累积分布函数：0.5·(1 + erf((x-μ)/(σ·√2)))
    pub fn cdf(&self, value: &Tensor) -> Tensor {
        (((value - &self.mean) / (&self.stddev * SQRT_2)).erf() + 1.) * 0.5
    }

    /// 累积分布函数的反函数：μ + σ·erfinv(2p-1)·√2
    pub fn icdf(&self, value: &Tensor) -> Tensor {
        &self.mean + &self.stddev * (value * 2. - 1.).erfinv() * SQRT_2
    }
}

impl Distribution for Normal {
    fn name(&self) -> &str {
        "Normal"
    }

    fn address_suffix(&self) -> &str {
        "_Normal"
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tensor, DistributionError> {
        let shape = self
            .mean
            .broadcast_shape(&self.stddev)
            .unwrap_or_else(|| self.mean.shape().to_vec());
        let noise = Tensor::new_standard_normal(&shape, rng);
        Ok(&self.mean + &self.stddev * noise)
    }

    fn log_prob(&self, value: &Tensor) -> Result<Tensor, DistributionError> {
        Ok(self.log_density(value))
    }

    fn mean(&self) -> Result<Tensor, DistributionError> {
        Ok(self.mean.clone())
    }

    fn variance(&self) -> Result<Tensor, DistributionError> {
        Ok(self.stddev.square())
    }

    fn stddev(&self) -> Result<Tensor, DistributionError> {
        Ok(self.stddev.clone())
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal(mean:{}, stddev:{})", self.mean, self.stddev)
    }
}
