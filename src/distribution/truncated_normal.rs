/*
 * @Description  : 截断正态分布：把N(mean, stddev²)限制在[low, high]上并重新归一化。
 *                 构造时预先算好标准化边界alpha、beta，它们的标准正态累积概率，
 *                 截断区间的概率质量Z以及ln(stddev·Z)，以便反复计算密度。
 *                 抽样采用逆累积分布函数法；两个边界都在均值右侧时先把区间镜像到左侧，
 *                 使累积概率落在数值精确的下尾，避免f32在1附近饱和。
 */

use super::{Distribution, Normal};
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use log::warn;
use rand::Rng;
use std::f32::consts::SQRT_2;
use std::fmt;
use std::sync::OnceLock;

/// 抽样结果为NaN/±∞时重新抽取的次数限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// 第`warn_after`次尝试时输出一次警告
    pub warn_after: usize,
    /// 尝试`give_up_after`次仍失败则返回[`DistributionError::SampleRetriesExhausted`]
    pub give_up_after: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            warn_after: 10_000,
            give_up_after: 1_000_000,
        }
    }
}

/// 标准正态分布的累积分布函数Φ(x) = 0.5·erfc(-x/√2)
fn standard_normal_cdf(x: &Tensor) -> Tensor {
    (-x / SQRT_2).erfc() * 0.5
}

/// Φ的反函数：-√2·erfc_inv(2p)，p接近0时仍然精确
fn standard_normal_icdf(p: &Tensor) -> Tensor {
    -(p * 2.).erfc_inv() * SQRT_2
}

/// x·φ(x)，在x = ±∞处取极限值0（而不是∞·0 = NaN）
fn times_density(x: &Tensor, density: &Tensor) -> Tensor {
    (x * density).zip_with(x, |v, x| if x.is_infinite() { 0. } else { v })
}

#[derive(Debug, Clone)]
pub struct TruncatedNormal {
    mean_non_truncated: Tensor,
    stddev_non_truncated: Tensor,
    low: Tensor,
    high: Tensor,
    standard_normal: Normal,
    alpha: Tensor,
    beta: Tensor,
    /// 抽样区间是否被镜像到均值左侧（1.0为是）
    mirrored: Tensor,
    /// 镜像后区间下端点处的Φ值
    cdf_low: Tensor,
    z: Tensor,
    log_stddev_z: Tensor,
    retry: RetryConfig,
    mean: OnceLock<Tensor>,
    variance: OnceLock<Tensor>,
}

impl TruncatedNormal {
    /// * `mean_non_truncated`、`stddev_non_truncated` - 截断前正态分布的参数
    /// * `low`、`high` - 截断区间（闭区间），可以为±∞
    pub fn new(
        mean_non_truncated: &Tensor,
        stddev_non_truncated: &Tensor,
        low: &Tensor,
        high: &Tensor,
    ) -> Self {
        let alpha = (low - mean_non_truncated) / stddev_non_truncated;
        let beta = (high - mean_non_truncated) / stddev_non_truncated;

        let mirrored = alpha.gt(&Tensor::from(0.));
        let tail_low = Tensor::where_cond(&mirrored, &-&beta, &alpha);
        let tail_high = Tensor::where_cond(&mirrored, &-&alpha, &beta);
        let cdf_low = standard_normal_cdf(&tail_low);
        let z = standard_normal_cdf(&tail_high) - &cdf_low;
        let log_stddev_z = (stddev_non_truncated * &z).ln();

        Self {
            mean_non_truncated: mean_non_truncated.clone(),
            stddev_non_truncated: stddev_non_truncated.clone(),
            low: low.clone(),
            high: high.clone(),
            standard_normal: Normal::standard_like(mean_non_truncated),
            alpha,
            beta,
            mirrored,
            cdf_low,
            z,
            log_stddev_z,
            retry: RetryConfig::default(),
            mean: OnceLock::new(),
            variance: OnceLock::new(),
        }
    }

    /// 以纯数作为参数，得到形状为[1]的截断正态分布
    pub fn new_scalar(
        mean_non_truncated: f32,
        stddev_non_truncated: f32,
        low: f32,
        high: f32,
    ) -> Self {
        Self::new(
            &Tensor::from(mean_non_truncated),
            &Tensor::from(stddev_non_truncated),
            &Tensor::from(low),
            &Tensor::from(high),
        )
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn low(&self) -> &Tensor {
        &self.low
    }

    pub fn high(&self) -> &Tensor {
        &self.high
    }

    pub fn mean_non_truncated(&self) -> &Tensor {
        &self.mean_non_truncated
    }

    pub fn stddev_non_truncated(&self) -> &Tensor {
        &self.stddev_non_truncated
    }

    pub fn variance_non_truncated(&self) -> Tensor {
        self.stddev_non_truncated.square()
    }

    /// 截断区间[low, high]在原正态分布下的概率质量Z
    pub fn truncation_mass(&self) -> &Tensor {
        &self.z
    }

    fn density(&self, x: &Tensor) -> Tensor {
        self.standard_normal.log_density(x).exp()
    }

    /// 一次逆累积分布函数抽样，结果可能因浮点饱和而为NaN/±∞
    fn sample_once<R: Rng + ?Sized>(&self, rng: &mut R) -> Tensor {
        let r = Tensor::new_uniform(self.z.shape(), rng);
        let standardized = standard_normal_icdf(&(&self.cdf_low + r * &self.z));
        let standardized = Tensor::where_cond(&self.mirrored, &-&standardized, &standardized);
        standardized * &self.stddev_non_truncated + &self.mean_non_truncated
    }
}

impl Distribution for TruncatedNormal {
    fn name(&self) -> &str {
        "TruncatedNormal"
    }

    fn address_suffix(&self) -> &str {
        "_TruncatedNormal"
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tensor, DistributionError> {
        for attempt in 1..=self.retry.give_up_after {
            if attempt == self.retry.warn_after {
                warn!(
                    "截断正态分布抽样已尝试{attempt}次仍未得到有限值（截断区间可能位于极端尾部：low={}, high={}），抽样可能非常耗时",
                    self.low, self.high
                );
            }
            let value = self.sample_once(rng);
            if !value.has_nan_or_inf() {
                // erfc_inv的舍入误差可能让结果略微越界
                return Ok(value.clamp_between(&self.low, &self.high));
            }
        }
        Err(DistributionError::SampleRetriesExhausted {
            attempts: self.retry.give_up_after,
        })
    }

    /// 区间外为-∞；区间内为标准化取值的标准正态对数密度减去ln(stddev·Z)
    fn log_prob(&self, value: &Tensor) -> Result<Tensor, DistributionError> {
        let inside = value.ge(&self.low) * value.le(&self.high);
        let standardized = (value - &self.mean_non_truncated) / &self.stddev_non_truncated;
        Ok(inside.ln() + self.standard_normal.log_density(&standardized) - &self.log_stddev_z)
    }

    /// mean + stddev·(φ(alpha) - φ(beta))/Z
    fn mean(&self) -> Result<Tensor, DistributionError> {
        let mean = self.mean.get_or_init(|| {
            let shift = (self.density(&self.alpha) - self.density(&self.beta)) / &self.z;
            &self.mean_non_truncated + &self.stddev_non_truncated * shift
        });
        Ok(mean.clone())
    }

    /// stddev²·(1 + (alpha·φ(alpha) - beta·φ(beta))/Z - ((φ(alpha) - φ(beta))/Z)²)
    fn variance(&self) -> Result<Tensor, DistributionError> {
        let variance = self.variance.get_or_init(|| {
            let density_alpha = self.density(&self.alpha);
            let density_beta = self.density(&self.beta);
            let first = (times_density(&self.alpha, &density_alpha)
                - times_density(&self.beta, &density_beta))
                / &self.z;
            let second = ((density_alpha - density_beta) / &self.z).square();
            self.variance_non_truncated() * (first + 1. - second)
        });
        Ok(variance.clone())
    }
}

impl fmt::Display for TruncatedNormal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TruncatedNormal(mean_non_truncated:{}, stddev_non_truncated:{}, low:{}, high:{})",
            self.mean_non_truncated, self.stddev_non_truncated, self.low, self.high
        )
    }
}
