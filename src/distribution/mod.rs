//! # 概率分布模块
//!
//! 提供经验分布（[`Empirical`]）、类别分布（[`Categorical`]）、正态分布（[`Normal`]）、
//! 截断正态分布（[`TruncatedNormal`]）与均匀分布（[`Uniform`]）。
//! 所有参数、样本与对数密度都以[`Tensor`]表示；随机数发生器由调用方注入，便于复现。
//!
//! 各分布均为构造后不可变的值对象，仅均值、方差等派生统计量会在首次访问时计算并缓存。

mod categorical;
mod empirical;
mod normal;
mod truncated_normal;
mod uniform;

pub use categorical::Categorical;
pub use empirical::Empirical;
pub use normal::Normal;
pub use truncated_normal::{RetryConfig, TruncatedNormal};
pub use uniform::Uniform;

#[cfg(test)]
mod tests;

use crate::errors::DistributionError;
use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;
use rand::Rng;

/// ln(√(2π))
pub(crate) const LN_SQRT_2PI: f32 = 0.918_938_5;

/// 概率分布的公共接口。
/// 某个分布不支持的操作会返回[`DistributionError::NotImplemented`]。
#[enum_dispatch]
pub trait Distribution {
    /// 分布名称，如"Normal"
    fn name(&self) -> &str;

    /// 在更大的推断框架中用于标识该分布的地址后缀，如"_Normal"
    fn address_suffix(&self) -> &str {
        ""
    }

    /// 抽取一个样本
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> Result<Tensor, DistributionError> {
        Err(DistributionError::not_implemented(self.name(), "sample"))
    }

    /// 对数概率（密度）
    fn log_prob(&self, _value: &Tensor) -> Result<Tensor, DistributionError> {
        Err(DistributionError::not_implemented(self.name(), "log_prob"))
    }

    /// 概率（密度），即`exp(log_prob(value))`
    fn prob(&self, value: &Tensor) -> Result<Tensor, DistributionError> {
        Ok(self.log_prob(value)?.exp())
    }

    /// 函数`func`关于该分布的期望 E[func(x)]
    fn expectation(
        &self,
        _func: &dyn Fn(&Tensor) -> Tensor,
    ) -> Result<Tensor, DistributionError> {
        Err(DistributionError::not_implemented(self.name(), "expectation"))
    }

    fn mean(&self) -> Result<Tensor, DistributionError> {
        Err(DistributionError::not_implemented(self.name(), "mean"))
    }

    fn variance(&self) -> Result<Tensor, DistributionError> {
        Err(DistributionError::not_implemented(self.name(), "variance"))
    }

    /// 标准差，默认为方差的平方根
    fn stddev(&self) -> Result<Tensor, DistributionError> {
        Ok(self.variance()?.sqrt())
    }
}

/// 便于以同一类型持有不同分布（如推断框架中按地址记录的各个先验）
#[enum_dispatch(Distribution)]
#[derive(Debug, Clone)]
pub enum DistributionEnum {
    Empirical(Empirical<Tensor>),
    Categorical(Categorical),
    Normal(Normal),
    TruncatedNormal(TruncatedNormal),
    Uniform(Uniform),
}
