/*
 * @Description  : 经验分布：由有限个（取值，权重）对构成的加权点质量分布。
 *                 构造时对对数权重做softmax归一化，可选地合并完全相同的取值，
 *                 并按权重降序存放；均值、方差（含不加权版本）首次访问时计算并缓存。
 */

use super::Distribution;
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use log::debug;
use rand::Rng;
use rand::distributions::{Distribution as _, WeightedIndex};
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::OnceLock;

/// 经验分布。`T`为取值类型，默认为[`Tensor`]；
/// 只有取值为[`Tensor`]时才提供均值、方差等统计量以及[`Distribution`]接口。
#[derive(Debug, Clone)]
pub struct Empirical<T = Tensor> {
    values: Vec<T>,
    weights: Vec<f32>,
    sampler: WeightedIndex<f32>,
    mean: OnceLock<Tensor>,
    variance: OnceLock<Tensor>,
    mean_unweighted: OnceLock<Tensor>,
    variance_unweighted: OnceLock<Tensor>,
}

impl<T: Serialize> Empirical<T> {
    /// * `values` - 取值序列
    /// * `log_weights` - 与`values`等长的对数权重（任意形状，会被展平）；为`None`时视为均匀分布，即每个取值的对数权重为ln(1/N)
    /// * `combine_duplicates` - 是否合并编码完全相同的取值（权重相加）
    ///
    /// 合并重复值时，只保留首次出现的取值对象，后续重复者仅贡献其权重；
    /// 被丢弃的取值不会与保留者共享梯度。
    pub fn new(
        values: Vec<T>,
        log_weights: Option<&Tensor>,
        combine_duplicates: bool,
    ) -> Result<Self, DistributionError> {
        let length = values.len();
        if length == 0 {
            return Err(DistributionError::EmptyValues);
        }
        let log_weights = match log_weights {
            Some(log_weights) => {
                let log_weights = log_weights.flatten();
                if log_weights.size() != length {
                    return Err(DistributionError::LengthMismatch {
                        values: length,
                        weights: log_weights.size(),
                    });
                }
                log_weights
            }
            None => Tensor::new_full(-(length as f32).ln(), &[length]),
        };
        let weights = log_weights.softmax().to_vec();

        let (values, weights) = if combine_duplicates {
            combine_duplicate_values(values, weights)?
        } else {
            (values, weights)
        };

        // 稳定排序：权重相同的取值保持原有的先后顺序
        let mut pairs = values.into_iter().zip(weights).collect::<Vec<_>>();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (values, weights): (Vec<T>, Vec<f32>) = pairs.into_iter().unzip();

        let sampler =
            WeightedIndex::new(&weights).map_err(|_| DistributionError::InvalidWeights)?;

        Ok(Self {
            values,
            weights,
            sampler,
            mean: OnceLock::new(),
            variance: OnceLock::new(),
            mean_unweighted: OnceLock::new(),
            variance_unweighted: OnceLock::new(),
        })
    }
}

/// 以取值的bincode编码为键分组，合并后的顺序为各取值首次出现的顺序
fn combine_duplicate_values<T: Serialize>(
    values: Vec<T>,
    weights: Vec<f32>,
) -> Result<(Vec<T>, Vec<f32>), DistributionError> {
    let total = values.len();
    let mut slots: HashMap<Vec<u8>, usize> = HashMap::with_capacity(total);
    let mut kept_values = Vec::with_capacity(total);
    let mut kept_weights: Vec<f32> = Vec::with_capacity(total);

    for (value, weight) in values.into_iter().zip(weights) {
        let key = bincode::serialize(&value)
            .map_err(|e| DistributionError::Encoding(e.to_string()))?;
        match slots.entry(key) {
            Entry::Occupied(slot) => kept_weights[*slot.get()] += weight,
            Entry::Vacant(slot) => {
                slot.insert(kept_values.len());
                kept_values.push(value);
                kept_weights.push(weight);
            }
        }
    }

    let merged = total - kept_values.len();
    if merged > 0 {
        debug!("经验分布合并了{merged}个重复取值（共{total}个），被合并的取值对象已丢弃");
    }
    Ok((kept_values, kept_weights))
}

impl<T> Empirical<T> {
    /// 去重后的取值个数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 构造时已保证至少有一个取值，故恒为false
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 按权重降序排列的取值
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// 与[`Self::values`]一一对应的归一化权重
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// 按权重随机抽取一个取值
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.sampler.sample(rng)]
    }

    /// Σ weight_i · func(value_i)
    pub fn weighted_sum<F>(&self, func: F) -> Tensor
    where
        F: Fn(&T) -> Tensor,
    {
        self.values
            .iter()
            .zip(&self.weights)
            .fold(Tensor::from(0.), |acc, (value, &weight)| {
                acc + func(value) * weight
            })
    }
}

impl Empirical<Tensor> {
    fn cached_mean(&self) -> &Tensor {
        self.mean.get_or_init(|| self.weighted_sum(Tensor::clone))
    }

    fn cached_variance(&self) -> &Tensor {
        self.variance.get_or_init(|| {
            let mean = self.cached_mean();
            self.weighted_sum(|x| (x - mean).square())
        })
    }

    fn cached_mean_unweighted(&self) -> &Tensor {
        self.mean_unweighted.get_or_init(|| {
            let total = self
                .values
                .iter()
                .fold(Tensor::from(0.), |acc, value| acc + value);
            total / self.len() as f32
        })
    }

    fn cached_variance_unweighted(&self) -> &Tensor {
        self.variance_unweighted.get_or_init(|| {
            let mean = self.cached_mean_unweighted();
            let total = self
                .values
                .iter()
                .fold(Tensor::from(0.), |acc, value| acc + (value - mean).square());
            total / self.len() as f32
        })
    }

    /// 忽略权重、把每个取值视为等概率时的均值
    pub fn mean_unweighted(&self) -> Tensor {
        self.cached_mean_unweighted().clone()
    }

    /// 忽略权重时的方差
    pub fn variance_unweighted(&self) -> Tensor {
        self.cached_variance_unweighted().clone()
    }

    pub fn stddev_unweighted(&self) -> Tensor {
        self.cached_variance_unweighted().sqrt()
    }
}

impl Distribution for Empirical<Tensor> {
    fn name(&self) -> &str {
        "Empirical"
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tensor, DistributionError> {
        Ok(self.draw(rng).clone())
    }

    fn expectation(
        &self,
        func: &dyn Fn(&Tensor) -> Tensor,
    ) -> Result<Tensor, DistributionError> {
        Ok(self.weighted_sum(func))
    }

    fn mean(&self) -> Result<Tensor, DistributionError> {
        Ok(self.cached_mean().clone())
    }

    fn variance(&self) -> Result<Tensor, DistributionError> {
        Ok(self.cached_variance().clone())
    }
}

impl fmt::Display for Empirical<Tensor> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Empirical(length:{}, mean:{}, stddev:{})",
            self.len(),
            self.cached_mean(),
            self.cached_variance().sqrt()
        )
    }
}
