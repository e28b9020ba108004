use super::Distribution;
use crate::errors::DistributionError;
use crate::tensor::Tensor;
use rand::Rng;
use rand::distributions::{Distribution as _, WeightedIndex};
use std::fmt;

/// 类别分布：支撑集为{0, 1, ..., len-1}，`probs`会被展平并归一化
#[derive(Debug, Clone)]
pub struct Categorical {
    probs: Tensor,
    sampler: WeightedIndex<f32>,
    address_suffix: String,
}

impl Categorical {
    pub fn new(probs: &Tensor) -> Result<Self, DistributionError> {
        let probs = probs.flatten();
        if probs.size() == 0 {
            return Err(DistributionError::InvalidProbs("概率向量为空".to_string()));
        }
        if probs.to_vec().iter().any(|&p| !(p >= 0. && p.is_finite())) {
            return Err(DistributionError::InvalidProbs(format!(
                "含有负数或非有限值：{probs}"
            )));
        }
        let total = probs.sum();
        let probs = &probs / &total;
        let sampler = WeightedIndex::new(probs.to_vec())
            .map_err(|e| DistributionError::InvalidProbs(e.to_string()))?;
        let address_suffix = format!("_Categorical(size:{})", probs.size());
        Ok(Self {
            probs,
            sampler,
            address_suffix,
        })
    }

    /// 类别个数
    pub fn len(&self) -> usize {
        self.probs.size()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.size() == 0
    }

    /// 归一化后的概率向量
    pub fn probs(&self) -> &Tensor {
        &self.probs
    }

    /// 支撑集{0, ..., len-1}构成的向量
    fn support(&self) -> Tensor {
        let support = (0..self.len()).map(|i| i as f32).collect::<Vec<_>>();
        Tensor::new(&support, &[self.len()])
    }
}

impl Distribution for Categorical {
    fn name(&self) -> &str {
        "Categorical"
    }

    fn address_suffix(&self) -> &str {
        &self.address_suffix
    }

    /// 返回形状为[1]的类别索引
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tensor, DistributionError> {
        Ok(Tensor::from(self.sampler.sample(rng) as f32))
    }

    /// `value`会被展平，每个元素向零取整后作为类别索引
    fn log_prob(&self, value: &Tensor) -> Result<Tensor, DistributionError> {
        let probs = self.probs.to_vec();
        let log_probs = value
            .to_vec()
            .into_iter()
            .map(|index| {
                let category = index.trunc();
                if category >= 0. && (category as usize) < probs.len() {
                    Ok(probs[category as usize].ln())
                } else {
                    Err(DistributionError::CategoryOutOfRange {
                        index,
                        size: probs.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tensor::new(&log_probs, &[log_probs.len()]))
    }

    fn mean(&self) -> Result<Tensor, DistributionError> {
        Ok(self.support().dot_sum(&self.probs))
    }

    fn variance(&self) -> Result<Tensor, DistributionError> {
        let mean = self.mean()?;
        Ok((self.support() - mean).square().dot_sum(&self.probs))
    }
}

impl fmt::Display for Categorical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Categorical(probs:{})", self.probs)
    }
}
