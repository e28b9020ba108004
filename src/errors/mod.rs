use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状无法广播，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("数据长度{data_len}与形状{shape:?}不匹配")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    #[error("张量形状不兼容")]
    IncompatibleShape,
}

/// 概率分布相关的错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// 该分布没有实现此操作（如非经验分布的`expectation`）
    #[error("{distribution}分布未实现`{operation}`")]
    NotImplemented {
        distribution: String,
        operation: &'static str,
    },
    #[error("经验分布的取值列表为空")]
    EmptyValues,
    #[error("取值个数（{values}）与对数权重个数（{weights}）不一致")]
    LengthMismatch { values: usize, weights: usize },
    /// 归一化后的权重无法用于抽样（如全部对数权重为-∞或含NaN）
    #[error("权重无效，无法用于抽样")]
    InvalidWeights,
    #[error("概率向量无效：{0}")]
    InvalidProbs(String),
    #[error("类别索引{index}超出取值范围[0, {size})")]
    CategoryOutOfRange { index: f32, size: usize },
    #[error("截断正态分布抽样在{attempts}次尝试后仍未得到有限值")]
    SampleRetriesExhausted { attempts: usize },
    /// 合并重复值时，取值无法编码为字节序列
    #[error("取值编码失败：{0}")]
    Encoding(String),
}

impl DistributionError {
    pub(crate) fn not_implemented(distribution: &str, operation: &'static str) -> Self {
        Self::NotImplemented {
            distribution: distribution.to_string(),
            operation,
        }
    }
}
