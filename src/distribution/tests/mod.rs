mod categorical;
mod dispatch;
mod uniform;

use crate::tensor::Tensor;

/// 取出形状为[1]的张量中的纯数
fn number(tensor: &Tensor) -> f32 {
    tensor.number().unwrap()
}

/// 样本的均值与（有偏）方差
fn sample_moments(samples: &[f32]) -> (f32, f32) {
    let n = samples.len() as f32;
    let mean = samples.iter().sum::<f32>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n;
    (mean, variance)
}
