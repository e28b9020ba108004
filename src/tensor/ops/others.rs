use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use crate::tensor::property::broadcast_shapes;
use ndarray::{Array, IxDyn, Zip};
use std::cmp::PartialEq;

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对张量中的所有元素求和并返回一个形状为[1]的标量。
    pub fn sum(&self) -> Tensor {
        let value = self.data.iter().map(|&x| f64::from(x)).sum::<f64>();
        Tensor::from(value as f32)
    }

    /// 两个张量逐元素相乘后求和，返回一个形状为[1]的标量。
    /// 这里`dot_sum`（点积和）的概念拓展自线性代数中向量内积的概念，
    /// 只需保证两个张量可以广播即可运算。
    pub fn dot_sum(&self, other: &Tensor) -> Tensor {
        (self * other).sum()
    }

    /// 数值稳定的log-sum-exp：ln(Σexp(x_i))，返回一个形状为[1]的标量。
    /// 最大值为±∞（如全部元素为-∞）时直接返回该最大值。
    pub fn logsumexp(&self) -> Tensor {
        let max = self.max_element();
        if !max.is_finite() {
            return Tensor::from(max);
        }
        let shifted_sum = self.shifted_exp(max).sum();
        Tensor::from((f64::from(max) + shifted_sum.ln()) as f32)
    }

    /// 对全部元素做softmax：exp(x_i - max) / Σexp(x_j - max)，形状不变。
    /// 指数与归一化都在f64中完成，再转回f32，故结果之和在f32精度内为1，
    /// 与元素的数值大小无关。最大值为±∞时结果全为NaN。
    pub fn softmax(&self) -> Tensor {
        let max = self.max_element();
        if !max.is_finite() {
            return Tensor::new_full(f32::NAN, self.shape());
        }
        let shifted = self.shifted_exp(max);
        let total = shifted.sum();
        Tensor {
            data: shifted.mapv(|v| (v / total) as f32),
        }
    }

    fn max_element(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// exp(x_i - max)，在f64中计算
    fn shifted_exp(&self, max: f32) -> Array<f64, IxDyn> {
        let max = f64::from(max);
        self.data.mapv(|x| (f64::from(x) - max).exp())
    }

    /// 将两个张量广播到同一形状后逐元素应用`f`
    ///
    /// # Panics
    /// 如果形状不兼容（无法广播）
    pub fn zip_with<F>(&self, other: &Tensor, f: F) -> Tensor
    where
        F: Fn(f32, f32) -> f32,
    {
        let shape = self.broadcast_shape(other).unwrap_or_else(|| {
            panic!(
                "{}",
                TensorError::OperatorError {
                    operator: Operator::Compare,
                    tensor1_shape: self.shape().to_vec(),
                    tensor2_shape: other.shape().to_vec(),
                }
            )
        });
        let (lhs, rhs) = match (
            self.data.broadcast(IxDyn(&shape)),
            other.data.broadcast(IxDyn(&shape)),
        ) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => panic!("{}", TensorError::IncompatibleShape),
        };
        Tensor {
            data: Zip::from(&lhs).and(&rhs).map_collect(|&a, &b| f(a, b)),
        }
    }

    /// 类似`torch.where(condition, on_true, on_false)`：`condition`中非零的位置取`on_true`，
    /// 否则取`on_false`，三者按NumPy风格广播。
    pub fn where_cond(condition: &Tensor, on_true: &Tensor, on_false: &Tensor) -> Tensor {
        let shape = broadcast_shapes(condition.shape(), on_true.shape())
            .and_then(|shape| broadcast_shapes(&shape, on_false.shape()))
            .unwrap_or_else(|| panic!("{}", TensorError::IncompatibleShape));
        let shape = IxDyn(&shape);
        match (
            condition.data.broadcast(shape.clone()),
            on_true.data.broadcast(shape.clone()),
            on_false.data.broadcast(shape),
        ) {
            (Some(c), Some(t), Some(f)) => Tensor {
                data: Zip::from(&c)
                    .and(&t)
                    .and(&f)
                    .map_collect(|&c, &t, &f| if c != 0. { t } else { f }),
            },
            _ => panic!("{}", TensorError::IncompatibleShape),
        }
    }
}
