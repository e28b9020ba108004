use ndarray::{Array, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::errors::TensorError;

mod ops {
    pub mod arithmetic;
    pub mod compare;
    pub mod math;
    pub mod others;
}

mod print;
mod property;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），在这里不被认为是张量。
///
/// 本库中所有概率分布的参数、样本、对数密度均以`Tensor`表示，
/// 分布层只依赖这里提供的逐元素运算、特殊函数和随机数原语。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap_or_else(|_| {
            panic!(
                "{}",
                TensorError::DataShapeMismatch {
                    data_len: data.len(),
                    shape: shape.to_vec(),
                }
            )
        });
        Tensor { data }
    }

    /// 创建一个所有元素均为`value`的张量
    pub fn new_full(value: f32, shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    pub fn zeros_like(&self) -> Tensor {
        Self::new_full(0., self.shape())
    }

    pub fn ones_like(&self) -> Tensor {
        Self::new_full(1., self.shape())
    }

    /// 创建一个随机张量，其值服从[0, 1)上的均匀分布。
    pub fn new_uniform<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Tensor {
        let data = (0..shape.iter().product::<usize>())
            .map(|_| rng.r#gen::<f32>())
            .collect::<Vec<_>>();
        Tensor::new(&data, shape)
    }

    /// 创建一个服从标准正态分布N(0, 1)的随机张量。
    pub fn new_standard_normal<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Tensor {
        let data = (0..shape.iter().product::<usize>())
            .map(|_| StandardNormal.sample(rng))
            .collect::<Vec<f32>>();
        Tensor::new(&data, shape)
    }
}

impl From<f32> for Tensor {
    /// 将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl From<&[f32]> for Tensor {
    /// 将切片转换为形状为`[n]`的向量
    fn from(values: &[f32]) -> Self {
        Tensor::new(values, &[values.len()])
    }
}
