/*
 * @Description  : 张量的逐元素比较，结果以1.0（真）或0.0（假）的张量表示，
 *                 可直接与其他张量相乘作为示性函数（indicator）使用。
 *                 含NaN的比较结果恒为0.0。
 */

use crate::tensor::Tensor;

fn indicator(condition: bool) -> f32 {
    if condition { 1. } else { 0. }
}

impl Tensor {
    /// self >= other
    pub fn ge(&self, other: &Tensor) -> Tensor {
        self.zip_with(other, |a, b| indicator(a >= b))
    }

    /// self > other
    pub fn gt(&self, other: &Tensor) -> Tensor {
        self.zip_with(other, |a, b| indicator(a > b))
    }

    /// self <= other
    pub fn le(&self, other: &Tensor) -> Tensor {
        self.zip_with(other, |a, b| indicator(a <= b))
    }

    /// self < other
    pub fn lt(&self, other: &Tensor) -> Tensor {
        self.zip_with(other, |a, b| indicator(a < b))
    }
}
