/*
 * @Description  : 本类仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 */

use super::Tensor;

impl Tensor {
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断张量是否为标量
    pub fn is_scalar(&self) -> bool {
        self.shape().is_empty() || self.shape().iter().all(|x| *x == 1)
    }

    /// 转化为纯数（number）。若为标量，则返回Some(number)，否则返回None
    pub fn number(&self) -> Option<f32> {
        if self.is_scalar() {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// 按行优先顺序返回所有元素
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 展平为形状为`[size]`的向量
    pub fn flatten(&self) -> Tensor {
        Tensor::new(&self.to_vec(), &[self.size()])
    }

    /// 是否含有NaN或±∞
    pub fn has_nan_or_inf(&self) -> bool {
        self.data.iter().any(|x| !x.is_finite())
    }

    /// 两个张量按NumPy风格广播后的形状，无法广播时返回None
    ///
    /// # 广播规则
    /// - 从右向左对齐维度
    /// - 每个维度必须相等，或其中一个为 1
    /// - 维度数不同时，较短的形状前面补 1
    pub fn broadcast_shape(&self, other: &Self) -> Option<Vec<usize>> {
        broadcast_shapes(self.shape(), other.shape())
    }

    pub fn can_broadcast_with(&self, other: &Self) -> bool {
        self.broadcast_shape(other).is_some()
    }
}

pub(crate) fn broadcast_shapes(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let rank = a.len().max(b.len());
    let mut shape = vec![0; rank];
    for i in 0..rank {
        let dim_a = if i < rank - a.len() { 1 } else { a[i - (rank - a.len())] };
        let dim_b = if i < rank - b.len() { 1 } else { b[i - (rank - b.len())] };
        shape[i] = match (dim_a, dim_b) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => return None,
        };
    }
    Some(shape)
}
