/*
 * @Description  : 张量的逐元素数学函数。误差函数及其反函数借助statrs在f64精度下计算后再转回f32，
 *                 以减小正态分布尾部概率的舍入误差。
 */

use crate::tensor::Tensor;
use statrs::function::erf;

impl Tensor {
    /// 对每个元素应用`f`，返回形状相同的新张量
    pub fn map<F>(&self, f: F) -> Tensor
    where
        F: Fn(f32) -> f32,
    {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    pub fn exp(&self) -> Tensor {
        self.map(f32::exp)
    }

    /// 自然对数。0得到-∞，负数得到NaN
    pub fn ln(&self) -> Tensor {
        self.map(f32::ln)
    }

    pub fn sqrt(&self) -> Tensor {
        self.map(f32::sqrt)
    }

    pub fn square(&self) -> Tensor {
        self.map(|x| x * x)
    }

    /// 误差函数 erf(x)
    pub fn erf(&self) -> Tensor {
        self.map(|x| erf::erf(f64::from(x)) as f32)
    }

    /// 误差函数的反函数。输入为±1时得到±∞
    pub fn erfinv(&self) -> Tensor {
        self.map(|x| erf::erf_inv(f64::from(x)) as f32)
    }

    /// 互补误差函数 erfc(x) = 1 - erf(x)，在x较大时比`1 - erf(x)`精确
    pub fn erfc(&self) -> Tensor {
        self.map(|x| erf::erfc(f64::from(x)) as f32)
    }

    /// 互补误差函数的反函数，定义域为(0, 2)，输入为0时得到+∞，为2时得到-∞
    pub fn erfc_inv(&self) -> Tensor {
        self.map(|x| erf::erfc_inv(f64::from(x)) as f32)
    }

    /// 逐元素裁剪到[low, high]区间（low、high可广播）
    pub fn clamp_between(&self, low: &Tensor, high: &Tensor) -> Tensor {
        self.zip_with(low, f32::max).zip_with(high, f32::min)
    }
}
