use crate::tensor::Tensor;
use ndarray::{ArrayViewD, Axis};
use std::fmt;

fn write_nested(f: &mut fmt::Formatter, view: ArrayViewD<'_, f32>) -> fmt::Result {
    if view.ndim() == 0 {
        return match view.iter().next() {
            Some(value) => write!(f, "{value:.4}"),
            None => Ok(()),
        };
    }
    write!(f, "[")?;
    for (i, sub_view) in view.axis_iter(Axis(0)).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_nested(f, sub_view)?;
    }
    write!(f, "]")
}

/// 标量直接打印数值，其余张量按嵌套方括号打印（不附带形状信息）
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.number() {
            Some(number) => write!(f, "{number:.4}"),
            None => write_nested(f, self.data.view()),
        }
    }
}
