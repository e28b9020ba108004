use std::fmt;

/// 张量的逐元素二元运算，用于拼出形状无法广播时的报错信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    /// `ge`、`lt`等比较以及`zip_with`
    Compare,
}

impl Operator {
    fn verb(self) -> &'static str {
        match self {
            Self::Add => "相加",
            Self::Sub => "相减",
            Self::Mul => "相乘",
            Self::Div => "相除",
            Self::Compare => "比较",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
