//! # Only Prob
//!
//! `only_prob`在`only_torch`风格的张量层之上提供一组概率分布对象：
//! 经验分布、类别分布、正态分布、截断正态分布与均匀分布，
//! 支持抽样、（对数）密度计算以及均值、方差等矩的计算，
//! 供概率编程、推断框架中的提议分布与先验使用。
//!
//! ```
//! use only_prob::distribution::{Distribution, TruncatedNormal};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let dist = TruncatedNormal::new_scalar(0., 1., -1., 1.);
//! let x = dist.sample(&mut rng).unwrap().number().unwrap();
//! assert!((-1. ..=1.).contains(&x));
//! ```

pub mod distribution;
pub mod errors;
pub mod tensor;
pub mod utils;
