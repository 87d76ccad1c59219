//! 数学基础类型
//!
//! 基于 nalgebra 的二维点与向量别名。坐标单位为毫米。

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;

/// 二维向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-9;
