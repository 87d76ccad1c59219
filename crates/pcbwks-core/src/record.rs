//! 绘图记录模型
//!
//! pcbnew 绘图层上可转换的两类记录：
//! - 直线段 (LineRecord)
//! - 文本注记 (TextRecord)
//!
//! 记录在提取时构造，经坐标变换后立即输出，不做跨记录共享。

use crate::math::Point2;
use serde::{Deserialize, Serialize};

/// 直线段记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub start: Point2,
    pub end: Point2,
}

impl LineRecord {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// 字号（宽 × 高，毫米）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSize {
    pub width: f64,
    pub height: f64,
}

impl FontSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 文本注记记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    /// 文本内容（可含 `{dblquote}` 转义标记，输出时替换）
    pub content: String,
    /// 放置位置
    pub position: Point2,
    /// 字号
    pub font_size: FontSize,
    /// 笔画宽度（提取时校验数值，wks 输出不含该字段）
    pub thickness: f64,
    /// 样式关键字（如 `bold italic`），可为空
    pub style: String,
    /// 对齐关键字（如 `left bottom`）
    pub justify: String,
}

/// 一次提取得到的全部绘图内容，按记录种类分组
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetContent {
    pub lines: Vec<LineRecord>,
    pub texts: Vec<TextRecord>,
}

impl SheetContent {
    /// 记录总数
    pub fn record_count(&self) -> usize {
        self.lines.len() + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
