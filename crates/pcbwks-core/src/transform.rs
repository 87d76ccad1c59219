//! 页面坐标变换
//!
//! pcbnew 坐标原点在页面左上角、Y 轴向下；kicad_wks 模板以页面角为
//! 参考。按本工具的约定，两个坐标轴同时相对固定页面尺寸翻转。字号
//! 只交换分量并舍入，不参与轴翻转。
//!
//! 所有数值在输出前舍入到 4 位小数，wks 的解析器对更高精度不可靠。

use crate::math::Point2;
use crate::record::FontSize;
use serde::{Deserialize, Serialize};

/// wks 解析器可靠支持的小数位数
pub const WKS_DECIMAL_PLACES: i32 = 4;

/// 舍入到 wks 支持的精度
///
/// 对已满足精度的值再次舍入保持不变。
pub fn round_wks(value: f64) -> f64 {
    let scale = 10f64.powi(WKS_DECIMAL_PLACES);
    (value * scale).round() / scale
}

/// 字号分量交换并舍入，返回 wks 输出顺序的两个分量
pub fn font_to_sheet(size: FontSize) -> (f64, f64) {
    (round_wks(size.height), round_wks(size.width))
}

/// 页面设置（毫米）
///
/// 默认对应 594×420 的横向页面，线宽与参考实现一致。页面尺寸
/// 不从输入文件推断，其他幅面由调用方显式给出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// 页面宽度
    pub width: f64,
    /// 页面高度
    pub height: f64,
    /// 图线宽度
    pub line_width: f64,
    /// 文本笔画宽度
    pub text_line_width: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width: 594.0,
            height: 420.0,
            line_width: 0.075,
            text_line_width: 0.075,
        }
    }
}

impl PageSetup {
    /// 将 pcbnew 坐标变换为 wks 页面坐标（两轴同时翻转）
    pub fn to_sheet(&self, p: Point2) -> Point2 {
        Point2::new(self.width - round_wks(p.x), self.height - round_wks(p.y))
    }
}
