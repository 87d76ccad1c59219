//! PCBWKS 核心转换模型
//!
//! 提供 pcbnew 绘图记录的数据类型与 wks 页面坐标变换。
//!
//! # 架构设计
//!
//! 转换流程分三步，单趟完成：
//! - 提取（pcbwks-file）：从 pcbnew 文本中识别直线与文本记录
//! - 变换（本 crate）：页面坐标翻转与固定精度舍入
//! - 输出（pcbwks-file）：序列化为 kicad_wks 模板
//!
//! # 示例
//!
//! ```rust
//! use pcbwks_core::prelude::*;
//!
//! let setup = PageSetup::default();
//! let p = setup.to_sheet(Point2::new(10.0, 20.0));
//! assert_eq!((p.x, p.y), (584.0, 400.0));
//! ```

pub mod math;
pub mod record;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::math::{Point2, Vector2};
    pub use crate::record::{FontSize, LineRecord, SheetContent, TextRecord};
    pub use crate::transform::{font_to_sheet, round_wks, PageSetup, WKS_DECIMAL_PLACES};
}
