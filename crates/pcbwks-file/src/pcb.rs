//! pcbnew 图形记录提取
//!
//! 从 .kicad_pcb 文本中识别绘图层上的直线 (gr_line) 与文本 (gr_text)
//! 记录。形状不符、子句缺失或位于其他图层的节点一律跳过，不视为
//! 错误；匹配成功的记录里数字无法转换才是致命错误。
//!
//! 曲线 (gr_arc / gr_curve) 标签不同，自然不会被匹配。

use crate::error::FileError;
use crate::sexpr::{self, Sexpr};
use pcbwks_core::math::Point2;
use pcbwks_core::record::{FontSize, LineRecord, SheetContent, TextRecord};

/// 可转换注记所在的 pcbnew 绘图层
pub const DRAWING_LAYER: &str = "Dwgs.User";

/// 从 pcbnew 文本中提取绘图层内容
///
/// 记录按种类分组返回；每类内部保持文件中的出现顺序。
pub fn extract_drawing(contents: &str) -> Result<SheetContent, FileError> {
    let nodes = sexpr::parse(contents)?;
    let mut sheet = SheetContent::default();
    for node in &nodes {
        collect(node, &mut sheet)?;
    }
    Ok(sheet)
}

/// 递归遍历节点树，收集可识别的记录
fn collect(node: &Sexpr, sheet: &mut SheetContent) -> Result<(), FileError> {
    match node.tag() {
        Some("gr_line") => {
            if let Some(line) = convert_line(node)? {
                sheet.lines.push(line);
            }
        }
        Some("gr_text") => {
            if let Some(text) = convert_text(node)? {
                sheet.texts.push(text);
            }
        }
        _ => {
            for child in node.children() {
                collect(child, sheet)?;
            }
        }
    }
    Ok(())
}

/// 转换 gr_line 节点
///
/// 带 layer 子句但不在绘图层上的线段跳过；未声明图层的线段保留。
fn convert_line(node: &Sexpr) -> Result<Option<LineRecord>, FileError> {
    if let Some(layer) = layer_name(node) {
        if layer != DRAWING_LAYER {
            return Ok(None);
        }
    }

    let (Some(start), Some(end)) = (coord_pair(node, "start")?, coord_pair(node, "end")?)
    else {
        return Ok(None);
    };

    Ok(Some(LineRecord::new(start, end)))
}

/// 转换 gr_text 节点
///
/// 要求带引号的内容、at 位置、绘图层 layer 以及嵌套的 font/justify
/// 子句；任一要素缺失都按形状不符跳过。样式关键字可以为空。
fn convert_text(node: &Sexpr) -> Result<Option<TextRecord>, FileError> {
    let Some(content) = node.children().first().and_then(Sexpr::as_str) else {
        return Ok(None);
    };

    if layer_name(node) != Some(DRAWING_LAYER) {
        return Ok(None);
    }

    let Some(position) = coord_pair(node, "at")? else {
        return Ok(None);
    };

    let Some(font) = node.child("effects").and_then(|e| e.child("font")) else {
        return Ok(None);
    };
    let Some(font_size) = font_size(font)? else {
        return Ok(None);
    };
    let Some(thickness) = single_number(font, "thickness")? else {
        return Ok(None);
    };
    let style = keyword_atoms(font);

    let Some(justify) = node.child("effects").and_then(|e| e.child("justify")) else {
        return Ok(None);
    };
    let justify = keyword_atoms(justify);
    if justify.is_empty() {
        return Ok(None);
    }

    Ok(Some(TextRecord {
        content: content.to_string(),
        position,
        font_size,
        thickness,
        style,
        justify,
    }))
}

/// 节点的 layer 子句内容（带引号或裸原子均可）
fn layer_name(node: &Sexpr) -> Option<&str> {
    let first = node.child("layer")?.children().first()?;
    first.as_str().or_else(|| first.as_atom())
}

/// 读取形如 `(tag x y ...)` 的坐标对，多余分量（如旋转角）忽略
fn coord_pair(node: &Sexpr, tag: &str) -> Result<Option<Point2>, FileError> {
    let Some(clause) = node.child(tag) else {
        return Ok(None);
    };
    let children = clause.children();
    let (Some(x), Some(y)) = (
        children.first().and_then(Sexpr::as_atom),
        children.get(1).and_then(Sexpr::as_atom),
    ) else {
        return Ok(None);
    };
    let (Some(x), Some(y)) = (parse_number(x)?, parse_number(y)?) else {
        return Ok(None);
    };
    Ok(Some(Point2::new(x, y)))
}

/// 读取字号子句 `(size w h)`
fn font_size(font: &Sexpr) -> Result<Option<FontSize>, FileError> {
    let Some(pair) = coord_pair(font, "size")? else {
        return Ok(None);
    };
    Ok(Some(FontSize::new(pair.x, pair.y)))
}

/// 读取形如 `(tag v)` 的单个数值
fn single_number(node: &Sexpr, tag: &str) -> Result<Option<f64>, FileError> {
    let Some(atom) = node
        .child(tag)
        .and_then(|c| c.children().first())
        .and_then(Sexpr::as_atom)
    else {
        return Ok(None);
    };
    parse_number(atom)
}

/// 收集列表中的裸关键字原子（bold、left 等），按空格拼接
fn keyword_atoms(node: &Sexpr) -> String {
    node.children()
        .iter()
        .filter_map(Sexpr::as_atom)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 匹配记录中的数字原子
///
/// 仅由数字、小数点和符号构成却无法转换的原子（如 `1.2.3`）说明
/// 模式与文件不一致，按致命错误处理；含其他字符的原子视为形状不符。
fn parse_number(atom: &str) -> Result<Option<f64>, FileError> {
    if atom.is_empty()
        || !atom
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Ok(None);
    }
    match atom.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(FileError::InvalidNumber(atom.to_string())),
    }
}
