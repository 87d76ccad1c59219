//! PCBWKS 文件格式处理
//!
//! 支持：
//! - `.kicad_pcb` 绘图层记录提取
//! - `.kicad_wks` 工作表模板输出
//!
//! 转换单趟完成：整篇读入、扫描记录、坐标变换、写出模板。路径与
//! 流的管理留给调用方，本 crate 只在文本之间转换。

pub mod error;
pub mod pcb;
pub mod sexpr;
pub mod wks;

pub use error::FileError;
pub use pcb::{extract_drawing, DRAWING_LAYER};
pub use wks::WksWriter;

use pcbwks_core::transform::PageSetup;

/// 转换统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines: usize,
    pub texts: usize,
}

/// 将 pcbnew 文本转换为 wks 模板文本
///
/// 提取、变换、输出一次完成，返回完整文档与记录计数。
pub fn convert(contents: &str, setup: PageSetup) -> Result<(String, ConvertStats), FileError> {
    let sheet = extract_drawing(contents)?;
    let stats = ConvertStats {
        lines: sheet.lines.len(),
        texts: sheet.texts.len(),
    };

    let mut writer = WksWriter::new(setup);
    writer.write_sheet(&sheet);

    tracing::info!("Converted {} lines, {} text items", stats.lines, stats.texts);

    Ok((writer.finish(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_line_scenario() {
        let input = "(gr_line (start 10.0 20.0) (end 30.0 40.0))";
        let (document, stats) = convert(input, PageSetup::default()).unwrap();

        assert_eq!(stats, ConvertStats { lines: 1, texts: 0 });
        assert!(document.contains("  (line (name \"\") (start 584 400) (end 564 380))"));
    }

    #[test]
    fn test_convert_text_scenario() {
        let input = r#"(gr_text "Title{dblquote}Block" (at 5.0 5.0) (layer "Dwgs.User") (tstamp 0)
            (effects (font (size 2.0 1.5) (thickness 0.2) bold) (justify center)))"#;
        let (document, stats) = convert(input, PageSetup::default()).unwrap();

        assert_eq!(stats, ConvertStats { lines: 0, texts: 1 });
        assert!(document.contains(
            "  (tbtext \"Title\\\"Block\" (name \"\") (pos 589 415)(font (size 1.5 2) bold) (justify center))"
        ));
    }

    #[test]
    fn test_convert_empty_board() {
        let input = "(kicad_pcb (version 20221018) (generator pcbnew))";
        let (document, stats) = convert(input, PageSetup::default()).unwrap();

        assert_eq!(stats, ConvertStats::default());
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], ")");
    }

    #[test]
    fn test_convert_groups_by_kind() {
        let input = r#"(kicad_pcb
  (gr_text "first" (at 1.0 1.0) (layer "Dwgs.User")
    (effects (font (size 1.0 1.0) (thickness 0.1)) (justify left)))
  (gr_line (start 10.0 20.0) (end 30.0 40.0) (layer "Dwgs.User"))
)"#;
        let (document, stats) = convert(input, PageSetup::default()).unwrap();

        assert_eq!(stats, ConvertStats { lines: 1, texts: 1 });
        let line_pos = document.find("(line ").unwrap();
        let text_pos = document.find("(tbtext ").unwrap();
        assert!(line_pos < text_pos);
    }

    #[test]
    fn test_convert_with_custom_page() {
        let setup = PageSetup {
            width: 100.0,
            height: 50.0,
            ..PageSetup::default()
        };
        let input = "(gr_line (start 10.0 20.0) (end 30.0 40.0))";
        let (document, _) = convert(input, setup).unwrap();
        assert!(document.contains("(start 90 30) (end 70 10)"));
    }

    #[test]
    fn test_convert_rejects_unreadable_document() {
        let result = convert("(kicad_pcb (gr_line", PageSetup::default());
        assert!(matches!(result, Err(FileError::InvalidFormat(_))));
    }
}
