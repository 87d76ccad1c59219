//! kicad_wks 工作表模板输出
//!
//! # 文件结构
//!
//! ```text
//! (kicad_wks (version 20220228) (generator pl_editor)
//!   (setup (textsize 1.5 1.5)(linewidth 0.075)(textlinewidth 0.075)
//!   (left_margin 0)(right_margin 0)(top_margin 0)(bottom_margin 0))
//!   (line (name "") (start 584 400) (end 564 380))
//!   (tbtext "REV A" (name "") (pos 589 415)(font (size 1.5 2) bold) (justify center))
//! )
//! ```
//!
//! 输出必须与 pl_editor 的语法逐字节兼容。数字使用舍入后的默认
//! 十进制文本，不补齐尾零；wks 的读取端对数字文本是宽容的。

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::FileError;
use pcbwks_core::record::{LineRecord, SheetContent, TextRecord};
use pcbwks_core::transform::{font_to_sheet, PageSetup};

/// wks 格式版本
const WKS_VERSION: u32 = 20220228;
/// 生成器标识
const WKS_GENERATOR: &str = "pl_editor";
/// setup 块的固定字号
const WKS_TEXT_SIZE: &str = "1.5 1.5";

/// wks 模板写入器
///
/// 构造时写入文件头；记录按种类写入（先全部直线，后全部文本）；
/// finish 补上结束括号并返回整篇文档。
pub struct WksWriter {
    setup: PageSetup,
    output: Vec<String>,
}

impl WksWriter {
    pub fn new(setup: PageSetup) -> Self {
        let mut writer = Self {
            setup,
            output: Vec::new(),
        };
        writer.write_header();
        writer
    }

    /// 写入文件头与 setup 块（零边距）
    fn write_header(&mut self) {
        self.output.push(format!(
            "(kicad_wks (version {}) (generator {})",
            WKS_VERSION, WKS_GENERATOR
        ));
        self.output.push(format!(
            "  (setup (textsize {})(linewidth {})(textlinewidth {})",
            WKS_TEXT_SIZE, self.setup.line_width, self.setup.text_line_width
        ));
        self.output.push(
            "  (left_margin 0)(right_margin 0)(top_margin 0)(bottom_margin 0))".to_string(),
        );
    }

    /// 写入一条直线记录（名称字段留空）
    pub fn write_line(&mut self, line: &LineRecord) {
        let start = self.setup.to_sheet(line.start);
        let end = self.setup.to_sheet(line.end);
        self.output.push(format!(
            "  (line (name \"\") (start {} {}) (end {} {}))",
            start.x, start.y, end.x, end.y
        ));
    }

    /// 写入一条文本记录
    ///
    /// `{dblquote}` 标记在此处替换为 `\"`；样式与对齐关键字原样插入，
    /// 样式为空时保留参考格式里字号后的那个空格。
    pub fn write_text(&mut self, text: &TextRecord) {
        let pos = self.setup.to_sheet(text.position);
        let (size_a, size_b) = font_to_sheet(text.font_size);
        let content = text.content.replace("{dblquote}", "\\\"");
        self.output.push(format!(
            "  (tbtext \"{}\" (name \"\") (pos {} {})(font (size {} {}) {}) (justify {}))",
            content, pos.x, pos.y, size_a, size_b, text.style, text.justify
        ));
    }

    /// 写入整张图框内容：先直线后文本
    pub fn write_sheet(&mut self, sheet: &SheetContent) {
        for line in &sheet.lines {
            self.write_line(line);
        }
        for text in &sheet.texts {
            self.write_text(text);
        }
    }

    /// 结束文档并返回全部文本
    pub fn finish(mut self) -> String {
        self.output.push(")".to_string());
        let mut document = self.output.join("\n");
        document.push('\n');
        document
    }

    /// 保存到文件
    pub fn save_to_file(self, path: &Path) -> Result<(), FileError> {
        let document = self.finish();
        let mut file = File::create(path)?;
        file.write_all(document.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcbwks_core::math::Point2;
    use pcbwks_core::record::FontSize;

    #[test]
    fn test_header_and_footer() {
        let document = WksWriter::new(PageSetup::default()).finish();
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(
            lines,
            vec![
                "(kicad_wks (version 20220228) (generator pl_editor)",
                "  (setup (textsize 1.5 1.5)(linewidth 0.075)(textlinewidth 0.075)",
                "  (left_margin 0)(right_margin 0)(top_margin 0)(bottom_margin 0))",
                ")",
            ]
        );
        assert!(document.ends_with(")\n"));
    }

    #[test]
    fn test_write_line_transforms_endpoints() {
        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_line(&LineRecord::new(
            Point2::new(10.0, 20.0),
            Point2::new(30.0, 40.0),
        ));
        let document = writer.finish();
        assert!(document.contains("  (line (name \"\") (start 584 400) (end 564 380))"));
    }

    #[test]
    fn test_write_text_swaps_font_size() {
        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_text(&TextRecord {
            content: "REV A".to_string(),
            position: Point2::new(5.0, 5.0),
            font_size: FontSize::new(2.0, 1.5),
            thickness: 0.2,
            style: "bold".to_string(),
            justify: "center".to_string(),
        });
        let document = writer.finish();
        assert!(document.contains(
            "  (tbtext \"REV A\" (name \"\") (pos 589 415)(font (size 1.5 2) bold) (justify center))"
        ));
    }

    #[test]
    fn test_write_text_substitutes_dblquote_marker() {
        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_text(&TextRecord {
            content: "Title{dblquote}Block".to_string(),
            position: Point2::new(5.0, 5.0),
            font_size: FontSize::new(2.0, 1.5),
            thickness: 0.2,
            style: "bold".to_string(),
            justify: "center".to_string(),
        });
        let document = writer.finish();
        assert!(document.contains(r#"(tbtext "Title\"Block" (name "")"#));
        assert_eq!(document.matches('\\').count(), 1);
    }

    #[test]
    fn test_write_text_with_empty_style() {
        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_text(&TextRecord {
            content: "plain".to_string(),
            position: Point2::new(0.0, 0.0),
            font_size: FontSize::new(1.0, 1.0),
            thickness: 0.1,
            style: String::new(),
            justify: "left".to_string(),
        });
        let document = writer.finish();
        assert!(document.contains("(font (size 1 1) ) (justify left))"));
    }

    #[test]
    fn test_write_sheet_groups_lines_before_texts() {
        let mut sheet = SheetContent::default();
        sheet.texts.push(TextRecord {
            content: "t".to_string(),
            position: Point2::new(0.0, 0.0),
            font_size: FontSize::new(1.0, 1.0),
            thickness: 0.1,
            style: String::new(),
            justify: "left".to_string(),
        });
        sheet
            .lines
            .push(LineRecord::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));

        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_sheet(&sheet);
        let document = writer.finish();

        let line_pos = document.find("(line ").unwrap();
        let text_pos = document.find("(tbtext ").unwrap();
        assert!(line_pos < text_pos);
    }

    #[test]
    fn test_save_to_file() {
        let path = std::env::temp_dir().join("pcbwks_writer_test.kicad_wks");

        let mut writer = WksWriter::new(PageSetup::default());
        writer.write_line(&LineRecord::new(
            Point2::new(0.0, 0.0),
            Point2::new(594.0, 420.0),
        ));
        writer.save_to_file(&path).expect("Failed to save");

        let document = std::fs::read_to_string(&path).expect("Failed to read back");
        assert!(document.starts_with("(kicad_wks"));
        assert!(document.contains("(start 594 420) (end 0 0)"));

        std::fs::remove_file(&path).ok();
    }
}
