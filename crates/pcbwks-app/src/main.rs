//! PCBWKS 命令行入口
//!
//! 将 pcbnew 文件里 Dwgs.User 图层上的直线与文本转换为 kicad_wks
//! 图框模板，供 pl_editor 继续编辑。适用于 KiCad 7.0 的文件；曲线
//! 不受 pl_editor 支持，转换时忽略。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pcbwks_core::transform::PageSetup;

/// pcbnew 绘图层 → kicad_wks 图框模板转换器
#[derive(Parser, Debug)]
#[command(
    name = "pcbwks",
    version,
    about = "Convert pcbnew drawing-layer graphics to a kicad_wks worksheet template"
)]
struct Args {
    /// 输入 .kicad_pcb 文件
    input: PathBuf,

    /// 输出 .kicad_wks 文件
    output: PathBuf,

    /// 页面宽度（毫米）
    #[arg(long, default_value_t = PageSetup::default().width)]
    page_width: f64,

    /// 页面高度（毫米）
    #[arg(long, default_value_t = PageSetup::default().height)]
    page_height: f64,

    /// 图线宽度（毫米）
    #[arg(long, default_value_t = PageSetup::default().line_width)]
    line_width: f64,

    /// 文本笔画宽度（毫米）
    #[arg(long, default_value_t = PageSetup::default().text_line_width)]
    text_line_width: f64,
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    let args = Args::parse();
    let setup = PageSetup {
        width: args.page_width,
        height: args.page_height,
        line_width: args.line_width,
        text_line_width: args.text_line_width,
    };

    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let (document, stats) = pcbwks_file::convert(&contents, setup)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    std::fs::write(&args.output, document)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Wrote {} lines, {} text items to {}",
        stats.lines,
        stats.texts,
        args.output.display()
    );
    println!(
        "Finished: {} lines, {} text items -> {}",
        stats.lines,
        stats.texts,
        args.output.display()
    );

    Ok(())
}
