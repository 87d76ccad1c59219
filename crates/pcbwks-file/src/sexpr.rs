//! KiCad S 表达式解析器
//!
//! 自己解析 KiCad 的括号记录语法（pcbnew 与 wks 文件共用这种形式），
//! 只做提取所需的最小实现，不校验完整文法。
//!
//! # 文件结构
//!
//! ```text
//! (kicad_pcb (version 20221018) (generator pcbnew)
//!   (gr_line (start 10.0 20.0) (end 30.0 40.0)
//!     (stroke (width 0.1) (type solid)) (layer "Dwgs.User") (tstamp 5a-3f))
//!   (gr_text "REV A" (at 5.0 5.0) (layer "Dwgs.User") (tstamp 7c-11)
//!     (effects (font (size 2.0 1.5) (thickness 0.2) bold) (justify center))
//!   )
//! )
//! ```
//!
//! 每个节点是一个括号列表，首个裸原子是节点标签。记录可以跨越多个
//! 物理行，解析按 token 进行，与换行无关。

use crate::error::FileError;

/// S 表达式节点
#[derive(Debug, Clone, PartialEq)]
pub enum Sexpr {
    /// 裸原子（标签、数字、关键字）
    Atom(String),
    /// 带引号的字符串（不含引号本身，转义已还原）
    Str(String),
    /// 括号列表
    List(Vec<Sexpr>),
}

impl Sexpr {
    /// 列表节点的标签（首个裸原子）
    pub fn tag(&self) -> Option<&str> {
        match self {
            Sexpr::List(items) => match items.first() {
                Some(Sexpr::Atom(tag)) => Some(tag),
                _ => None,
            },
            _ => None,
        }
    }

    /// 标签之后的全部子节点
    pub fn children(&self) -> &[Sexpr] {
        match self {
            Sexpr::List(items) => {
                if matches!(items.first(), Some(Sexpr::Atom(_))) {
                    &items[1..]
                } else {
                    items
                }
            }
            _ => &[],
        }
    }

    /// 查找首个指定标签的子列表
    pub fn child(&self, tag: &str) -> Option<&Sexpr> {
        self.children().iter().find(|c| c.tag() == Some(tag))
    }

    /// 裸原子内容
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Sexpr::Atom(s) => Some(s),
            _ => None,
        }
    }

    /// 字符串内容
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Sexpr::Str(s) => Some(s),
            _ => None,
        }
    }
}

type Stream<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// 解析整篇文本，返回顶层节点序列
pub fn parse(input: &str) -> Result<Vec<Sexpr>, FileError> {
    let mut stream = input.chars().peekable();
    let mut nodes = Vec::new();

    loop {
        skip_whitespace(&mut stream);
        if stream.peek().is_none() {
            break;
        }
        nodes.push(parse_node(&mut stream)?);
    }

    Ok(nodes)
}

fn skip_whitespace(stream: &mut Stream) {
    while matches!(stream.peek(), Some(c) if c.is_whitespace()) {
        stream.next();
    }
}

fn parse_node(stream: &mut Stream) -> Result<Sexpr, FileError> {
    skip_whitespace(stream);
    match stream.peek().copied() {
        Some('(') => {
            stream.next();
            parse_list(stream)
        }
        Some('"') => {
            stream.next();
            parse_string(stream)
        }
        Some(')') => Err(FileError::InvalidFormat("Unexpected ')'".to_string())),
        Some(_) => Ok(Sexpr::Atom(parse_atom(stream))),
        None => Err(FileError::InvalidFormat("Unexpected end of input".to_string())),
    }
}

fn parse_list(stream: &mut Stream) -> Result<Sexpr, FileError> {
    let mut items = Vec::new();
    loop {
        skip_whitespace(stream);
        match stream.peek().copied() {
            Some(')') => {
                stream.next();
                return Ok(Sexpr::List(items));
            }
            None => return Err(FileError::InvalidFormat("Unclosed list".to_string())),
            Some(_) => items.push(parse_node(stream)?),
        }
    }
}

fn parse_string(stream: &mut Stream) -> Result<Sexpr, FileError> {
    let mut content = String::new();
    loop {
        match stream.next() {
            Some('"') => return Ok(Sexpr::Str(content)),
            Some('\\') => match stream.next() {
                Some('n') => content.push('\n'),
                Some('t') => content.push('\t'),
                Some(c) => content.push(c),
                None => {
                    return Err(FileError::InvalidFormat("Unterminated string".to_string()))
                }
            },
            Some(c) => content.push(c),
            None => return Err(FileError::InvalidFormat("Unterminated string".to_string())),
        }
    }
}

fn parse_atom(stream: &mut Stream) -> String {
    let mut atom = String::new();
    while let Some(&c) = stream.peek() {
        if c.is_whitespace() || c == '(' || c == ')' || c == '"' {
            break;
        }
        atom.push(c);
        stream.next();
    }
    atom
}
