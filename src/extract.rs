//! Import block extraction.
//!
//! A line-oriented scanner over the leading import block of a source
//! file. Imports are assumed to form a contiguous block at the top:
//! scanning stops at the first line that is neither blank, a comment,
//! an import statement, nor the continuation of one. Statement text is
//! captured verbatim, including the closing quote, an optional
//! semicolon, and any trailing comment on the last physical line.

use crate::models::import::ImportRecord;

/// Comment marker that disables checking for the next import statement.
/// Any disabled import disables the whole block, so a partially
/// reordered fix can never move statements around a pinned one.
pub const DISABLE_MARKER: &str = "imra-disable-next-line";

/// The extracted leading import block of one file.
pub struct ImportBlock {
    pub imports: Vec<ImportRecord>,
    /// True when a disable marker covers an import in the block.
    pub disabled: bool,
}

struct Pending {
    start: usize,
    start_line: usize,
    brace_depth: i32,
    module_path: Option<String>,
    complete: bool,
}

impl Pending {
    fn new(start: usize, start_line: usize) -> Self {
        Pending {
            start,
            start_line,
            brace_depth: 0,
            module_path: None,
            complete: false,
        }
    }
}

/// Scan the leading import block of `source`.
pub fn extract_imports(source: &str) -> ImportBlock {
    let mut imports: Vec<ImportRecord> = Vec::new();
    let mut disabled = false;
    let mut disable_armed: Option<usize> = None;
    let mut in_block_comment = false;
    let mut block_comment_has_marker = false;
    let mut pending: Option<Pending> = None;
    let mut offset = 0usize;
    let mut line_no = 0usize;

    for raw_line in source.split_inclusive('\n') {
        line_no += 1;
        let line_start = offset;
        offset += raw_line.len();
        let content = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        if let Some(p) = pending.as_mut() {
            scan_statement_line(p, content);
            if p.complete {
                push_record(
                    &mut imports,
                    source,
                    p,
                    line_start + content.len(),
                    line_no,
                );
                pending = None;
            }
            continue;
        }

        if in_block_comment {
            if content.contains(DISABLE_MARKER) {
                block_comment_has_marker = true;
            }
            if content.contains("*/") {
                in_block_comment = false;
                if block_comment_has_marker {
                    disable_armed = Some(line_no + 1);
                    block_comment_has_marker = false;
                }
            }
            continue;
        }

        let trimmed = content.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("//") {
            if trimmed.contains(DISABLE_MARKER) {
                disable_armed = Some(line_no + 1);
            }
            continue;
        }
        if trimmed.starts_with("/*") {
            if trimmed.contains("*/") {
                if trimmed.contains(DISABLE_MARKER) {
                    disable_armed = Some(line_no + 1);
                }
            } else {
                block_comment_has_marker = trimmed.contains(DISABLE_MARKER);
                in_block_comment = true;
            }
            continue;
        }
        if is_import_start(trimmed) {
            if disable_armed == Some(line_no) {
                disabled = true;
            }
            let indent = content.len() - trimmed.len();
            let mut p = Pending::new(line_start + indent, line_no);
            scan_statement_line(&mut p, trimmed);
            if p.complete {
                push_record(
                    &mut imports,
                    source,
                    &mut p,
                    line_start + content.len(),
                    line_no,
                );
            } else {
                pending = Some(p);
            }
            continue;
        }
        // First real non-import statement ends the leading block.
        break;
    }

    ImportBlock { imports, disabled }
}

fn push_record(
    imports: &mut Vec<ImportRecord>,
    source: &str,
    p: &mut Pending,
    end: usize,
    end_line: usize,
) {
    imports.push(ImportRecord {
        module_path: p.module_path.take().unwrap_or_default(),
        full_text: source[p.start..end].to_string(),
        sequence_index: imports.len(),
        span: (p.start, end),
        line: p.start_line,
        end_line,
    });
}

fn is_import_start(s: &str) -> bool {
    s.strip_prefix("import").is_some_and(|rest| {
        rest.chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_' && c != '$')
    })
}

/// Advance the statement scanner over one physical line. The statement
/// is complete once a string literal closes outside braces: the module
/// specifier is the last token of an import declaration, so everything
/// after it on the same line (semicolon, trailing comment) belongs to
/// the statement text but not to the scan.
fn scan_statement_line(p: &mut Pending, content: &str) {
    let mut iter = content.chars().peekable();
    let mut in_quote: Option<char> = None;
    let mut literal = String::new();
    while let Some(c) = iter.next() {
        if let Some(q) = in_quote {
            if c == '\\' {
                if let Some(escaped) = iter.next() {
                    literal.push(escaped);
                }
            } else if c == q {
                in_quote = None;
                if p.brace_depth == 0 && !p.complete {
                    p.module_path = Some(literal.clone());
                    p.complete = true;
                }
                literal.clear();
            } else {
                literal.push(c);
            }
        } else {
            match c {
                '\'' | '"' => {
                    in_quote = Some(c);
                    literal.clear();
                }
                '{' => p.brace_depth += 1,
                '}' => p.brace_depth -= 1,
                '/' if iter.peek() == Some(&'/') => return,
                _ => {}
            }
        }
    }
}
