//! Import statement model.

/// One import statement as consumed by the engine.
///
/// Constructed once per pass from the extracted import block and never
/// mutated. `sequence_index` preserves original relative order for
/// imports with equal sort keys, and also serves as record identity when
/// the compliance checker compares orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// The literal module specifier, unquoted.
    pub module_path: String,
    /// Exact source text of the whole statement, including quotes and
    /// any trailing inline comment on the last physical line.
    pub full_text: String,
    /// Position among all imports in the file.
    pub sequence_index: usize,
    /// Byte range of `full_text` within the source.
    pub span: (usize, usize),
    /// 1-based first physical line of the statement.
    pub line: usize,
    /// 1-based last physical line of the statement.
    pub end_line: usize,
}
