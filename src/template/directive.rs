//! Layout directives that split one template line into several output lines

/// Newline followed by the configured fixed indent
pub const NEWLINE_INDENT: &str = " ^nl ";

/// Newline aligned under the first `(` of the line
pub const NEWLINE_ALIGN: &str = " ^n";

/// Default width of the fixed indent
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Whether the line contains either directive
pub fn has_directive(line: &str) -> bool {
    // NEWLINE_INDENT contains NEWLINE_ALIGN
    line.contains(NEWLINE_ALIGN)
}

/// Character column of the first `(`, or 0 when there is none
pub fn paren_column(line: &str) -> usize {
    line.find('(')
        .map(|idx| line[..idx].chars().count())
        .unwrap_or(0)
}

/// Replace both directives in `line`, breaking with `newline`.
///
/// `align_column` must come from the line as written in the template, before
/// tags are stripped, so alignment does not move with earlier edits.
/// `newline` should match the template line's own terminator.
pub fn expand(line: &str, align_column: usize, indent_width: usize, newline: &str) -> String {
    if !has_directive(line) {
        return line.to_string();
    }
    let indent = format!("{}{}", newline, " ".repeat(indent_width));
    let align = format!("{}{}", newline, " ".repeat(align_column));
    line.replace(NEWLINE_INDENT, &indent)
        .replace(NEWLINE_ALIGN, &align)
}
