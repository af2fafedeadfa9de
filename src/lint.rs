//! Lint checks for likely template authoring errors.
//!
//! Expansion is silent about tags that select nothing and placeholders that
//! resolve to nothing; those only show up later as missing or broken
//! generated code. These checks report them up front.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::descriptor::DescriptorTable;
use crate::emitter::split_lines;
use crate::template::filter::apply_tags;
use crate::template::lexer::Span;
use crate::template::substitute;

/// A lint warning about a template line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    /// 1-based template line number
    pub line: usize,
    /// Byte range in the whole template
    pub span: Span,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    UnknownTag,
    EmptySelection,
    UnresolvedPlaceholder,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::UnknownTag => write!(f, "unknown-tag"),
            LintCategory::EmptySelection => write!(f, "empty-selection"),
            LintCategory::UnresolvedPlaceholder => write!(f, "unresolved-placeholder"),
        }
    }
}

impl LintWarning {
    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, self.span.start)
            .with_message(format!("[{}] {}", self.category, self.message))
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(&self.message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!(
                "warning[{}] line {}: {}",
                self.category, self.line, self.message
            ),
        }
    }
}

/// Run all lint checks on a template.
///
/// Only lines that expand per descriptor are checked; lines without `$` are
/// copied through and their `%` text means nothing to the expander.
pub fn check(source: &str, table: &DescriptorTable) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut offset = 0;

    for (index, (body, terminator)) in split_lines(source).enumerate() {
        if substitute::has_placeholder(body) {
            check_line(body, index + 1, offset, table, &mut warnings);
        }
        offset += body.len() + terminator.len();
    }

    warnings
}

fn check_line(
    body: &str,
    line: usize,
    offset: usize,
    table: &DescriptorTable,
    warnings: &mut Vec<LintWarning>,
) {
    let selection = apply_tags(body, table);
    let shift = |span: &Span| (span.start + offset)..(span.end + offset);

    for occurrence in selection.tags.iter().filter(|t| t.tag.is_none()) {
        warnings.push(LintWarning {
            category: LintCategory::UnknownTag,
            message: format!(
                "tag '%{}' matches no descriptor; the line produces no output",
                occurrence.name
            ),
            line,
            span: shift(&occurrence.span),
        });
    }

    if !selection.has_unknown_tag() && selection.indices.is_empty() {
        if let (Some(first), Some(last)) = (selection.tags.first(), selection.tags.last()) {
            let names: Vec<String> = selection.tags.iter().map(|t| format!("%{}", t.name)).collect();
            warnings.push(LintWarning {
                category: LintCategory::EmptySelection,
                message: format!("no descriptor carries all of {}", names.join(" ")),
                line,
                span: shift(&(first.span.start..last.span.end)),
            });
        }
    }

    for placeholder in substitute::unresolved(body) {
        warnings.push(LintWarning {
            category: LintCategory::UnresolvedPlaceholder,
            message: format!(
                "placeholder '${}' is not a descriptor attribute and is copied verbatim",
                placeholder.ident
            ),
            line,
            span: shift(&placeholder.span),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lint(source: &str) -> Vec<LintWarning> {
        check(source, &DescriptorTable::build())
    }

    #[test]
    fn test_clean_template() {
        let source = "- (void)test {\n    %r %minmax XCTAssertEqual($array.count, 0U);\n}\n";
        assert!(lint(source).is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let source = "ok\n%minmx $v0\n";
        let warnings = lint(source);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::UnknownTag);
        assert_eq!(warnings[0].line, 2);
        assert_eq!(&source[warnings[0].span.clone()], "%minmx");
    }

    #[test]
    fn test_empty_selection() {
        let source = "%r %o $v0";
        let warnings = lint(source);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::EmptySelection);
        assert_eq!(&source[warnings[0].span.clone()], "%r %o");
    }

    #[test]
    fn test_unresolved_placeholder() {
        let source = "a\r\nx = $valeus;\r\n";
        let warnings = lint(source);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::UnresolvedPlaceholder);
        assert_eq!(warnings[0].line, 2);
        assert_eq!(&source[warnings[0].span.clone()], "$valeus");
    }

    #[test]
    fn test_static_lines_not_checked() {
        assert!(lint("NSLog(@\"%d\");\n").is_empty());
    }

    #[test]
    fn test_format_mentions_category() {
        let source = "%bogus $v0\n";
        let warnings = lint(source);
        let text = warnings[0].format(source, "tpl.m");
        assert!(text.contains("unknown-tag"));
        assert!(text.contains("tpl.m"));
    }
}
