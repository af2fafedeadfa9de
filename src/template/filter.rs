//! Tag filtering: `%tag` annotations narrow the descriptor set

use crate::descriptor::{DescriptorTable, Tag};

use super::lexer::{lex, Span, Token};

/// A `%name` annotation found in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    /// Word after the `%`
    pub name: String,
    /// Byte span of `%name` in the line
    pub span: Span,
    /// `None` when the name is not a known tag
    pub tag: Option<Tag>,
}

/// Result of applying a line's tags to the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The line with tag annotations removed
    pub line: String,
    /// Indices of the surviving descriptors, in table order
    pub indices: Vec<usize>,
    /// Every annotation found, in line order
    pub tags: Vec<TagOccurrence>,
}

impl Selection {
    /// True when at least one annotation is not a known tag
    pub fn has_unknown_tag(&self) -> bool {
        self.tags.iter().any(|t| t.tag.is_none())
    }
}

/// Collect the `%name` annotations of a line
pub fn find_tags(line: &str) -> Vec<TagOccurrence> {
    lex(line)
        .filter_map(|(token, span)| match token {
            Token::Tag(name) => Some(TagOccurrence {
                tag: Tag::from_name(&name),
                name,
                span,
            }),
            _ => None,
        })
        .collect()
}

/// Narrow the table to the descriptors carrying every tag of the line.
///
/// An unknown tag matches nothing, so the selection becomes empty.
pub fn apply_tags(line: &str, table: &DescriptorTable) -> Selection {
    let tags = find_tags(line);

    let indices = if tags.iter().any(|t| t.tag.is_none()) {
        Vec::new()
    } else {
        let known: Vec<Tag> = tags.iter().filter_map(|t| t.tag).collect();
        table.select(&known)
    };

    Selection {
        line: strip_tags(line, &tags),
        indices,
        tags,
    }
}

/// Remove annotations from a line.
///
/// `%tag ` loses its trailing space. A tag ending the line takes the
/// whitespace before it instead. A tag followed by anything else is left in
/// place.
fn strip_tags(line: &str, tags: &[TagOccurrence]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;

    for occurrence in tags {
        let rest = &line[occurrence.span.end..];
        if rest.starts_with(' ') {
            out.push_str(&line[cursor..occurrence.span.start]);
            cursor = occurrence.span.end + 1;
        } else if rest.is_empty() {
            out.push_str(&line[cursor..occurrence.span.start]);
            let kept = out.trim_end_matches([' ', '\t']).len();
            out.truncate(kept);
            cursor = occurrence.span.end;
        }
    }

    out.push_str(&line[cursor..]);
    out
}
