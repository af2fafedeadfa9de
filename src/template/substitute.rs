//! Placeholder substitution for a single descriptor

use crate::descriptor::{Placeholder, TypeDescriptor};

use super::lexer::{lex, Span, Token};

/// A `$identifier` token that resolves to no placeholder key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPlaceholder {
    pub ident: String,
    pub span: Span,
}

/// Replace every `$key` in `line` with the descriptor's value.
///
/// Identifiers resolve by longest key prefix; unresolved ones are copied
/// through unchanged.
pub fn substitute(line: &str, descriptor: &TypeDescriptor) -> String {
    let mut out = String::with_capacity(line.len() + 32);

    for (token, span) in lex(line) {
        match token {
            Token::Placeholder(ident) => match Placeholder::longest_prefix(&ident) {
                Some(key) => {
                    out.push_str(descriptor.value(key));
                    out.push_str(&ident[key.key().len()..]);
                }
                None => out.push_str(&line[span]),
            },
            _ => out.push_str(&line[span]),
        }
    }

    out
}

/// Whether the line references any placeholder at all
pub fn has_placeholder(line: &str) -> bool {
    line.contains('$')
}

/// `$identifier` tokens in `line` that no descriptor can fill
pub fn unresolved(line: &str) -> Vec<UnresolvedPlaceholder> {
    lex(line)
        .filter_map(|(token, span)| match token {
            Token::Placeholder(ident) if Placeholder::longest_prefix(&ident).is_none() => {
                Some(UnresolvedPlaceholder { ident, span })
            }
            _ => None,
        })
        .collect()
}
