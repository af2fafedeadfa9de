//! Tags selectable from a template line with `%name`

use std::fmt;

/// A category or capability label carried by descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Required,
    Optional,
    Unmanaged,
    Managed,
    MinMax,
    NoMinMax,
    Sum,
    NoSum,
    Avg,
    NoAvg,
}

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Required,
        Tag::Optional,
        Tag::Unmanaged,
        Tag::Managed,
        Tag::MinMax,
        Tag::NoMinMax,
        Tag::Sum,
        Tag::NoSum,
        Tag::Avg,
        Tag::NoAvg,
    ];

    /// Canonical spelling used in templates
    pub fn name(self) -> &'static str {
        match self {
            Tag::Required => "r",
            Tag::Optional => "o",
            Tag::Unmanaged => "unman",
            Tag::Managed => "man",
            Tag::MinMax => "minmax",
            Tag::NoMinMax => "nominmax",
            Tag::Sum => "sum",
            Tag::NoSum => "nosum",
            Tag::Avg => "avg",
            Tag::NoAvg => "noavg",
        }
    }

    /// Parse a tag name, accepting the long aliases for the mode tags
    pub fn from_name(name: &str) -> Option<Tag> {
        let tag = match name {
            "r" | "required" => Tag::Required,
            "o" | "optional" => Tag::Optional,
            "unman" | "unmanaged" => Tag::Unmanaged,
            "man" | "managed" => Tag::Managed,
            "minmax" => Tag::MinMax,
            "nominmax" => Tag::NoMinMax,
            "sum" => Tag::Sum,
            "nosum" => Tag::NoSum,
            "avg" => Tag::Avg,
            "noavg" => Tag::NoAvg,
            _ => return None,
        };
        Some(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
