//! Placeholder keys that a template can reference with `$key`

use std::fmt;

/// A descriptor attribute addressable from a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Storage mode name
    Obj,
    /// Property accessor name
    Prop,
    V0,
    V1,
    /// `<obj>.<prop>`
    Array,
    /// Collection literal of every value
    Values,
    First,
    Last,
    /// `v0` without its sigil
    S0,
    /// `v1` without its sigil
    S1,
    /// Wrong-type probe value
    Wrong,
    /// Probe description
    WrongDescription,
    /// Probe runtime type
    WrongType,
    /// Declared type, `?`-suffixed when optional
    Type,
}

impl Placeholder {
    pub const ALL: [Placeholder; 14] = [
        Placeholder::Obj,
        Placeholder::Prop,
        Placeholder::V0,
        Placeholder::V1,
        Placeholder::Array,
        Placeholder::Values,
        Placeholder::First,
        Placeholder::Last,
        Placeholder::S0,
        Placeholder::S1,
        Placeholder::Wrong,
        Placeholder::WrongDescription,
        Placeholder::WrongType,
        Placeholder::Type,
    ];

    /// Key as written after the `$` sigil
    pub fn key(self) -> &'static str {
        match self {
            Placeholder::Obj => "obj",
            Placeholder::Prop => "prop",
            Placeholder::V0 => "v0",
            Placeholder::V1 => "v1",
            Placeholder::Array => "array",
            Placeholder::Values => "values",
            Placeholder::First => "first",
            Placeholder::Last => "last",
            Placeholder::S0 => "s0",
            Placeholder::S1 => "s1",
            Placeholder::Wrong => "wrong",
            Placeholder::WrongDescription => "wdesc",
            Placeholder::WrongType => "wtype",
            Placeholder::Type => "type",
        }
    }

    /// The longest key that `ident` starts with.
    ///
    /// Characters of `ident` beyond the matched key are ordinary text, so
    /// `$v0Obj` resolves `v0` and keeps `Obj`.
    pub fn longest_prefix(ident: &str) -> Option<Placeholder> {
        Self::ALL
            .into_iter()
            .filter(|p| ident.starts_with(p.key()))
            .max_by_key(|p| p.key().len())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_is_prefix_of_another() {
        for a in Placeholder::ALL {
            for b in Placeholder::ALL {
                if a != b {
                    assert!(
                        !a.key().starts_with(b.key()),
                        "{} shadows {}",
                        b.key(),
                        a.key()
                    );
                }
            }
        }
    }

    #[test]
    fn test_longest_prefix() {
        assert_eq!(Placeholder::longest_prefix("v0"), Some(Placeholder::V0));
        assert_eq!(Placeholder::longest_prefix("v0Obj"), Some(Placeholder::V0));
        assert_eq!(Placeholder::longest_prefix("values"), Some(Placeholder::Values));
        assert_eq!(Placeholder::longest_prefix("typeName"), Some(Placeholder::Type));
        assert_eq!(Placeholder::longest_prefix("unknown"), None);
        assert_eq!(Placeholder::longest_prefix("v"), None);
    }

    #[test]
    fn test_display_includes_sigil() {
        assert_eq!(Placeholder::Array.to_string(), "$array");
    }
}
