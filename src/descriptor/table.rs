//! The descriptor table and its derived fields

use std::ops::Index;

use super::kinds::{Capabilities, Probe, PropertyType, StorageMode, NULL_LITERAL};
use super::placeholder::Placeholder;
use super::tag::Tag;

/// Base data for one descriptor before derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseEntry {
    pub storage_mode: StorageMode,
    pub property: PropertyType,
    /// Replaces the default string probe when set
    pub probe_override: Option<Probe>,
}

impl BaseEntry {
    pub fn new(storage_mode: StorageMode, property: PropertyType) -> Self {
        Self {
            storage_mode,
            property,
            probe_override: None,
        }
    }

    /// Use a different wrong-type probe for this entry
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probe_override = Some(probe);
        self
    }
}

/// The compiled-in base data: every storage mode crossed with every property type.
///
/// String properties probe with a number, since a string probe would not be
/// a type mismatch for them.
pub fn base_entries() -> Vec<BaseEntry> {
    StorageMode::ALL
        .into_iter()
        .flat_map(|mode| {
            PropertyType::ALL.into_iter().map(move |property| {
                let entry = BaseEntry::new(mode, property);
                match property {
                    PropertyType::String => entry.with_probe(Probe::NUMBER),
                    _ => entry,
                }
            })
        })
        .collect()
}

/// One fully derived row of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub storage_mode: StorageMode,
    pub property: PropertyType,
    pub v0: &'static str,
    pub v1: &'static str,
    /// `<storage mode>.<property name>`
    pub array_path: String,
    /// Collection literal over `v0`, `v1` and the null literal for optional modes
    pub values_literal: String,
    pub first: &'static str,
    pub last: &'static str,
    pub s0: &'static str,
    pub s1: &'static str,
    pub probe: Probe,
    pub semantic_type: String,
    pub capabilities: Capabilities,
}

impl TypeDescriptor {
    /// Derive every field from a base entry
    pub fn from_entry(entry: &BaseEntry) -> Self {
        let mode = entry.storage_mode;
        let property = entry.property;
        let (v0, v1) = property.literals();

        let mut values = vec![v0, v1];
        if mode.is_optional() {
            values.push(NULL_LITERAL);
        }
        let last = values[values.len() - 1];

        let optional_suffix = if mode.is_optional() { "?" } else { "" };

        Self {
            storage_mode: mode,
            property,
            v0,
            v1,
            array_path: format!("{}.{}", mode.name(), property.property_name()),
            values_literal: format!("@[{}]", values.join(", ")),
            first: v0,
            last,
            s0: strip_sigil(v0),
            s1: strip_sigil(v1),
            probe: entry.probe_override.unwrap_or_default(),
            semantic_type: format!("{}{}", property.type_name(), optional_suffix),
            capabilities: property.capabilities(),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.storage_mode.is_optional()
    }

    pub fn is_managed(&self) -> bool {
        self.storage_mode.is_managed()
    }

    /// Whether this descriptor is selected by `tag`
    pub fn has_tag(&self, tag: Tag) -> bool {
        let caps = self.capabilities;
        match tag {
            Tag::Required => !self.is_optional(),
            Tag::Optional => self.is_optional(),
            Tag::Unmanaged => !self.is_managed(),
            Tag::Managed => self.is_managed(),
            Tag::MinMax => caps.min_max,
            Tag::NoMinMax => !caps.min_max,
            Tag::Sum => caps.sum,
            Tag::NoSum => !caps.sum,
            Tag::Avg => caps.avg,
            Tag::NoAvg => !caps.avg,
        }
    }

    /// Every tag this descriptor carries, in canonical order
    pub fn tags(&self) -> Vec<Tag> {
        Tag::ALL.into_iter().filter(|t| self.has_tag(*t)).collect()
    }

    /// Text substituted for `placeholder`
    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Obj => self.storage_mode.name(),
            Placeholder::Prop => self.property.property_name(),
            Placeholder::V0 => self.v0,
            Placeholder::V1 => self.v1,
            Placeholder::Array => &self.array_path,
            Placeholder::Values => &self.values_literal,
            Placeholder::First => self.first,
            Placeholder::Last => self.last,
            Placeholder::S0 => self.s0,
            Placeholder::S1 => self.s1,
            Placeholder::Wrong => self.probe.value,
            Placeholder::WrongDescription => self.probe.description,
            Placeholder::WrongType => self.probe.runtime_type,
            Placeholder::Type => &self.semantic_type,
        }
    }
}

fn strip_sigil(literal: &'static str) -> &'static str {
    literal.strip_prefix('@').unwrap_or(literal)
}

/// Ordered, immutable list of descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    descriptors: Vec<TypeDescriptor>,
}

impl DescriptorTable {
    /// The standard 28-entry table
    pub fn build() -> Self {
        Self::from_entries(&base_entries())
    }

    /// Build from explicit base entries, preserving their order
    pub fn from_entries(entries: &[BaseEntry]) -> Self {
        Self {
            descriptors: entries.iter().map(TypeDescriptor::from_entry).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.descriptors.iter()
    }

    /// One line per descriptor: index, array path, type and tags
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            let tags: Vec<&str> = descriptor.tags().iter().map(|t| t.name()).collect();
            out.push_str(&format!(
                "{:>2}  {:<24} {:<8} {}\n",
                index,
                descriptor.array_path,
                descriptor.semantic_type,
                tags.join(" ")
            ));
        }
        out
    }

    /// Indices of the descriptors carrying every tag in `tags`
    pub fn select(&self, tags: &[Tag]) -> Vec<usize> {
        self.descriptors
            .iter()
            .enumerate()
            .filter(|(_, d)| tags.iter().all(|t| d.has_tag(*t)))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::build()
    }
}

impl Index<usize> for DescriptorTable {
    type Output = TypeDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.descriptors[index]
    }
}

impl<'a> IntoIterator for &'a DescriptorTable {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
