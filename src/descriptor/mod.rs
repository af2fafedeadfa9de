//! Type descriptor table
//!
//! Every combination of storage mode and property type gets one descriptor.
//! Descriptors carry the literal values substituted into templates and the
//! capability flags that `%tag` annotations select on.
//!
//! # Example
//!
//! ```rust
//! use tplexpand::descriptor::{DescriptorTable, Placeholder, Tag};
//!
//! let table = DescriptorTable::build();
//! assert_eq!(table.len(), 28);
//!
//! let first = &table[0];
//! assert_eq!(first.value(Placeholder::Array), "unmanaged.boolObj");
//! assert!(first.has_tag(Tag::NoMinMax));
//! ```

mod kinds;
mod placeholder;
mod table;
mod tag;

pub use kinds::{Capabilities, Probe, PropertyType, StorageMode, NULL_LITERAL};
pub use placeholder::Placeholder;
pub use table::{base_entries, BaseEntry, DescriptorTable, TypeDescriptor};
pub use tag::Tag;
