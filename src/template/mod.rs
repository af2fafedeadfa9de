//! Template line processing
//!
//! A template line goes through three stages:
//!
//! 1. [`filter`] reads `%tag` annotations and narrows the descriptor set
//! 2. [`directive`] turns ` ^nl ` and ` ^n` markers into real line breaks
//! 3. [`substitute`] fills `$key` placeholders once per surviving descriptor
//!
//! ```text
//! %minmax XCTAssertEqual([$array.min], $first); ^nl // $type
//! ```

pub mod directive;
pub mod filter;
pub mod lexer;
pub mod substitute;

pub use filter::{apply_tags, Selection, TagOccurrence};
pub use substitute::{substitute, UnresolvedPlaceholder};
