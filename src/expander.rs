//! Whole-template expansion

use std::convert::Infallible;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::config::ExpandConfig;
use crate::descriptor::DescriptorTable;
use crate::emitter::{split_lines, Emitter};
use crate::error::ExpandError;
use crate::template::{apply_tags, directive, substitute};

/// Expands templates against a descriptor table
#[derive(Debug, Clone)]
pub struct Expander {
    table: DescriptorTable,
    config: ExpandConfig,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(ExpandConfig::default())
    }
}

impl Expander {
    /// Expander over the standard descriptor table
    pub fn new(config: ExpandConfig) -> Self {
        Self::with_table(DescriptorTable::build(), config)
    }

    pub fn with_table(table: DescriptorTable, config: ExpandConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Expand a single template line, given without its terminator.
    ///
    /// A line without `$` comes back exactly once, with only its directives
    /// expanded. Otherwise there is one entry per selected descriptor.
    /// Directive breaks use `\n`; see [`Expander::expand_line_with_newline`].
    pub fn expand_line(&self, line: &str) -> Vec<String> {
        self.expand_line_with_newline(line, "\n")
    }

    /// Like [`Expander::expand_line`], breaking directives with `newline`
    pub fn expand_line_with_newline(&self, line: &str, newline: &str) -> Vec<String> {
        let column = directive::paren_column(line);
        let indent = self.config.indent_width;

        if !substitute::has_placeholder(line) {
            return vec![directive::expand(line, column, indent, newline)];
        }

        let selection = apply_tags(line, &self.table);
        let line = directive::expand(&selection.line, column, indent, newline);

        selection
            .indices
            .iter()
            .map(|&i| substitute(&line, &self.table[i]))
            .collect()
    }

    /// Expand a whole template into a string
    pub fn expand(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() * 4);
        let result = self.for_each_line(source, |produced, terminator| {
            for line in produced {
                out.push_str(line);
                out.push_str(terminator);
            }
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    /// Whether `existing` is byte-for-byte the expansion of `source`
    pub fn is_up_to_date(&self, source: &str, existing: &[u8]) -> bool {
        self.expand(source).as_bytes() == existing
    }

    /// Compare the expansion of `source` with the file at `output`.
    ///
    /// A missing file or one that is not valid UTF-8 is stale rather than
    /// an error. Any other read failure is reported.
    pub fn check_file(&self, source: &str, output: &Path) -> Result<bool, ExpandError> {
        let existing = match fs::read(output) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(ExpandError::read_output(output, e)),
        };
        Ok(self.is_up_to_date(source, &existing))
    }

    /// Expand a whole template through an emitter
    pub fn expand_into<W: Write>(&self, source: &str, emitter: &mut Emitter<W>) -> io::Result<()> {
        self.for_each_line(source, |produced, terminator| {
            for line in produced {
                emitter.emit(line, terminator)?;
            }
            emitter.end_template_line(produced.len());
            Ok(())
        })
    }

    fn for_each_line<E>(
        &self,
        source: &str,
        mut sink: impl FnMut(&[String], &str) -> Result<(), E>,
    ) -> Result<(), E> {
        for (number, (body, terminator)) in split_lines(source).enumerate() {
            // A final line without a terminator breaks with `\n`
            let newline = if terminator == "\r\n" { "\r\n" } else { "\n" };
            let produced = self.expand_line_with_newline(body, newline);
            if produced.is_empty() {
                debug!(line = number + 1, text = body, "template line selected no descriptors");
            }
            sink(&produced, terminator)?;
        }
        Ok(())
    }
}
