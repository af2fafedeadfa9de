//! tplexpand - expands annotated templates into per-type test code
//!
//! Each template line that mentions a `$placeholder` is repeated once for
//! every type descriptor it selects, with the descriptor's values filled in.
//! `%tag` annotations narrow the selection and ` ^nl ` / ` ^n` markers split
//! long lines.
//!
//! # Example
//!
//! ```rust
//! use tplexpand::expand;
//!
//! let out = expand("%unman %r %sum x = $v0;\n");
//! assert_eq!(out, "x = @2;\nx = @2.2f;\nx = @2.2;\n");
//! ```

pub mod config;
pub mod descriptor;
pub mod emitter;
pub mod error;
pub mod expander;
pub mod lint;
pub mod template;

pub use config::{ConfigError, ExpandConfig};
pub use descriptor::{DescriptorTable, TypeDescriptor};
pub use emitter::{EmitStats, Emitter};
pub use error::ExpandError;
pub use expander::Expander;
pub use lint::{LintCategory, LintWarning};

use std::path::Path;

/// Expand a template with the default configuration
pub fn expand(source: &str) -> String {
    expand_with_config(source, ExpandConfig::default())
}

/// Expand a template with a custom configuration
///
/// # Example
///
/// ```rust
/// use tplexpand::{expand_with_config, ExpandConfig};
///
/// let config = ExpandConfig::new().with_indent_width(2);
/// let out = expand_with_config("a = 1 ^nl b = 2\n", config);
/// assert_eq!(out, "a = 1\n  b = 2\n");
/// ```
pub fn expand_with_config(source: &str, config: ExpandConfig) -> String {
    Expander::new(config).expand(source)
}

/// Expand a template and collect lint warnings when `config.lint` is set
pub fn expand_with_lint(source: &str, config: ExpandConfig) -> (String, Vec<LintWarning>) {
    let expander = Expander::new(config);
    let warnings = if expander.config().lint {
        lint::check(source, expander.table())
    } else {
        Vec::new()
    };
    (expander.expand(source), warnings)
}

/// Read a template file and expand it.
///
/// Nothing is produced unless the whole file could be read.
pub fn expand_file(path: &Path, config: ExpandConfig) -> Result<String, ExpandError> {
    let source = std::fs::read_to_string(path).map_err(|e| ExpandError::read(path, e))?;
    Ok(expand_with_config(&source, config))
}
