//! tplexpand CLI
//!
//! Usage:
//!   tplexpand [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -o, --output <FILE>  Write the expansion to a file instead of stdout
//!   -c, --config <FILE>  Configuration file (TOML format)
//!   --lint               Report suspicious tags and placeholders on stderr
//!   --check              Fail if --output differs from the expansion
//!   --list               Print the descriptor table
//!   -v, --verbose        Debug logging
//!   -h, --help           Print help

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use tplexpand::{lint, DescriptorTable, Emitter, ExpandConfig, ExpandError, Expander};

#[derive(Parser)]
#[command(name = "tplexpand")]
#[command(about = "Expand annotated templates into per-type test code")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    template: Option<PathBuf>,

    /// Write the expansion to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report unknown tags, empty selections and unresolved placeholders
    #[arg(long)]
    lint: bool,

    /// Compare the expansion with --output and exit 1 if they differ
    #[arg(long, requires = "output")]
    check: bool,

    /// Print the descriptor table and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        print!("{}", DescriptorTable::build().listing());
        return;
    }

    if cli.template.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when `--check` finds a stale output file
fn run(cli: &Cli) -> Result<bool, ExpandError> {
    let mut config = match &cli.config {
        Some(path) => ExpandConfig::from_file(path)?,
        None => ExpandConfig::default(),
    };
    if cli.lint {
        config = config.with_lint(true);
    }

    let (source, name) = read_template(cli.template.as_deref())?;
    let expander = Expander::new(config);
    info!(
        template = %name,
        descriptors = expander.table().len(),
        "expanding template"
    );

    if expander.config().lint {
        let warnings = lint::check(&source, expander.table());
        for warning in &warnings {
            eprint!("{}", warning.format(&source, &name));
        }
        debug!(count = warnings.len(), "lint finished");
    }

    if cli.check {
        if let Some(path) = &cli.output {
            return check_output(&expander, &source, path);
        }
    }

    let stats = match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)?;
            write_expansion(&expander, &source, BufWriter::new(file))?
        }
        None => write_expansion(&expander, &source, io::stdout().lock())?,
    };
    debug!(
        template_lines = stats.template_lines,
        lines_written = stats.lines_written,
        empty_expansions = stats.empty_expansions,
        "expansion written"
    );

    Ok(true)
}

fn read_template(path: Option<&Path>) -> Result<(String, String), ExpandError> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| ExpandError::read(path, e))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ExpandError::read("<stdin>", e))?;
            Ok((buffer, "<stdin>".to_string()))
        }
    }
}

fn write_expansion<W: Write>(
    expander: &Expander,
    source: &str,
    writer: W,
) -> Result<tplexpand::EmitStats, ExpandError> {
    let mut emitter = Emitter::new(writer);
    expander.expand_into(source, &mut emitter)?;
    let (_, stats) = emitter.finish()?;
    Ok(stats)
}

fn check_output(expander: &Expander, source: &str, path: &Path) -> Result<bool, ExpandError> {
    if expander.check_file(source, path)? {
        info!(output = %path.display(), "generated output is up to date");
        Ok(true)
    } else {
        eprintln!(
            "{} is out of date; re-run tplexpand without --check",
            path.display()
        );
        Ok(false)
    }
}

fn print_intro() {
    println!(
        r#"tplexpand - expand annotated templates into per-type test code

USAGE:
    tplexpand [OPTIONS] [TEMPLATE]
    cat tpl.m | tplexpand > Generated.m

TEMPLATE SYNTAX:
    $key        Replaced per descriptor: obj prop v0 v1 array values first
                last s0 s1 wrong wdesc wtype type
    %tag        Keep only descriptors with the tag: r o unman man minmax
                nominmax sum nosum avg noavg
    ' ^nl '     Line break with a 4-column indent
    ' ^n'       Line break aligned under the first '('

Lines without '$' are copied through once.
Run --list to see every descriptor and its tags."#
    );
}
