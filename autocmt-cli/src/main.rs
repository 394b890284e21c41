//! autocmt CLI - insert standard doc blocks above C++ function definitions

// Global invariants enforced:
// - stdout carries only the annotated source; diagnostics go to stderr
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use autocmt_core::{annotate_file, write_source};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: autocmt [-o] sourcefile";

const OVERWRITE_FLAG: &str = "-o";

/// Environment variable holding the log filter (EnvFilter syntax)
const LOG_ENV: &str = "AUTOCMT_LOG";

#[derive(Parser)]
#[command(name = "autocmt")]
#[command(about = "Insert standard documentation block comments above C++ function definitions")]
#[command(version = env!("AUTOCMT_VERSION"))]
#[command(override_usage = "autocmt [-o] <sourcefile>")]
struct Cli {
    /// `-o` to overwrite the file in place, and the C++ source file (last)
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

/// What a valid command line asks for
#[derive(Debug, PartialEq)]
struct Invocation {
    file: PathBuf,
    overwrite: bool,
}

impl Cli {
    /// One argument (the file) or two (`-o` and the file, either order)
    ///
    /// The file is the last argument that is not `-o`. Any other extra
    /// argument is ignored.
    fn invocation(&self) -> Option<Invocation> {
        if self.args.is_empty() || self.args.len() > 2 {
            return None;
        }
        let file = self.args.iter().rev().find(|arg| arg.as_str() != OVERWRITE_FLAG)?;
        Some(Invocation {
            file: PathBuf::from(file),
            overwrite: self.args.iter().any(|arg| arg == OVERWRITE_FLAG),
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(invocation) = cli.invocation() else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    init_logging();

    let annotated = annotate_file(&invocation.file)?;

    if invocation.overwrite {
        write_source(&invocation.file, &annotated)?;
        tracing::info!(file = %invocation.file.display(), "overwrote source");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(annotated.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
