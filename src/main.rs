use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use termreflow::{
    TerminalWidth,
    io::{reflow_file, rewrite},
    resolve_width,
    wrap_to,
};

#[derive(Parser)]
#[command(version, about = "Reflow terminal text to a column width")]
struct Cli {
    /// Target width in columns; defaults to the terminal width
    #[arg(short = 'w', long = "width", env = "TERMREFLOW_WIDTH")]
    width: Option<usize>,
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Text files to reflow
    files: Vec<PathBuf>,
}

/// Entry point for the command-line tool that reflows terminal text.
///
/// Reads standard input when no files are given. Multiple files are processed
/// in parallel and printed in argument order.
///
/// # Examples
///
/// ```sh
/// # Reflow help text to 72 columns
/// termreflow --width 72 usage.txt
///
/// # Reflow files in place at the terminal width
/// termreflow --in-place usage.txt help.txt
///
/// # Reflow standard input
/// some-tool --help | termreflow -w 60
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let width = resolve_width(cli.width, &TerminalWidth);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        println!("{}", wrap_to(&input, width));
        return Ok(());
    }

    log::info!("reflowing {} files at width {width}", cli.files.len());

    if cli.in_place {
        cli.files.par_iter().try_for_each(|path| {
            rewrite(path, width).with_context(|| format!("failed to rewrite {}", path.display()))
        })?;
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| {
            reflow_file(path, width).with_context(|| format!("failed to read {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    for text in outputs {
        println!("{text}");
    }
    Ok(())
}
