//! gridmat binary - load two N x N matrices and demonstrate basic operations

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
#[command(about = "Load two N x N integer matrices from a file and demonstrate \
                   addition, multiplication, diagonal sums, and swaps")]
struct Cli {
    /// Input file holding N followed by two N x N integer matrices;
    /// prompted for interactively when omitted
    file: Option<PathBuf>,
}

/// Ask the user for the input filename on stdin
fn prompt_filename(input: &mut impl BufRead) -> anyhow::Result<PathBuf> {
    print!("Enter the input filename (include .txt): ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        anyhow::bail!("no filename given");
    }
    Ok(PathBuf::from(name))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let path = match cli.file {
        Some(path) => path,
        None => prompt_filename(&mut input)?,
    };

    let file = File::open(&path)
        .with_context(|| format!("could not open the file '{}'", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    gridmat::session::run(BufReader::new(file), &mut input, &mut out)
        .with_context(|| format!("could not load two matrices from '{}'", path.display()))?;
    Ok(())
}
