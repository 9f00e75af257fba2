//! Command-line front end: reads one program and prints its JSON projection.
//!
//! Usage:
//!   datalit [PATH]            - read PATH (or standard input) and print JSON
//!   datalit --tokens [PATH]   - print the token stream instead
//!
//! Exits with status 1 on any lex or parse error, printing nothing to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::info;

use datalit::ast::Project;
use datalit::{parser, to_json, tokenizer};

#[derive(Debug, Parser)]
#[command(name = "datalit", version, about = "Convert data literals to JSON")]
struct Cli {
    /// Input file; standard input when omitted or `-`
    path: Option<PathBuf>,

    /// Print tokens (kind, lexeme, end position) instead of JSON
    #[arg(long)]
    tokens: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = read_input(cli.path.as_ref())?;
    info!("read {} bytes", input.len());

    let tokens = tokenizer::tokenize(&input)?;
    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let sentence = parser::parse(&tokens)?;
    let json = to_json(&sentence.project(), !cli.compact)?;
    println!("{}", json);
    Ok(())
}
