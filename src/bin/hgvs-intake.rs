//! hgvs-intake CLI
//!
//! Command-line interface for extracting clinical variant notation from
//! free-form text and for gating intake text in scripts.

use clap::{Parser, Subcommand};
use hgvs_intake::cli::{format_breakdown, read_input};
use hgvs_intake::intake::remediation_message;
use hgvs_intake::{extract, extract_all};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hgvs-intake")]
#[command(author, version, about = "Clinical variant notation extraction for intake text")]
#[command(
    long_about = "Scan free-form text for an HGVS-style variant description and print its
structural breakdown.

Examples:
  hgvs-intake extract 'NM_000410.4(HFE):c.989G>T (p.Arg330Met)'
  hgvs-intake extract -i report.txt -f json
  cat notes.txt | hgvs-intake check"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract variant notation and print its breakdown
    Extract {
        /// Text to scan (reads stdin when omitted)
        text: Option<String>,

        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Report every match instead of only the first
        #[arg(long)]
        all: bool,
    },

    /// Check whether text contains a well-formed notation (exit 0/1)
    Check {
        /// Text to scan (reads stdin when omitted)
        text: Option<String>,

        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Suppress the remediation message on failure
        #[arg(long)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Extract {
            text,
            input,
            format,
            all,
        } => extract_command(text, input, &format, all),
        Commands::Check { text, input, quiet } => check_command(text, input, quiet),
    };

    std::process::exit(code);
}

fn extract_command(
    text: Option<String>,
    input: Option<PathBuf>,
    format: &str,
    all: bool,
) -> i32 {
    let text = match read_input(text, input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            return 2;
        }
    };

    let found = if all {
        extract_all(&text)
    } else {
        extract(&text).into_iter().collect()
    };

    if found.is_empty() {
        eprintln!("{}", remediation_message());
        return 1;
    }

    for (i, breakdown) in found.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match format_breakdown(breakdown, format) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                return 2;
            }
        }
    }

    0
}

fn check_command(text: Option<String>, input: Option<PathBuf>, quiet: bool) -> i32 {
    let text = match read_input(text, input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            return 2;
        }
    };

    match extract(&text) {
        Some(breakdown) => {
            if !quiet {
                println!("{}", breakdown);
            }
            0
        }
        None => {
            if !quiet {
                eprintln!("{}", remediation_message());
            }
            1
        }
    }
}
