//! widlc: parse WebIDL files and print the syntax tree as JSON.
//!
//! Usage:
//!   widlc [options] <file>
//!
//! On success, the definition tree is written to stdout as JSON. On a parse
//! error, a caret diagnostic pointing at the offending token is written to
//! stderr and the process exits non-zero.

use clap::Parser as ClapParser;
use std::fs;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "widlc", about = "A WebIDL parser that emits a JSON syntax tree")]
struct Cli {
    /// WebIDL file to parse.
    #[arg(value_name = "FILE")]
    file: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let text = match fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("widlc: {}: {}", cli.file, e);
            return 1;
        }
    };

    let definitions = match widl_parser::parse_with_file(&text, &cli.file) {
        Ok(definitions) => definitions,
        Err(error) => {
            eprintln!("{}", widl_diagnostics::render(&error, &text));
            return 1;
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&definitions)
    } else {
        serde_json::to_string(&definitions)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("widlc: failed to serialize syntax tree: {}", e);
            1
        }
    }
}
