use std::io::{self, IsTerminal};
use std::path::PathBuf;

use effectus::{enrich_cards, load_cards, print_sample, print_summary, rules, save_enriched};

const DEFAULT_INPUT: &str = "ptcgp-cards.json";
const DEFAULT_OUTPUT: &str = "effectus-cards.json";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), effectus::StoreError> {
    let cards = load_cards(&config.input)?;
    let enriched = enrich_cards(rules(), &cards);
    save_enriched(&config.output, &enriched)?;

    println!("Saved enriched card data to {}", config.output.display());
    print_summary(&enriched, config.color);
    print_sample(&enriched, config.sample_size, config.color);
    Ok(())
}

struct CliConfig {
    input: PathBuf,
    output: PathBuf,
    sample_size: usize,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut args = std::env::args().skip(1).peekable();

    let Some(command) = args.next() else {
        return Err(format!("error: no command provided\n\n{}", help_text()));
    };

    match command.as_str() {
        "-h" | "--help" => {
            print_help();
            std::process::exit(0);
        }
        "-V" | "--version" => {
            println!("effectus {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        "process" => {}
        other => {
            return Err(format!("error: unknown command '{other}'\n\n{}", help_text()));
        }
    }

    let mut input = PathBuf::from(DEFAULT_INPUT);
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut sample_size = 0usize;
    let mut color = io::stdout().is_terminal();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-i" | "--input" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                input = PathBuf::from(value);
            }
            "-o" | "--output" => {
                let value = args.next().ok_or_else(|| "error: --output expects a value".to_string())?;
                output = PathBuf::from(value);
            }
            "-n" | "--sample" => {
                let value = args.next().ok_or_else(|| "error: --sample expects a value".to_string())?;
                sample_size = value
                    .parse()
                    .map_err(|_| format!("error: invalid --sample '{value}' (expected a count)"))?;
            }
            _ if arg.starts_with("--input=") => {
                input = PathBuf::from(arg.trim_start_matches("--input="));
            }
            _ if arg.starts_with("--output=") => {
                output = PathBuf::from(arg.trim_start_matches("--output="));
            }
            _ if arg.starts_with("--sample=") => {
                let value = arg.trim_start_matches("--sample=");
                sample_size = value
                    .parse()
                    .map_err(|_| format!("error: invalid --sample '{value}' (expected a count)"))?;
            }
            _ => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
        }
    }

    Ok(CliConfig { input, output, sample_size, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "effectus {version}

Card-effect extraction CLI.

Usage:
  effectus process [OPTIONS]

Commands:
  process    Parse raw card data into structured effects.

Options:
  -i, --input <file>     Raw card data to process. Default: {default_input}
  -o, --output <file>    Where to write the enriched cards. Default: {default_output}
  -n, --sample <count>   Print this many randomly sampled cards whose
                         effects could not be classified.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Runtime error (I/O, malformed card data).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        default_input = DEFAULT_INPUT,
        default_output = DEFAULT_OUTPUT
    )
}
