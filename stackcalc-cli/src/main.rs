use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use stackcalc::interpreter::{run, Outcome};
use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "Digite a expressão em RPN (StackCalc): ";

/// Validates and evaluates an integer expression in Reverse Polish Notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Arguments {
    /// The words of the expression, e.g. `5 1 2 + 4 '*' + 3 -`.
    /// Read from standard input when omitted
    expression: Vec<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<ExitCode> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let source = read_source(&args.expression, &mut stdin.lock(), &mut io::stdout())?;
    debug!("evaluating '{}'", source);

    let outcome = run(&source);
    println!("{}", outcome);

    Ok(ExitCode::from(exit_status(&outcome)))
}

fn exit_status(outcome: &Outcome) -> u8 {
    if outcome.is_ok() {
        0
    } else {
        1
    }
}

/// Joins the given words with single spaces, or prompts for a line
/// on `output` and reads it from `input` if there are none.
fn read_source(
    words: &[String],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    write!(output, "{}", PROMPT).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read expression from standard input")?;
    Ok(line.trim().to_string())
}
