use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use imp::{parse, scan};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: imp [OPTIONS] [SOURCE]\n\
                     Runs the IMP program in SOURCE, or read from standard input when SOURCE is omitted.";

/// imp runs programs written in IMP, a minimal imperative teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the scanned tokens instead of running the program.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program as normalised source instead of running it.
    #[arg(long)]
    ast: bool,

    /// The program to run. Standard input is read when omitted.
    #[arg(value_name = "SOURCE")]
    sources: Vec<PathBuf>,
}

fn main() {
    install_tracing();

    let args = Args::parse();

    if args.sources.len() > 1 {
        println!("{USAGE}");
        return;
    }

    let source = match args.sources.first() {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                    path.display());
                          process::exit(1);
                      }),
        None => io::read_to_string(io::stdin()).unwrap_or_else(|e| {
                    eprintln!("Failed to read standard input: {e}");
                    process::exit(1);
                }),
    };

    if let Err(e) = dispatch(&args, &source) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Runs the stage selected on the command line.
fn dispatch(args: &Args, source: &str) -> Result<(), imp::Error> {
    if args.tokens {
        for token in scan(source)? {
            println!("{:>4}  {:<16}{}", token.line, format!("{:?}", token.kind), token);
        }
        return Ok(());
    }

    if args.ast {
        let tokens = scan(source)?;
        print!("{}", parse(&tokens)?);
        return Ok(());
    }

    imp::run(source, io::stdout().lock())?;
    Ok(())
}

/// Logs go to stderr so that stdout carries only program output.
fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}
