use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
    process,
};

use clap::Parser;
use spi::repl::{self, ReplOptions};

/// spi reads one arithmetic expression per line and prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Prints the parse tree of each line, in prefix form, before its value.
    #[arg(short, long)]
    tree: bool,

    /// Prints the tokens of each line before its value.
    #[arg(long)]
    tokens: bool,

    /// Never prints the banner and the prompt.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let interactive = args.file.is_none() && !args.quiet && io::stdin().is_terminal();
    let options = ReplOptions { banner:      interactive.then(|| repl::BANNER.to_string()),
                                prompt:      interactive.then(|| repl::PROMPT.to_string()),
                                show_tree:   args.tree,
                                show_tokens: args.tokens, };

    let result = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                process::exit(1);
            });
            repl::run(BufReader::new(file), io::stdout().lock(), io::stderr().lock(), &options)
        },
        None => repl::run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock(), &options),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
