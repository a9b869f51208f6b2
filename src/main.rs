use std::path::PathBuf;

use clap::Parser;
use regnames::Config;

/// Struct to hold the arguments passed to the program
#[derive(Parser, Debug)]
#[command(about = "Rewrites a `<name>,<address>` register list as a hex listing")]
struct Args {
    /// Register list to read, one `<name>,<address>` pair per line. Blank lines,
    /// including a trailing one, are errors
    #[arg(short, long, default_value = "regnames18_cowbasic.txt")]
    input: PathBuf,

    /// Listing to write. An existing file is overwritten
    #[arg(short, long, default_value = "regnames18.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    regnames::log::init();
    let args = Args::parse();

    let config = Config {
        input_path: args.input,
        output_path: args.output,
    };
    regnames::run(&config)?;

    Ok(())
}
