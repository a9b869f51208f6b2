use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Struct to hold the arguments passed to the program
#[derive(Parser, Debug)]
#[command(about = "Loads a register listing and prints it in address order")]
struct Args {
    /// Listing produced by `regnames`
    #[arg(short, long, default_value = "regnames18.txt")]
    listing: PathBuf,

    /// Print only the name at this hex address (`0x` prefix optional)
    #[arg(short, long)]
    address: Option<String>,
}

fn main() -> anyhow::Result<()> {
    regnames::log::init();
    let args = Args::parse();

    let registers = regnames::read_listing(&args.listing)?;

    match args.address {
        Some(hex) => {
            let name = regnames::lookup(&registers, &hex)
                .with_context(|| format!("looking up `{hex}` in {}", args.listing.display()))?;
            println!("{name}");
        }
        None => {
            for (address, name) in &registers {
                println!("{address:04X} {name}");
            }
        }
    }

    Ok(())
}
