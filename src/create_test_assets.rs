use anyhow::Result;
use clap::Parser;
use test_assets_lib::{generate_fixtures, ASSETS_DIR, SUCCESS_MESSAGE};

/// Write the placeholder JPEG fixtures used by the upload tests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    generate_fixtures(ASSETS_DIR)?;

    println!("{}", SUCCESS_MESSAGE);

    Ok(())
}
