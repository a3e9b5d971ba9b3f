use anyhow::Result;
use stringref::cli;

fn main() -> Result<()> {
    cli::run_cli()
}
