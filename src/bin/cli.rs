// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use vagadash::cli::{self, Mode};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::detect_mode().map_err(|e| eyre!("{e}"))? {
        Mode::Cli(params) => cli::run(params).map_err(|e| eyre!("{e}")),
        Mode::Gui => {
            // The CLI binary stays headless; point users at the GUI binary.
            eprintln!("No arguments given. Run `vagadash` for the GUI, or see --help.");
            Ok(())
        }
    }
}
