//! Terminal games runner (default binary).
//!
//! Shows the menu on stdin/stdout, or starts one game directly with
//! `--game`. The mouse-driven games take over the terminal while they run
//! and print their result once it is restored.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use tui_games::cli::Args;
use tui_games::games::Menu;

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging();

    let mut menu = Menu::with_builtin_games(args.menu_config());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match args.game {
        Some(game) => {
            menu.play(game.command(), &mut input, &mut output)?;
        }
        None => menu.run(&mut input, &mut output)?,
    }
    output.flush()?;
    Ok(())
}
