//! gallows - guess the secret word before the drawing is finished

use anyhow::Context;
use gallows::app::App;
use gallows::cli::parse_cli;
use gallows::game::GameConfig;
use gallows::{console, tui};
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = parse_cli();

    let options = cli.game_options().with_context(|| match &cli.words_path {
        Some(path) => format!("failed to load word list from '{}'", path.display()),
        None => "failed to load word list".to_string(),
    })?;
    let config = GameConfig::new(options).context("invalid game settings")?;
    log::info!(
        "starting with {} words, {} incorrect guesses allowed",
        config.words().len(),
        config.max_incorrect_guesses()
    );

    if cli.plain {
        let mut session = config.create_session();
        let stdin = io::stdin();
        let stdout = io::stdout();
        console::play(&mut session, &mut stdin.lock(), &mut stdout.lock())?;
    } else {
        let mut app = App::new(config);
        tui::run(&mut app)?;
    }

    Ok(())
}
