//! `connect_four` binary entry point.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use connect_four::cli::Args;
use connect_four::config::{load_file_config, resolve};
use connect_four::{EditorSource, Game, Outcome, Player, ReaderSource, Session, SessionOptions};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("connect_four={}", args.log_level()).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let file_config = load_file_config(args.config.as_deref())?;
    let settings = resolve(args.overrides(), file_config)?;

    let stdout = io::stdout();
    let interactive_out = stdout.is_terminal();
    let color = settings.color && interactive_out && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(color);

    let options = SessionOptions {
        clear_screen: settings.clear_screen && interactive_out,
        color,
        ..Default::default()
    };

    let players = Player::roster(settings.players)?;
    let game = Game::new(settings.game, players)?;

    let outcome = if io::stdin().is_terminal() {
        let source = EditorSource::new(options.interrupt.clone())?;
        Session::new(game, source, stdout.lock(), options).run()?
    } else {
        let source = ReaderSource::new(io::stdin().lock());
        Session::new(game, source, stdout.lock(), options).run()?
    };

    if let Outcome::Abandoned = outcome {
        tracing::debug!("exiting without a result");
    }
    Ok(())
}
