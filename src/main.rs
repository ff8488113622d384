use anyhow::{Context, Result};
use fruit_basket::cli::Args;
use fruit_basket::input::{BufReadInput, EditorInput, Input};
use fruit_basket::{Console, Session, Shop};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let settings = argh::from_env::<Args>().into_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let shop = Shop::for_edition(settings.edition)
        .with_context(|| format!("building the {} price book", settings.edition))?;
    tracing::info!(
        edition = %settings.edition,
        items = shop.catalog().items().len(),
        discounts = shop.discounts().len(),
        max_attempts = settings.max_attempts,
        "session starting"
    );

    let input: Box<dyn Input> = if io::stdin().is_terminal() {
        Box::new(EditorInput::new().context("cannot open the terminal for line editing")?)
    } else {
        Box::new(BufReadInput::new(io::stdin().lock()))
    };
    let console = Console::with_max_attempts(input, Box::new(io::stdout()), settings.max_attempts);

    let mut session = Session::new(console, &shop);
    let err = match session.run() {
        Err(err) => err,
        Ok(never) => match never {},
    };
    // release the streams before reporting
    drop(session);
    tracing::warn!(error = %err, "session aborted");
    Err(err).context("session aborted")
}
