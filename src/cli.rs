use crate::config::{Edition, Settings};
use crate::console::DEFAULT_MAX_ATTEMPTS;
use anyhow::{Context, Result};
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// read fruit names from standard input and print the basket total after each one.
pub struct Args {
    #[argh(option, default = "Edition::Full")]
    /// price book to use: basic, discounts or full (default: full)
    pub edition: Edition,

    #[argh(option, default = "DEFAULT_MAX_ATTEMPTS")]
    /// failed answers allowed per question before giving up (default: 3)
    pub max_attempts: u32,

    #[argh(switch, short = 'v')]
    /// log debug diagnostics to standard error
    pub verbose: bool,
}

impl Args {
    /// Validate the parsed flags.
    pub fn into_settings(self) -> Result<Settings> {
        Settings::new(self.edition, self.max_attempts, self.verbose).context("invalid arguments")
    }
}
