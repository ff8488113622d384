use crate::basket::{Basket, Price};
use crate::config::Shop;
use crate::console::Console;
use crate::error::PromptError;
use std::convert::Infallible;
use tracing::{debug, info};

/// What a single round of the session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The item was added; carries the new total.
    Priced(Price),
    /// The label was not recognised; the basket is unchanged.
    Unknown(String),
}

/// One interactive run: ask for a fruit, add it, print the total, repeat.
pub struct Session<'a> {
    console: Console,
    shop: &'a Shop,
    basket: Basket<'a>,
}

impl<'a> Session<'a> {
    /// Start a session with an empty basket.
    pub fn new(console: Console, shop: &'a Shop) -> Self {
        Self {
            console,
            shop,
            basket: Basket::new(),
        }
    }

    pub fn basket(&self) -> &Basket<'a> {
        &self.basket
    }

    /// Ask for one fruit and report the outcome to the user.
    pub fn step(&mut self) -> Result<Step, PromptError> {
        let label = self.console.ask()?;
        match self.shop.catalog().resolve(&label) {
            Ok(item) => {
                self.basket.add(item);
                let total = self.basket.total(self.shop.discounts());
                info!(item = item.name(), count = self.basket.len(), total, "item added");
                self.console.write_line(&total.to_string())?;
                Ok(Step::Priced(total))
            }
            Err(unknown) => {
                debug!(label = %unknown.label, "unknown label");
                self.console.write_line(&unknown.to_string())?;
                Ok(Step::Unknown(unknown.label))
            }
        }
    }

    /// Loop until the console gives up.
    ///
    /// There is no way out other than an error: running out of attempts (which
    /// is what end of input leads to), an interrupt, or an I/O failure.
    pub fn run(&mut self) -> Result<Infallible, PromptError> {
        loop {
            self.step()?;
        }
    }
}
