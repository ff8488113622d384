use crate::basket::{DiscountRule, Price};
use crate::catalog::{Catalog, Item};
use crate::console::DEFAULT_MAX_ATTEMPTS;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

const APPLE_PRICE: Price = 100;
const BANANA_PRICE: Price = 150;
const CHERRY_PRICE: Price = 75;

/// Successive versions of the shop, each adding to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edition {
    /// English labels, no discounts.
    Basic,
    /// English labels with batch discounts on cherries and bananas.
    Discounts,
    /// Discounts plus French, English and Italian aliases.
    #[default]
    Full,
}

impl FromStr for Edition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Edition::Basic),
            "discounts" => Ok(Edition::Discounts),
            "full" => Ok(Edition::Full),
            other => Err(ConfigError::UnknownEdition(other.to_string())),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edition::Basic => "basic",
            Edition::Discounts => "discounts",
            Edition::Full => "full",
        })
    }
}

/// Immutable price book for a session: what can be bought and which discounts
/// apply. Built once at startup and handed to the session.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Catalog,
    discounts: Vec<DiscountRule>,
}

impl Shop {
    /// Build a shop, checking that every discount names a catalog item.
    pub fn new(catalog: Catalog, discounts: Vec<DiscountRule>) -> Result<Self, ConfigError> {
        for rule in &discounts {
            rule.validate(&catalog)?;
        }
        Ok(Self { catalog, discounts })
    }

    /// The built-in price book of `edition`.
    pub fn for_edition(edition: Edition) -> Result<Self, ConfigError> {
        let full = edition == Edition::Full;
        let catalog = Catalog::new(vec![
            Item::new("apple", APPLE_PRICE, labels(full, "apple", &["Pommes", "Apples", "Mele"]))?,
            Item::new("banana", BANANA_PRICE, labels(full, "banana", &["Bananes"]))?,
            Item::new("cherry", CHERRY_PRICE, labels(full, "cherry", &["Cerises"]))?,
        ])?;

        let discounts = match edition {
            Edition::Basic => Vec::new(),
            Edition::Discounts | Edition::Full => vec![
                DiscountRule::new("cherry", 2, 20)?,
                DiscountRule::new("banana", 2, BANANA_PRICE)?,
            ],
        };

        Shop::new(catalog, discounts)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn discounts(&self) -> &[DiscountRule] {
        &self.discounts
    }
}

fn labels(multilingual: bool, english: &'static str, others: &[&'static str]) -> Vec<&'static str> {
    let mut labels = vec![english];
    if multilingual {
        labels.extend_from_slice(others);
    }
    labels
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub edition: Edition,
    /// Attempts allowed per question, at least 1.
    pub max_attempts: u32,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl Settings {
    pub fn new(edition: Edition, max_attempts: u32, verbose: bool) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(Self {
            edition,
            max_attempts,
            verbose,
        })
    }

    /// Default log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            verbose: false,
        }
    }
}
