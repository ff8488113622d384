use crate::catalog::{Catalog, Item};
use crate::error::ConfigError;

/// Amount of money in the smallest currency unit.
///
/// Signed: a discount table heavier than the basket yields a negative total.
/// Totals saturate at the `i64` bounds instead of overflowing.
pub type Price = i64;

/// Flat deduction granted once per complete batch of one item kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRule {
    item: String,
    batch_size: u32,
    amount: Price,
}

impl DiscountRule {
    pub fn new(item: impl Into<String>, batch_size: u32, amount: Price) -> Result<Self, ConfigError> {
        let item = item.into();
        if batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize { item });
        }
        if amount < 0 {
            return Err(ConfigError::NegativeDiscount { item, amount });
        }
        Ok(Self {
            item,
            batch_size,
            amount,
        })
    }

    /// Name of the item kind this rule applies to.
    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    pub fn amount(&self) -> Price {
        self.amount
    }

    /// Number of complete batches among `count` matching items.
    pub fn batches(&self, count: usize) -> u64 {
        count as u64 / u64::from(self.batch_size)
    }

    /// Check that the rule names an item of `catalog`.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        match catalog.get(&self.item) {
            Some(_) => Ok(()),
            None => Err(ConfigError::UnknownDiscountItem {
                item: self.item.clone(),
            }),
        }
    }
}

/// Items picked during one session, in the order they were added.
#[derive(Debug, Default)]
pub struct Basket<'a> {
    items: Vec<&'a Item>,
}

impl<'a> Basket<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: &'a Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// How many items of kind `name` the basket holds.
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| item.name() == name).count()
    }

    /// Sum of unit prices, before discounts.
    pub fn raw_total(&self) -> Price {
        self.items
            .iter()
            .fold(0, |total: Price, item| total.saturating_add(item.price()))
    }

    /// Total price after applying `discounts`.
    ///
    /// Each rule counts matching items over the whole basket; a rule never sees
    /// items "used up" by an earlier one. The result is not clamped at zero.
    pub fn total(&self, discounts: &[DiscountRule]) -> Price {
        discounts.iter().fold(self.raw_total(), |total, rule| {
            let batches = Price::try_from(rule.batches(self.count(rule.item()))).unwrap_or(Price::MAX);
            total.saturating_sub(batches.saturating_mul(rule.amount()))
        })
    }
}
