use crate::basket::Price;
use crate::error::{ConfigError, UnknownItem};

/// A purchasable kind of fruit.
///
/// The `name` identifies the kind (discount rules refer to it); `labels` are the
/// spellings a user may type to select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    labels: Vec<String>,
    price: Price,
}

impl Item {
    /// Create an item. At least one label and a positive price are required.
    pub fn new<I, S>(name: impl Into<String>, price: Price, labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if price <= 0 {
            return Err(ConfigError::NonPositivePrice { item: name, price });
        }
        if labels.is_empty() {
            return Err(ConfigError::NoLabels { item: name });
        }
        Ok(Self {
            name,
            labels,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in the smallest currency unit.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Exact, case-sensitive label match.
    pub fn is_labelled(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Read-only set of items known to the shop.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting labels claimed by two different items.
    pub fn new(items: Vec<Item>) -> Result<Self, ConfigError> {
        for (i, item) in items.iter().enumerate() {
            for other in &items[i + 1..] {
                if let Some(label) = item.labels.iter().find(|l| other.is_labelled(l)) {
                    return Err(ConfigError::DuplicateLabel {
                        label: label.clone(),
                        first: item.name.clone(),
                        second: other.name.clone(),
                    });
                }
            }
        }
        Ok(Self { items })
    }

    /// Map user input to an item.
    ///
    /// No trimming or case folding is applied: `"apple "` and `"Apple"` are
    /// unknown unless registered as labels.
    pub fn resolve(&self, label: &str) -> Result<&Item, UnknownItem> {
        self.items
            .iter()
            .find(|item| item.is_labelled(label))
            .ok_or_else(|| UnknownItem {
                label: label.to_string(),
            })
    }

    /// Look an item up by its kind name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
