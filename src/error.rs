use std::io;
use thiserror::Error;

/// Failures raised while asking the user for a value.
///
/// Only [`PromptError::RetryBudgetExhausted`], [`PromptError::Interrupted`] and
/// [`PromptError::Io`] ever leave [`Console::ask_as`](crate::Console::ask_as).
/// The other variants are reported to the user and retried.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Blank line, whitespace only, or end of input.
    #[error("empty response not allowed, try again...")]
    EmptyInput,

    /// The line could not be converted to the requested type.
    #[error("the response does not have the expected type: {expected}")]
    TypeConversion {
        /// Human readable name of the requested type, e.g. "integer".
        expected: &'static str,
        /// The offending line.
        input: String,
    },

    /// Every attempt of a single request failed.
    #[error("too many failed attempts ({attempts}) without a valid response")]
    RetryBudgetExhausted { attempts: u32 },

    /// The user pressed Ctrl-C at the prompt.
    #[error("interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// Whether the session may keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PromptError::EmptyInput | PromptError::TypeConversion { .. }
        )
    }
}

/// A label that matches no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fruit: {label}")]
pub struct UnknownItem {
    pub label: String,
}

/// Invalid catalog, discount table or settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("item {item}: price must be positive, got {price}")]
    NonPositivePrice { item: String, price: i64 },

    #[error("item {item} has no label")]
    NoLabels { item: String },

    #[error("label {label:?} is registered for both {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    #[error("discount for {item}: batch size must be at least 1")]
    ZeroBatchSize { item: String },

    #[error("discount for {item}: amount must not be negative, got {amount}")]
    NegativeDiscount { item: String, amount: i64 },

    #[error("discount refers to unknown item {item}")]
    UnknownDiscountItem { item: String },

    #[error("max attempts must be at least 1")]
    NoAttempts,

    #[error("unknown edition {0:?}, expected one of: basic, discounts, full")]
    UnknownEdition(String),
}
