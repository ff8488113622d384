//! A tiny console fruit shop.
//!
//! The user types fruit names one per line; every recognised fruit goes into a
//! basket and the running total, after batch discounts, is printed back. All of
//! the interaction goes through [`Console`], which prompts, rejects blank or
//! mistyped answers and gives up after a bounded number of attempts.
//!
//! The price book is a plain value ([`Shop`]) built once and passed to the
//! [`Session`], so alternative catalogs and discount tables are easy to plug in.

mod basket;
mod catalog;
pub mod cli;
pub mod config;
mod console;
pub mod error;
pub mod input;
pub mod io_adapters;
mod session;

pub use basket::{Basket, DiscountRule, Price};
pub use catalog::{Catalog, Item};
pub use config::{Edition, Settings, Shop};
pub use console::{Answer, Console, DEFAULT_MAX_ATTEMPTS};
pub use error::{ConfigError, PromptError, UnknownItem};
pub use session::{Session, Step};
