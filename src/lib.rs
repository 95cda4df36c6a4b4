pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::console::Console;
pub use app::session::Session;
pub use config::{cli::LocalStorage, Settings};
pub use crate::core::{catalog::CatalogStore, ledger::OrderLedger, restaurant::Restaurant};
pub use domain::model::{Availability, MenuItem, Order, OrderStatus};
pub use utils::error::{Result, ZomatoError};
