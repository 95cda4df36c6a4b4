pub mod catalog;
pub mod ledger;
pub mod persistence;
pub mod restaurant;

pub use crate::domain::model::{Availability, MenuItem, Order, OrderStatus};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
