use crate::utils::error::ZomatoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a dish can currently be ordered. Persisted as `"yes"` / `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "yes",
            Availability::Unavailable => "no",
        }
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

// Older menu files may hold any lowercase answer; only "yes" ever meant available.
impl From<String> for Availability {
    fn from(value: String) -> Self {
        value.trim().eq_ignore_ascii_case("yes").into()
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Availability {
    type Err = ZomatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Availability::Available),
            "no" | "n" => Ok(Availability::Unavailable),
            other => Err(ZomatoError::InvalidAvailability(other.to_string())),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub availability: Availability,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, price: f64, availability: Availability) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            availability,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Lifecycle of an order. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "ready for pickup", alias = "ready_for_pickup")]
    ReadyForPickup,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::ReadyForPickup,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::ReadyForPickup => "ready for pickup",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ZomatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "received" => Ok(OrderStatus::Received),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready for pickup" | "ready_for_pickup" => Ok(OrderStatus::ReadyForPickup),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(ZomatoError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order. `items` are copies of the menu entries at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub items: Vec<MenuItem>,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: u32, customer: impl Into<String>, items: Vec<MenuItem>) -> Self {
        let total_price = items.iter().map(|item| item.price).sum();
        Self {
            id,
            customer: customer.into(),
            items,
            total_price,
            status: OrderStatus::Received,
        }
    }
}
