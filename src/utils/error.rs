use std::fmt;
use thiserror::Error;

/// Which collection an id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Dish,
    Order,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Dish => write!(f, "Dish"),
            Resource::Order => write!(f, "Order"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ZomatoError {
    #[error("{resource} ID {id} not found")]
    NotFound { resource: Resource, id: u32 },

    #[error("Dish ID {0} is not available")]
    DishUnavailable(u32),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid availability: {0}")]
    InvalidAvailability(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("An order must contain at least one dish")]
    EmptyOrder,

    #[error("No {0} IDs left to assign")]
    IdsExhausted(Resource),

    #[error("Invalid input for {field}: {message}")]
    InputError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ZomatoError {
    pub fn not_found(resource: Resource, id: u32) -> Self {
        ZomatoError::NotFound { resource, id }
    }

    pub fn input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ZomatoError::InputError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ZomatoError::NotFound { .. } | ZomatoError::DishUnavailable(_) => ErrorCategory::Lookup,
            ZomatoError::InvalidStatus(_)
            | ZomatoError::InvalidAvailability(_)
            | ZomatoError::InvalidPrice(_)
            | ZomatoError::EmptyOrder
            | ZomatoError::InputError { .. } => ErrorCategory::Input,
            ZomatoError::IdsExhausted(_)
            | ZomatoError::IoError(_)
            | ZomatoError::SerializationError(_) => ErrorCategory::Storage,
            ZomatoError::ConfigError { .. }
            | ZomatoError::InvalidConfigValueError { .. }
            | ZomatoError::ValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Command-level failures return control to the menu loop.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// True when the error is a missing file rather than a broken one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ZomatoError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZomatoError::NotFound { resource, .. } => format!("Error: {} ID not found!", resource),
            ZomatoError::DishUnavailable(id) => format!("Error: Dish ID {} is not available!", id),
            ZomatoError::InvalidStatus(_) => "Error: Invalid status!".to_string(),
            ZomatoError::InvalidAvailability(value) => {
                format!("Error: '{}' is not a valid availability!", value)
            }
            ZomatoError::InvalidPrice(_) => "Error: Price must be a non-negative number!".to_string(),
            ZomatoError::EmptyOrder => "Error: An order needs at least one dish!".to_string(),
            ZomatoError::InputError { field, .. } => format!("Error: Invalid {}!", field),
            ZomatoError::IdsExhausted(resource) => format!("Error: No {} IDs left!", resource),
            ZomatoError::IoError(_) | ZomatoError::SerializationError(_) => {
                "Error: Could not save data to disk!".to_string()
            }
            ZomatoError::ConfigError { message } | ZomatoError::ValidationError { message } => {
                format!("Configuration problem: {}", message)
            }
            ZomatoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZomatoError::NotFound { resource: Resource::Dish, .. } => {
                "Use 'View Menu' to see the existing dish IDs"
            }
            ZomatoError::NotFound { resource: Resource::Order, .. } => {
                "Use 'Review Orders' to see the existing order IDs"
            }
            ZomatoError::DishUnavailable(_) => {
                "Pick dishes marked 'yes' in the menu or update the dish availability"
            }
            ZomatoError::InvalidStatus(_) => {
                "Use one of: received, preparing, ready for pickup, delivered"
            }
            ZomatoError::InvalidAvailability(_) => "Answer with 'yes' or 'no'",
            ZomatoError::InvalidPrice(_) => "Enter a price such as 9.50",
            ZomatoError::EmptyOrder => "Enter at least one dish ID",
            ZomatoError::InputError { .. } => "Check the value and try again",
            ZomatoError::IdsExhausted(_) => "Renumber the records in the data file",
            ZomatoError::IoError(_) | ZomatoError::SerializationError(_) => {
                "Check that the data directory exists and is writable"
            }
            ZomatoError::ConfigError { .. }
            | ZomatoError::InvalidConfigValueError { .. }
            | ZomatoError::ValidationError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ZomatoError>;
