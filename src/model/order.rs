//! Orders and their lifecycle.
//!
//! An order is created `IN_PROGRESS` and ends in exactly one of two terminal
//! statuses:
//!
//! ```text
//! IN_PROGRESS --cancel-->   CANCELLED
//! IN_PROGRESS --complete--> COMPLETED
//! ```

use resource_framework::{require_text, Lifecycle, ResourceKind, UnknownVariant, ValidationError};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Attributes of a customer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub description: String,
}

impl Order {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl ResourceKind for Order {
    type Status = OrderStatus;

    const NAME: &'static str = "order";
    const COLLECTION: &'static str = "orders";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("description", &self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        })
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownVariant::new("order status", other)),
        }
    }
}

/// Triggers of order transitions. `Display` is the link relation (`cancel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Cancel,
    Complete,
}

impl Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderAction::Cancel => "cancel",
            OrderAction::Complete => "complete",
        })
    }
}

impl FromStr for OrderAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cancel" => Ok(OrderAction::Cancel),
            "complete" => Ok(OrderAction::Complete),
            other => Err(UnknownVariant::new("order action", other)),
        }
    }
}

impl Lifecycle for OrderStatus {
    type Action = OrderAction;

    const INITIAL: Self = OrderStatus::InProgress;
    const ALL: &'static [Self] = &[
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
    const TRANSITIONS: &'static [(Self, OrderAction, Self)] = &[
        (OrderStatus::InProgress, OrderAction::Cancel, OrderStatus::Cancelled),
        (OrderStatus::InProgress, OrderAction::Complete, OrderStatus::Completed),
    ];
}
