//! Order status enum.

use serde::{Deserialize, Serialize};

/// Status of a past order.
///
/// A closed set - order mutation happens outside this core, so no transitions
/// are defined here. The status only carries presentation hints for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Display label for the status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "В обработке",
            Self::Completed => "Выполнен",
            Self::Cancelled => "Отменен",
        }
    }

    /// Display emphasis class for the status.
    #[must_use]
    pub const fn tone(&self) -> &'static str {
        match self {
            Self::Pending => "text-yellow-600",
            Self::Completed => "text-green-600",
            Self::Cancelled => "text-red-600",
        }
    }
}

/// Error returned when parsing an [`OrderStatus`] from a string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct ParseOrderStatusError(String);

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::Completed.label(), "Выполнен");
        assert_eq!(OrderStatus::Pending.label(), "В обработке");
        assert_eq!(OrderStatus::Cancelled.label(), "Отменен");
    }

    #[test]
    fn test_tones() {
        assert_eq!(OrderStatus::Completed.tone(), "text-green-600");
        assert_eq!(OrderStatus::Pending.tone(), "text-yellow-600");
        assert_eq!(OrderStatus::Cancelled.tone(), "text-red-600");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");

        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
