//! Small enums describing catalog entries and login roles.

use serde::{Deserialize, Serialize};

/// Unit a product is sold by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Box,
    Pc,
}

impl Unit {
    /// Short label shown after a price ("per kg").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Box => "box",
            Self::Pc => "pc",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "box" => Ok(Self::Box),
            "pc" => Ok(Self::Pc),
            _ => Err(format!("invalid unit: {s}")),
        }
    }
}

/// Kind of customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    Wholesale,
    Retail,
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wholesale => write!(f, "Wholesale"),
            Self::Retail => write!(f, "Retail"),
        }
    }
}

/// Role picked on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Store owner managing prices.
    Owner,
    /// Customer browsing their price list.
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Customer => write!(f, "customer"),
        }
    }
}
