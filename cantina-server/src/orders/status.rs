//! Status transition policy
//!
//! | from \ to     | Pendente | Em Preparo | Pronto | Cancelado |
//! |---------------|----------|------------|--------|-----------|
//! | Pendente      | =        | ✓          |        | ✓         |
//! | Em Preparo    |          | =          | ✓      | ✓         |
//! | Pronto        |          |            | =      | ✓         |
//! | Cancelado     |          |            |        | =         |
//!
//! `Strict` enforces the table; `Unrestricted` lets the kitchen set any status.

use std::fmt;
use std::str::FromStr;

use shared::models::OrderStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Any status to any status
    #[default]
    Unrestricted,
    /// Forward along `Pendente → Em Preparo → Pronto`, cancel from anywhere
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::Strict => matches!(
                (from, to),
                (OrderStatus::Pending, OrderStatus::InPreparation)
                    | (OrderStatus::InPreparation, OrderStatus::Ready)
                    | (
                        OrderStatus::Pending | OrderStatus::InPreparation | OrderStatus::Ready,
                        OrderStatus::Cancelled
                    )
            ),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TransitionPolicy::Unrestricted => "any",
            TransitionPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "unrestricted" => Ok(TransitionPolicy::Unrestricted),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(format!("unknown status transition policy: {other}")),
        }
    }
}
