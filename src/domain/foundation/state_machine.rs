//! Validated transitions for status enums.

use super::errors::{DomainError, ErrorCode};

/// A status enum with an explicit transition graph.
///
/// Implementors list the legal moves out of each state; `transition_to`
/// and `is_terminal` come for free on top of that.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for OrderStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Pending, Processing) |
///             (Processing, Shipped) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Pending => vec![Processing, Shipped, Cancelled],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let new_status = current.transition_to(OrderStatus::Shipped)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Display {
    /// Whether moving from `self` to `target` is a legal transition.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, or fails with `InvalidTransition` carrying
    /// the attempted `from`/`to` pair in its details.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidTransition,
                format!("Cannot transition from {} to {}", self, target),
            )
            .with_detail("from", self.to_string())
            .with_detail("to", target.to_string()))
        }
    }

    /// True when no transition leads out of the current state.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
