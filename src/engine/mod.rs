pub mod catalog;
pub mod differential;
pub mod recommender;
pub mod signals;

use thiserror::Error;

use crate::models::enums::ActionId;

/// Engine faults. The only variant is a programming-error guard: an action id
/// referenced by a rule block that the catalog does not carry. This indicates
/// a catalog/engine mismatch and is never a user-facing condition.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown action id: {}", .0.as_str())]
    UnknownAction(ActionId),
}
