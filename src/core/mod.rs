pub mod coordinator;
pub mod history;
pub mod plan;
pub mod status;

pub use coordinator::{Coordinator, RunOutcome};
pub use plan::{Action, plan};
