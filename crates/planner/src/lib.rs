pub mod error;
pub mod session;
pub mod store;

pub use error::PlannerError;
pub use session::{PlanDraft, PlannerMode, initial_mode, mode_after_cancel, mode_after_delete};
pub use store::{PlanStore, apply_edits, delete_plan, save_plan};
