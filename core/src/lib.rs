pub mod handle;
pub mod model;
pub mod store;

pub use handle::StoreHandle;
pub use model::task::Task;
pub use store::{AddOutcome, Snapshot, TaskStore};
