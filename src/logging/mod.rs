pub mod file_store;
pub mod time;
pub mod types;

pub use file_store::FileLogStore;
pub use types::{InboundRequest, LogHandle, UNKNOWN_CLIENT};
