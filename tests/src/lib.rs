
mod find_log;
pub use find_log::{FindLog, FindOp};

pub use logging_service::LoggingService;

pub use memory_service::{FailingService, MemoryService};

pub use setup::TestApp;

pub use serde_json::json;

/// Converts a value back to JSON for whole-payload assertions.
pub fn to_json(value: &graft::Value) -> serde_json::Value {
    serde_json::Value::from(value.clone())
}
