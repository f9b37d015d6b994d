use graft::{Find, FindResult, Query};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct FindOp {
    /// Identifier the service was registered under
    pub service: String,
    pub find: Find,
    /// `None` when the service failed
    pub result: Option<FindResult>,
}

/// A wrapper around the finds log that provides a clean API for tests
#[derive(Debug, Clone, Default)]
pub struct FindLog {
    ops: Arc<Mutex<Vec<FindOp>>>,
}

impl FindLog {
    pub(crate) fn push(&self, op: FindOp) {
        self.ops.lock().unwrap().push(op);
    }

    /// Get the number of logged finds
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Service identifiers in the order they were queried
    pub fn services(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.service.clone())
            .collect()
    }

    /// Queries sent to `service`, in order
    pub fn queries(&self, service: &str) -> Vec<Query> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.service == service)
            .map(|op| op.find.query.clone())
            .collect()
    }

    /// Count finds against `service`
    pub fn count(&self, service: &str) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.service == service)
            .count()
    }

    /// Remove and return the first find from the log
    pub fn pop(&self) -> Option<FindOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
