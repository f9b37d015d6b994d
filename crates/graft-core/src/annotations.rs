use crate::Value;

/// Bookkeeping attached to a [`Record`](crate::Record) by population and
/// serialization, consumed by depopulation to undo exactly what was added.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Annotations {
    /// Keys of the relations attached by the last population, in schema order.
    included: Vec<String>,

    /// Keys of the computed fields added by serialization.
    computed: Vec<String>,

    /// Caller values that an attached relation or computed field overwrote.
    replaced: Vec<(String, Value)>,
}

impl Annotations {
    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn computed(&self) -> &[String] {
        &self.computed
    }

    pub fn has_included(&self) -> bool {
        !self.included.is_empty()
    }

    pub fn has_computed(&self) -> bool {
        !self.computed.is_empty()
    }

    /// Replaces the included relation keys.
    pub fn set_included(&mut self, keys: Vec<String>) {
        self.included = keys;
    }

    /// Records a computed key. Adding the same key twice is a no-op.
    pub fn push_computed(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.computed.contains(&key) {
            self.computed.push(key);
        }
    }

    /// Saves the caller's value of `key` before it is overwritten.
    ///
    /// Only the first value saved for a key is kept; later ones were written
    /// by population or serialization, not by the caller.
    pub fn push_replaced(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if !self.is_replaced(&key) {
            self.replaced.push((key, value));
        }
    }

    pub fn is_replaced(&self, key: &str) -> bool {
        self.replaced.iter().any(|(replaced, _)| replaced == key)
    }

    /// Removes and returns the caller's saved value of `key`.
    pub fn take_replaced(&mut self, key: &str) -> Option<Value> {
        let index = self.replaced.iter().position(|(replaced, _)| replaced == key)?;
        Some(self.replaced.remove(index).1)
    }

    pub fn take_included(&mut self) -> Vec<String> {
        std::mem::take(&mut self.included)
    }

    pub fn take_computed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.computed)
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.computed.is_empty() && self.replaced.is_empty()
    }
}
