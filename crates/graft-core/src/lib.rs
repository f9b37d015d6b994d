mod error;
pub use error::{Error, IntoError};

mod annotations;
pub use annotations::Annotations;

mod find_result;
pub use find_result::{FindResult, Page};

mod predicate;
pub use predicate::Predicate;

mod query;
pub use query::{Find, Query};

mod record;
pub use record::Record;

pub mod service;
pub use service::{Service, ServiceMap, Services};

mod value;
pub use value::Value;

mod value_cmp;
mod value_json;

/// A Result type alias that uses graft's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
