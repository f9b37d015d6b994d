mod depopulate;
pub use depopulate::depopulate;

mod normalize;

mod permission;

mod populate;
pub use populate::populate;

mod query;

mod select_schemas;
pub use select_schemas::select_schemas;

mod serialize;
pub use serialize::serialize;
