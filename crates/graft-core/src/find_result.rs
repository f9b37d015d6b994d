use crate::{Record, Value};

/// The result of a service's `find`.
///
/// Services that paginate return a [`Page`]; others return the matching
/// records directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FindResult {
    Page(Page),
    List(Vec<Value>),
}

/// A page of results from a paginated service.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Page {
    /// Total number of records matching the query, across all pages
    pub total: usize,

    /// Page size the service applied, if any
    pub limit: Option<usize>,

    /// Number of matching records skipped before this page
    pub skip: usize,

    /// Records in this page
    pub data: Vec<Value>,
}

impl FindResult {
    /// Returns the records, unwrapping a page to its data.
    pub fn into_data(self) -> Vec<Value> {
        match self {
            Self::Page(page) => page.data,
            Self::List(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Page(page) => page.data.len(),
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for FindResult {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Page> for FindResult {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

/// A page as a paged envelope record: `{ total, limit, skip, data }`.
impl From<Page> for Value {
    fn from(page: Page) -> Self {
        let mut record = Record::new();
        record.insert("total", page.total);
        record.insert("limit", page.limit);
        record.insert("skip", page.skip);
        record.insert("data", page.data);
        Value::Record(record)
    }
}

impl Page {
    pub fn new(data: Vec<Value>) -> Self {
        Self {
            total: data.len(),
            limit: None,
            skip: 0,
            data,
        }
    }
}
