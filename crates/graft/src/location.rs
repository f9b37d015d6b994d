use crate::Context;

use graft_core::Value;

/// Where in a [`Context`] the records to (de)populate live.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Location {
    /// `Context::result`. A paged envelope (a record with a `data` list) is
    /// unwrapped to its data.
    #[default]
    Result,

    /// `Context::data`
    Data,

    /// A named parameter in `Params::named`
    Param(String),
}

impl Location {
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    pub(crate) fn payload_mut<'a>(&self, cx: &'a mut Context) -> Option<&'a mut Value> {
        match self {
            Self::Result => cx.result.as_mut(),
            Self::Data => cx.data.as_mut(),
            Self::Param(name) => cx.params.named.get_mut(name),
        }
    }

    /// Detaches the payload from the context so it can be mutated while the
    /// context is borrowed. Pair with [`Location::restore`].
    pub(crate) fn take(&self, cx: &mut Context) -> Option<Value> {
        match self {
            Self::Result => cx.result.take(),
            Self::Data => cx.data.take(),
            Self::Param(name) => cx.params.named.get_mut(name).map(Value::take),
        }
    }

    pub(crate) fn restore(&self, cx: &mut Context, payload: Option<Value>) {
        let Some(payload) = payload else {
            return;
        };

        match self {
            Self::Result => cx.result = Some(payload),
            Self::Data => cx.data = Some(payload),
            Self::Param(name) => {
                cx.params.named.insert(name.clone(), payload);
            }
        }
    }

    /// Returns the record or list of records held by `payload`.
    pub(crate) fn records<'a>(&self, payload: &'a mut Value) -> &'a mut Value {
        if *self == Self::Result && is_paged(payload) {
            return &mut payload.expect_record_mut()["data"];
        }

        payload
    }
}

fn is_paged(payload: &Value) -> bool {
    matches!(
        payload.as_record().and_then(|record| record.get("data")),
        Some(Value::List(_))
    )
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Result => f.write_str("result"),
            Self::Data => f.write_str("data"),
            Self::Param(name) => write!(f, "params.{name}"),
        }
    }
}
