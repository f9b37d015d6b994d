use crate::Value;

use std::cmp::Ordering;

/// A constraint on a single field of a [`Query`](crate::Query).
///
/// In configuration a predicate is written the way the services expect it:
/// a bare value means equality, and `{ "$in": [..] }`, `{ "$gt": v }`, ...
/// select an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the value
    Eq(Value),

    /// Field does not equal the value
    Ne(Value),

    /// Field equals any member of the set
    In(Vec<Value>),

    /// Field equals no member of the set
    NotIn(Vec<Value>),

    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
}

impl Predicate {
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::Eq(value.into())
    }

    pub fn in_set(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::In(values.into_iter().map(Into::into).collect())
    }

    /// Matches a field value against this predicate.
    ///
    /// A missing field is passed as `Null`. Range predicates never match
    /// values of a different kind.
    pub fn matches(&self, field: &Value) -> bool {
        match self {
            Self::Eq(value) => field.loosely_eq(value),
            Self::Ne(value) => !field.loosely_eq(value),
            Self::In(values) => values.iter().any(|value| field.loosely_eq(value)),
            Self::NotIn(values) => !values.iter().any(|value| field.loosely_eq(value)),
            Self::Gt(value) => field.compare(value) == Some(Ordering::Greater),
            Self::Gte(value) => matches!(
                field.compare(value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::Lt(value) => field.compare(value) == Some(Ordering::Less),
            Self::Lte(value) => {
                matches!(field.compare(value), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

impl From<Value> for Predicate {
    /// Reads the configuration form. A record with a single `$`-prefixed
    /// operator key becomes that operator; anything else is equality.
    fn from(value: Value) -> Self {
        let operator = value
            .as_record()
            .filter(|record| record.len() == 1)
            .and_then(|record| record.iter().next())
            .and_then(|(key, operand)| Self::from_operator(key, operand));

        match operator {
            Some(predicate) => predicate,
            None => Self::Eq(value),
        }
    }
}

impl From<Predicate> for Value {
    fn from(predicate: Predicate) -> Self {
        let (operator, operand) = match predicate {
            Predicate::Eq(value) => return value,
            Predicate::Ne(value) => ("$ne", value),
            Predicate::In(values) => ("$in", Value::List(values)),
            Predicate::NotIn(values) => ("$nin", Value::List(values)),
            Predicate::Gt(value) => ("$gt", value),
            Predicate::Gte(value) => ("$gte", value),
            Predicate::Lt(value) => ("$lt", value),
            Predicate::Lte(value) => ("$lte", value),
        };

        Value::Record([(operator, operand)].into_iter().collect())
    }
}

impl Predicate {
    fn from_operator(key: &str, operand: &Value) -> Option<Self> {
        let operand = operand.clone();
        Some(match key {
            "$eq" => Self::Eq(operand),
            "$ne" => Self::Ne(operand),
            "$in" => Self::In(Self::set_operand(operand)?),
            "$nin" => Self::NotIn(Self::set_operand(operand)?),
            "$gt" => Self::Gt(operand),
            "$gte" => Self::Gte(operand),
            "$lt" => Self::Lt(operand),
            "$lte" => Self::Lte(operand),
            _ => return None,
        })
    }

    fn set_operand(operand: Value) -> Option<Vec<Value>> {
        match operand {
            Value::List(values) => Some(values),
            _ => None,
        }
    }
}
