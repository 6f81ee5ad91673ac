//! Search conditions
//!
//! A condition names a field, a value and how that value takes part in the query: either
//! joined into a boolean query through a `Combinator`, or applied as one bound of a range
//! through a `Comparator`.

pub mod parse;

use std::fmt;

use chrono::{DateTime, Utc, SecondsFormat};
use serde_json::Value as Json;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
    Not,
}


impl Combinator {
    pub fn all() -> [Combinator; 3] {
        [Combinator::And, Combinator::Or, Combinator::Not]
    }

    pub fn from_name(name: &str) -> Option<Combinator> {
        match name.to_lowercase().as_str() {
            "and" => Some(Combinator::And),
            "or" => Some(Combinator::Or),
            "not" => Some(Combinator::Not),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Combinator::And => "and",
            Combinator::Or => "or",
            Combinator::Not => "not",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Gte,
    Lte,
    Gt,
    Lt,
}


impl Comparator {
    pub fn all() -> [Comparator; 4] {
        [Comparator::Gte, Comparator::Lte, Comparator::Gt, Comparator::Lt]
    }

    pub fn from_name(name: &str) -> Option<Comparator> {
        match name.to_lowercase().as_str() {
            "gte" => Some(Comparator::Gte),
            "lte" => Some(Comparator::Lte),
            "gt" => Some(Comparator::Gt),
            "lt" => Some(Comparator::Lt),
            _ => None,
        }
    }

    /// The key this bound is written under in a range query
    pub fn name(&self) -> &'static str {
        match *self {
            Comparator::Gte => "gte",
            Comparator::Lte => "lte",
            Comparator::Gt => "gt",
            Comparator::Lt => "lt",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Combinator(Combinator),
    Comparator(Comparator),
}


impl Mode {
    pub fn is_combinator(&self) -> bool {
        match *self {
            Mode::Combinator(_) => true,
            Mode::Comparator(_) => false,
        }
    }

    pub fn is_comparator(&self) -> bool {
        !self.is_combinator()
    }
}


impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mode::Combinator(combinator) => write!(f, "{}", combinator.name()),
            Mode::Comparator(comparator) => write!(f, "{}", comparator.name()),
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}


impl ScalarValue {
    pub fn from_json(json: &Json) -> Option<ScalarValue> {
        match *json {
            Json::String(ref string) => Some(ScalarValue::String(string.clone())),
            Json::Bool(value) => Some(ScalarValue::Boolean(value)),
            Json::Number(ref number) => {
                if let Some(value) = number.as_i64() {
                    Some(ScalarValue::Integer(value))
                } else {
                    number.as_f64().map(ScalarValue::Float)
                }
            }
            Json::Null | Json::Array(_) | Json::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Json {
        match *self {
            ScalarValue::String(ref string) => Json::String(string.clone()),
            ScalarValue::Integer(value) => Json::from(value),
            // Non-finite floats have no JSON form
            ScalarValue::Float(value) => Json::from(value),
            ScalarValue::Boolean(value) => Json::Bool(value),
            ScalarValue::Date(ref value) => {
                Json::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}


impl From<&str> for ScalarValue {
    fn from(value: &str) -> ScalarValue {
        ScalarValue::String(value.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> ScalarValue {
        ScalarValue::String(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> ScalarValue {
        ScalarValue::Integer(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> ScalarValue {
        ScalarValue::Integer(value as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> ScalarValue {
        ScalarValue::Float(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> ScalarValue {
        ScalarValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> ScalarValue {
        ScalarValue::Date(value)
    }
}


/// A single (field, value, mode) entry of a condition list
///
/// Conditions are immutable once built. Construct them with `combined` for clauses that
/// join a boolean query, or `bounded` for range bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    field: String,
    value: ScalarValue,
    mode: Mode,
}


impl Condition {
    pub fn new<F: Into<String>, V: Into<ScalarValue>>(field: F, value: V, mode: Mode) -> Condition {
        Condition {
            field: field.into(),
            value: value.into(),
            mode: mode,
        }
    }

    pub fn combined<F: Into<String>, V: Into<ScalarValue>>(field: F, value: V, combinator: Combinator) -> Condition {
        Condition::new(field, value, Mode::Combinator(combinator))
    }

    pub fn bounded<F: Into<String>, V: Into<ScalarValue>>(field: F, value: V, comparator: Comparator) -> Condition {
        Condition::new(field, value, Mode::Comparator(comparator))
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
}


#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json;

    use super::{Combinator, Comparator, Condition, Mode, ScalarValue};

    #[test]
    fn test_combinator_names() {
        for combinator in Combinator::all().iter() {
            assert_eq!(Combinator::from_name(combinator.name()), Some(*combinator));
        }

        assert_eq!(Combinator::from_name("AND"), Some(Combinator::And));
        assert_eq!(Combinator::from_name("xor"), None);
    }

    #[test]
    fn test_comparator_names() {
        for comparator in Comparator::all().iter() {
            assert_eq!(Comparator::from_name(comparator.name()), Some(*comparator));
        }

        assert_eq!(Comparator::from_name("GTE"), Some(Comparator::Gte));
        assert_eq!(Comparator::from_name("eq"), None);
    }

    #[test]
    fn test_scalar_from_json() {
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("\"foo\"").unwrap()),
                   Some(ScalarValue::String("foo".to_string())));
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("23").unwrap()),
                   Some(ScalarValue::Integer(23)));
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("1.5").unwrap()),
                   Some(ScalarValue::Float(1.5)));
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("true").unwrap()),
                   Some(ScalarValue::Boolean(true)));
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("null").unwrap()), None);
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("[1]").unwrap()), None);
        assert_eq!(ScalarValue::from_json(&serde_json::from_str("{}").unwrap()), None);
    }

    #[test]
    fn test_scalar_keeps_json_type() {
        assert_eq!(ScalarValue::from(23).to_json(), json!(23));
        assert_eq!(ScalarValue::from("男").to_json(), json!("男"));
        assert_eq!(ScalarValue::from(false).to_json(), json!(false));
    }

    #[test]
    fn test_date_to_json() {
        let date = Utc.with_ymd_and_hms(2022, 11, 22, 8, 30, 0).unwrap();

        assert_eq!(ScalarValue::from(date).to_json(), json!("2022-11-22T08:30:00Z"));
    }

    #[test]
    fn test_condition_constructors() {
        let condition = Condition::combined("age", 23, Combinator::And);
        assert_eq!(condition.field(), "age");
        assert_eq!(condition.value(), &ScalarValue::Integer(23));
        assert_eq!(condition.mode(), Mode::Combinator(Combinator::And));
        assert!(condition.mode().is_combinator());

        let condition = Condition::bounded("age", 30, Comparator::Gte);
        assert_eq!(condition.mode(), Mode::Comparator(Comparator::Gte));
        assert!(condition.mode().is_comparator());
    }
}
