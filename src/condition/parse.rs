//! Parses conditions from JSON
//!
//! A condition is written as an object:
//!
//! ```json
//! {"field": "age", "value": 30, "comparator": "gte"}
//! {"field": "sex", "value": "女", "combinator": "and"}
//! ```

use std::fmt;
use std::error::Error;

use serde_json::Value as Json;

use crate::condition::{Combinator, Comparator, Condition, Mode, ScalarValue};


#[derive(Debug, PartialEq)]
pub enum ConditionParseError {
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    ExpectedKey(&'static str),
    UnrecognisedKey(String),
    InvalidValue,
    InvalidCombinator(String),
    InvalidComparator(String),
    ConflictingMode,
    AtIndex(usize, Box<ConditionParseError>),
}


impl fmt::Display for ConditionParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConditionParseError::ExpectedObject => write!(f, "expected an object"),
            ConditionParseError::ExpectedArray => write!(f, "expected an array"),
            ConditionParseError::ExpectedString => write!(f, "expected a string"),
            ConditionParseError::ExpectedKey(key) => write!(f, "missing key {:?}", key),
            ConditionParseError::UnrecognisedKey(ref key) => write!(f, "unrecognised key {:?}", key),
            ConditionParseError::InvalidValue => write!(f, "value must be a string, number or boolean"),
            ConditionParseError::InvalidCombinator(ref name) => write!(f, "invalid combinator {:?}", name),
            ConditionParseError::InvalidComparator(ref name) => write!(f, "invalid comparator {:?}", name),
            ConditionParseError::ConflictingMode => write!(f, "a condition takes either a combinator or a comparator, not both"),
            ConditionParseError::AtIndex(index, ref error) => write!(f, "condition {}: {}", index, error),
        }
    }
}


impl Error for ConditionParseError {}


fn parse_name(json: &Json) -> Result<&str, ConditionParseError> {
    json.as_str().ok_or(ConditionParseError::ExpectedString)
}


pub fn parse_condition(json: &Json) -> Result<Condition, ConditionParseError> {
    let object = json.as_object().ok_or(ConditionParseError::ExpectedObject)?;

    let mut field = None;
    let mut value = None;
    let mut mode = None;

    for (key, val) in object.iter() {
        match key.as_str() {
            "field" => {
                field = Some(parse_name(val)?.to_owned());
            }
            "value" => {
                value = Some(ScalarValue::from_json(val).ok_or(ConditionParseError::InvalidValue)?);
            }
            "combinator" => {
                if mode.is_some() {
                    return Err(ConditionParseError::ConflictingMode);
                }

                let name = parse_name(val)?;
                let combinator = Combinator::from_name(name)
                    .ok_or_else(|| ConditionParseError::InvalidCombinator(name.to_owned()))?;
                mode = Some(Mode::Combinator(combinator));
            }
            "comparator" => {
                if mode.is_some() {
                    return Err(ConditionParseError::ConflictingMode);
                }

                let name = parse_name(val)?;
                let comparator = Comparator::from_name(name)
                    .ok_or_else(|| ConditionParseError::InvalidComparator(name.to_owned()))?;
                mode = Some(Mode::Comparator(comparator));
            }
            _ => return Err(ConditionParseError::UnrecognisedKey(key.clone())),
        }
    }

    let field = field.ok_or(ConditionParseError::ExpectedKey("field"))?;
    let value = value.ok_or(ConditionParseError::ExpectedKey("value"))?;
    let mode = mode.ok_or(ConditionParseError::ExpectedKey("combinator"))?;

    Ok(Condition::new(field, value, mode))
}


pub fn parse_conditions(json: &Json) -> Result<Vec<Condition>, ConditionParseError> {
    let array = json.as_array().ok_or(ConditionParseError::ExpectedArray)?;

    let mut conditions = Vec::with_capacity(array.len());
    for (index, item) in array.iter().enumerate() {
        match parse_condition(item) {
            Ok(condition) => conditions.push(condition),
            Err(error) => return Err(ConditionParseError::AtIndex(index, Box::new(error))),
        }
    }

    Ok(conditions)
}


#[cfg(test)]
mod tests {
    use serde_json;

    use crate::condition::{Combinator, Comparator, Condition};

    use super::{parse_condition, parse_conditions, ConditionParseError};

    #[test]
    fn test_combinator_condition() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 23,
            \"combinator\": \"AND\"
        }
        ").unwrap());

        assert_eq!(condition, Ok(Condition::combined("age", 23, Combinator::And)));
    }

    #[test]
    fn test_comparator_condition() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 30,
            \"comparator\": \"gte\"
        }
        ").unwrap());

        assert_eq!(condition, Ok(Condition::bounded("age", 30, Comparator::Gte)));
    }

    #[test]
    fn test_string_value() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"name.keyword\",
            \"value\": \"Z4\",
            \"combinator\": \"or\"
        }
        ").unwrap());

        assert_eq!(condition, Ok(Condition::combined("name.keyword", "Z4", Combinator::Or)));
    }

    #[test]
    fn test_gives_error_for_incorrect_type() {
        let condition = parse_condition(&serde_json::from_str("
        [
            \"age\"
        ]
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ExpectedObject));

        let condition = parse_condition(&serde_json::from_str("
        123
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ExpectedObject));
    }

    #[test]
    fn test_gives_error_for_missing_keys() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"value\": 23,
            \"combinator\": \"and\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ExpectedKey("field")));

        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"combinator\": \"and\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ExpectedKey("value")));

        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 23
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ExpectedKey("combinator")));
    }

    #[test]
    fn test_gives_error_for_unknown_comparator() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 30,
            \"comparator\": \"between\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::InvalidComparator("between".to_string())));
    }

    #[test]
    fn test_gives_error_for_unknown_combinator() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 30,
            \"combinator\": \"xor\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::InvalidCombinator("xor".to_string())));
    }

    #[test]
    fn test_gives_error_for_both_modes() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 30,
            \"combinator\": \"and\",
            \"comparator\": \"gte\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::ConflictingMode));
    }

    #[test]
    fn test_gives_error_for_invalid_value() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": null,
            \"combinator\": \"and\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::InvalidValue));

        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": [1, 2],
            \"combinator\": \"and\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::InvalidValue));
    }

    #[test]
    fn test_gives_error_for_extra_key() {
        let condition = parse_condition(&serde_json::from_str("
        {
            \"field\": \"age\",
            \"value\": 23,
            \"combinator\": \"and\",
            \"hello\": \"world\"
        }
        ").unwrap());

        assert_eq!(condition.err(), Some(ConditionParseError::UnrecognisedKey("hello".to_string())));
    }

    #[test]
    fn test_condition_list() {
        let conditions = parse_conditions(&serde_json::from_str("
        [
            {\"field\": \"age\", \"value\": 30, \"comparator\": \"gte\"},
            {\"field\": \"age\", \"value\": 50, \"comparator\": \"lte\"}
        ]
        ").unwrap());

        assert_eq!(conditions, Ok(vec![
            Condition::bounded("age", 30, Comparator::Gte),
            Condition::bounded("age", 50, Comparator::Lte),
        ]));
    }

    #[test]
    fn test_condition_list_reports_index() {
        let conditions = parse_conditions(&serde_json::from_str("
        [
            {\"field\": \"age\", \"value\": 30, \"comparator\": \"gte\"},
            {\"field\": \"age\", \"value\": 50}
        ]
        ").unwrap());

        assert_eq!(conditions.err(), Some(ConditionParseError::AtIndex(1, Box::new(ConditionParseError::ExpectedKey("combinator")))));
    }

    #[test]
    fn test_condition_list_expects_array() {
        let conditions = parse_conditions(&serde_json::from_str("
        {
            \"field\": \"age\"
        }
        ").unwrap());

        assert_eq!(conditions.err(), Some(ConditionParseError::ExpectedArray));
    }
}
