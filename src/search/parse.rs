//! Parses search descriptions
//!
//! ```json
//! {
//!     "index": "user",
//!     "clause": "match",
//!     "conditions": [
//!         {"field": "age", "value": 23, "combinator": "or"},
//!         {"field": "age", "value": 30, "combinator": "or"}
//!     ],
//!     "sort": [{"age": "desc"}, "name"],
//!     "from": 0,
//!     "size": 10,
//!     "_source": {"excludes": ["name"]}
//! }
//! ```

use std::fmt;
use std::error::Error;

use serde_json::Value as Json;

use crate::assembler::{AssembleError, QueryAssembler};
use crate::condition::parse::{parse_conditions, ConditionParseError};
use crate::query::{ClauseKind, Query};
use crate::search::SearchSource;
use crate::search::sort::{SortDirective, SortOrder};


#[derive(Debug, PartialEq)]
pub enum SearchParseError {
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    ExpectedUnsigned,
    ExpectedObjectOrString,
    ExpectedSingleKey,
    EmptyIndexName,
    ClauseWithoutConditions,
    UnrecognisedKey(String),
    InvalidClauseKind(String),
    InvalidSortOrder(String),
    Condition(ConditionParseError),
    Assemble(AssembleError),
}


impl fmt::Display for SearchParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SearchParseError::ExpectedObject => write!(f, "expected an object"),
            SearchParseError::ExpectedArray => write!(f, "expected an array"),
            SearchParseError::ExpectedString => write!(f, "expected a string"),
            SearchParseError::ExpectedUnsigned => write!(f, "expected a non-negative integer"),
            SearchParseError::ExpectedObjectOrString => write!(f, "expected an object or a string"),
            SearchParseError::ExpectedSingleKey => write!(f, "expected an object with a single key"),
            SearchParseError::EmptyIndexName => write!(f, "index name must not be empty"),
            SearchParseError::ClauseWithoutConditions => write!(f, "a clause kind needs conditions to apply to"),
            SearchParseError::UnrecognisedKey(ref key) => write!(f, "unrecognised key {:?}", key),
            SearchParseError::InvalidClauseKind(ref name) => write!(f, "invalid clause kind {:?}", name),
            SearchParseError::InvalidSortOrder(ref name) => write!(f, "invalid sort order {:?}", name),
            SearchParseError::Condition(ref e) => write!(f, "{}", e),
            SearchParseError::Assemble(ref e) => write!(f, "{}", e),
        }
    }
}


impl Error for SearchParseError {}


impl From<ConditionParseError> for SearchParseError {
    fn from(e: ConditionParseError) -> SearchParseError {
        SearchParseError::Condition(e)
    }
}


impl From<AssembleError> for SearchParseError {
    fn from(e: AssembleError) -> SearchParseError {
        SearchParseError::Assemble(e)
    }
}


#[derive(Debug, PartialEq)]
pub struct ParsedSearch {
    pub index: Option<String>,
    pub source: SearchSource,
}


fn parse_string(json: &Json) -> Result<String, SearchParseError> {
    match *json {
        Json::String(ref string) => Ok(string.clone()),
        _ => Err(SearchParseError::ExpectedString),
    }
}


fn parse_unsigned(json: &Json) -> Result<usize, SearchParseError> {
    json.as_u64().map(|value| value as usize).ok_or(SearchParseError::ExpectedUnsigned)
}


fn parse_string_list(json: &Json) -> Result<Vec<String>, SearchParseError> {
    let array = json.as_array().ok_or(SearchParseError::ExpectedArray)?;

    let mut strings = Vec::with_capacity(array.len());
    for item in array.iter() {
        strings.push(parse_string(item)?);
    }

    Ok(strings)
}


fn parse_sort_order(json: &Json) -> Result<SortOrder, SearchParseError> {
    let name = match *json {
        Json::String(ref name) => name,
        Json::Object(ref object) => {
            let mut order = None;
            for (key, val) in object.iter() {
                match key.as_str() {
                    "order" => order = Some(val),
                    _ => return Err(SearchParseError::UnrecognisedKey(key.clone())),
                }
            }

            match order {
                Some(&Json::String(ref name)) => name,
                Some(_) => return Err(SearchParseError::ExpectedString),
                None => return Ok(SortOrder::default()),
            }
        }
        _ => return Err(SearchParseError::ExpectedObjectOrString),
    };

    SortOrder::from_name(name).ok_or_else(|| SearchParseError::InvalidSortOrder(name.clone()))
}


/// Accepts `"field"`, `{"field": "desc"}` or `{"field": {"order": "desc"}}`
fn parse_sort_directive(json: &Json) -> Result<SortDirective, SearchParseError> {
    match *json {
        Json::String(ref field) => Ok(SortDirective::new(field.clone(), SortOrder::default())),
        Json::Object(ref object) => {
            if object.len() != 1 {
                return Err(SearchParseError::ExpectedSingleKey);
            }

            match object.iter().next() {
                Some((field, order)) => Ok(SortDirective::new(field.clone(), parse_sort_order(order)?)),
                None => Err(SearchParseError::ExpectedSingleKey),
            }
        }
        _ => Err(SearchParseError::ExpectedObjectOrString),
    }
}


fn parse_source_filter(json: &Json) -> Result<(Vec<String>, Vec<String>), SearchParseError> {
    let object = json.as_object().ok_or(SearchParseError::ExpectedObject)?;

    let mut includes = Vec::new();
    let mut excludes = Vec::new();

    for (key, val) in object.iter() {
        match key.as_str() {
            "includes" => includes = parse_string_list(val)?,
            "excludes" => excludes = parse_string_list(val)?,
            _ => return Err(SearchParseError::UnrecognisedKey(key.clone())),
        }
    }

    Ok((includes, excludes))
}


pub fn parse_search(json: &Json) -> Result<ParsedSearch, SearchParseError> {
    let object = json.as_object().ok_or(SearchParseError::ExpectedObject)?;

    // Get configuration
    let mut index = None;
    let mut clause_kind = None;
    let mut conditions = None;
    let mut sort = Vec::new();
    let mut from = None;
    let mut size = None;
    let mut source_filter = None;

    for (key, val) in object.iter() {
        match key.as_str() {
            "index" => {
                let name = parse_string(val)?;
                if name.is_empty() {
                    return Err(SearchParseError::EmptyIndexName);
                }

                index = Some(name);
            }
            "clause" => {
                let name = parse_string(val)?;
                clause_kind = Some(ClauseKind::from_name(&name).ok_or(SearchParseError::InvalidClauseKind(name))?);
            }
            "conditions" => {
                conditions = Some(parse_conditions(val)?);
            }
            "sort" => {
                let array = val.as_array().ok_or(SearchParseError::ExpectedArray)?;
                for item in array.iter() {
                    sort.push(parse_sort_directive(item)?);
                }
            }
            "from" => {
                from = Some(parse_unsigned(val)?);
            }
            "size" => {
                size = Some(parse_unsigned(val)?);
            }
            "_source" => {
                source_filter = Some(parse_source_filter(val)?);
            }
            _ => return Err(SearchParseError::UnrecognisedKey(key.clone())),
        }
    }

    let mut source = match conditions {
        Some(conditions) => {
            QueryAssembler::new()
                .clause_kind(clause_kind.unwrap_or_default())
                .assemble(&conditions, &sort)?
        }
        None if clause_kind.is_some() => return Err(SearchParseError::ClauseWithoutConditions),
        None => {
            let mut source = SearchSource::new().query(Query::new_match_all());
            for directive in sort.into_iter() {
                source = source.sort(directive);
            }
            source
        }
    };

    if let Some(from) = from {
        source = source.from(from);
    }

    if let Some(size) = size {
        source = source.size(size);
    }

    if let Some((includes, excludes)) = source_filter {
        source = source.fetch_source(includes, excludes);
    }

    Ok(ParsedSearch {
        index: index,
        source: source,
    })
}
