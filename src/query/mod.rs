//! Elasticsearch Query DSL objects

pub mod boolean;
pub mod range;
pub mod fuzzy;

use serde_json::Value as Json;

use crate::condition::ScalarValue;
use crate::query::boolean::BooleanQuery;
use crate::query::range::RangeClause;
use crate::query::fuzzy::Fuzziness;


/// Which leaf predicate a combinator-tagged condition is wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// Exact match against the indexed term, no analysis
    Term,
    /// Analysed full-text match
    Match,
}


impl Default for ClauseKind {
    fn default() -> ClauseKind {
        ClauseKind::Term
    }
}


impl ClauseKind {
    pub fn from_name(name: &str) -> Option<ClauseKind> {
        match name.to_lowercase().as_str() {
            "term" => Some(ClauseKind::Term),
            "match" => Some(ClauseKind::Match),
            _ => None,
        }
    }

    pub fn build(&self, field: &str, value: &ScalarValue) -> Query {
        match *self {
            ClauseKind::Term => Query::new_term(field, value.clone()),
            ClauseKind::Match => Query::new_match(field, value.clone()),
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    MatchAll,
    Term {
        field: String,
        value: ScalarValue,
    },
    Match {
        field: String,
        query: ScalarValue,
    },
    Fuzzy {
        field: String,
        value: String,
        fuzziness: Fuzziness,
    },
    Range(RangeClause),
    Bool(BooleanQuery),
}


impl Query {
    pub fn new_match_all() -> Query {
        Query::MatchAll
    }

    pub fn new_term<F: Into<String>, V: Into<ScalarValue>>(field: F, value: V) -> Query {
        Query::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn new_match<F: Into<String>, V: Into<ScalarValue>>(field: F, query: V) -> Query {
        Query::Match {
            field: field.into(),
            query: query.into(),
        }
    }

    pub fn new_fuzzy<F: Into<String>, V: Into<String>>(field: F, value: V, fuzziness: Fuzziness) -> Query {
        Query::Fuzzy {
            field: field.into(),
            value: value.into(),
            fuzziness: fuzziness,
        }
    }

    /// Name of the Query DSL object this query serialises to
    pub fn kind(&self) -> &'static str {
        match *self {
            Query::MatchAll => "match_all",
            Query::Term{..} => "term",
            Query::Match{..} => "match",
            Query::Fuzzy{..} => "fuzzy",
            Query::Range(_) => "range",
            Query::Bool(_) => "bool",
        }
    }

    pub fn to_json(&self) -> Json {
        let body = match *self {
            Query::MatchAll => json!({}),
            Query::Term{ref field, ref value} => {
                json!({
                    field.clone(): {
                        "value": value.to_json(),
                    }
                })
            }
            Query::Match{ref field, ref query} => {
                json!({
                    field.clone(): {
                        "query": query.to_json(),
                    }
                })
            }
            Query::Fuzzy{ref field, ref value, ref fuzziness} => {
                json!({
                    field.clone(): {
                        "value": value,
                        "fuzziness": fuzziness.to_json(),
                    }
                })
            }
            Query::Range(ref range) => range.to_json(),
            Query::Bool(ref boolean) => boolean.to_json(),
        };

        json!({
            self.kind(): body
        })
    }
}


impl From<RangeClause> for Query {
    fn from(range: RangeClause) -> Query {
        Query::Range(range)
    }
}


impl From<BooleanQuery> for Query {
    fn from(boolean: BooleanQuery) -> Query {
        Query::Bool(boolean)
    }
}
