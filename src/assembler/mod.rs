//! Assembles condition lists into search queries
//!
//! A condition list is either entirely combinator-tagged, producing a boolean query of
//! term or match clauses, or entirely comparator-tagged against one field, producing a
//! range query. Assembly is a pure one-shot transformation; the first validation failure
//! aborts it and nothing is partially built.

pub mod combinator;
pub mod range;

use std::fmt;
use std::error::Error;

use crate::condition::{Condition, Mode};
use crate::query::{ClauseKind, Query};
use crate::query::boolean::BooleanQuery;
use crate::search::SearchSource;
use crate::search::sort::SortDirective;


#[derive(Debug, Clone, PartialEq)]
pub enum AssembleError {
    EmptyConditionList,
    MixedModeConditions,
    InvalidComparator(Mode),
    FieldMismatch {
        expected: String,
        found: String,
    },
}


impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AssembleError::EmptyConditionList => write!(f, "no conditions given"),
            AssembleError::MixedModeConditions => write!(f, "conditions mix combinators and comparators"),
            AssembleError::InvalidComparator(mode) => write!(f, "{:?} is not a range comparator", mode.to_string()),
            AssembleError::FieldMismatch{ref expected, ref found} => {
                write!(f, "range conditions must share one field: expected {:?}, found {:?}", expected, found)
            }
        }
    }
}


impl Error for AssembleError {}


#[derive(Debug, Clone, Default)]
pub struct QueryAssembler {
    clause_kind: ClauseKind,
}


impl QueryAssembler {
    pub fn new() -> QueryAssembler {
        QueryAssembler::default()
    }

    #[inline]
    pub fn clause_kind(mut self, clause_kind: ClauseKind) -> QueryAssembler {
        self.clause_kind = clause_kind;
        self
    }

    /// Builds the query described by a condition list
    pub fn assemble_query(&self, conditions: &[Condition]) -> Result<Query, AssembleError> {
        let first = match conditions.first() {
            Some(first) => first,
            None => return Err(AssembleError::EmptyConditionList),
        };

        let combinators = first.mode().is_combinator();
        if conditions.iter().any(|condition| condition.mode().is_combinator() != combinators) {
            warn!("rejected condition list mixing combinators and comparators");
            return Err(AssembleError::MixedModeConditions);
        }

        let query = if combinators {
            self.assemble_boolean(conditions)?
        } else {
            Query::Range(range::accumulate(conditions)?)
        };

        debug!("assembled {} query from {} conditions", query.kind(), conditions.len());
        Ok(query)
    }

    /// Builds a search body holding the assembled query with the sort directives
    /// attached in the given order
    pub fn assemble(&self, conditions: &[Condition], sort: &[SortDirective]) -> Result<SearchSource, AssembleError> {
        let mut source = SearchSource::new().query(self.assemble_query(conditions)?);

        for directive in sort.iter() {
            source = source.sort(directive.clone());
        }

        Ok(source)
    }

    fn assemble_boolean(&self, conditions: &[Condition]) -> Result<Query, AssembleError> {
        let mut query = BooleanQuery::new();

        for condition in conditions.iter() {
            let combinator = match condition.mode() {
                Mode::Combinator(combinator) => combinator,
                Mode::Comparator(_) => return Err(AssembleError::MixedModeConditions),
            };

            let clause = self.clause_kind.build(condition.field(), condition.value());
            query = combinator::apply(query, combinator, clause);
        }

        combinator::settle_minimum_should_match(&mut query);
        Ok(Query::Bool(query))
    }
}


#[cfg(test)]
mod tests {
    use crate::condition::{Combinator, Comparator, Condition, ScalarValue};
    use crate::query::{ClauseKind, Query};
    use crate::search::sort::{SortDirective, SortOrder};

    use super::{AssembleError, QueryAssembler};

    fn assemble(conditions: &[Condition]) -> Result<Query, AssembleError> {
        QueryAssembler::new().assemble_query(conditions)
    }

    #[test]
    fn test_and_conditions() {
        let conditions = vec![
            Condition::combined("age", 23, Combinator::And),
            Condition::combined("sex", "女", Combinator::And),
            Condition::combined("name.keyword", "Z4", Combinator::And),
        ];

        match assemble(&conditions) {
            Ok(Query::Bool(query)) => {
                assert_eq!(query.must(), &[
                    Query::new_term("age", 23),
                    Query::new_term("sex", "女"),
                    Query::new_term("name.keyword", "Z4"),
                ][..]);
                assert!(query.should().is_empty());
                assert!(query.must_not().is_empty());
                assert_eq!(query.minimum_should_match(), None);
            }
            other => panic!("expected a boolean query, got {:?}", other),
        }
    }

    #[test]
    fn test_or_conditions() {
        let conditions = vec![
            Condition::combined("age", 23, Combinator::Or),
            Condition::combined("age", 30, Combinator::Or),
        ];

        match assemble(&conditions) {
            Ok(Query::Bool(query)) => {
                assert_eq!(query.should(), &[Query::new_term("age", 23), Query::new_term("age", 30)][..]);
                assert!(query.must().is_empty());
                assert!(query.must_not().is_empty());
                assert_eq!(query.minimum_should_match(), Some(1));
            }
            other => panic!("expected a boolean query, got {:?}", other),
        }
    }

    #[test]
    fn test_not_conditions() {
        let conditions = vec![
            Condition::combined("sex", "女", Combinator::Not),
            Condition::combined("age", 12, Combinator::Not),
        ];

        match assemble(&conditions) {
            Ok(Query::Bool(query)) => {
                assert_eq!(query.must_not().len(), 2);
                assert!(query.must().is_empty());
                assert!(query.should().is_empty());
            }
            other => panic!("expected a boolean query, got {:?}", other),
        }
    }

    #[test]
    fn test_match_clauses() {
        let query = QueryAssembler::new()
            .clause_kind(ClauseKind::Match)
            .assemble_query(&[
                Condition::combined("age", 23, Combinator::And),
                Condition::combined("sex", "男", Combinator::Or),
            ]);

        assert_eq!(query.map(|query| query.to_json()), Ok(json!({
            "bool": {
                "must": [
                    {"match": {"age": {"query": 23}}}
                ],
                "should": [
                    {"match": {"sex": {"query": "男"}}}
                ]
            }
        })));
    }

    #[test]
    fn test_range_conditions() {
        let query = assemble(&[
            Condition::bounded("age", 30, Comparator::Gte),
            Condition::bounded("age", 50, Comparator::Lte),
        ]);

        match query {
            Ok(Query::Range(range)) => {
                assert_eq!(range.field(), "age");
                assert_eq!(range.bound(Comparator::Gte), Some(&ScalarValue::Integer(30)));
                assert_eq!(range.bound(Comparator::Lte), Some(&ScalarValue::Integer(50)));
            }
            other => panic!("expected a range query, got {:?}", other),
        }
    }

    #[test]
    fn test_range_duplicate_comparator() {
        let query = assemble(&[
            Condition::bounded("age", 30, Comparator::Gte),
            Condition::bounded("age", 40, Comparator::Gte),
        ]);

        assert_eq!(query.map(|query| query.to_json()), Ok(json!({
            "range": {
                "age": {
                    "gte": 40
                }
            }
        })));
    }

    #[test]
    fn test_gives_error_for_empty_list() {
        assert_eq!(assemble(&[]), Err(AssembleError::EmptyConditionList));
    }

    #[test]
    fn test_gives_error_for_mixed_modes() {
        let conditions = vec![
            Condition::combined("age", 23, Combinator::And),
            Condition::bounded("age", 30, Comparator::Gte),
        ];

        assert_eq!(assemble(&conditions), Err(AssembleError::MixedModeConditions));

        let conditions = vec![
            Condition::bounded("age", 30, Comparator::Gte),
            Condition::combined("age", 23, Combinator::And),
        ];

        assert_eq!(assemble(&conditions), Err(AssembleError::MixedModeConditions));
    }

    #[test]
    fn test_gives_error_for_range_over_two_fields() {
        let conditions = vec![
            Condition::bounded("age", 30, Comparator::Gte),
            Condition::bounded("height", 180, Comparator::Lt),
        ];

        assert_eq!(assemble(&conditions), Err(AssembleError::FieldMismatch {
            expected: "age".to_string(),
            found: "height".to_string(),
        }));
    }

    #[test]
    fn test_sort_directives_keep_order() {
        let sort = vec![
            SortDirective::new("age", SortOrder::Desc),
            SortDirective::new("name", SortOrder::Asc),
        ];

        let source = QueryAssembler::new()
            .assemble(&[Condition::combined("sex", "男", Combinator::And)], &sort)
            .unwrap();

        assert_eq!(source.sort_directives(), &sort[..]);
        assert_eq!(source.to_json()["sort"], json!([
            {"age": {"order": "desc"}},
            {"name": {"order": "asc"}}
        ]));
    }

    #[test]
    fn test_assemble_without_sort() {
        let source = QueryAssembler::new()
            .assemble(&[Condition::combined("sex", "男", Combinator::And)], &[])
            .unwrap();

        assert_eq!(source.to_json(), json!({
            "query": {
                "bool": {
                    "must": [
                        {"term": {"sex": {"value": "男"}}}
                    ]
                }
            }
        }));
    }
}
