//! Joins clauses into a boolean query

use crate::condition::Combinator;
use crate::query::Query;
use crate::query::boolean::BooleanQuery;


/// Places a clause into the partition selected by the combinator
///
///  - `And` clauses are required (`must`)
///  - `Or` clauses are optional (`should`)
///  - `Not` clauses are excluded (`must_not`)
pub fn apply(mut query: BooleanQuery, combinator: Combinator, clause: Query) -> BooleanQuery {
    match combinator {
        Combinator::And => query.push_must(clause),
        Combinator::Or => query.push_should(clause),
        Combinator::Not => query.push_must_not(clause),
    }

    query
}


/// With no required clauses, at least one optional clause has to match. Once a required
/// clause exists the optional clauses only affect scoring.
pub fn settle_minimum_should_match(query: &mut BooleanQuery) {
    if query.must().is_empty() && !query.should().is_empty() {
        query.set_minimum_should_match(Some(1));
    } else {
        query.set_minimum_should_match(None);
    }
}
