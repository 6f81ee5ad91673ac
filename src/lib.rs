//! Builds Elasticsearch requests
//!
//! Condition lists are assembled into Query DSL (boolean queries of term or match clauses,
//! or range queries) and wrapped in search bodies with sorting, pagination, `_source`
//! filtering, highlighting and aggregations. Document requests cover single-document
//! index, update, get and delete operations and bulk batches.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod condition;
pub mod query;
pub mod assembler;
pub mod search;
pub mod document;
pub mod config;
pub mod logger;

pub use crate::condition::{Combinator, Comparator, Condition, Mode, ScalarValue};
pub use crate::query::{ClauseKind, Query};
pub use crate::assembler::{AssembleError, QueryAssembler};
pub use crate::search::SearchSource;
pub use crate::search::sort::{SortDirective, SortOrder};
