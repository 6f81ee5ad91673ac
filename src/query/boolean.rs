use serde_json::Value as Json;
use serde_json::Map;

use crate::query::Query;


/// A boolean query with its clauses partitioned into must / should / must_not
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanQuery {
    must: Vec<Query>,
    should: Vec<Query>,
    must_not: Vec<Query>,
    minimum_should_match: Option<u32>,
}


impl BooleanQuery {
    pub fn new() -> BooleanQuery {
        BooleanQuery::default()
    }

    #[inline]
    pub fn must(&self) -> &[Query] {
        &self.must
    }

    #[inline]
    pub fn should(&self) -> &[Query] {
        &self.should
    }

    #[inline]
    pub fn must_not(&self) -> &[Query] {
        &self.must_not
    }

    #[inline]
    pub fn minimum_should_match(&self) -> Option<u32> {
        self.minimum_should_match
    }

    pub fn push_must(&mut self, query: Query) {
        self.must.push(query);
    }

    pub fn push_should(&mut self, query: Query) {
        self.should.push(query);
    }

    pub fn push_must_not(&mut self, query: Query) {
        self.must_not.push(query);
    }

    pub fn set_minimum_should_match(&mut self, minimum_should_match: Option<u32>) {
        self.minimum_should_match = minimum_should_match;
    }

    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }

    pub fn len(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len()
    }

    pub fn to_json(&self) -> Json {
        let mut object = Map::new();

        // Empty partitions are left out
        for &(key, queries) in [("must", &self.must), ("should", &self.should), ("must_not", &self.must_not)].iter() {
            if !queries.is_empty() {
                object.insert(key.to_string(), Json::Array(queries.iter().map(|query| query.to_json()).collect()));
            }
        }

        if let Some(minimum_should_match) = self.minimum_should_match {
            object.insert("minimum_should_match".to_string(), Json::from(minimum_should_match));
        }

        Json::Object(object)
    }
}
