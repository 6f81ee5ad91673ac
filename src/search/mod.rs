//! Search request bodies
//!
//! `SearchSource` holds everything that goes into the body of a `_search` request: the
//! query, pagination, sorting, `_source` filtering, highlighting and aggregations.

pub mod sort;
pub mod highlight;
pub mod aggregation;
pub mod parse;

use serde_json::Value as Json;
use serde_json::Map;

use crate::query::Query;
use crate::search::sort::SortDirective;
use crate::search::highlight::Highlight;
use crate::search::aggregation::Aggregation;


/// Chooses which fields of each hit's `_source` are returned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFilter {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}


impl SourceFilter {
    pub fn to_json(&self) -> Json {
        json!({
            "includes": self.includes,
            "excludes": self.excludes,
        })
    }
}


#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSource {
    query: Option<Query>,
    from: Option<usize>,
    size: Option<usize>,
    sort: Vec<SortDirective>,
    source_filter: Option<SourceFilter>,
    highlight: Option<Highlight>,
    aggregations: Vec<(String, Aggregation)>,
}


impl SearchSource {
    pub fn new() -> SearchSource {
        SearchSource::default()
    }

    #[inline]
    pub fn query(mut self, query: Query) -> SearchSource {
        self.query = Some(query);
        self
    }

    #[inline]
    pub fn from(mut self, from: usize) -> SearchSource {
        self.from = Some(from);
        self
    }

    #[inline]
    pub fn size(mut self, size: usize) -> SearchSource {
        self.size = Some(size);
        self
    }

    /// Selects a 1-based page of `per_page` hits. Offsets past `usize::MAX` are clamped.
    pub fn page(self, page: usize, per_page: usize) -> SearchSource {
        self.from(page.saturating_sub(1).saturating_mul(per_page)).size(per_page)
    }

    /// Appends a sort directive after any already present
    #[inline]
    pub fn sort(mut self, directive: SortDirective) -> SearchSource {
        self.sort.push(directive);
        self
    }

    pub fn fetch_source<I, E, S>(mut self, includes: I, excludes: E) -> SearchSource
        where I: IntoIterator<Item = S>,
              E: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.source_filter = Some(SourceFilter {
            includes: includes.into_iter().map(Into::into).collect(),
            excludes: excludes.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[inline]
    pub fn highlighter(mut self, highlight: Highlight) -> SearchSource {
        self.highlight = Some(highlight);
        self
    }

    /// Adds a named aggregation, replacing an earlier one with the same name
    pub fn aggregation<N: Into<String>>(mut self, name: N, aggregation: Aggregation) -> SearchSource {
        let name = name.into();
        self.aggregations.retain(|&(ref existing, _)| *existing != name);
        self.aggregations.push((name, aggregation));
        self
    }

    pub fn get_query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn sort_directives(&self) -> &[SortDirective] {
        &self.sort
    }

    pub fn to_json(&self) -> Json {
        let mut body = Map::new();

        // Without a query the server matches every document
        if let Some(ref query) = self.query {
            body.insert("query".to_string(), query.to_json());
        }

        if let Some(from) = self.from {
            body.insert("from".to_string(), Json::from(from));
        }

        if let Some(size) = self.size {
            body.insert("size".to_string(), Json::from(size));
        }

        if !self.sort.is_empty() {
            body.insert("sort".to_string(), Json::Array(self.sort.iter().map(|directive| directive.to_json()).collect()));
        }

        if let Some(ref source_filter) = self.source_filter {
            body.insert("_source".to_string(), source_filter.to_json());
        }

        if let Some(ref highlight) = self.highlight {
            body.insert("highlight".to_string(), highlight.to_json());
        }

        if !self.aggregations.is_empty() {
            let mut aggs = Map::new();
            for &(ref name, ref aggregation) in self.aggregations.iter() {
                aggs.insert(name.clone(), aggregation.to_json());
            }
            body.insert("aggs".to_string(), Json::Object(aggs));
        }

        Json::Object(body)
    }
}
