use serde_json::Value as Json;
use serde_json::Map;

use crate::condition::{Comparator, ScalarValue};


/// A range constraint on one field with up to four bounds
#[derive(Debug, Clone, PartialEq)]
pub struct RangeClause {
    field: String,
    gte: Option<ScalarValue>,
    lte: Option<ScalarValue>,
    gt: Option<ScalarValue>,
    lt: Option<ScalarValue>,
}


impl RangeClause {
    pub fn new<F: Into<String>>(field: F) -> RangeClause {
        RangeClause {
            field: field.into(),
            gte: None,
            lte: None,
            gt: None,
            lt: None,
        }
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn bound(&self, comparator: Comparator) -> Option<&ScalarValue> {
        match comparator {
            Comparator::Gte => self.gte.as_ref(),
            Comparator::Lte => self.lte.as_ref(),
            Comparator::Gt => self.gt.as_ref(),
            Comparator::Lt => self.lt.as_ref(),
        }
    }

    /// Sets one bound, replacing any earlier value for the same comparator
    pub fn set_bound(&mut self, comparator: Comparator, value: ScalarValue) {
        let slot = match comparator {
            Comparator::Gte => &mut self.gte,
            Comparator::Lte => &mut self.lte,
            Comparator::Gt => &mut self.gt,
            Comparator::Lt => &mut self.lt,
        };

        *slot = Some(value);
    }

    pub fn is_unbounded(&self) -> bool {
        Comparator::all().iter().all(|comparator| self.bound(*comparator).is_none())
    }

    pub fn to_json(&self) -> Json {
        let mut bounds = Map::new();

        for comparator in Comparator::all().iter() {
            if let Some(value) = self.bound(*comparator) {
                bounds.insert(comparator.name().to_string(), value.to_json());
            }
        }

        json!({
            self.field.clone(): bounds
        })
    }
}
