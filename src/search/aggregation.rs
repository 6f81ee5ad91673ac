use serde_json::Value as Json;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    /// Buckets documents by the distinct values of a field
    Terms {
        field: String,
        size: Option<u32>,
    },
    Max {
        field: String,
    },
    Min {
        field: String,
    },
    Avg {
        field: String,
    },
    Sum {
        field: String,
    },
}


impl Aggregation {
    pub fn terms<F: Into<String>>(field: F) -> Aggregation {
        Aggregation::Terms {
            field: field.into(),
            size: None,
        }
    }

    pub fn max<F: Into<String>>(field: F) -> Aggregation {
        Aggregation::Max {
            field: field.into(),
        }
    }

    pub fn min<F: Into<String>>(field: F) -> Aggregation {
        Aggregation::Min {
            field: field.into(),
        }
    }

    pub fn avg<F: Into<String>>(field: F) -> Aggregation {
        Aggregation::Avg {
            field: field.into(),
        }
    }

    pub fn sum<F: Into<String>>(field: F) -> Aggregation {
        Aggregation::Sum {
            field: field.into(),
        }
    }

    pub fn to_json(&self) -> Json {
        match *self {
            Aggregation::Terms{ref field, size: Some(size)} => json!({"terms": {"field": field, "size": size}}),
            Aggregation::Terms{ref field, size: None} => json!({"terms": {"field": field}}),
            Aggregation::Max{ref field} => json!({"max": {"field": field}}),
            Aggregation::Min{ref field} => json!({"min": {"field": field}}),
            Aggregation::Avg{ref field} => json!({"avg": {"field": field}}),
            Aggregation::Sum{ref field} => json!({"sum": {"field": field}}),
        }
    }
}
