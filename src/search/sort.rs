use serde_json::Value as Json;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}


impl Default for SortOrder {
    fn default() -> SortOrder {
        SortOrder::Asc
    }
}


impl SortOrder {
    pub fn from_name(name: &str) -> Option<SortOrder> {
        match name.to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}


/// Sorts hits on one field. Directives apply in list order, the first being the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub field: String,
    pub order: SortOrder,
}


impl SortDirective {
    pub fn new<F: Into<String>>(field: F, order: SortOrder) -> SortDirective {
        SortDirective {
            field: field.into(),
            order: order,
        }
    }

    pub fn to_json(&self) -> Json {
        json!({
            self.field.clone(): {
                "order": self.order.name(),
            }
        })
    }
}


#[cfg(test)]
mod tests {
    use super::{SortDirective, SortOrder};

    #[test]
    fn test_sort_directive() {
        assert_eq!(SortDirective::new("age", SortOrder::Desc).to_json(), json!({
            "age": {
                "order": "desc"
            }
        }));
    }

    #[test]
    fn test_sort_order_names() {
        assert_eq!(SortOrder::from_name("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_name("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::from_name("random"), None);
    }
}
