use serde_json::Value as Json;
use serde_json::Map;


/// Marks matched terms in the listed fields of each hit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Highlight {
    pre_tags: Vec<String>,
    post_tags: Vec<String>,
    fields: Vec<String>,
}


impl Highlight {
    pub fn new() -> Highlight {
        Highlight::default()
    }

    pub fn pre_tags<T: Into<String>>(mut self, tag: T) -> Highlight {
        self.pre_tags.push(tag.into());
        self
    }

    pub fn post_tags<T: Into<String>>(mut self, tag: T) -> Highlight {
        self.post_tags.push(tag.into());
        self
    }

    pub fn field<F: Into<String>>(mut self, field: F) -> Highlight {
        self.fields.push(field.into());
        self
    }

    pub fn to_json(&self) -> Json {
        let mut object = Map::new();

        if !self.pre_tags.is_empty() {
            object.insert("pre_tags".to_string(), json!(self.pre_tags));
        }

        if !self.post_tags.is_empty() {
            object.insert("post_tags".to_string(), json!(self.post_tags));
        }

        let mut fields = Map::new();
        for field in self.fields.iter() {
            fields.insert(field.clone(), json!({}));
        }
        object.insert("fields".to_string(), Json::Object(fields));

        Json::Object(object)
    }
}
