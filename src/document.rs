//! Document requests
//!
//! Describes the single-document and bulk operations as an endpoint (method and path)
//! plus an optional JSON body, ready to be handed to an HTTP client.

use std::fmt;
use std::error::Error;

use serde::Serialize;
use serde_json;
use serde_json::Value as Json;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}


impl Method {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}


/// An HTTP method with the unencoded segments of a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub segments: Vec<String>,
}


impl Endpoint {
    fn new(method: Method, segments: &[&str]) -> Endpoint {
        Endpoint {
            method: method,
            segments: segments.iter().map(|segment| segment.to_string()).collect(),
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}


impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method.as_str(), self.path())
    }
}


pub fn search_endpoint(index: &str) -> Endpoint {
    Endpoint::new(Method::Post, &[index, "_search"])
}


pub fn bulk_endpoint() -> Endpoint {
    Endpoint::new(Method::Post, &["_bulk"])
}


#[derive(Debug, PartialEq)]
pub enum DocumentError {
    EmptyIndexName,
    EmptyId,
    ReservedIndexName(String),
    ReservedId(String),
    ExpectedObject,
    Serialize(String),
}


impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DocumentError::EmptyIndexName => write!(f, "index name must not be empty"),
            DocumentError::EmptyId => write!(f, "document id must not be empty"),
            DocumentError::ReservedIndexName(ref name) => write!(f, "{:?} cannot be used as an index name", name),
            DocumentError::ReservedId(ref id) => write!(f, "{:?} cannot be used as a document id", id),
            DocumentError::ExpectedObject => write!(f, "document source must be a JSON object"),
            DocumentError::Serialize(ref e) => write!(f, "failed to serialise document: {}", e),
        }
    }
}


impl Error for DocumentError {}


impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> DocumentError {
        DocumentError::Serialize(e.to_string())
    }
}


/// Dot segments are removed from URL paths, so they can't name a path segment
pub fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}


fn check_target(index: &str, id: &str) -> Result<(), DocumentError> {
    if index.is_empty() {
        return Err(DocumentError::EmptyIndexName);
    }

    if is_dot_segment(index) {
        return Err(DocumentError::ReservedIndexName(index.to_owned()));
    }

    if id.is_empty() {
        return Err(DocumentError::EmptyId);
    }

    if is_dot_segment(id) {
        return Err(DocumentError::ReservedId(id.to_owned()));
    }

    Ok(())
}


fn check_object(json: Json) -> Result<Json, DocumentError> {
    match json {
        Json::Object(_) => Ok(json),
        _ => Err(DocumentError::ExpectedObject),
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum DocumentRequest {
    /// Creates or replaces a document
    Index {
        index: String,
        id: String,
        source: Json,
    },
    /// Merges fields into an existing document
    Update {
        index: String,
        id: String,
        doc: Json,
    },
    Get {
        index: String,
        id: String,
    },
    Delete {
        index: String,
        id: String,
    },
}


impl DocumentRequest {
    pub fn index<I: Into<String>, D: Into<String>>(index: I, id: D, source: Json) -> Result<DocumentRequest, DocumentError> {
        let (index, id) = (index.into(), id.into());
        check_target(&index, &id)?;

        Ok(DocumentRequest::Index {
            index: index,
            id: id,
            source: check_object(source)?,
        })
    }

    pub fn index_serialized<I, D, T>(index: I, id: D, source: &T) -> Result<DocumentRequest, DocumentError>
        where I: Into<String>, D: Into<String>, T: Serialize
    {
        DocumentRequest::index(index, id, serde_json::to_value(source)?)
    }

    pub fn update<I: Into<String>, D: Into<String>>(index: I, id: D, doc: Json) -> Result<DocumentRequest, DocumentError> {
        let (index, id) = (index.into(), id.into());
        check_target(&index, &id)?;

        Ok(DocumentRequest::Update {
            index: index,
            id: id,
            doc: check_object(doc)?,
        })
    }

    pub fn get<I: Into<String>, D: Into<String>>(index: I, id: D) -> Result<DocumentRequest, DocumentError> {
        let (index, id) = (index.into(), id.into());
        check_target(&index, &id)?;

        Ok(DocumentRequest::Get {
            index: index,
            id: id,
        })
    }

    pub fn delete<I: Into<String>, D: Into<String>>(index: I, id: D) -> Result<DocumentRequest, DocumentError> {
        let (index, id) = (index.into(), id.into());
        check_target(&index, &id)?;

        Ok(DocumentRequest::Delete {
            index: index,
            id: id,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        match *self {
            DocumentRequest::Index{ref index, ref id, ..} => Endpoint::new(Method::Put, &[index.as_str(), "_doc", id.as_str()]),
            DocumentRequest::Update{ref index, ref id, ..} => Endpoint::new(Method::Post, &[index.as_str(), "_update", id.as_str()]),
            DocumentRequest::Get{ref index, ref id} => Endpoint::new(Method::Get, &[index.as_str(), "_doc", id.as_str()]),
            DocumentRequest::Delete{ref index, ref id} => Endpoint::new(Method::Delete, &[index.as_str(), "_doc", id.as_str()]),
        }
    }

    pub fn body(&self) -> Option<Json> {
        match *self {
            DocumentRequest::Index{ref source, ..} => Some(source.clone()),
            DocumentRequest::Update{ref doc, ..} => Some(json!({"doc": doc})),
            DocumentRequest::Get{..} | DocumentRequest::Delete{..} => None,
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum BulkItem {
    Index {
        index: String,
        id: String,
        source: Json,
    },
    Delete {
        index: String,
        id: String,
    },
}


#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkRequest {
    items: Vec<BulkItem>,
}


impl BulkRequest {
    pub fn new() -> BulkRequest {
        BulkRequest::default()
    }

    /// Adds a request to the batch. Only index and delete requests can be batched; anything
    /// else is handed back.
    pub fn add(&mut self, request: DocumentRequest) -> Result<(), DocumentRequest> {
        let item = match request {
            DocumentRequest::Index{index, id, source} => {
                BulkItem::Index {
                    index: index,
                    id: id,
                    source: source,
                }
            }
            DocumentRequest::Delete{index, id} => {
                BulkItem::Delete {
                    index: index,
                    id: id,
                }
            }
            other => return Err(other),
        };

        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[BulkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newline-delimited JSON body, one action line per item followed by the source line
    /// for index actions. Every line ends with a newline, including the last.
    pub fn to_ndjson(&self) -> String {
        let mut payload = String::new();

        for item in self.items.iter() {
            match *item {
                BulkItem::Index{ref index, ref id, ref source} => {
                    payload.push_str(&json!({"index": {"_index": index, "_id": id}}).to_string());
                    payload.push('\n');
                    payload.push_str(&source.to_string());
                    payload.push('\n');
                }
                BulkItem::Delete{ref index, ref id} => {
                    payload.push_str(&json!({"delete": {"_index": index, "_id": id}}).to_string());
                    payload.push('\n');
                }
            }
        }

        payload
    }
}
