//! Cluster connection settings
//!
//! Read from a JSON file; every key is optional:
//!
//! ```json
//! {
//!     "scheme": "http",
//!     "host": "172.16.1.100",
//!     "port": 9200,
//!     "username": "elastic",
//!     "password": "elastic",
//!     "index": "user"
//! }
//! ```

use std::fmt;
use std::io::{self, Read};
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_json;
use url::{self, Url};

use crate::document::{is_dot_segment, Endpoint};


#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Index used when a request doesn't name one
    pub index: Option<String>,
}


impl Default for ClientConfig {
    fn default() -> ClientConfig {
        ClientConfig {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 9200,
            username: None,
            password: None,
            index: None,
        }
    }
}


#[derive(Debug)]
pub enum LoadConfigError {
    JsonParserError(serde_json::Error),
    IoError(io::Error),
}


impl fmt::Display for LoadConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoadConfigError::JsonParserError(ref e) => write!(f, "failed to load config: {}", e),
            LoadConfigError::IoError(ref e) => write!(f, "failed to load config: {}", e),
        }
    }
}


impl std::error::Error for LoadConfigError {}


impl From<serde_json::Error> for LoadConfigError {
    fn from(e: serde_json::Error) -> LoadConfigError {
        LoadConfigError::JsonParserError(e)
    }
}


impl From<io::Error> for LoadConfigError {
    fn from(e: io::Error) -> LoadConfigError {
        LoadConfigError::IoError(e)
    }
}


#[derive(Debug, PartialEq)]
pub enum EndpointUrlError {
    UnsupportedScheme(String),
    InvalidBaseUrl(url::ParseError),
    EmptySegment,
    DotSegment(String),
}


impl fmt::Display for EndpointUrlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EndpointUrlError::UnsupportedScheme(ref scheme) => write!(f, "unsupported scheme {:?}", scheme),
            EndpointUrlError::InvalidBaseUrl(ref e) => write!(f, "invalid cluster address: {}", e),
            EndpointUrlError::EmptySegment => write!(f, "request path has an empty segment"),
            EndpointUrlError::DotSegment(ref segment) => write!(f, "request path segment {:?} would be dropped", segment),
        }
    }
}


impl std::error::Error for EndpointUrlError {}


impl From<url::ParseError> for EndpointUrlError {
    fn from(e: url::ParseError) -> EndpointUrlError {
        EndpointUrlError::InvalidBaseUrl(e)
    }
}


impl ClientConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ClientConfig, LoadConfigError> {
        let mut file = File::open(path)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;

        Ok(serde_json::from_str(&s)?)
    }

    pub fn base_url(&self) -> Result<Url, EndpointUrlError> {
        match self.scheme.as_str() {
            "http" | "https" => {}
            _ => return Err(EndpointUrlError::UnsupportedScheme(self.scheme.clone())),
        }

        Ok(Url::parse(&format!("{}://{}:{}/", self.scheme, self.host, self.port))?)
    }

    /// Full URL of an endpoint; each path segment is percent-encoded
    ///
    /// Empty and dot segments are rejected, as the URL would address a different resource
    /// than the endpoint names.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, EndpointUrlError> {
        for segment in endpoint.segments.iter() {
            if segment.is_empty() {
                return Err(EndpointUrlError::EmptySegment);
            }

            if is_dot_segment(segment) {
                return Err(EndpointUrlError::DotSegment(segment.clone()));
            }
        }

        let mut url = self.base_url()?;

        // http(s) URLs always have a path
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.clear().extend(endpoint.segments.iter());
        }

        Ok(url)
    }

    /// Username and password for basic authentication, when a username is configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match self.username {
            Some(ref username) => Some((username.as_str(), self.password.as_ref().map(|p| p.as_str()).unwrap_or(""))),
            None => None,
        }
    }
}
