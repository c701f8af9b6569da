use serde::{Deserialize, Serialize};

pub const SCHEMA_V2_1: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";
pub const BASE_URL: &str = "{{baseUrl}}";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collection {
    pub info: Info,
    pub variable: Vec<Variable>,
    #[serde(rename = "item")]
    pub groups: Vec<Group>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    pub name: String,
    pub description: String,
    pub schema: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A Postman folder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    #[serde(rename = "item")]
    pub requests: Vec<RequestSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub name: String,
    pub event: Vec<Event>,
    pub request: Request,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Script {
    #[serde(rename = "type")]
    pub kind: String,
    pub exec: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn json_content() -> Self {
        Self::new("Content-Type", "application/json")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

impl Body {
    /// Encodes `payload` as pretty JSON into a raw body.
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            mode: "raw".to_string(),
            raw: serde_json::to_string_pretty(payload)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    pub fn new(segments: &[&str]) -> Self {
        let path: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
        Self {
            raw: format!("{}/{}", BASE_URL, path.join("/")),
            host: vec![BASE_URL.to_string()],
            path,
        }
    }

    /// `host` and `path` joined back together must give `raw`.
    pub fn is_consistent(&self) -> bool {
        match self.host.as_slice() {
            [host] => format!("{}/{}", host, self.path.join("/")) == self.raw,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(&["health"], "{{baseUrl}}/health")]
    #[case(&["api", "trees", "{{treeId}}", "full"], "{{baseUrl}}/api/trees/{{treeId}}/full")]
    fn url_keeps_placeholders(#[case] segments: &[&str], #[case] raw: &str) {
        let url = Url::new(segments);
        assert_eq!(url.raw, raw);
        assert_eq!(url.host, vec!["{{baseUrl}}".to_string()]);
        assert_eq!(url.path.len(), segments.len());
        assert!(url.is_consistent());
    }

    #[rstest]
    fn tampered_url_is_inconsistent() {
        let mut url = Url::new(&["api", "trees"]);
        url.path.push("extra".to_string());
        assert!(!url.is_consistent());

        let mut url = Url::new(&["api", "trees"]);
        url.host.clear();
        assert!(!url.is_consistent());
    }

    #[rstest]
    #[case(Method::Get, "\"GET\"")]
    #[case(Method::Post, "\"POST\"")]
    #[case(Method::Delete, "\"DELETE\"")]
    fn method_serializes_uppercase(#[case] method: Method, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&method).unwrap(), expected);
    }

    #[rstest]
    fn body_without_payload_is_omitted() {
        let request = Request {
            method: Method::Get,
            header: vec![],
            body: None,
            url: Url::new(&["health"]),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("body").is_none());
        assert_eq!(value["header"], serde_json::json!([]));
    }
}
