use crate::{
    error::{GenerateError, Result},
    script::{test_event, TestBlock},
    types::{
        Body, Collection, Group, Header, Info, Method, Request, RequestSpec, Url, Variable,
        SCHEMA_V2_1,
    },
};

/// Empty collection with `baseUrl` as the only declared variable.
///
/// Identifiers captured by test scripts (`treeId`, `memberId`) stay
/// undeclared; Postman's environment holds them at run time.
pub fn new_collection(name: &str, description: &str, base_url: &str) -> Collection {
    Collection {
        info: Info {
            name: name.to_string(),
            description: description.to_string(),
            schema: SCHEMA_V2_1.to_string(),
        },
        variable: vec![Variable {
            key: "baseUrl".to_string(),
            value: base_url.to_string(),
            kind: "string".to_string(),
        }],
        groups: vec![],
    }
}

pub fn add_group(collection: &mut Collection, group: Group) -> Result<()> {
    if group.name.trim().is_empty() {
        return Err(GenerateError::Validation("group name is empty".to_string()));
    }
    if collection.groups.iter().any(|g| g.name == group.name) {
        return Err(GenerateError::Validation(format!(
            "duplicate group name: {}",
            group.name
        )));
    }
    log::debug!("Adding group {} ({} requests)", group.name, group.requests.len());
    collection.groups.push(group);
    Ok(())
}

pub fn build_request(
    name: &str,
    method: Method,
    segments: &[&str],
    headers: Vec<Header>,
    body: Option<Body>,
    assertions: &[TestBlock],
) -> RequestSpec {
    RequestSpec {
        name: name.to_string(),
        event: vec![test_event(assertions)],
        request: Request {
            method,
            header: headers,
            body,
            url: Url::new(segments),
        },
    }
}

/// Rechecks what `add_group` enforces plus the URL join rule, so a
/// collection assembled by hand or deserialized is held to the same rules.
pub fn validate(collection: &Collection) -> Result<()> {
    let mut seen: Vec<&str> = vec![];
    for group in collection.groups.iter() {
        if group.name.trim().is_empty() {
            return Err(GenerateError::Validation("group name is empty".to_string()));
        }
        if seen.contains(&group.name.as_str()) {
            return Err(GenerateError::Validation(format!(
                "duplicate group name: {}",
                group.name
            )));
        }
        seen.push(&group.name);
        for req in group.requests.iter() {
            if !req.request.url.is_consistent() {
                return Err(GenerateError::Validation(format!(
                    "url of {}/{} does not match its segments: {}",
                    group.name, req.name, req.request.url.raw
                )));
            }
        }
    }
    Ok(())
}

/// Pretty JSON with 2-space indentation, no trailing newline.
pub fn serialize(collection: &Collection) -> Result<String> {
    validate(collection)?;
    Ok(serde_json::to_string_pretty(collection)?)
}
