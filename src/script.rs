//! Post-response test scripts in Postman's `pm.test` form.
//!
//! A request's script is a status block followed by at most one block of
//! checks against the JSON response body.

use crate::types::{Event, Script};
use serde_json::Value;

/// One check on the parsed response body (`jsonData`).
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Property(String),
    Equals { property: String, value: Value },
    Array,
    /// Stores `jsonData.<property>` into the environment for later requests.
    Capture { property: String, variable: String },
}

impl Check {
    fn statement(&self) -> String {
        match self {
            Check::Property(p) => format!("pm.expect(jsonData).to.have.property({});", quote(p)),
            Check::Equals { property, value } => {
                format!("pm.expect(jsonData.{}).to.eql({});", property, value)
            }
            Check::Array => format!("pm.expect(jsonData).to.be.an({});", quote("array")),
            Check::Capture { property, variable } => {
                format!("pm.environment.set({}, jsonData.{});", quote(variable), property)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestBlock {
    pub title: String,
    pub statements: Vec<String>,
}

impl TestBlock {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.statements.len() + 2);
        lines.push(format!("pm.test({}, function () {{", quote(&self.title)));
        lines.extend(self.statements.iter().map(|s| format!("    {}", s)));
        lines.push("});".to_string());
        lines
    }
}

/// Checks against the response body, collected under one test title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyChecks {
    title: String,
    checks: Vec<Check>,
}

impl BodyChecks {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            checks: vec![],
        }
    }

    pub fn property(mut self, property: &str) -> Self {
        self.checks.push(Check::Property(property.to_string()));
        self
    }

    pub fn properties<'a, I>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        properties.into_iter().fold(self, |c, p| c.property(p))
    }

    pub fn equals<V: Into<Value>>(mut self, property: &str, value: V) -> Self {
        self.checks.push(Check::Equals {
            property: property.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn array(mut self) -> Self {
        self.checks.push(Check::Array);
        self
    }

    pub fn capture(mut self, property: &str, variable: &str) -> Self {
        self.checks.push(Check::Capture {
            property: property.to_string(),
            variable: variable.to_string(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Status block first, then the body block if `checks` holds anything.
pub fn assertion_script(status: u16, checks: BodyChecks) -> Vec<TestBlock> {
    let mut blocks = vec![TestBlock {
        title: format!("Status code is {}", status),
        statements: vec![format!("pm.response.to.have.status({});", status)],
    }];
    if !checks.is_empty() {
        let mut statements = vec!["var jsonData = pm.response.json();".to_string()];
        statements.extend(checks.checks.iter().map(Check::statement));
        blocks.push(TestBlock {
            title: checks.title,
            statements,
        });
    }
    blocks
}

/// Flattens blocks into exec lines, one empty line between blocks.
pub fn render(blocks: &[TestBlock]) -> Vec<String> {
    let mut exec = vec![];
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            exec.push(String::new());
        }
        exec.extend(block.lines());
    }
    exec
}

pub fn test_event(blocks: &[TestBlock]) -> Event {
    Event {
        listen: "test".to_string(),
        script: Script {
            kind: "text/javascript".to_string(),
            exec: render(blocks),
        },
    }
}

fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
