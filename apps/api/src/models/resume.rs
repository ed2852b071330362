use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level sections the prompt asks the model for. Advisory only: the model
/// may omit any of them or add its own.
pub const RESUME_SECTIONS: [&str; 7] = [
    "personal_information",
    "summary",
    "work_experience",
    "education",
    "skills",
    "certifications",
    "projects",
];

/// The model's JSON interpretation of a resume, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredResume(pub Value);

impl StructuredResume {
    /// True for `null`, `false`, `0`, `""`, `[]` and `{}`.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }

    /// Advisory sections present at the top level, in prompt order.
    pub fn present_sections(&self) -> Vec<&'static str> {
        match &self.0 {
            Value::Object(map) => RESUME_SECTIONS
                .iter()
                .copied()
                .filter(|key| map.contains_key(*key))
                .collect(),
            _ => Vec::new(),
        }
    }
}
