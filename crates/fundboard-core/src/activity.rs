use crate::types::ActivityId;
use serde::{Deserialize, Serialize};

/// A named grouping of related tasks within a project plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional() {
        let a: Activity = serde_json::from_str(r#"{"id":"a1","name":"Survey"}"#).unwrap();
        assert_eq!(a, Activity::new("a1", "Survey"));
        let json = serde_json::to_string(&a).unwrap();
        assert!(!json.contains("description"));
    }
}
