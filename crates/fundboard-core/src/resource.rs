use crate::types::ResourceId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaterialBilling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MaterialBilling {
    OneTime,
    /// `cost_amount` is spread over `amortization_period` days.
    Recurring {
        #[serde(rename = "amortizationPeriod", default, deserialize_with = "crate::lenient::amount")]
        amortization_period: f64,
    },
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceKind {
    Human {
        #[serde(rename = "costPerDay", default, deserialize_with = "crate::lenient::amount")]
        cost_per_day: f64,
    },
    Material {
        #[serde(rename = "costAmount", default, deserialize_with = "crate::lenient::amount")]
        cost_amount: f64,
        billing: MaterialBilling,
    },
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    #[serde(default)]
    pub name: String,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn human(id: impl Into<ResourceId>, name: impl Into<String>, cost_per_day: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ResourceKind::Human { cost_per_day },
        }
    }

    pub fn material(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        cost_amount: f64,
        billing: MaterialBilling,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ResourceKind::Material {
                cost_amount,
                billing,
            },
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, ResourceKind::Human { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_resource_yaml() {
        let yaml = "id: r1\nname: Field officer\nkind:\n  type: human\n  costPerDay: 120\n";
        let r: Resource = serde_yaml::from_str(yaml).unwrap();
        assert!(r.is_human());
        assert_eq!(r, Resource::human("r1", "Field officer", 120.0));
    }

    #[test]
    fn recurring_material_json() {
        let json = r#"{
            "id": "r2",
            "name": "Vehicle lease",
            "kind": {
                "type": "material",
                "costAmount": 3000,
                "billing": { "mode": "recurring", "amortizationPeriod": 30 }
            }
        }"#;
        let r: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(
            r.kind,
            ResourceKind::Material {
                cost_amount: 3000.0,
                billing: MaterialBilling::Recurring {
                    amortization_period: 30.0
                },
            }
        );
    }

    #[test]
    fn one_time_material_tag() {
        let r = Resource::material("r3", "Laptop", 900.0, MaterialBilling::OneTime);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""mode":"one_time""#));
        assert!(!r.is_human());
    }
}
