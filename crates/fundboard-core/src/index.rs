use crate::activity::Activity;
use crate::resource::Resource;
use crate::types::{ActivityId, ResourceId};
use std::collections::HashMap;

/// Id → record maps, built once per render instead of scanning per lookup.
/// When ids repeat, the first record wins, matching a linear `find`.
#[derive(Debug, Default)]
pub struct PlanIndex<'a> {
    activities: HashMap<&'a ActivityId, &'a Activity>,
    resources: HashMap<&'a ResourceId, &'a Resource>,
}

impl<'a> PlanIndex<'a> {
    pub fn new(activities: &'a [Activity], resources: &'a [Resource]) -> Self {
        let mut index = Self::default();
        for a in activities {
            index.activities.entry(&a.id).or_insert(a);
        }
        for r in resources {
            index.resources.entry(&r.id).or_insert(r);
        }
        index
    }

    pub fn activity(&self, id: &ActivityId) -> Option<&'a Activity> {
        self.activities.get(id).copied()
    }

    pub fn resource(&self, id: &ResourceId) -> Option<&'a Resource> {
        self.resources.get(id).copied()
    }
}
