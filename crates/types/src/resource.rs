//! Resource identity and property attachment

use crate::{Moniker, PropertyBag, ResourceType};
use serde::{Deserialize, Serialize};

/// A declared or materialized infrastructure resource.
///
/// `moniker` and `type_` are immutable for the life of the resource;
/// `id` is `Some` iff the resource has been materialized by a provider.
/// A create step's input resource must have no ID; a delete or update
/// step's input resource must have one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    moniker: Moniker,
    #[serde(rename = "type")]
    type_: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    properties: PropertyBag,
}

impl Resource {
    /// A resource as declared in a desired-state snapshot: no ID yet.
    #[must_use]
    pub fn desired(
        moniker: impl Into<Moniker>,
        type_: impl Into<ResourceType>,
        properties: PropertyBag,
    ) -> Self {
        Self {
            moniker: moniker.into(),
            type_: type_.into(),
            id: None,
            properties,
        }
    }

    /// A resource as it exists in an actual-state snapshot: already materialized.
    #[must_use]
    pub fn materialized(
        moniker: impl Into<Moniker>,
        type_: impl Into<ResourceType>,
        id: impl Into<String>,
        properties: PropertyBag,
    ) -> Self {
        Self {
            moniker: moniker.into(),
            type_: type_.into(),
            id: Some(id.into()),
            properties,
        }
    }

    #[must_use]
    pub fn moniker(&self) -> &Moniker {
        &self.moniker
    }

    #[must_use]
    pub fn resource_type(&self) -> &ResourceType {
        &self.type_
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Assign an ID, as a provider does on successful create or on an
    /// update realized as a replacement.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }
}
