//! Tagging data models

use serde::Serialize;

use super::arn::ArnParts;

/// A single resource tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// A resource ARN together with its tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTagMapping {
    pub resource_arn: String,
    pub tags: Vec<Tag>,
}

/// One page of GetResources results
pub type ResourceTagPage = Vec<ResourceTagMapping>;

/// Flattened output row: one per (resource, tag) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResultRow {
    pub account: String,
    pub region: String,
    pub service: String,
    pub resource: String,
    pub key: String,
    pub value: String,
}

impl TagResultRow {
    pub fn new(parts: &ArnParts, tag: Tag) -> Self {
        Self {
            account: parts.account.clone(),
            region: parts.region.clone(),
            service: parts.service.clone(),
            resource: parts.resource.clone(),
            key: tag.key,
            value: tag.value,
        }
    }
}
