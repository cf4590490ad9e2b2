//! Input file data models

use serde::{Deserialize, Serialize};

/// Tag filter: a key and the values it may take (any value when empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Filters for a single account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilterSpec {
    pub account: String,
    #[serde(default)]
    pub regions: Vec<String>,
    /// Resource type filters such as `ec2:instance` or `s3`
    #[serde(rename = "resources", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_resources: Vec<String>,
    #[serde(rename = "filter-tags", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_tags: Vec<TagFilter>,
}

/// General input shape: one set of filters shared by a list of accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralFilterSpec {
    #[serde(rename = "role-name", default)]
    pub role_name: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(rename = "resources", default)]
    pub filter_resources: Vec<String>,
    #[serde(rename = "filter-tags", default)]
    pub filter_tags: Vec<TagFilter>,
}

/// Detailed input shape: filters listed per account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedSpec {
    #[serde(rename = "role-name", default)]
    pub role_name: String,
    #[serde(rename = "filter-input", default)]
    pub filter_input: Vec<AccountFilterSpec>,
}

impl DetailedSpec {
    /// Expand a general spec into one `AccountFilterSpec` per account.
    ///
    /// Every entry carries the general spec's regions, resource filters and
    /// tag filters. Account order is preserved.
    pub fn from_general(general: GeneralFilterSpec) -> Self {
        let filter_input = general
            .accounts
            .iter()
            .map(|account| AccountFilterSpec {
                account: account.clone(),
                regions: general.regions.clone(),
                filter_resources: general.filter_resources.clone(),
                filter_tags: general.filter_tags.clone(),
            })
            .collect();

        Self {
            role_name: general.role_name,
            filter_input,
        }
    }
}
