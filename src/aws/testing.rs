//! Mocks and fixtures shared by the tagging unit tests

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Result, TaguError};

use super::ambient::AmbientConfig;
use super::credentials::{CredentialSet, RoleAssumer};
use super::models::{ResourceTagMapping, ResourceTagPage, Tag, TagResultRow};
use super::pager::TagPager;

/// Pager replaying canned pages and recording every request
pub struct MockPager {
    pages: VecDeque<ResourceTagPage>,
    fail_when_exhausted: bool,
    pub requests: Vec<(String, CredentialSet)>,
}

impl MockPager {
    pub fn new(pages: Vec<ResourceTagPage>) -> Self {
        Self {
            pages: pages.into(),
            fail_when_exhausted: false,
            requests: Vec::new(),
        }
    }

    /// Keep reporting more pages after the last one and fail the next request
    pub fn failing_when_exhausted(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }
}

#[async_trait]
impl TagPager for MockPager {
    fn has_more_pages(&self) -> bool {
        self.fail_when_exhausted || !self.pages.is_empty()
    }

    async fn next_page(
        &mut self,
        region: &str,
        credentials: &CredentialSet,
    ) -> Result<ResourceTagPage> {
        self.requests.push((region.to_string(), credentials.clone()));
        self.pages
            .pop_front()
            .ok_or_else(|| TaguError::PageFetch("no more pages".to_string()))
    }
}

/// Role assumer returning a fixed outcome and recording (role ARN, session) calls
pub struct MockAssumer {
    outcome: std::result::Result<CredentialSet, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockAssumer {
    pub fn succeeding(credentials: CredentialSet) -> Self {
        Self {
            outcome: Ok(credentials),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoleAssumer for MockAssumer {
    async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<CredentialSet> {
        self.calls
            .lock()
            .unwrap()
            .push((role_arn.to_string(), session_name.to_string()));
        self.outcome.clone().map_err(TaguError::AssumeRole)
    }
}

/// Ambient config with static test credentials
pub fn ambient(region: &str) -> AmbientConfig {
    AmbientConfig::new(
        region,
        CredentialSet::new("AMBIENTKEY", "ambient-secret", Some("ambient-token".to_string())),
    )
}

/// SDK config sending every request to `endpoint`, signed as `AKIABASE` in us-east-1
pub fn mock_sdk_config(endpoint: &str) -> SdkConfig {
    SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(endpoint)
        .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
            "AKIABASE",
            "base-secret",
            None,
            None,
            "tagu-tests",
        )))
        .build()
}

fn mapping(arn: &str, tags: &[(&str, &str)]) -> ResourceTagMapping {
    ResourceTagMapping {
        resource_arn: arn.to_string(),
        tags: tags
            .iter()
            .map(|(key, value)| Tag {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Two pages: two resources with two tags each, then two resources with one tag each
pub fn fixture_pages() -> Vec<ResourceTagPage> {
    vec![
        vec![
            mapping(
                "arn:aws:ec2:us-east-1:123456789012:instance/i-12345678",
                &[("Name", "test-instance"), ("Owner", "test-owner")],
            ),
            mapping(
                "arn:aws:ec2:us-east-1:123456789012:instance/i-12345675",
                &[("ENV", "test-env"), ("Name", "test-instance2")],
            ),
        ],
        vec![
            mapping(
                "arn:aws:ec2:us-east-2:123456789012:instance/i-123456100",
                &[("Name", "test-instance-p2")],
            ),
            mapping(
                "arn:aws:ec2:us-east-2:123456789012:instance/i-12345689",
                &[("ENV", "test-env-p2")],
            ),
        ],
    ]
}

/// Rows expected from `fixture_pages`
pub fn expected_fixture_rows() -> Vec<TagResultRow> {
    let row = |region: &str, resource: &str, key: &str, value: &str| TagResultRow {
        account: "123456789012".to_string(),
        region: region.to_string(),
        service: "ec2".to_string(),
        resource: resource.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    };

    vec![
        row("us-east-1", "instance/i-12345678", "Name", "test-instance"),
        row("us-east-1", "instance/i-12345678", "Owner", "test-owner"),
        row("us-east-1", "instance/i-12345675", "ENV", "test-env"),
        row("us-east-1", "instance/i-12345675", "Name", "test-instance2"),
        row("us-east-2", "instance/i-123456100", "Name", "test-instance-p2"),
        row("us-east-2", "instance/i-12345689", "ENV", "test-env-p2"),
    ]
}
