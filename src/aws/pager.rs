//! Paged access to the Resource Groups Tagging API

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_resourcegroupstagging as tagging;
use aws_sdk_resourcegroupstagging::error::DisplayErrorContext;
use aws_types::region::Region;
use log::{debug, warn};

use crate::config::aws;
use crate::error::{Result, TaguError};
use crate::input::AccountFilterSpec;

use super::credentials::CredentialSet;
use super::models::{ResourceTagMapping, ResourceTagPage, Tag};

/// Source of resource tag pages
///
/// Every request carries the region and credentials to use, so one pager
/// can be driven with credentials resolved after it was built.
#[async_trait]
pub trait TagPager: Send {
    /// Whether another page can be requested
    fn has_more_pages(&self) -> bool;

    /// Request the next page
    async fn next_page(
        &mut self,
        region: &str,
        credentials: &CredentialSet,
    ) -> Result<ResourceTagPage>;
}

/// `TagPager` over GetResources, following `PaginationToken`
pub struct SdkTagPager {
    client: tagging::Client,
    resource_types: Vec<String>,
    tag_filters: Vec<tagging::types::TagFilter>,
    pagination_token: Option<String>,
    started: bool,
}

impl SdkTagPager {
    /// Create a pager applying the resource type and tag filters of `filter`
    pub fn new(config: &SdkConfig, filter: &AccountFilterSpec) -> Self {
        let tag_filters = filter
            .filter_tags
            .iter()
            .filter_map(|tag| {
                if tag.key.is_empty() {
                    warn!(
                        "Ignoring tag filter without a key for account {}",
                        filter.account
                    );
                    return None;
                }
                let values = (!tag.values.is_empty()).then(|| tag.values.clone());
                Some(
                    tagging::types::TagFilter::builder()
                        .key(&tag.key)
                        .set_values(values)
                        .build(),
                )
            })
            .collect();

        Self {
            client: tagging::Client::new(config),
            resource_types: filter.filter_resources.clone(),
            tag_filters,
            pagination_token: None,
            started: false,
        }
    }
}

#[async_trait]
impl TagPager for SdkTagPager {
    fn has_more_pages(&self) -> bool {
        !self.started
            || self
                .pagination_token
                .as_deref()
                .is_some_and(|token| !token.is_empty())
    }

    async fn next_page(
        &mut self,
        region: &str,
        credentials: &CredentialSet,
    ) -> Result<ResourceTagPage> {
        let overrides = tagging::config::Builder::default()
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials.to_aws_credentials());

        let output = self
            .client
            .get_resources()
            .resources_per_page(aws::PAGE_SIZE)
            .set_resource_type_filters(
                (!self.resource_types.is_empty()).then(|| self.resource_types.clone()),
            )
            .set_tag_filters((!self.tag_filters.is_empty()).then(|| self.tag_filters.clone()))
            .set_pagination_token(self.pagination_token.clone())
            .customize()
            .config_override(overrides)
            .send()
            .await
            .map_err(|e| TaguError::PageFetch(format!("{}: {}", region, DisplayErrorContext(&e))))?;

        self.started = true;
        self.pagination_token = output.pagination_token().map(str::to_string);

        let page: ResourceTagPage = output
            .resource_tag_mapping_list()
            .iter()
            .map(|mapping| ResourceTagMapping {
                resource_arn: mapping.resource_arn().unwrap_or_default().to_string(),
                tags: mapping
                    .tags()
                    .iter()
                    .map(|tag| Tag {
                        key: tag.key().to_string(),
                        value: tag.value().to_string(),
                    })
                    .collect(),
            })
            .collect();

        debug!(
            "Fetched page with {} resources in {} (more pages: {})",
            page.len(),
            region,
            self.has_more_pages()
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::fetch::fetch_all;
    use crate::aws::testing::mock_sdk_config;
    use crate::input::TagFilter;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GET_RESOURCES: &str = "ResourceGroupsTaggingAPI_20170126.GetResources";

    fn tagging_response(body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/x-amz-json-1.1")
    }

    fn ec2_filter() -> AccountFilterSpec {
        AccountFilterSpec {
            account: "123456789012".to_string(),
            regions: vec![],
            filter_resources: vec!["ec2:instance".to_string()],
            filter_tags: vec![TagFilter {
                key: "ENV".to_string(),
                values: vec!["prod".to_string()],
            }],
        }
    }

    async fn mount_two_pages(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-amz-target", GET_RESOURCES))
            .and(body_string_contains("\"PaginationToken\":\"tok-2\""))
            .respond_with(tagging_response(json!({
                "PaginationToken": "",
                "ResourceTagMappingList": [
                    {
                        "ResourceARN": "arn:aws:ec2:eu-west-3:123456789012:instance/i-3",
                        "Tags": [{"Key": "ENV", "Value": "prod"}]
                    }
                ]
            })))
            .with_priority(1)
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-amz-target", GET_RESOURCES))
            .respond_with(tagging_response(json!({
                "PaginationToken": "tok-2",
                "ResourceTagMappingList": [
                    {
                        "ResourceARN": "arn:aws:ec2:eu-west-3:123456789012:instance/i-1",
                        "Tags": [
                            {"Key": "ENV", "Value": "prod"},
                            {"Key": "Name", "Value": "web"}
                        ]
                    }
                ]
            })))
            .mount(server)
            .await;
    }

    fn override_creds() -> CredentialSet {
        CredentialSet::new("AKIAOVERRIDE", "override-secret", None)
    }

    fn sdk_config() -> SdkConfig {
        SdkConfig::builder()
            .region(Region::new("us-east-1"))
            .behavior_version(aws_config::BehaviorVersion::latest())
            .build()
    }

    #[test]
    fn test_new_pager_has_first_page() {
        let pager = SdkTagPager::new(&sdk_config(), &AccountFilterSpec::default());
        assert!(pager.has_more_pages());
    }

    #[test]
    fn test_pagination_token_drives_more_pages() {
        let mut pager = SdkTagPager::new(&sdk_config(), &AccountFilterSpec::default());
        pager.started = true;
        pager.pagination_token = Some("next".to_string());
        assert!(pager.has_more_pages());

        pager.pagination_token = Some(String::new());
        assert!(!pager.has_more_pages());

        pager.pagination_token = None;
        assert!(!pager.has_more_pages());
    }

    #[test]
    fn test_filters_are_converted() {
        let filter = AccountFilterSpec {
            account: "123456789012".to_string(),
            regions: vec![],
            filter_resources: vec!["ec2:instance".to_string(), "s3".to_string()],
            filter_tags: vec![
                TagFilter {
                    key: "ENV".to_string(),
                    values: vec!["prod".to_string()],
                },
                TagFilter {
                    key: "Owner".to_string(),
                    values: vec![],
                },
                TagFilter {
                    key: String::new(),
                    values: vec!["orphan".to_string()],
                },
            ],
        };

        let pager = SdkTagPager::new(&sdk_config(), &filter);
        assert_eq!(pager.resource_types, vec!["ec2:instance", "s3"]);
        assert_eq!(pager.tag_filters.len(), 2);
        assert_eq!(pager.tag_filters[0].key(), Some("ENV"));
        assert_eq!(pager.tag_filters[0].values(), &["prod".to_string()]);
        assert_eq!(pager.tag_filters[1].key(), Some("Owner"));
        assert!(pager.tag_filters[1].values().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_follows_pagination_token_until_empty() {
        let server = MockServer::start().await;
        mount_two_pages(&server).await;

        let mut pager = SdkTagPager::new(&mock_sdk_config(&server.uri()), &ec2_filter());
        let mut rows = Vec::new();
        let count = fetch_all(&mut pager, &override_creds(), "eu-west-3", &mut rows)
            .await
            .unwrap();

        assert_eq!(count, 3);
        assert!(!pager.has_more_pages());
        let resources: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.resource.as_str(), r.key.as_str()))
            .collect();
        assert_eq!(
            resources,
            vec![
                ("instance/i-1", "ENV"),
                ("instance/i-1", "Name"),
                ("instance/i-3", "ENV"),
            ]
        );
    }

    #[tokio::test]
    async fn test_request_body_carries_page_size_filters_and_token() {
        let server = MockServer::start().await;
        mount_two_pages(&server).await;

        let mut pager = SdkTagPager::new(&mock_sdk_config(&server.uri()), &ec2_filter());
        let mut rows = Vec::new();
        fetch_all(&mut pager, &override_creds(), "eu-west-3", &mut rows)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        let first: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(first["ResourcesPerPage"], json!(50));
        assert_eq!(first["ResourceTypeFilters"], json!(["ec2:instance"]));
        assert_eq!(
            first["TagFilters"],
            json!([{"Key": "ENV", "Values": ["prod"]}])
        );
        assert!(first.get("PaginationToken").is_none());

        let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(second["PaginationToken"], json!("tok-2"));
        assert_eq!(second["ResourcesPerPage"], json!(50));
    }

    #[tokio::test]
    async fn test_request_signed_with_run_region_and_credentials() {
        let server = MockServer::start().await;
        mount_two_pages(&server).await;

        let mut pager = SdkTagPager::new(&mock_sdk_config(&server.uri()), &ec2_filter());
        pager
            .next_page("eu-west-3", &override_creds())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let authorization = requests[0]
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .to_string();

        assert!(authorization.contains("Credential=AKIAOVERRIDE/"));
        assert!(authorization.contains("/eu-west-3/tagging/aws4_request"));
        assert!(!authorization.contains("AKIABASE"));
    }

    #[tokio::test]
    async fn test_service_error_is_page_fetch_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "InvalidParameterException",
                    "Message": "bad filter"
                })
                .to_string(),
                "application/x-amz-json-1.1",
            ))
            .mount(&server)
            .await;

        let mut pager = SdkTagPager::new(&mock_sdk_config(&server.uri()), &ec2_filter());
        let err = pager
            .next_page("eu-west-3", &override_creds())
            .await
            .unwrap_err();

        match err {
            TaguError::PageFetch(msg) => assert!(msg.starts_with("eu-west-3")),
            other => panic!("Expected PageFetch, got {:?}", other),
        }
        assert!(!pager.started);
    }
}
