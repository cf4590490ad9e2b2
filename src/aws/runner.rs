//! One tag dump for a single account and region

use log::{debug, warn};

use crate::error::{Result, TaguError};

use super::ambient::AmbientConfig;
use super::credentials::{self, CredentialSet, RoleAssumer};
use super::fetch::fetch_all;
use super::models::TagResultRow;
use super::pager::TagPager;

/// Parameters of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRun {
    pub account: String,
    /// Explicit region; empty to use the default region
    pub region: String,
    /// Role to assume in `account`; empty to use the default credentials
    pub role_name: String,
}

impl TagRun {
    pub fn new(
        account: impl Into<String>,
        region: impl Into<String>,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
            role_name: role_name.into(),
        }
    }

    /// Explicit region wins, otherwise the default region
    pub fn resolve_region(&self, ambient: &AmbientConfig) -> String {
        if !self.region.is_empty() {
            return self.region.clone();
        }
        ambient.region.clone()
    }

    pub async fn resolve_credentials<A>(
        &self,
        ambient: &AmbientConfig,
        assumer: &A,
    ) -> Result<CredentialSet>
    where
        A: RoleAssumer + ?Sized,
    {
        credentials::resolve_credentials(&self.account, &self.role_name, ambient, assumer).await
    }

    /// Resolve region and credentials, then drain `pager`
    pub async fn execute<A, P>(
        &self,
        ambient: &AmbientConfig,
        assumer: &A,
        pager: &mut P,
    ) -> Result<Vec<TagResultRow>>
    where
        A: RoleAssumer + ?Sized,
        P: TagPager + ?Sized,
    {
        let region = self.resolve_region(ambient);
        if region.is_empty() {
            return Err(TaguError::MissingRegion(format!(
                "No region configured for account {}. Set 'regions' in the input file, \
                 pass --region, or configure a default AWS region.",
                self.account
            )));
        }

        let credentials = self.resolve_credentials(ambient, assumer).await?;

        debug!("Fetching tags for account {} in {}", self.account, region);

        let mut rows = Vec::new();
        match fetch_all(pager, &credentials, &region, &mut rows).await {
            Ok(count) => {
                debug!(
                    "Collected {} rows for account {} in {}",
                    count, self.account, region
                );
                Ok(rows)
            }
            Err(e) => {
                if !rows.is_empty() {
                    warn!(
                        "Discarding {} rows collected for account {} in {} before the error",
                        rows.len(),
                        self.account,
                        region
                    );
                }
                Err(e)
            }
        }
    }
}
