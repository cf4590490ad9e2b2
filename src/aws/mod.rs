//! AWS tag dumping module
//!
//! Resolves credentials (assumed role or default chain), pages through the
//! Resource Groups Tagging API and flattens every resource tag into a row.

mod ambient;
pub mod arn;
mod commands;
mod credentials;
mod fetch;
mod models;
mod pager;
mod runner;

#[cfg(test)]
mod testing;

pub use ambient::{load_sdk_config, AmbientConfig};
pub use arn::{decompose, ArnParts};
pub use commands::{plan_runs, run_aws_command, PlannedRun};
pub use credentials::{
    resolve_credentials, role_arn, session_name, CredentialSet, RoleAssumer, StsRoleAssumer,
};
pub use fetch::fetch_all;
pub use models::{ResourceTagMapping, ResourceTagPage, Tag, TagResultRow};
pub use pager::{SdkTagPager, TagPager};
pub use runner::TagRun;
