//! tagu - Dump the resource tags of public cloud providers
//!
//! A CLI tool that lists every tagged resource of one or more AWS accounts
//! as flat `(account, region, service, resource, key, value)` rows.
//!
//! # Features
//!
//! - General (shared filters) or detailed (per-account) YAML input
//! - Cross-account access through STS AssumeRole
//! - Resource type and tag filters applied server side
//! - Automatic pagination handling
//! - Multiple output formats (JSON, table, CSV, YAML)
//!
//! # Example
//!
//! ```bash
//! # Dump tags for the accounts listed in input-tags.yaml
//! tagu aws -i input-tags.yaml
//!
//! # Same, restricted to one region, as a table
//! tagu aws -i input-tags.yaml -r eu-west-1 -o table
//!
//! # Show what would be queried
//! tagu aws -i input-tags.yaml --dry-run
//! ```

pub mod aws;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ui;

pub use aws::{run_aws_command, AmbientConfig, CredentialSet, TagResultRow, TagRun};
pub use cli::{AwsArgs, Cli, Command, OutputFormat};
pub use error::{Result, TaguError};
pub use input::{AccountFilterSpec, DetailedSpec, GeneralFilterSpec, InputLoader};
pub use output::output_rows;
