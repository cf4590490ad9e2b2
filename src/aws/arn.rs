//! ARN decomposition

use crate::error::{Result, TaguError};

/// Fields extracted from an `arn:partition:service:region:account:resource` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnParts {
    pub account: String,
    pub region: String,
    pub service: String,
    pub resource: String,
}

/// Split an ARN into its account, region, service and resource fields.
///
/// The resource is everything after the fifth colon, so resource IDs that
/// contain colons themselves (log groups, lambda aliases) stay intact.
pub fn decompose(arn: &str) -> Result<ArnParts> {
    let segments: Vec<&str> = arn.splitn(6, ':').collect();
    if segments.len() < 6 {
        return Err(TaguError::MalformedArn(arn.to_string()));
    }

    Ok(ArnParts {
        account: segments[4].to_string(),
        region: segments[3].to_string(),
        service: segments[2].to_string(),
        resource: segments[5].to_string(),
    })
}
