//! Page-by-page tag collection

use log::debug;

use crate::error::Result;

use super::arn::decompose;
use super::credentials::CredentialSet;
use super::models::TagResultRow;
use super::pager::TagPager;

/// Drain `pager`, appending one row per (resource, tag) pair to `out`.
///
/// Stops at the first failing page or malformed ARN. Resources without tags
/// are skipped before their ARN is read. Rows appended before the failure
/// stay in `out`. Returns the number of rows appended.
pub async fn fetch_all<P>(
    pager: &mut P,
    credentials: &CredentialSet,
    region: &str,
    out: &mut Vec<TagResultRow>,
) -> Result<usize>
where
    P: TagPager + ?Sized,
{
    let start = out.len();
    let mut page_number = 0;

    while pager.has_more_pages() {
        page_number += 1;
        let page = pager.next_page(region, credentials).await?;

        for mapping in page.into_iter().filter(|m| !m.tags.is_empty()) {
            let parts = decompose(&mapping.resource_arn)?;
            out.extend(
                mapping
                    .tags
                    .into_iter()
                    .map(|tag| TagResultRow::new(&parts, tag)),
            );
        }

        debug!("Page {}: {} rows collected so far", page_number, out.len() - start);
    }

    Ok(out.len() - start)
}
