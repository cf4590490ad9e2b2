//! `tagu aws` command

use log::{debug, info, warn};
use serde::Serialize;

use crate::cli::AwsArgs;
use crate::error::Result;
use crate::input::{AccountFilterSpec, DetailedSpec, InputFileResolver, InputLoader};
use crate::output::output_rows;
use crate::ui::{create_spinner, finish_spinner_with_status, update_spinner};

use super::ambient::{load_sdk_config, AmbientConfig};
use super::credentials::StsRoleAssumer;
use super::pager::SdkTagPager;
use super::runner::TagRun;

/// A run together with the filters its pager applies
#[derive(Debug)]
pub struct PlannedRun<'a> {
    pub run: TagRun,
    pub filter: &'a AccountFilterSpec,
}

/// Expand the input into one run per (account, region), in input order.
///
/// `region_override` replaces every account's region list. An account
/// without regions gets a single run on the default region.
pub fn plan_runs<'a>(
    spec: &'a DetailedSpec,
    region_override: Option<&str>,
) -> Vec<PlannedRun<'a>> {
    spec.filter_input
        .iter()
        .flat_map(|filter| {
            let regions = match region_override {
                Some(region) => vec![region.to_string()],
                None if filter.regions.is_empty() => vec![String::new()],
                None => filter.regions.clone(),
            };
            regions.into_iter().map(move |region| PlannedRun {
                run: TagRun::new(&filter.account, region, &spec.role_name),
                filter,
            })
        })
        .collect()
}

#[derive(Serialize)]
struct DryRunReport<'a> {
    input: &'a DetailedSpec,
    runs: Vec<DryRunEntry<'a>>,
}

#[derive(Serialize)]
struct DryRunEntry<'a> {
    account: &'a str,
    region: &'a str,
    #[serde(rename = "role-name", skip_serializing_if = "Option::is_none")]
    role_name: Option<&'a str>,
}

fn render_dry_run(spec: &DetailedSpec, plan: &[PlannedRun<'_>]) -> Result<String> {
    let runs = plan
        .iter()
        .map(|planned| DryRunEntry {
            account: &planned.run.account,
            region: if planned.run.region.is_empty() {
                "<default>"
            } else {
                planned.run.region.as_str()
            },
            role_name: Some(planned.run.role_name.as_str()).filter(|name| !name.is_empty()),
        })
        .collect();

    Ok(serde_yml::to_string(&DryRunReport { input: spec, runs })?)
}

/// Run the aws command: load the input file, then dump tags for every
/// planned (account, region) pair one after another.
pub async fn run_aws_command(args: &AwsArgs, quiet: bool) -> Result<()> {
    let path = InputFileResolver::resolve(args.input_file.as_deref())?;
    let loader = InputLoader::new(path);
    let spec = loader.load()?;
    info!("Loaded input file {}", loader.path().display());

    let plan = plan_runs(&spec, args.region.as_deref());
    debug!("Planned {} run(s)", plan.len());

    if args.dry_run {
        println!("{}", render_dry_run(&spec, &plan)?.trim_end());
        return Ok(());
    }

    if plan.is_empty() {
        warn!("No accounts to query in {}", loader.path().display());
        return output_rows(&[], &args.output);
    }

    let sdk_config = load_sdk_config().await;
    let ambient = AmbientConfig::from_sdk_config(&sdk_config).await?;
    let assumer = StsRoleAssumer::new(&sdk_config);

    let spinner = create_spinner(
        &format!("Fetching tags for {} account/region pair(s)...", plan.len()),
        quiet,
    );

    let mut rows = Vec::new();
    for planned in &plan {
        update_spinner(
            &spinner,
            format!(
                "Fetching tags for account {} in {}...",
                planned.run.account,
                planned.run.resolve_region(&ambient)
            ),
        );

        let mut pager = SdkTagPager::new(&sdk_config, planned.filter);
        match planned.run.execute(&ambient, &assumer, &mut pager).await {
            Ok(run_rows) => rows.extend(run_rows),
            Err(e) => {
                finish_spinner_with_status(spinner, &rows, true);
                return Err(e);
            }
        }
    }

    finish_spinner_with_status(spinner, &rows, false);
    info!("Fetched {} tags from {} run(s)", rows.len(), plan.len());

    output_rows(&rows, &args.output)
}
