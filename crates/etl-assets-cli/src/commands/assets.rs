//! Handlers for the asset subcommands (`resolve`, `projects`, `list`,
//! `find`, `check`).

use std::io::Write;

use etl_assets_core::locator::display_path;
use etl_assets_core::{inspect, AssetKind, AssetName, Catalog};
use log::info;

use super::Context;
use crate::error::Result;

/// Print the directory for a project's assets of `kind`.
///
/// Without `absolute` this is the pure `projects/<id>/<kind>/` mapping and
/// the asset tree is never touched.
pub fn cmd_resolve(
    ctx: &Context,
    project: Option<&str>,
    kind: &str,
    absolute: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let project = ctx.project(project)?;
    let kind: AssetKind = kind.parse()?;

    if absolute {
        let dir = ctx.locator()?.asset_dir(&project, kind);
        writeln!(out, "{}", dir.display())?;
    } else {
        writeln!(out, "{}", display_path(&project, kind))?;
    }
    Ok(())
}

/// List project namespaces.
pub fn cmd_projects(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    for project in ctx.locator()?.projects()? {
        writeln!(out, "{project}")?;
    }
    Ok(())
}

/// List assets visible to a project.
pub fn cmd_list(
    ctx: &Context,
    project: Option<&str>,
    kind: &str,
    fallback: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let project = ctx.project(project)?;
    let kind: AssetKind = kind.parse()?;
    let catalog = Catalog::new(ctx.locator()?, &ctx.config);

    let assets = if fallback {
        catalog.list_merged(&project, kind)?
    } else {
        catalog.list(&project, kind)?
    };
    info!("{} {kind} visible to '{project}'", assets.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &assets)?;
        writeln!(out)?;
    } else {
        for asset in &assets {
            writeln!(out, "{}\t{}", asset.name, asset.origin)?;
        }
    }
    Ok(())
}

/// Print the path of one asset, searching the fallback chain.
pub fn cmd_find(
    ctx: &Context,
    project: Option<&str>,
    kind: &str,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let project = ctx.project(project)?;
    let kind: AssetKind = kind.parse()?;
    let name = AssetName::parse(name)?;
    let catalog = Catalog::new(ctx.locator()?, &ctx.config);

    let asset = catalog.find(&project, kind, &name)?;
    info!("Found {kind}/{name} in {}", asset.origin);
    writeln!(out, "{}", asset.path.display())?;
    Ok(())
}

/// Inspect the layout and print the report.
///
/// Returns `false` when the report contains errors.
pub fn cmd_check(ctx: &Context, json: bool, out: &mut dyn Write) -> Result<bool> {
    let report = inspect(&ctx.locator()?, &ctx.config)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for finding in &report.findings {
            writeln!(out, "{finding}")?;
        }
        writeln!(
            out,
            "{} projects, {} pipelines checked: {} errors, {} warnings",
            report.projects.len(),
            report.pipelines_checked,
            report.error_count(),
            report.warning_count()
        )?;
    }
    Ok(report.is_ok())
}
