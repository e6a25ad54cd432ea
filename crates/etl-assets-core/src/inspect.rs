//! Layout diagnostics over a whole asset tree.
//!
//! [`inspect`] walks `projects/` and reports anything that breaks the
//! `projects/<project_id>/{pipelines,scripts}/` convention. Pipeline files
//! are parsed as YAML to catch syntax errors; their schema is not checked.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::AssetsConfig;
use crate::error::{Error, Result};
use crate::ids::ProjectId;
use crate::kind::AssetKind;
use crate::locator::AssetLocator;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Layout is usable but unconventional.
    Warning,
    /// Layout is broken for consumers.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity.
    pub severity: Severity,
    /// Path the finding is about.
    pub path: PathBuf,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path.display(), self.message)
    }
}

/// Result of inspecting a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Projects found under `projects/`.
    pub projects: Vec<ProjectId>,
    /// Number of pipeline files parsed.
    pub pipelines_checked: usize,
    /// Diagnostics, in discovery order.
    pub findings: Vec<Finding>,
}

impl Report {
    /// `true` when there are no error-level findings.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-level findings.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-level findings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    fn push(&mut self, severity: Severity, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Inspect the asset tree under `locator`.
///
/// I/O failures while reading directories abort the inspection; problems
/// with the layout itself are collected as findings.
pub fn inspect(locator: &AssetLocator, config: &AssetsConfig) -> Result<Report> {
    let mut report = Report::default();
    let projects_dir = locator.projects_dir();

    if !projects_dir.is_dir() {
        report.push(
            Severity::Error,
            &projects_dir,
            "projects directory is missing",
        );
        return Ok(report);
    }

    check_projects_entries(&projects_dir, &mut report)?;

    report.projects = locator.projects()?;
    if !report.projects.iter().any(ProjectId::is_shared) {
        report.push(
            Severity::Error,
            locator.project_dir(&ProjectId::shared()),
            "shared namespace is missing",
        );
    }

    let catalog = Catalog::new(locator.clone(), config);
    for project in report.projects.clone() {
        check_project(&catalog, &project, &mut report)?;
    }

    for kind in AssetKind::ALL {
        let legacy = locator.legacy_dir(kind);
        if legacy.is_dir() {
            report.push(
                Severity::Warning,
                legacy,
                format!(
                    "legacy root-level {kind}/ directory; move its contents to projects/shared/{kind}/"
                ),
            );
        }
    }

    debug!(
        "Inspected {} projects: {} errors, {} warnings",
        report.projects.len(),
        report.error_count(),
        report.warning_count()
    );
    Ok(report)
}

fn check_projects_entries(projects_dir: &Path, report: &mut Report) -> Result<()> {
    for entry in read_dir_sorted(projects_dir)? {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }
        if !entry.is_dir() {
            report.push(
                Severity::Warning,
                &entry,
                "stray file; only project directories belong in projects/",
            );
            continue;
        }
        if let Err(e) = ProjectId::parse(&name) {
            let reason = match e {
                Error::InvalidProjectId { reason, .. } => reason,
                other => other.to_string(),
            };
            report.push(
                Severity::Warning,
                &entry,
                format!("directory name is not a valid project id ({reason}); it will be ignored"),
            );
        }
    }
    Ok(())
}

fn check_project(catalog: &Catalog, project: &ProjectId, report: &mut Report) -> Result<()> {
    let locator = catalog.locator();
    let project_dir = locator.project_dir(project);

    for entry in read_dir_sorted(&project_dir)? {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }
        let known = AssetKind::ALL.iter().any(|k| k.dir_name() == name);
        if !known || !entry.is_dir() {
            report.push(
                Severity::Warning,
                &entry,
                "unexpected entry; project directories hold only pipelines/ and scripts/",
            );
        }
    }

    for kind in AssetKind::ALL {
        if !locator.exists(project, kind) {
            report.push(
                Severity::Warning,
                locator.asset_dir(project, kind),
                format!("project '{project}' has no {kind}/ directory"),
            );
        }
    }

    for pipeline in catalog.list(project, AssetKind::Pipelines)? {
        report.pipelines_checked += 1;
        if let Err(message) = check_pipeline_yaml(&pipeline.path)? {
            report.push(Severity::Error, &pipeline.path, message);
        }
    }
    Ok(())
}

/// Parse a pipeline file as YAML.
///
/// The outer `Result` carries I/O failures; the inner one carries the
/// parse diagnostic.
fn check_pipeline_yaml(path: &Path) -> Result<std::result::Result<(), String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(serde_yaml::from_str::<serde_yaml::Value>(&content)
        .map(|_| ())
        .map_err(|e| format!("invalid YAML: {e}")))
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))? {
        entries.push(entry.map_err(|e| Error::io_with_path(e, dir))?.path());
    }
    entries.sort();
    Ok(entries)
}
