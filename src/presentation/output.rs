//! Output Rendering
//!
//! Summaries printed by the CLI, as aligned text or JSON.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{Acquisition, ResolutionPlan};
use crate::domain::entities::{LoadedOntology, OntologyPayload};
use crate::infrastructure::CachedArtifact;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// What `load` reports about a resolved ontology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntologySummary {
    pub handle: String,
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl From<&LoadedOntology> for OntologySummary {
    fn from(ontology: &LoadedOntology) -> Self {
        let mut summary = Self {
            handle: ontology.handle().to_string(),
            strategy: ontology.strategy().to_string(),
            graphs: None,
            nodes: None,
            edges: None,
            endpoint: None,
        };
        match ontology.payload() {
            OntologyPayload::Graph(doc) => {
                summary.graphs = Some(doc.graphs.len());
                summary.nodes = Some(doc.node_count());
                summary.edges = Some(doc.edge_count());
            }
            OntologyPayload::Remote(remote) => {
                summary.endpoint = Some(remote.endpoint.clone());
            }
        }
        summary
    }
}

/// What `classify` reports about a handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub handle: String,
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
}

impl From<&ResolutionPlan> for PlanSummary {
    fn from(plan: &ResolutionPlan) -> Self {
        let (source, artifact) = match &plan.acquisition {
            Acquisition::Direct { path } => (None, Some(path.clone())),
            Acquisition::Convert {
                source, artifact, ..
            } => (Some(source.clone()), Some(artifact.clone())),
            Acquisition::Query { id } => (Some(id.clone()), None),
        };
        let cached = match &plan.acquisition {
            Acquisition::Convert { artifact, .. } => Some(artifact.is_file()),
            _ => None,
        };
        Self {
            handle: plan.handle.clone(),
            strategy: plan.kind.strategy().to_string(),
            source,
            artifact,
            cached,
        }
    }
}

/// One row of `cache list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRow {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl From<&CachedArtifact> for ArtifactRow {
    fn from(artifact: &CachedArtifact) -> Self {
        Self {
            name: artifact.name.clone(),
            path: artifact.path.clone(),
            size: artifact.size,
            modified: artifact.modified.map(DateTime::<Utc>::from),
        }
    }
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<10} {}\n", format!("{}:", label), value)
}

pub fn render_ontology(summary: &OntologySummary, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_json(summary);
    }
    let mut out = field("handle", &summary.handle);
    out.push_str(&field("strategy", &summary.strategy));
    if let (Some(graphs), Some(nodes), Some(edges)) = (summary.graphs, summary.nodes, summary.edges)
    {
        out.push_str(&field("graphs", graphs));
        out.push_str(&field("nodes", nodes));
        out.push_str(&field("edges", edges));
    }
    if let Some(endpoint) = &summary.endpoint {
        out.push_str(&field("endpoint", endpoint));
    }
    out
}

pub fn render_plan(summary: &PlanSummary, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_json(summary);
    }
    let mut out = field("handle", &summary.handle);
    out.push_str(&field("strategy", &summary.strategy));
    if let Some(source) = &summary.source {
        out.push_str(&field("source", source));
    }
    if let Some(artifact) = &summary.artifact {
        out.push_str(&field("artifact", artifact.display()));
    }
    if let Some(cached) = summary.cached {
        out.push_str(&field("cached", if cached { "yes" } else { "no" }));
    }
    out
}

pub fn render_artifacts(rows: &[ArtifactRow], format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_json(&rows);
    }
    if rows.is_empty() {
        return "no cached artifacts\n".to_string();
    }
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let modified = row
                .modified
                .map(|m| m.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{:<width$}  {:>10}  {}\n",
                row.name,
                row.size,
                modified,
                width = width
            )
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    json.push('\n');
    json
}
