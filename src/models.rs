use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One accepted row of the portfolio workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub year: i64,
    pub project: String,
    pub business_unit: String,
    pub category: String,
    pub size: String,
}

/// Counts and dimension lists derived from the accepted records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_projects: usize,
    pub projects_by_year: BTreeMap<String, usize>,
    pub projects_by_business_unit: BTreeMap<String, usize>,
    pub projects_by_category: BTreeMap<String, usize>,
    pub projects_by_size: BTreeMap<String, usize>,
    /// Ascending.
    pub years: Vec<i64>,
    /// Ascending by code point.
    pub business_units: Vec<String>,
    /// Ascending by code point.
    pub categories: Vec<String>,
    /// Order of first appearance, never sorted.
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectRecord>,
    pub summary: ProjectSummary,
}

/// Table filters accepted by `/api/projects/search`. `None` or `"all"`
/// disables a filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub year: Option<String>,
    pub business_unit: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredProjects {
    pub projects: Vec<ProjectRecord>,
    pub total: usize,
    pub matched: usize,
}
