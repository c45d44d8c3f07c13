use crate::models::{FilteredProjects, ProjectQuery, ProjectRecord};

const ANY: &str = "all";

/// Dropdown filters: blank or `"all"` means no filter.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ANY)
}

impl ProjectQuery {
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        let search = self.search.as_deref().filter(|s| !s.is_empty());
        let matches_search = match search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                [&project.project, &project.business_unit, &project.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            None => true,
        };

        matches_search
            && active(&self.year).map_or(true, |year| project.year.to_string() == year)
            && active(&self.business_unit).map_or(true, |unit| project.business_unit == unit)
            && active(&self.category).map_or(true, |category| project.category == category)
    }
}

/// Projects matching every active filter, in their original order.
pub fn filter_projects(projects: &[ProjectRecord], query: &ProjectQuery) -> FilteredProjects {
    let matched: Vec<ProjectRecord> = projects
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect();

    FilteredProjects {
        total: projects.len(),
        matched: matched.len(),
        projects: matched,
    }
}
