use crate::models::{ProjectRecord, ProjectSummary};
use std::collections::{BTreeMap, BTreeSet, HashSet};

fn bump(counts: &mut BTreeMap<String, usize>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}

/// Single pass over the records. Years and the two name lists come out
/// sorted; sizes keep the order they were first seen in.
pub fn summarize(records: &[ProjectRecord]) -> ProjectSummary {
    let mut summary = ProjectSummary {
        total_projects: records.len(),
        ..ProjectSummary::default()
    };

    let mut years = BTreeSet::new();
    let mut business_units = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut seen_sizes = HashSet::new();

    for record in records {
        bump(&mut summary.projects_by_year, &record.year.to_string());
        bump(&mut summary.projects_by_business_unit, &record.business_unit);
        bump(&mut summary.projects_by_category, &record.category);
        bump(&mut summary.projects_by_size, &record.size);

        years.insert(record.year);
        business_units.insert(record.business_unit.as_str());
        categories.insert(record.category.as_str());
        if seen_sizes.insert(record.size.as_str()) {
            summary.sizes.push(record.size.clone());
        }
    }

    summary.years = years.into_iter().collect();
    summary.business_units = business_units.into_iter().map(str::to_string).collect();
    summary.categories = categories.into_iter().map(str::to_string).collect();
    summary
}
