use std::fmt;

use super::model::MarginDataset;

// ---------------------------------------------------------------------------
// Scope – the industry-selection filter
// ---------------------------------------------------------------------------

/// Industry scope: everything, or exactly one industry.  Both arms come from
/// closed UI enumerations, so no invalid scope is reachable interactively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    AllIndustries,
    Industry(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::AllIndustries => f.write_str("All Industries"),
            Scope::Industry(name) => f.write_str(name),
        }
    }
}

/// Return indices of records matching the scope, in dataset order.
pub fn filtered_indices(dataset: &MarginDataset, scope: &Scope) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| match scope {
            Scope::AllIndustries => true,
            Scope::Industry(name) => rec.industry == *name,
        })
        .map(|(i, _)| i)
        .collect()
}
