//! Pure resolution of every discovered package, ahead of any file writes.

use crate::vendor::{DependencyResolver, PackageUnit, TargetNameIndex};
use std::collections::BTreeMap;

/// A package together with its resolved dependency labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBuild {
    pub unit: PackageUnit,
    pub deps: Vec<String>,
}

/// Resolves every package against an index built from the complete set.
///
/// Builds come back ordered by import path.
pub fn plan_builds(packages: BTreeMap<String, PackageUnit>, cell_prefix: &str) -> Vec<PlannedBuild> {
    let index = TargetNameIndex::new(&packages);
    let resolver = DependencyResolver::new(&index, cell_prefix);

    // BTreeMap iteration is already sorted by import path.
    packages
        .into_values()
        .map(|unit| {
            let deps = resolver.resolve(&unit);
            PlannedBuild { unit, deps }
        })
        .collect()
}
