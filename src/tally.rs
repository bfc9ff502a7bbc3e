//! Folding per-dataset metadata into per-group totals.

use std::{collections::BTreeMap, fmt};

use crate::{catalog, client::Catalog};

/// Recognized production years.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Year {
    Y2022,
    Y2023,
    Y2024,
}

impl Year {
    pub const ALL: [Year; 3] = [Year::Y2022, Year::Y2023, Year::Y2024];

    /// The era token carried in dataset names from this year.
    fn token(self) -> &'static str {
        match self {
            Year::Y2022 => "Run2022",
            Year::Y2023 => "Run2023",
            Year::Y2024 => "Run2024",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = match self {
            Year::Y2022 => "2022",
            Year::Y2023 => "2023",
            Year::Y2024 => "2024",
        };
        write!(f, "{year}")
    }
}

/// Classify a dataset into a production year by its name.
///
/// First matching era token wins. Datasets from unrecognized eras
/// classify as `None` and are tallied in the group totals only.
pub fn production_year(dataset: &str) -> Option<Year> {
    Year::ALL.into_iter().find(|y| dataset.contains(y.token()))
}

/// Running totals for one group of dataset patterns.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GroupTotals {
    pub datasets: u64,
    pub bytes: u64,
    pub events: u64,
    pub bytes_by_year: BTreeMap<Year, u64>,
    pub count_by_year: BTreeMap<Year, u64>,
}

impl GroupTotals {
    /// Fold one dataset's metadata into the totals.
    pub fn add(&mut self, year: Option<Year>, bytes: u64, events: u64) {
        self.datasets += 1;
        self.bytes += bytes;
        self.events += events;
        if let Some(year) = year {
            *self.bytes_by_year.entry(year).or_default() += bytes;
            *self.count_by_year.entry(year).or_default() += 1;
        }
    }
}

/// Tally every dataset matching a group's patterns.
///
/// Datasets whose metadata can't be fetched are skipped and don't count.
/// `progress` is called once per dataset with (done, total) for the
/// pattern currently being walked; it has no effect on the totals.
pub fn fold_group(
    catalog: &dyn Catalog,
    patterns: &[&str],
    instance: &str,
    classify: impl Fn(&str) -> Option<Year>,
    mut progress: impl FnMut(u64, u64),
) -> GroupTotals {
    let mut totals = GroupTotals::default();

    for pattern in patterns {
        let datasets = catalog::list_datasets(catalog, pattern, instance);
        let total = datasets.len() as u64;

        for (i, dataset) in datasets.iter().enumerate() {
            if let Some((bytes, events)) =
                catalog::dataset_info(catalog, dataset, instance)
            {
                totals.add(classify(dataset), bytes, events);
            }
            progress(i as u64 + 1, total);
        }
    }

    totals
}
