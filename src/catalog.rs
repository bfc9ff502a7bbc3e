//! Listing datasets and fetching their metadata from the catalog.

use serde::Deserialize;

use crate::client::Catalog;

/// One top-level DAS record, a `dataset` list of per-service entries.
#[derive(Debug, Deserialize)]
struct Record {
    dataset: Vec<Entry>,
}

/// A single dataset entry within a record.
///
/// Different DAS services fill in different fields, so everything is
/// optional and entries are matched on the fields they carry.
#[derive(Debug, Deserialize)]
struct Entry {
    name: Option<String>,
    size: Option<u64>,
    nevents: Option<u64>,
}

fn filter(subject: &str, instance: &str) -> String {
    format!("dataset dataset={subject} instance={instance}")
}

/// List the fully qualified names of all datasets matching a pattern.
///
/// A failed query degrades to an empty listing. Records that don't have
/// the expected shape are skipped instead of scrapping the whole listing.
pub fn list_datasets(
    catalog: &dyn Catalog,
    pattern: &str,
    instance: &str,
) -> Vec<String> {
    let query = filter(pattern, instance);
    log::info!("Executing query: {query}");

    let records = match catalog.query(&query) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Listing pattern {pattern} failed: {e:#}");
            return Vec::new();
        }
    };

    if records.is_empty() {
        log::warn!("No data found for pattern {pattern}");
    }

    let mut names = Vec::new();
    for value in records {
        let record: Record = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping malformed record: {e}");
                continue;
            }
        };
        names.extend(record.dataset.into_iter().filter_map(|e| e.name));
    }

    names
}

/// Fetch one dataset's size in bytes and its event count.
///
/// Returns the first entry that carries both facts, `None` if no entry
/// does or the query failed.
pub fn dataset_info(
    catalog: &dyn Catalog,
    dataset: &str,
    instance: &str,
) -> Option<(u64, u64)> {
    let query = filter(dataset, instance);

    let records = match catalog.query(&query) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Metadata query for {dataset} failed: {e:#}");
            return None;
        }
    };

    for value in records {
        let Ok(record) = serde_json::from_value::<Record>(value) else {
            continue;
        };
        for entry in record.dataset {
            if let (Some(size), Some(nevents)) = (entry.size, entry.nevents)
            {
                return Some((size, nevents));
            }
        }
    }

    None
}
