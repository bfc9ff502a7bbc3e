//! Rendering group totals into console report blocks.

use std::fmt::Write;

use anyhow::Result;

use crate::tally::{GroupTotals, Year};

const TB: f64 = (1u64 << 40) as f64;

/// Render the summary block for one group.
pub fn render(group: &str, totals: &GroupTotals) -> Result<String> {
    let total_tb = totals.bytes as f64 / TB;
    let per_dataset_tb = if totals.datasets > 0 {
        total_tb / totals.datasets as f64
    } else {
        0.0
    };
    let per_event_tb = if totals.events > 0 {
        total_tb / totals.events as f64
    } else {
        0.0
    };

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "Group: {group}")?;
    writeln!(out, "Total number of datasets: {}", totals.datasets)?;
    writeln!(out, "Total size of all datasets: {total_tb:.2} TB")?;

    for year in Year::ALL {
        let count =
            totals.count_by_year.get(&year).copied().unwrap_or_default();
        let bytes =
            totals.bytes_by_year.get(&year).copied().unwrap_or_default();
        writeln!(out, "Total number of datasets in {year}: {count}")?;
        writeln!(
            out,
            "Total size of datasets in {year}: {:.2} TB",
            bytes as f64 / TB
        )?;
    }

    writeln!(out, "Average size per dataset: {per_dataset_tb:.2} TB")?;
    writeln!(out, "Average size per event: {per_event_tb:.12} TB")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_block_per_group() {
        let mut totals = GroupTotals::default();
        totals.add(Some(Year::Y2022), 1 << 40, 4);

        assert_eq!(
            render("PPS", &totals).unwrap(),
            "\n\
             Group: PPS\n\
             Total number of datasets: 1\n\
             Total size of all datasets: 1.00 TB\n\
             Total number of datasets in 2022: 1\n\
             Total size of datasets in 2022: 1.00 TB\n\
             Total number of datasets in 2023: 0\n\
             Total size of datasets in 2023: 0.00 TB\n\
             Total number of datasets in 2024: 0\n\
             Total size of datasets in 2024: 0.00 TB\n\
             Average size per dataset: 1.00 TB\n\
             Average size per event: 0.250000000000 TB\n"
        );
    }

    #[test]
    fn empty_group_renders_zeroes_instead_of_dividing() {
        let text = render("ECAL", &GroupTotals::default()).unwrap();

        assert!(text.contains("Total number of datasets: 0\n"));
        assert!(text.contains("Total size of all datasets: 0.00 TB\n"));
        assert!(text.contains("Average size per dataset: 0.00 TB\n"));
        assert!(
            text.contains("Average size per event: 0.000000000000 TB\n")
        );
    }

    #[test]
    fn per_event_average_keeps_twelve_decimals() {
        let mut totals = GroupTotals::default();
        totals.add(None, 1 << 40, 1_000_000);

        let text = render("BRIL", &totals).unwrap();
        assert!(
            text.contains("Average size per event: 0.000001000000 TB\n")
        );
    }
}
