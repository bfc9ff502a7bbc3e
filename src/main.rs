use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use das_tally::{
    groups, report,
    tally::{self, production_year},
    DasClient,
};

/// Summarize AlCa dataset sizes and event counts from DAS.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query client executable to invoke.
    #[arg(long, default_value = "dasgoclient")]
    client: PathBuf,

    /// DAS instance to query.
    #[arg(long, default_value = "prod/global")]
    instance: String,

    /// Only process the named groups, defaults to all of them.
    #[arg(long)]
    group: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let table = groups::table();
    for name in &cli.group {
        if !table.contains_key(name.as_str()) {
            bail!("unknown group {name:?}");
        }
    }

    let client = DasClient::new(&cli.client);

    let mut results = Vec::new();
    for (name, patterns) in &table {
        if !cli.group.is_empty() && !cli.group.iter().any(|g| g == name) {
            continue;
        }

        let bar = progress_bar(name);
        let totals = tally::fold_group(
            &client,
            patterns,
            &cli.instance,
            production_year,
            |done, total| {
                bar.set_length(total);
                bar.set_position(done);
            },
        );
        bar.finish_and_clear();

        results.push((*name, totals));
    }

    // All groups are folded before anything is reported so error lines
    // from the queries don't end up interleaved with the summary.
    for (name, totals) in &results {
        print!("{}", report::render(name, totals)?);
    }

    Ok(())
}

fn progress_bar(group: &str) -> ProgressBar {
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    bar.set_style(style);
    bar.set_message(format!("Processing datasets for {group}"));
    bar
}
