use std::{path::PathBuf, process::Command, str};

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Access to the dataset catalog.
///
/// The production implementation shells out to the external query client;
/// tests substitute canned responses.
pub trait Catalog {
    /// Run one catalog query and return the decoded result records.
    fn query(&self, filter: &str) -> Result<Vec<Value>>;
}

/// Catalog access through the external `dasgoclient` executable.
#[derive(Clone, Debug)]
pub struct DasClient {
    program: PathBuf,
}

impl DasClient {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        DasClient {
            program: program.into(),
        }
    }
}

impl Catalog for DasClient {
    fn query(&self, filter: &str) -> Result<Vec<Value>> {
        // Blocks until the client exits, there is no timeout.
        let output = Command::new(&self.program)
            .args(["--query", filter, "--json"])
            .output()
            .with_context(|| format!("failed to run {:?}", self.program))?;

        if !output.status.success() {
            bail!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        decode_records(&output.stdout)
    }
}

/// Decode the client's stdout as a JSON array of records.
///
/// Records are left as raw JSON values; callers pick out the fields they
/// need and skip records that don't fit their expected shape.
fn decode_records(stdout: &[u8]) -> Result<Vec<Value>> {
    let text =
        str::from_utf8(stdout).context("query output is not UTF-8")?;
    Ok(serde_json::from_str(text)
        .context("query output is not a JSON array")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_arrays() {
        let records =
            decode_records(br#"[{"dataset": []}, {"dataset": []}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn rejects_non_array_output() {
        assert!(decode_records(b"").is_err());
        assert!(decode_records(b"not json").is_err());
        assert!(decode_records(b"{\"dataset\": []}").is_err());
    }

    #[test]
    fn nonzero_exit_is_an_error() {
        // `false` ignores the query arguments and exits 1.
        assert!(DasClient::new("false").query("dataset dataset=/*").is_err());
    }

    #[test]
    fn empty_output_from_a_clean_exit_is_an_error() {
        // `true` exits 0 without printing a JSON array.
        assert!(DasClient::new("true").query("dataset dataset=/*").is_err());
    }
}
