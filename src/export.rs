use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::normalize::output_file_name;

pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))
}

/// Where the CSV for `move_name` lands inside `out_dir`.
pub fn learners_csv_path(out_dir: &Path, move_name: &str) -> PathBuf {
    out_dir.join(output_file_name(move_name))
}

/// Write `row` as the single record of a CSV file, replacing any previous file.
pub fn write_learners_csv(path: &Path, row: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create CSV file: {}", path.display()))?;

    wtr.write_record(row)
        .with_context(|| format!("Unable to write CSV row: {}", path.display()))?;
    wtr.flush()
        .with_context(|| format!("Unable to flush CSV file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_single_row_and_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = learners_csv_path(dir.path(), "Light of Ruin");
        assert!(path.ends_with("light_of_ruin_learners.csv"));

        write_learners_csv(&path, &["OLD".to_string()]).expect("first write");
        write_learners_csv(&path, &["FLOETTE".to_string(), "MR, MIME".to_string()])
            .expect("second write");

        let text = std::fs::read_to_string(&path).expect("read csv");
        assert_eq!(text.trim_end(), "FLOETTE,\"MR, MIME\"");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("x_learners.csv");
        assert!(write_learners_csv(&path, &["A".to_string()]).is_err());
    }
}
