use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use manta_core::models::SnvImpact;

/// Output path meaning "write to stdout".
pub const STDOUT_PATH: &str = "-";

pub trait ImpactWrite {
    ///
    /// Write the impacts as tab separated lines, one per impact, no header.
    ///
    /// # Arguments
    /// - writer: where to write to
    fn write_impacts<W: Write>(&self, writer: W) -> io::Result<()>;

    ///
    /// Write the impacts to disk. A path ending in `.gz` is gzip'd.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_impacts_file<T: AsRef<Path>>(&self, path: T) -> io::Result<()>;

    ///
    /// Get the whole report as a string.
    fn to_report_string(&self) -> String;
}

impl ImpactWrite for [SnvImpact] {
    fn write_impacts<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for snv_impact in self {
            writeln!(writer, "{}", snv_impact.as_string())?;
        }
        writer.flush()
    }

    fn write_impacts_file<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = BufWriter::new(File::create(path)?);

        if path.extension().is_some_and(|ext| ext == "gz") {
            let mut encoder = GzEncoder::new(file, Compression::default());
            self.write_impacts(&mut encoder)?;
            encoder.finish()?.flush()
        } else {
            self.write_impacts(file)
        }
    }

    fn to_report_string(&self) -> String {
        self.iter().map(|si| format!("{}\n", si.as_string())).collect()
    }
}

///
/// Write the impacts to the given file, or to stdout when there is no path or the path is `-`.
///
pub fn write_snv_impacts(path: Option<&Path>, snv_impacts: &[SnvImpact]) -> io::Result<()> {
    match path {
        Some(path) if path != Path::new(STDOUT_PATH) => snv_impacts.write_impacts_file(path),
        _ => snv_impacts.write_impacts(BufWriter::new(io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use flate2::read::GzDecoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn snv_impacts() -> Vec<SnvImpact> {
        let base = SnvImpact {
            snv_id: "rs1".to_string(),
            chrom: "1".to_string(),
            position: 100,
            ref_allele: "A".to_string(),
            alt_allele: "G".to_string(),
            matrix_id: "MA0139.1".to_string(),
            jaspar_tf_name: "CTCF".to_string(),
            start1: 95,
            end1: 105,
            strand1: "+".to_string(),
            abs_score1: 9.5,
            rel_score1: 0.85,
            start2: 95,
            end2: 105,
            strand2: "+".to_string(),
            abs_score2: 6.25,
            rel_score2: 0.6,
            impact: -0.25,
        };
        let mut second = base.clone();
        second.jaspar_tf_name = "GATA1".to_string();
        second.matrix_id = "MA0035.4".to_string();
        vec![base, second]
    }

    #[rstest]
    fn test_report_string(snv_impacts: Vec<SnvImpact>) {
        let report = snv_impacts.to_report_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(report.ends_with('\n'));
        assert!(lines.iter().all(|l| l.split('\t').count() == 18));
        assert_eq!(
            lines[1],
            "1\t100\tA\tG\trs1\tGATA1\tMA0035.4\t95\t105\t+\t9.5\t0.85\t95\t105\t+\t6.25\t0.6\t-0.25"
        );
    }

    #[rstest]
    fn test_empty_report() {
        let snv_impacts: Vec<SnvImpact> = vec![];
        assert_eq!(snv_impacts.to_report_string(), "");
    }

    #[rstest]
    fn test_write_impacts_file(snv_impacts: Vec<SnvImpact>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("manta_results.txt");

        write_snv_impacts(Some(&path), &snv_impacts).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, snv_impacts.to_report_string());
    }

    #[rstest]
    fn test_write_impacts_file_gz(snv_impacts: Vec<SnvImpact>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manta_results.txt.gz");

        snv_impacts.write_impacts_file(&path).unwrap();

        let mut written = String::new();
        GzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut written)
            .unwrap();
        assert_eq!(written, snv_impacts.to_report_string());
    }
}
