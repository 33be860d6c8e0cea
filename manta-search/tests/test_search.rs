use std::path::Path;

use rstest::*;

use manta_io::{ImpactWrite, VCF_COLUMNS_ERR};
use manta_search::pipeline::{READ_PROBLEMS_HEADING, SEARCH_PROBLEMS_HEADING};
use manta_search::{InMemoryTfbsStore, SearchConfig, SearchError, SearchRequest};

#[fixture]
fn path_to_data() -> &'static str {
    "../tests/data"
}

#[fixture]
fn store(path_to_data: &str) -> InMemoryTfbsStore {
    let path = Path::new(path_to_data).join("tfbs_snvs.jsonl");
    InMemoryTfbsStore::try_from(path.as_path()).unwrap()
}

fn request(path_to_data: &str, file_name: &str, file_format: Option<&str>) -> SearchRequest {
    SearchRequest::new(
        Path::new(path_to_data).join(file_name),
        file_format.map(String::from),
    )
}

fn tf_names(report: &manta_search::SearchReport) -> Vec<(&str, &str, &str)> {
    report
        .snv_impacts
        .iter()
        .map(|si| {
            (
                si.jaspar_tf_name.as_str(),
                si.ref_allele.as_str(),
                si.alt_allele.as_str(),
            )
        })
        .collect()
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_search_vcf(path_to_data: &str, store: InMemoryTfbsStore) {
        let report = request(path_to_data, "variants.vcf", None)
            .run(&store, &SearchConfig::default())
            .unwrap();

        assert_eq!(report.file_format, "vcf");
        assert_eq!(report.variants.len(), 4);
        assert_eq!(
            tf_names(&report),
            vec![("CTCF", "A", "G"), ("CTCF", "A", "T"), ("SOX2", "G", "C")]
        );

        // heading, GATA1 has no G, rs2 ref mismatch, GATA1 has no T
        assert_eq!(report.warnings.len(), 4);
        assert_eq!(report.warnings[0], SEARCH_PROBLEMS_HEADING);
        assert!(report.warnings[2].contains("Reference allele mismatch at location chr1:100"));

        let ids: Vec<&str> = report.snv_impacts.iter().map(|si| si.snv_id.as_str()).collect();
        assert_eq!(ids, vec!["rs1", "rs2", "rs4"]);
    }

    #[rstest]
    fn test_search_bed(path_to_data: &str, store: InMemoryTfbsStore) {
        let report = request(path_to_data, "variants.bed", None)
            .run(&store, &SearchConfig::default())
            .unwrap();

        assert_eq!(report.file_format, "bed");
        assert_eq!(report.variants.len(), 2);
        assert_eq!(tf_names(&report), vec![("CTCF", "A", "T"), ("SOX2", "G", "A")]);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[1].contains("Variant allele T at location chr1:100"));
    }

    #[rstest]
    fn test_search_gff(path_to_data: &str, store: InMemoryTfbsStore) {
        let report = request(path_to_data, "variants.gff", None)
            .run(&store, &SearchConfig::default())
            .unwrap();

        assert_eq!(report.file_format, "gff");
        assert_eq!(
            tf_names(&report),
            vec![("CTCF", "A", "C"), ("GATA1", "A", "C"), ("SOX2", "G", "A")]
        );
        assert!(report.warnings.is_empty());
    }

    #[rstest]
    fn test_read_problems_become_warnings(path_to_data: &str, store: InMemoryTfbsStore) {
        let report = request(path_to_data, "malformed.vcf", None)
            .run(&store, &SearchConfig::default())
            .unwrap();

        assert_eq!(report.variants.len(), 1);
        assert_eq!(&report.warnings[..3], &[
            READ_PROBLEMS_HEADING.to_string(),
            VCF_COLUMNS_ERR.to_string(),
            SEARCH_PROBLEMS_HEADING.to_string(),
        ]);
        assert_eq!(report.snv_impacts.len(), 1);
    }

    #[rstest]
    fn test_declared_format_skips_sniffing(path_to_data: &str, store: InMemoryTfbsStore) {
        // the sniffer can't place this file, but a declared format is used as is
        let report = request(path_to_data, "ambiguous.txt", Some("BED"))
            .run(&store, &SearchConfig::default());

        // the only record is a 100 base interval, so nothing is read
        match report {
            Err(SearchError::NoVariants { details, .. }) => assert_eq!(
                details,
                vec![
                    "Please make sure the file is formatted correctly according to the supplied file type of bed."
                        .to_string()
                ]
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_undetermined_format(path_to_data: &str, store: InMemoryTfbsStore) {
        let result = request(path_to_data, "ambiguous.txt", None).run(&store, &SearchConfig::default());

        let err = result.unwrap_err();
        assert!(matches!(err, SearchError::UndeterminedFormat(_)));
        assert_eq!(err.to_string(), "Could not determine input variant file format.");
        assert!(err.details().is_empty());
    }

    #[rstest]
    fn test_unknown_declared_format(path_to_data: &str, store: InMemoryTfbsStore) {
        let result = request(path_to_data, "variants.vcf", Some("gtf")).run(&store, &SearchConfig::default());

        let err = result.unwrap_err();
        assert!(matches!(err, SearchError::NoVariants { .. }));
        assert_eq!(err.details().last().unwrap(), "Unknown SNV file type gtf");
    }

    #[rstest]
    fn test_disallowed_extension(store: InMemoryTfbsStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.csv");
        std::fs::write(&path, "chr1\t100\trs1\tA\tG\n").unwrap();

        let result = SearchRequest::new(&path, None).run(&store, &SearchConfig::default());
        let err = result.unwrap_err();
        assert!(matches!(err, SearchError::DisallowedExtension(_)));
        assert!(err.to_string().contains("(vcf, bed, gff, txt)"));

        // naming the format gets past the extension check
        let report = SearchRequest::new(&path, Some("vcf".to_string()))
            .run(&store, &SearchConfig::default())
            .unwrap();
        assert_eq!(report.snv_impacts.len(), 1);
    }

    #[rstest]
    fn test_format_required(path_to_data: &str, store: InMemoryTfbsStore) {
        let config = SearchConfig {
            ask_for_filetype: true,
            ..SearchConfig::default()
        };
        let result = request(path_to_data, "variants.vcf", None).run(&store, &config);
        assert!(matches!(result, Err(SearchError::FormatRequired)));
    }

    #[rstest]
    fn test_missing_input(store: InMemoryTfbsStore) {
        let result = SearchRequest::new("does/not/exist.vcf", None).run(&store, &SearchConfig::default());
        assert!(matches!(result, Err(SearchError::Manta(_))));
    }

    #[rstest]
    fn test_report_lines(path_to_data: &str, store: InMemoryTfbsStore) {
        let report = request(path_to_data, "variants.vcf", None)
            .run(&store, &SearchConfig::default())
            .unwrap();

        let text = report.snv_impacts.to_report_string();
        assert_eq!(
            text.lines().next().unwrap(),
            "1\t100\tA\tG\trs1\tCTCF\tMA0139.1\t95\t105\t+\t12.5\t0.92\t95\t105\t+\t6.5\t0.48\t-0.44"
        );
    }

    #[rstest]
    fn test_concurrent_requests_are_independent(path_to_data: &str, store: InMemoryTfbsStore) {
        let config = SearchConfig::default();
        let files = ["variants.vcf", "variants.bed", "variants.gff"];

        let sequential: Vec<_> = files
            .iter()
            .map(|f| request(path_to_data, f, None).run(&store, &config).unwrap())
            .collect();

        let concurrent: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = files
                .iter()
                .map(|f| {
                    let (store, config) = (&store, &config);
                    s.spawn(move || request(path_to_data, f, None).run(store, config).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
    }
}
