//! Tests for command-line interface parsing and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kolam::KolamError;
    use kolam::algorithm::synthesis::{FallbackPolicy, SymmetryMode};
    use kolam::io::cli::{BatchProcessor, BatchSummary, Cli};
    use kolam::io::configuration::{DEFAULT_COUNT, DEFAULT_SEED, DEFAULT_SIZE};
    use kolam::io::ruleset::RuleSet;
    use std::path::{Path, PathBuf};
    use tracing::Level;

    fn quiet_cli(dir: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["kolam".to_string(), dir.display().to_string(), "--quiet".to_string()];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments at all
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["kolam"]);

        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.size, DEFAULT_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.count, DEFAULT_COUNT);
        assert!(!cli.diagonal);
        assert!(!cli.strict);
        assert!(!cli.rules);
        assert!(cli.from.is_none());
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "kolam",
            "out",
            "--size",
            "11",
            "--seed",
            "123",
            "--count",
            "4",
            "--diagonal",
            "--strict",
            "--rules",
            "--from",
            "rules.json",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.size, 11);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.count, 4);
        assert!(cli.diagonal && cli.strict && cli.rules && cli.quiet && cli.no_skip);
        assert_eq!(cli.from, Some(PathBuf::from("rules.json")));
    }

    // Tests short flag parsing (-n, -s, -c, -d, -r, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["kolam", "-n", "5", "-s", "9", "-c", "2", "-d", "-r", "-q"]);

        assert_eq!(cli.size, 5);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.count, 2);
        assert!(cli.diagonal && cli.rules && cli.quiet);
    }

    // Tests flag-derived helpers
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_flag_helpers() {
        let default = Cli::parse_from(["kolam"]);
        assert!(default.skip_existing());
        assert!(default.should_show_progress());
        assert_eq!(default.log_level(), Level::INFO);

        let quiet = Cli::parse_from(["kolam", "--quiet", "--no-skip"]);
        assert!(!quiet.skip_existing());
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.log_level(), Level::WARN);
    }

    #[test]
    fn test_generation_config_from_flags() {
        let config = Cli::parse_from(["kolam", "-n", "6", "-d", "--strict"]).generation_config();
        assert_eq!(config.size, 6);
        assert_eq!(config.mode, SymmetryMode::Diagonal);
        assert_eq!(config.fallback_policy, FallbackPolicy::Strict);
    }

    // Tests a batch writes one pattern per seed and its rule set
    // Verified by reusing the first seed for every pattern
    #[test]
    fn test_batch_writes_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut processor = BatchProcessor::new(quiet_cli(
            dir.path(),
            &["-n", "5", "-s", "10", "-c", "3", "--rules"],
        ));

        let summary = processor.process().expect("Batch should succeed");
        assert_eq!(
            summary,
            BatchSummary {
                written: 3,
                skipped: 0
            }
        );

        for seed in 10..13 {
            assert!(dir.path().join(format!("kolam_5x5_s{seed}.json")).is_file());
            assert!(dir.path().join(format!("kolam_5x5_s{seed}_rules.json")).is_file());
        }
        assert_eq!(
            processor.pattern_path(5, 10),
            dir.path().join("kolam_5x5_s10.json")
        );
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by ignoring the skip flag
    #[test]
    fn test_batch_skips_existing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let args = ["-n", "4", "-c", "2"];

        let first = BatchProcessor::new(quiet_cli(dir.path(), &args))
            .process()
            .expect("Batch should succeed");
        assert_eq!(first.written, 2);

        let second = BatchProcessor::new(quiet_cli(dir.path(), &args))
            .process()
            .expect("Batch should succeed");
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, 2);

        let forced_cli = quiet_cli(dir.path(), &["-n", "4", "-c", "2", "--no-skip"]);
        let forced = BatchProcessor::new(forced_cli)
            .process()
            .expect("Batch should succeed");
        assert_eq!(forced.written, 2);
    }

    // Tests patterns can be reproduced from a rule-set file
    #[test]
    fn test_batch_from_ruleset() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("source.json");
        std::fs::write(
            &source,
            r#"{"grid_size": 6, "symmetry_type": "2D", "motifs": [], "patterns": []}"#,
        )
        .expect("Failed to write rule set");

        let out = dir.path().join("out");
        let source_arg = source.display().to_string();
        let mut processor =
            BatchProcessor::new(quiet_cli(&out, &["--from", source_arg.as_str(), "--rules"]));
        processor.process().expect("Batch should succeed");

        let rules_path = out.join(format!("kolam_6x6_s{DEFAULT_SEED}_rules.json"));
        let rules_json = std::fs::read_to_string(rules_path).expect("Rule set should be written");
        let rules = RuleSet::from_json(&rules_json).expect("Rule set should parse");
        assert_eq!(rules.grid_size, 6);
        assert_eq!(rules.motifs.len(), 36);
    }

    // Tests flags that the rule set overrides or makes redundant are rejected
    // Verified by letting the rule set silently win
    #[test]
    fn test_batch_rejects_conflicting_reproduction_flags() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("exact.json");
        std::fs::write(
            &source,
            r#"{"grid_size": 2, "symmetry_type": "2D", "motifs": [6, 9, 7, 8]}"#,
        )
        .expect("Failed to write rule set");
        let source_arg = source.display().to_string();
        let out = dir.path().join("out");

        let counted = quiet_cli(&out, &["--from", source_arg.as_str(), "-c", "3"]);
        assert!(matches!(
            BatchProcessor::new(counted).process(),
            Err(KolamError::InvalidParameter { parameter: "count", .. })
        ));

        let diagonal = quiet_cli(&out, &["--from", source_arg.as_str(), "--diagonal"]);
        assert!(matches!(
            BatchProcessor::new(diagonal).process(),
            Err(KolamError::InvalidParameter { parameter: "diagonal", .. })
        ));
        assert!(!out.exists());

        let single = quiet_cli(&out, &["--from", source_arg.as_str()]);
        let summary = BatchProcessor::new(single)
            .process()
            .expect("Batch should succeed");
        assert_eq!(summary.written, 1);
    }

    // Tests invalid sizes surface as errors instead of being clamped
    #[test]
    fn test_batch_rejects_invalid_size() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut processor = BatchProcessor::new(quiet_cli(dir.path(), &["-n", "1"]));
        assert!(processor.process().is_err());
    }
}
