//! Tests for JSON file output and input

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::algorithm::executor::generate_kolam;
    use kolam::io::export::{read_json, write_json};
    use kolam::spatial::geometry::KolamPattern;

    // Tests a pattern survives a write and read through the filesystem
    // Verified by dropping the camelCase rename on the pattern record
    #[test]
    fn test_write_then_read_pattern() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("deeper").join("pattern.json");
        let pattern = generate_kolam(3, 1).expect("Generation should succeed");

        write_json(&path, &pattern).expect("Write should create parent directories");
        let restored: KolamPattern = read_json(&path).expect("Read should succeed");
        assert_eq!(restored.id, pattern.id);
        assert_eq!(restored.symmetry_type, pattern.symmetry_type);
        assert_eq!(restored.dots.len(), pattern.dots.len());
        assert_eq!(restored.curves.len(), pattern.curves.len());
        assert!((restored.dimensions.width - pattern.dimensions.width).abs() < 1e-9);

        let raw = std::fs::read_to_string(&path).expect("File should exist");
        assert!(raw.contains("\"orderedPoints\""));
        assert!(raw.contains("\"symmetryType\""));
    }

    // Tests missing files report the path and operation
    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("absent.json");

        let result: kolam::Result<KolamPattern> = read_json(&path);
        assert!(matches!(
            result,
            Err(KolamError::FileSystem { operation: "read", path: ref failed, .. })
                if failed.ends_with("absent.json")
        ));
    }

    // Tests a blocked parent directory reports the directory it tried to create
    // Verified by mapping directory errors without their path
    #[test]
    fn test_write_under_file_parent() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").expect("Failed to write file");
        let path = blocker.join("pattern.json");
        let pattern = generate_kolam(2, 0).expect("Generation should succeed");

        let result = write_json(&path, &pattern);
        assert!(matches!(
            result,
            Err(KolamError::FileSystem { operation: "create directory", path: ref failed, .. })
                if failed.ends_with("blocker")
        ));
    }

    // Tests malformed files report a serialization error
    #[test]
    fn test_read_malformed_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").expect("Failed to write file");

        let result: kolam::Result<KolamPattern> = read_json(&path);
        assert!(matches!(result, Err(KolamError::Serialization { .. })));
    }
}
