//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a node ID given as `--start` or `--goal`.
///
/// Node IDs are opaque and passed through unchanged, including any
/// whitespace. Only the empty ID is rejected.
pub fn validate_node_id(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Node ID cannot be empty".to_string());
    }
    Ok(s.to_string())
}

/// Validate a built-in graph name.
pub fn validate_graph_name(s: &str) -> Result<String, String> {
    let name = s.trim().to_ascii_lowercase();
    if crate::samples::NAMES.contains(&name.as_str()) {
        Ok(name)
    } else {
        Err(format!(
            "Unknown graph '{}'. Available graphs: {}",
            s.trim(),
            crate::samples::NAMES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A")]
    #[case("node-42")]
    #[case("New York")]
    #[case(" A")]
    #[case("   ")]
    fn test_validate_node_id_passes_through(#[case] input: &str) {
        assert_eq!(validate_node_id(input).unwrap(), input);
    }

    #[test]
    fn test_validate_node_id_rejects_empty() {
        assert!(validate_node_id("").is_err());
    }

    #[rstest]
    #[case("tree", "tree")]
    #[case("Monster", "monster")]
    fn test_validate_graph_name_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_graph_name(input).unwrap(), expected);
    }

    #[test]
    fn test_validate_graph_name_rejects() {
        let err = validate_graph_name("lattice").unwrap_err();
        assert!(err.contains("Available graphs: tree, monster"));
    }
}
