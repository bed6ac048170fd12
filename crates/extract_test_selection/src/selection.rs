// crates/extract_test_selection/src/selection.rs

use std::fmt;

use apex_marker::DEFAULT_SELECTION;

/// The value handed to the downstream test runner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TestSelection {
    /// No usable directive was found; run everything.
    #[default]
    All,
    /// The trimmed, non-empty text found between the brackets of the directive.
    Tests(String),
}

impl TestSelection {
    pub fn as_str(&self) -> &str {
        match self {
            TestSelection::All => DEFAULT_SELECTION,
            TestSelection::Tests(tests) => tests,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TestSelection::All)
    }
}

impl fmt::Display for TestSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a marker line whose brackets hold nothing but whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// The first marker line ends the scan, even when its payload is empty.
    #[default]
    StopAtFirstMarker,
    /// Keep scanning past marker lines with an empty payload.
    SkipEmptyMarkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_renders_default_sentinel() {
        assert_eq!(TestSelection::All.to_string(), "all");
        assert!(TestSelection::All.is_all());
        assert_eq!(TestSelection::default(), TestSelection::All);
    }

    #[test]
    fn test_tests_render_verbatim() {
        let selection = TestSelection::Tests("test_foo, test_bar".to_string());
        assert_eq!(selection.as_str(), "test_foo, test_bar");
        assert!(!selection.is_all());
    }

    #[test]
    fn test_default_policy_stops_at_first_marker() {
        assert_eq!(ScanPolicy::default(), ScanPolicy::StopAtFirstMarker);
    }
}
