// crates/apex_marker/src/lib.rs

//! Literal tokens of the `Apex::[ ... ]::Apex` test-selection directive,
//! shared by the extractor library and the `select_tests` binary.

/// Opening token. Must appear on the same line as [`APEX_CLOSE`].
pub const APEX_OPEN: &str = "Apex::[";

/// Closing token.
pub const APEX_CLOSE: &str = "]::Apex";

/// The payload starts after the first occurrence of this character on the line.
pub const PAYLOAD_START: char = '[';

/// The payload ends at the first occurrence of this character after [`PAYLOAD_START`].
pub const PAYLOAD_END: char = ']';

/// Written when no test list is found ("run everything").
pub const DEFAULT_SELECTION: &str = "all";
