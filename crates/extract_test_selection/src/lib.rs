// crates/extract_test_selection/src/lib.rs

use std::convert::Infallible;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use apex_marker::{APEX_CLOSE, APEX_OPEN, PAYLOAD_END, PAYLOAD_START};
use log::{debug, info};

mod error;
mod lines;
mod selection;

pub use error::{Result, SelectionError};
pub use lines::pr_body_lines;
pub use selection::{ScanPolicy, TestSelection};

/// Returns true when the line carries both directive tokens.
///
/// This is plain, case-sensitive substring containment: the tokens are not
/// required to be adjacent, or even in order, for the line to qualify.
pub fn is_marker_line(line: &str) -> bool {
    line.contains(APEX_OPEN) && line.contains(APEX_CLOSE)
}

/// Extracts the text between the first `[` on the line and the first `]`
/// after it, trimmed of surrounding whitespace.
///
/// Returns `None` when either bracket is missing or the trimmed text is empty.
pub fn extract_payload(line: &str) -> Option<&str> {
    let start = line.find(PAYLOAD_START)? + PAYLOAD_START.len_utf8();
    let end = start + line[start..].find(PAYLOAD_END)?;
    let payload = line[start..end].trim();
    (!payload.is_empty()).then_some(payload)
}

/// Scans the lines for the first `Apex::[ ... ]::Apex` directive using the
/// default [`ScanPolicy`].
///
/// Lines are pulled lazily; nothing after the first marker line is consumed.
pub fn extract_test_selection<I, S>(lines: I) -> TestSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_test_selection_with_policy(lines, ScanPolicy::default())
}

pub fn extract_test_selection_with_policy<I, S>(lines: I, policy: ScanPolicy) -> TestSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let infallible = lines.into_iter().map(Ok::<S, Infallible>);
    match try_extract_test_selection(infallible, policy) {
        Ok(selection) => selection,
        Err(never) => match never {},
    }
}

/// Same scan over fallible lines, as produced by [`pr_body_lines`].
///
/// The first error is returned as-is; errors from lines beyond the one that
/// ends the scan are never observed.
pub fn try_extract_test_selection<I, S, E>(
    lines: I,
    policy: ScanPolicy,
) -> std::result::Result<TestSelection, E>
where
    I: IntoIterator<Item = std::result::Result<S, E>>,
    S: AsRef<str>,
{
    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line = line.as_ref();
        if !is_marker_line(line) {
            continue;
        }

        if let Some(payload) = extract_payload(line) {
            debug!("Directive found on line {}: {}", index + 1, payload);
            return Ok(TestSelection::Tests(payload.to_string()));
        }

        debug!("Directive on line {} has an empty test list", index + 1);
        if policy == ScanPolicy::StopAtFirstMarker {
            break;
        }
    }

    Ok(TestSelection::All)
}

/// Reads the pull-request body at `path` line by line and extracts the selection.
///
/// # Errors
///
/// Returns [`SelectionError::Read`] if the file cannot be opened or reading
/// from it fails. Invalid UTF-8 is decoded lossily and is not an error.
pub fn read_test_selection<P: AsRef<Path>>(path: P, policy: ScanPolicy) -> Result<TestSelection> {
    let path = path.as_ref();
    let read_error = |source| SelectionError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);
    try_extract_test_selection(pr_body_lines(reader), policy).map_err(read_error)
}

/// Overwrites `path` with the selection followed by a newline.
///
/// # Errors
///
/// Returns [`SelectionError::Write`] if the file cannot be created or written.
/// A missing parent directory is not created.
pub fn write_test_selection<P: AsRef<Path>>(path: P, selection: &TestSelection) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{selection}\n")).map_err(|source| SelectionError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `source`, extracts the selection and writes it to `output`.
/// Returns the value that was written.
pub fn run<P, Q>(source: P, output: Q, policy: ScanPolicy) -> Result<TestSelection>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let selection = read_test_selection(source.as_ref(), policy)?;
    write_test_selection(output.as_ref(), &selection)?;
    info!(
        "Wrote test selection '{}' to {}",
        selection,
        output.as_ref().display()
    );
    Ok(selection)
}
