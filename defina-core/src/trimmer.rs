//! Input trimming that runs before any rewriting.
//!
//! Both strategies only ever cut the text, so each returns a prefix slice of
//! its input.

use log::debug;

/// Truncates `text` before the first occurrence of each marker, in order.
///
/// Every marker is searched for in the already-truncated result, so a marker
/// that only appears after an earlier cut has no effect. Text without any
/// marker is returned unchanged.
pub fn trim_at_markers<'a, S: AsRef<str>>(text: &'a str, markers: &[S]) -> &'a str {
    markers.iter().fold(text, |acc, marker| {
        let marker = marker.as_ref();
        if marker.is_empty() {
            return acc;
        }
        match acc.find(marker) {
            Some(pos) => {
                debug!("Boundary marker '{}' found at byte {}; truncating.", marker, pos);
                &acc[..pos]
            }
            None => acc,
        }
    })
}

/// Keeps the document up to and including the first run of lines that start
/// with `marker`, dropping everything after that run.
///
/// If no line starts with `marker`, the text is returned unchanged.
pub fn keep_first_marker_block(text: &str, marker: char) -> &str {
    let mut offset = 0;
    let mut in_block = false;

    for line in text.split_inclusive('\n') {
        if line.starts_with(marker) {
            in_block = true;
        } else if in_block {
            debug!("First '{}' block ends at byte {}; dropping the tail.", marker, offset);
            return &text[..offset];
        }
        offset += line.len();
    }

    text
}
