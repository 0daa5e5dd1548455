//! Keep/drop decisions for SVG lines and the in-place rewrite.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::classify::{ColorClass, classify_fill, is_light};
use crate::debug;

/// SVG filter errors
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Outcome for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDecision {
    /// `<?xml`, `<svg` or `</svg>`: always kept.
    Structural,
    /// Path line with a green or blue fill.
    Kept(ColorClass),
    /// Path line with a candidate fill, rejected for also carrying a light fill.
    Light,
    /// Path line whose fill is neither green nor blue.
    Unmatched,
    /// Anything else.
    Dropped,
}

impl LineDecision {
    pub const fn keeps(self) -> bool {
        matches!(self, Self::Structural | Self::Kept(_))
    }
}

/// Decide what happens to one line.
///
/// Header checks are prefix matches; the closing tag may appear anywhere, but
/// only on lines that are not path lines.
pub fn decide(line: &str) -> LineDecision {
    if line.starts_with("<?xml") || line.starts_with("<svg") {
        return LineDecision::Structural;
    }

    if line.contains("<path") && line.contains("fill=") {
        return match classify_fill(line) {
            Some(_) if is_light(line) => LineDecision::Light,
            Some(class) => LineDecision::Kept(class),
            None => LineDecision::Unmatched,
        };
    }

    if line.contains("</svg>") {
        LineDecision::Structural
    } else {
        LineDecision::Dropped
    }
}

/// Result of filtering one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Filtered document, lines joined with `\n`.
    pub content: String,
    pub structural: usize,
    pub green: usize,
    pub blue: usize,
    /// Every line that was not kept, including blank ones.
    pub dropped: usize,
}

impl FilterReport {
    pub const fn kept_paths(&self) -> usize {
        self.green + self.blue
    }
}

/// Filter an SVG document, keeping structural lines and main green/blue paths.
///
/// `\r\n` and lone `\r` count as line breaks, like `\n`. Output lines are
/// joined with `\n` and no trailing newline is appended, so a document ending
/// in a line break loses it.
pub fn filter_svg(content: &str) -> FilterReport {
    let content = normalize_newlines(content);
    let mut report = FilterReport::default();
    let mut kept = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        let decision = decide(line);
        debug!("filter"; "line {}: {:?}", idx + 1, decision);

        match decision {
            LineDecision::Structural => report.structural += 1,
            LineDecision::Kept(ColorClass::Green) => report.green += 1,
            LineDecision::Kept(ColorClass::Blue) => report.blue += 1,
            LineDecision::Light | LineDecision::Unmatched | LineDecision::Dropped => {
                report.dropped += 1;
            }
        }
        if decision.keeps() {
            kept.push(line);
        }
    }

    report.content = kept.join("\n");
    report
}

/// Rewrite `\r\n` and lone `\r` as `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Filter `path` and overwrite it with the result, unless `dry_run` is set.
///
/// The rewrite is destructive: no backup is kept.
pub fn filter_svg_file(path: &Path, dry_run: bool) -> Result<FilterReport, FilterError> {
    let content = fs::read_to_string(path).map_err(|e| FilterError::Read(path.to_path_buf(), e))?;
    let report = filter_svg(&content);

    if !dry_run {
        fs::write(path, &report.content).map_err(|e| FilterError::Write(path.to_path_buf(), e))?;
    }
    Ok(report)
}
