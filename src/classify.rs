use serde::{Deserialize, Serialize};

/// Severity of one content line, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal,
    Warning,
    /// Underfull/overfull box complaints; layout noise, not real warnings.
    Layout,
    Plain,
}

/// Map a trimmed content line to a severity. Ordered first-match rules;
/// pure function of the text.
pub fn classify(text: &str) -> Severity {
    let lowered = text.to_lowercase();

    if text.starts_with('!') {
        return Severity::Fatal;
    }
    if lowered.contains("error") || lowered.contains("unsuccessful") || lowered.contains("fatal") {
        return Severity::Fatal;
    }
    if text.starts_with("LaTeX Warning:") {
        return Severity::Warning;
    }
    if lowered.contains("warning") || lowered.contains("not available") {
        return Severity::Warning;
    }
    if text.starts_with("Underfull") || text.starts_with("Overfull") {
        return Severity::Layout;
    }
    Severity::Plain
}
