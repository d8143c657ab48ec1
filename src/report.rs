use crate::classify::{classify, Severity};
use crate::scanner::Scope;
use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One abstract output operation. The core decides depth and category;
/// rendering (colors, indentation glyphs) belongs to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Header {
        depth: usize,
        label: String,
    },
    Content {
        depth: usize,
        severity: Severity,
        text: String,
    },
}

/// Consumer of output records.
pub trait Sink {
    fn record(&mut self, record: Record);
}

/// Capture sink for tests.
impl Sink for Vec<Record> {
    fn record(&mut self, record: Record) {
        self.push(record);
    }
}

/// Styled, indented terminal rendering on stdout.
pub struct TerminalSink;

impl Sink for TerminalSink {
    fn record(&mut self, record: Record) {
        match record {
            Record::Header { depth, label } => {
                println!();
                println!("{}{}", "\t".repeat(depth), label.cyan());
            }
            Record::Content {
                depth,
                severity,
                text,
            } => {
                let indent = "\t".repeat(depth);
                match severity {
                    Severity::Fatal => println!("{indent}{}", text.red()),
                    Severity::Warning => println!("{indent}{}", text.yellow()),
                    Severity::Layout => println!("{indent}{}", text.green()),
                    Severity::Plain => println!("{indent}{text}"),
                }
            }
        }
    }
}

/// Machine-readable rendering: one JSON object per record per line.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn record(&mut self, record: Record) {
        if let Ok(line) = serde_json::to_string(&record) {
            let _ = writeln!(self.out, "{line}");
        }
    }
}

/// Lazily prints a scope's header the first time content is emitted
/// inside it, then the indented, classified content lines.
pub struct Reporter<S: Sink> {
    sink: S,
    header_pending: bool,
}

impl<S: Sink> Reporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            header_pending: true,
        }
    }

    /// The stack changed (push or pop); the next content line owes a header.
    pub fn scope_changed(&mut self) {
        self.header_pending = true;
    }

    /// Emit one content line at the current depth. Empty text is a no-op,
    /// so scopes without content never print a header.
    pub fn emit(&mut self, stack: &mut [Scope], text: &str) {
        if text.is_empty() {
            return;
        }
        self.header_if_pending(stack);
        self.sink.record(Record::Content {
            depth: stack.len(),
            severity: classify(text),
            text: text.to_string(),
        });
    }

    /// Emit a parse anomaly as a visible warning line.
    pub fn warn(&mut self, stack: &mut [Scope], text: &str) {
        self.header_if_pending(stack);
        self.sink.record(Record::Content {
            depth: stack.len(),
            severity: Severity::Warning,
            text: text.to_string(),
        });
    }

    fn header_if_pending(&mut self, stack: &mut [Scope]) {
        if !self.header_pending {
            return;
        }
        let depth = stack.len();
        if let Some(top) = stack.last_mut() {
            // At most one header per scope instance, even when the stack
            // churns back to a scope that already announced itself.
            if !top.header_shown {
                self.sink.record(Record::Header {
                    depth: depth - 1,
                    label: top.label(),
                });
                top.header_shown = true;
            }
            self.header_pending = false;
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
