use super::delimiter::{delimiter_delta, find_true_closer};
use super::reassembler::Reassembler;
use super::scope::{open_scope, Scope};
use crate::report::{Reporter, Sink};
use std::io::{self, BufRead};

/// A file opening the transcript garbled past recognition shows up as a
/// relative-path reference buried in free text.
const LOST_SCOPE_PATTERN: &str = "(./";

/// Per-stream parser state: the stack of open scopes and the reporter.
/// Two independent transcripts need two drivers; nothing is shared.
pub struct Driver<S: Sink> {
    stack: Vec<Scope>,
    reporter: Reporter<S>,
}

impl<S: Sink> Driver<S> {
    pub fn new(sink: S) -> Self {
        Self {
            stack: Vec::new(),
            reporter: Reporter::new(sink),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn into_sink(self) -> S {
        self.reporter.into_sink()
    }

    /// Pull logical lines until the stream ends, then discard whatever
    /// scopes the transcript left unterminated.
    pub fn run<R: BufRead>(&mut self, lines: &mut Reassembler<R>) -> io::Result<()> {
        while let Some(line) = lines.next_logical()? {
            self.consume_line(&line);
        }
        self.finish();
        Ok(())
    }

    /// Resolve one logical line: scope openings and closings at fragment
    /// starts, content split at the innermost scope's true closer, and
    /// lost-scope recovery. Iterative cursor advance; every pass consumes
    /// at least one character.
    pub fn consume_line(&mut self, line: &str) {
        let mut rest = line;

        loop {
            let fragment = rest.trim_start();
            if fragment.is_empty() {
                return;
            }

            // New scope at the fragment start.
            if let Some((scope, used)) = open_scope(fragment) {
                self.stack.push(scope);
                self.reporter.scope_changed();
                rest = &fragment[used..];
                continue;
            }

            // Any closing delimiter pops the innermost scope. The grammar
            // mismatches pairs often enough that enforcing kinds would
            // only cascade; an empty stack is a warning, not an error.
            if fragment.starts_with([')', ']', '>']) {
                if self.stack.pop().is_none() {
                    self.reporter.warn(
                        &mut self.stack,
                        "unmatched closing delimiter with no open scope",
                    );
                }
                self.reporter.scope_changed();
                rest = &fragment[1..];
                continue;
            }

            // Content up to the innermost scope's true closer.
            let closer_at = match self.stack.last_mut() {
                Some(top) => find_true_closer(top, fragment),
                None => None,
            };
            if let Some(p) = closer_at {
                self.reporter.emit(&mut self.stack, fragment[..p].trim());
                rest = &fragment[p..];
                continue;
            }

            // Lost-scope recovery: split at a relative-path opener that
            // never hit a recognition point.
            if let Some(p) = fragment.find(LOST_SCOPE_PATTERN) {
                if let Some(top) = self.stack.last_mut() {
                    // The failed closer scan absorbed the openers from
                    // `p` on; give them back before they are reparsed as
                    // a real scope.
                    let delta = delimiter_delta(top.kind, &fragment[p..]);
                    top.give_back(delta);
                }
                self.reporter.emit(&mut self.stack, fragment[..p].trim());
                rest = &fragment[p..];
                continue;
            }

            // Plain content, the whole fragment.
            self.reporter.emit(&mut self.stack, fragment.trim_end());
            return;
        }
    }

    /// An unterminated transcript leaves scopes open; report once and
    /// drop them.
    pub fn finish(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        let left_open = self.stack.len();
        self.stack.clear();
        self.reporter.warn(
            &mut self.stack,
            &format!("{} scope(s) left open at end of transcript", left_open),
        );
    }
}
