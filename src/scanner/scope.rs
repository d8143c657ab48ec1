/// Kind of lexical region the transcript can nest: a file inclusion,
/// a page being shipped out, or a resource (font/image) being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    File,
    Page,
    Resource,
}

impl ScopeKind {
    pub fn opener(self) -> char {
        match self {
            ScopeKind::File => '(',
            ScopeKind::Page => '[',
            ScopeKind::Resource => '<',
        }
    }

    pub fn closer(self) -> char {
        match self {
            ScopeKind::File => ')',
            ScopeKind::Page => ']',
            ScopeKind::Resource => '>',
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ScopeKind::File => "File",
            ScopeKind::Page => "Page",
            ScopeKind::Resource => "Resource",
        }
    }
}

/// One active scope on the stack: its kind, the name extracted at entry,
/// the inline-nesting counter the delimiter scanner maintains, and whether
/// its header has already been printed.
#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    pub name: String,
    pub(crate) nesting: u32,
    pub(crate) header_shown: bool,
}

impl Scope {
    pub fn new(kind: ScopeKind, name: String) -> Self {
        Self {
            kind,
            name,
            nesting: 0,
            header_shown: false,
        }
    }

    pub fn label(&self) -> String {
        format!("{}: {}", self.kind.tag(), self.name)
    }

    /// Undo counter increments a failed closer scan absorbed from text
    /// that is about to be reparsed as a real scope opening.
    pub(crate) fn give_back(&mut self, delta: i32) {
        if delta > 0 {
            self.nesting = self.nesting.saturating_sub(delta as u32);
        }
    }
}

/// Recognize a scope opening at the start of a left-trimmed fragment.
/// Returns the new scope and the byte length consumed (opener plus name,
/// plus the `use ` prefix for resources).
pub fn open_scope(fragment: &str) -> Option<(Scope, usize)> {
    if let Some(rest) = fragment.strip_prefix('(') {
        let (name, used) = token_name(rest, '(', ')');
        return Some((Scope::new(ScopeKind::File, name), 1 + used));
    }

    if let Some(rest) = fragment.strip_prefix('[') {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        return Some((Scope::new(ScopeKind::Page, rest[..end].to_string()), 1 + end));
    }

    if let Some(rest) = fragment.strip_prefix('<') {
        // pdfTeX announces image reuse as `<use name>`; the prefix is part
        // of the match but not of the name.
        let after_use = rest.strip_prefix("use ").unwrap_or(rest);
        let prefix = 1 + (rest.len() - after_use.len());
        let (name, used) = token_name(after_use, '<', '>');
        return Some((Scope::new(ScopeKind::Resource, name), prefix + used));
    }

    None
}

/// Extract a scope name: a quoted string (quotes consumed, not stored) or
/// an unquoted token ending at whitespace or either delimiter of the pair.
fn token_name(text: &str, opener: char, closer: char) -> (String, usize) {
    if let Some(quoted) = text.strip_prefix('"') {
        return match quoted.find('"') {
            Some(end) => (quoted[..end].to_string(), end + 2),
            None => (quoted.to_string(), text.len()),
        };
    }

    let end = text
        .find(|c: char| c.is_whitespace() || c == closer || c == opener)
        .unwrap_or(text.len());
    (text[..end].to_string(), end)
}
