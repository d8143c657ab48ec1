use super::scope::{Scope, ScopeKind};

/// Locate the true closer of `scope` within a fragment.
///
/// Single left-to-right pass: the scope's own opener increments its
/// nesting counter, a closer with a positive counter decrements it
/// (inline same-type nesting, absorbed rather than treated as structure),
/// and a closer with a zero counter is the true closer. The counter lives
/// on the scope so unbalanced openers carry over to later lines.
pub fn find_true_closer(scope: &mut Scope, fragment: &str) -> Option<usize> {
    let opener = scope.kind.opener();
    let closer = scope.kind.closer();

    for (i, ch) in fragment.char_indices() {
        if ch == opener {
            scope.nesting += 1;
        } else if ch == closer {
            if scope.nesting == 0 {
                return Some(i);
            }
            scope.nesting -= 1;
        }
    }
    None
}

/// Net opener-minus-closer count for a scope kind over a span of text.
pub fn delimiter_delta(kind: ScopeKind, text: &str) -> i32 {
    let opener = kind.opener();
    let closer = kind.closer();
    let mut delta = 0i32;

    for ch in text.chars() {
        if ch == opener {
            delta += 1;
        } else if ch == closer {
            delta -= 1;
        }
    }
    delta
}
