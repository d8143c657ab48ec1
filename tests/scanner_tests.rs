use std::io::Cursor;

use texsane::classify::{classify, Severity};
use texsane::scanner::{
    delimiter_delta, find_true_closer, open_scope, Reassembler, Scope, ScopeKind,
};

fn reassemble_all(input: &str, wrap_column: usize) -> Vec<String> {
    let mut lines = Reassembler::with_wrap_column(Cursor::new(input), wrap_column);
    let mut out = Vec::new();
    while let Some(line) = lines.next_logical().expect("read failed") {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod reassembler_tests {
    use super::*;

    #[test]
    fn test_short_lines_pass_through() {
        let out = reassemble_all("first\nsecond\n", 79);
        assert_eq!(out, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_line_at_wrap_column_is_joined() {
        let long = "a".repeat(79);
        let input = format!("{}\nrest\nshort\n", long);
        let out = reassemble_all(&input, 79);
        assert_eq!(out.len(), 2, "wrapped line should merge with the next");
        assert_eq!(out[0], format!("{}rest", long));
        assert_eq!(out[1], "short");
    }

    #[test]
    fn test_line_below_wrap_column_is_never_joined() {
        let almost = "a".repeat(78);
        let input = format!("{}\nnext\n", almost);
        let out = reassemble_all(&input, 79);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], almost);
    }

    #[test]
    fn test_run_of_wrapped_lines_joins_until_short_one() {
        let a = "a".repeat(79);
        let b = "b".repeat(80);
        let input = format!("{}\n{}\ntail\n", a, b);
        let out = reassemble_all(&input, 79);
        assert_eq!(out, vec![format!("{}{}tail", a, b)]);
    }

    #[test]
    fn test_crlf_framing_is_stripped_before_joining() {
        let long = "x".repeat(79);
        let input = format!("{}\r\nend\r\n", long);
        let out = reassemble_all(&input, 79);
        assert_eq!(out, vec![format!("{}end", long)]);
    }

    #[test]
    fn test_end_of_stream_mid_join_returns_accumulated_text() {
        let long = "y".repeat(79);
        let out = reassemble_all(&long, 79);
        assert_eq!(out, vec![long]);
    }

    #[test]
    fn test_blank_physical_line_yields_empty_logical_line() {
        let out = reassemble_all("\ncontent\n", 79);
        assert_eq!(out, vec!["".to_string(), "content".to_string()]);
    }

    #[test]
    fn test_custom_wrap_column() {
        let out = reassemble_all("0123456789\nabc\n", 10);
        assert_eq!(out, vec!["0123456789abc".to_string()]);
    }
}

#[cfg(test)]
mod scope_tests {
    use super::*;

    #[test]
    fn test_file_scope_unquoted_name() {
        let (scope, used) = open_scope("(main.tex rest").expect("should open");
        assert_eq!(scope.kind, ScopeKind::File);
        assert_eq!(scope.name, "main.tex");
        assert_eq!(used, "(main.tex".len());
    }

    #[test]
    fn test_file_scope_name_stops_at_closer() {
        let (scope, used) = open_scope("(empty.sty)").expect("should open");
        assert_eq!(scope.name, "empty.sty");
        assert_eq!(used, "(empty.sty".len());
    }

    #[test]
    fn test_file_scope_name_stops_at_nested_opener() {
        let (scope, used) = open_scope("(a(b)c)").expect("should open");
        assert_eq!(scope.name, "a");
        assert_eq!(used, 2);
    }

    #[test]
    fn test_file_scope_quoted_name_stored_without_quotes() {
        let (scope, used) = open_scope("(\"my file.tex\") tail").expect("should open");
        assert_eq!(scope.name, "my file.tex");
        assert_eq!(used, "(\"my file.tex\"".len());
    }

    #[test]
    fn test_file_scope_unterminated_quote_takes_rest() {
        let (scope, _) = open_scope("(\"broken name").expect("should open");
        assert_eq!(scope.name, "broken name");
    }

    #[test]
    fn test_page_scope_digits() {
        let (scope, used) = open_scope("[12]").expect("should open");
        assert_eq!(scope.kind, ScopeKind::Page);
        assert_eq!(scope.name, "12");
        assert_eq!(used, 3);
    }

    #[test]
    fn test_page_scope_name_may_be_empty() {
        let (scope, used) = open_scope("[]").expect("should open");
        assert_eq!(scope.name, "");
        assert_eq!(used, 1);
    }

    #[test]
    fn test_resource_scope_with_use_prefix() {
        let (scope, used) = open_scope("<use img.png>").expect("should open");
        assert_eq!(scope.kind, ScopeKind::Resource);
        assert_eq!(scope.name, "img.png");
        assert_eq!(used, "<use img.png".len());
    }

    #[test]
    fn test_resource_scope_plain_name() {
        let (scope, _) = open_scope("</fonts/cmr10.pfb>").expect("should open");
        assert_eq!(scope.name, "/fonts/cmr10.pfb");
    }

    #[test]
    fn test_plain_text_opens_nothing() {
        assert!(open_scope("plain text").is_none());
        assert!(open_scope(")").is_none());
    }

    #[test]
    fn test_labels() {
        let (file, _) = open_scope("(main.tex").expect("file");
        let (page, _) = open_scope("[3]").expect("page");
        let (res, _) = open_scope("<use a.png>").expect("resource");
        assert_eq!(file.label(), "File: main.tex");
        assert_eq!(page.label(), "Page: 3");
        assert_eq!(res.label(), "Resource: a.png");
    }
}

#[cfg(test)]
mod delimiter_tests {
    use super::*;

    #[test]
    fn test_true_closer_skips_inline_nested_pairs() {
        // Two same-type openers before the true closer: the scanner must
        // return the third closer, not the first.
        let mut scope = Scope::new(ScopeKind::File, "a".to_string());
        let fragment = "xx(1)yy(2)zz)";
        let offset = find_true_closer(&mut scope, fragment).expect("closer expected");
        assert_eq!(offset, fragment.len() - 1);
    }

    #[test]
    fn test_counter_persists_across_fragments() {
        let mut scope = Scope::new(ScopeKind::File, "a".to_string());
        assert_eq!(find_true_closer(&mut scope, "foo (bar"), None);
        // The unmatched opener from the previous line absorbs the first
        // closer here; the second one is the real one.
        assert_eq!(find_true_closer(&mut scope, ") baz)"), Some(5));
    }

    #[test]
    fn test_no_delimiters_returns_none() {
        let mut scope = Scope::new(ScopeKind::Page, "1".to_string());
        assert_eq!(find_true_closer(&mut scope, "no brackets here"), None);
    }

    #[test]
    fn test_scanner_only_sees_own_delimiter_pair() {
        let mut scope = Scope::new(ScopeKind::Page, "1".to_string());
        assert_eq!(find_true_closer(&mut scope, "(paren) ]"), Some(8));
    }

    #[test]
    fn test_delimiter_delta() {
        assert_eq!(delimiter_delta(ScopeKind::File, "a(b(c)"), 1);
        assert_eq!(delimiter_delta(ScopeKind::File, "(x)"), 0);
        assert_eq!(delimiter_delta(ScopeKind::File, ")))"), -3);
        assert_eq!(delimiter_delta(ScopeKind::Resource, "<<>"), 1);
    }
}

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[test]
    fn test_bang_prefix_is_fatal() {
        assert_eq!(classify("! Undefined control sequence."), Severity::Fatal);
    }

    #[test]
    fn test_error_substrings_are_fatal() {
        assert_eq!(classify("LaTeX Error: missing item"), Severity::Fatal);
        assert_eq!(classify("Emergency stop: Fatal condition"), Severity::Fatal);
        assert_eq!(classify("run was unsuccessful"), Severity::Fatal);
    }

    #[test]
    fn test_latex_warning_prefix() {
        assert_eq!(
            classify("LaTeX Warning: Reference `fig' undefined"),
            Severity::Warning
        );
    }

    #[test]
    fn test_warning_substrings() {
        assert_eq!(
            classify("Package hyperref Warning: token ignored"),
            Severity::Warning
        );
        assert_eq!(
            classify("Font shape `OT1/cmr/bx/sc' not available"),
            Severity::Warning
        );
    }

    #[test]
    fn test_box_complaints_are_layout() {
        assert_eq!(
            classify("Overfull \\hbox (1.0pt too wide)"),
            Severity::Layout
        );
        assert_eq!(
            classify("Underfull \\vbox (badness 10000)"),
            Severity::Layout
        );
    }

    #[test]
    fn test_everything_else_is_plain() {
        assert_eq!(classify("This is pdfTeX, Version 3.14"), Severity::Plain);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let samples = [
            "! boom",
            "LaTeX Warning: x",
            "Overfull \\hbox",
            "ordinary text",
        ];
        for text in samples {
            assert_eq!(classify(text), classify(text));
        }
    }
}
