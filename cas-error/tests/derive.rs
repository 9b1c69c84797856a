use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::{Error, EXPR};

/// A unit error with a single label.
#[derive(Debug, ErrorKind)]
#[error(message = "unexpected end of file", labels = ["add something here"])]
struct Eof;

/// An error whose text depends on its fields.
#[derive(Debug, ErrorKind)]
#[error(
    message = format!("cannot divide by `{}`", divisor),
    labels = ["this side".to_string(), format!("this {}", "divisor".fg(EXPR))],
    help = "divide both sides instead",
    note = format!("{} was divided", side),
)]
struct Lopsided {
    divisor: String,
    side: &'static str,
}

/// Renders the report of `err` for the source `src` with colors stripped.
fn render(err: &Error, src: &str) -> String {
    let mut out = Vec::new();
    err.write_report("input", src, &mut out).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
}

#[test]
fn unit_struct_report() {
    let src = "x + 2 =";
    let err = Error::new(vec![6..7], Eof);
    let report = render(&err, src);

    assert!(report.contains("unexpected end of file"));
    assert!(report.contains("add something here"));
}

#[test]
fn named_fields_are_in_scope() {
    let src = "2x/2 = 10";
    let err = Error::new(vec![0..4, 3..4], Lopsided {
        divisor: "2".to_string(),
        side: "the left side",
    });
    let report = render(&err, src);

    assert!(report.contains("cannot divide by `2`"));
    assert!(report.contains("this side"));
    assert!(report.contains("this divisor"));
    assert!(report.contains("divide both sides instead"));
    assert!(report.contains("the left side was divided"));
}

#[test]
fn whole_source_span() {
    let src = "x + 1";
    let err = Error::whole(src, Eof);
    assert_eq!(err.spans, vec![0..5]);
}
