use crate::util::position::{Source, Span};

/// Draws the source lines covered by `span` with `^` markers under the
/// offending columns.
///
/// Each covered line is printed followed by a marker line. On the first line
/// the markers start at the span's start column; on the last line they stop
/// at its end column; lines in between are marked in full. A zero-width span
/// still gets one marker. Tabs are removed from the output.
///
/// # Example
/// ```
/// use soch::{
///     error::pointer::point_error,
///     util::position::{Position, Source, Span},
/// };
///
/// let source = Source::new("demo", "10 / 0");
/// let span = Span::new(Position::new(5, 0, 5), Position::new(6, 0, 6));
///
/// assert_eq!(point_error(&source, span), "10 / 0\n     ^");
/// ```
#[must_use]
pub fn point_error(source: &Source, span: Span) -> String {
    let first = span.start.line;
    let last = span.end.line.max(first);

    let mut rendered = String::new();
    for line_no in first..=last {
        let line = source.line(line_no);
        let col_start = if line_no == first { span.start.column } else { 0 };
        let col_end = if line_no == last {
            span.end.column
        } else {
            line.chars().count()
        };
        let markers = col_end.saturating_sub(col_start).max(1);

        if line_no != first {
            rendered.push('\n');
        }
        rendered.push_str(line);
        rendered.push('\n');
        rendered.push_str(&" ".repeat(col_start));
        rendered.push_str(&"^".repeat(markers));
    }

    rendered.replace('\t', "")
}

/// Formats the report shared by lexical and syntax errors.
pub(crate) fn render_located(source: &Source, span: Span, name: &str, details: &str) -> String {
    format!("Error in file {}, line {}\n\n{}\n\n{name}: {details}",
            source.name(),
            span.start.line + 1,
            point_error(source, span))
}
