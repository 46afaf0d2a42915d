use std::fmt;

/// A fatal evaluation diagnostic.
///
/// Every failure in the codec, the parameter stream, the dataset loader,
/// or the evaluator is one of four kinds; all of them abort the run that
/// detects them. There is no retry path: the computation is pure, so a
/// retry on the same input reproduces the same failure.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based line (or CSV row) in the offending input file, when known.
    pub line: Option<usize>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed numeric text in a parameter or dataset file.
    Parse,
    /// A field element is not less than the modulus.
    Range,
    /// A parameter stream has the wrong number of entries.
    Format,
    /// Vector or matrix dimensions disagree with declared counts.
    Shape,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse error",
            ErrorKind::Range => "range error",
            ErrorKind::Format => "format error",
            ErrorKind::Shape => "shape error",
        }
    }
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
            line: None,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn parse(message: String) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn range(message: String) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    pub fn format(message: String) -> Self {
        Self::new(ErrorKind::Format, message)
    }

    pub fn shape(message: String) -> Self {
        Self::new(ErrorKind::Shape, message)
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Render the diagnostic to stderr using ariadne, labelling the
    /// offending line of `source`.
    pub fn render(&self, filename: &str, source: &str) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        let (start, end) = match self.line {
            Some(line) => line_span(source, line),
            None => (0, 0),
        };

        let mut report = Report::build(ReportKind::Error, filename, start)
            .with_message(format!("{}: {}", self.kind.as_str(), self.message))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report
            .finish()
            .eprint((filename, Source::from(source)))
            .unwrap();
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {} (line {})", self.kind.as_str(), self.message, line),
            None => write!(f, "{}: {}", self.kind.as_str(), self.message),
        }
    }
}

/// Byte span of 1-based line `line` in `source` (without the newline).
fn line_span(source: &str, line: usize) -> (usize, usize) {
    let mut offset = 0;
    for (idx, text) in source.lines().enumerate() {
        if idx + 1 == line {
            return (offset, offset + text.len());
        }
        // lines() strips the terminator; step past it.
        offset += text.len() + 1;
    }
    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constructors() {
        assert_eq!(Diagnostic::parse("bad".into()).kind, ErrorKind::Parse);
        assert_eq!(Diagnostic::range("big".into()).kind, ErrorKind::Range);
        assert_eq!(Diagnostic::format("count".into()).kind, ErrorKind::Format);
        assert_eq!(Diagnostic::shape("len".into()).kind, ErrorKind::Shape);
    }

    #[test]
    fn builder_methods() {
        let d = Diagnostic::parse("not a number".into())
            .at_line(3)
            .with_note("expected hex or decimal".into())
            .with_help("check the parameter file".into());
        assert_eq!(d.line, Some(3));
        assert_eq!(d.notes.len(), 1);
        assert!(d.help.is_some());
    }

    #[test]
    fn display_includes_line() {
        let d = Diagnostic::range("field element too large".into()).at_line(7);
        assert_eq!(
            d.to_string(),
            "range error: field element too large (line 7)"
        );
    }

    #[test]
    fn line_span_finds_lines() {
        let source = "one\ntwo\nthree\n";
        assert_eq!(line_span(source, 1), (0, 3));
        assert_eq!(line_span(source, 2), (4, 7));
        assert_eq!(line_span(source, 3), (8, 13));
        assert_eq!(line_span(source, 9), (0, 0));
    }
}
