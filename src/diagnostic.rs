/// A byte range in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn offset(self, base: usize) -> Span {
        Span {
            start: self.start + base,
            end: self.end + base,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A message attached to a span of the input
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error report ready to be rendered against its source
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<String>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(format!("note: {}", note.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.notes.push(format!("help: {}", help.into()));
        self
    }
}

/// Computes 1-based line and column from a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

fn line_content(source: &str, line_num: usize) -> &str {
    source
        .split('\n')
        .nth(line_num - 1)
        .map(|line| line.trim_end_matches('\r'))
        .unwrap_or("")
}

/// Renders diagnostics in a rustc-like layout
pub struct DiagnosticRenderer<'a> {
    source: &'a str,
    file_name: &'a str,
    use_color: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(source: &'a str, file_name: &'a str, use_color: bool) -> Self {
        Self {
            source,
            file_name,
            use_color,
        }
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        // error[E0101]: message
        match &diagnostic.code {
            Some(code) => output.push_str(&format!(
                "{}[{}]: {}\n",
                self.style_red_bold("error"),
                code,
                self.style_bold(&diagnostic.message)
            )),
            None => output.push_str(&format!(
                "{}: {}\n",
                self.style_red_bold("error"),
                self.style_bold(&diagnostic.message)
            )),
        }

        if let Some(label) = diagnostic.labels.first() {
            let (line, col) = line_col(self.source, label.span.start);
            let width = line.to_string().len();
            let gutter = " ".repeat(width + 1);

            output.push_str(&format!(
                "{}{} {}:{}:{}\n",
                " ".repeat(width),
                self.style_blue("-->"),
                self.file_name,
                line,
                col
            ));
            output.push_str(&format!("{} {}\n", gutter, self.style_blue("|")));
            output.push_str(&format!(
                "{} {} {}\n",
                self.style_blue(&format!("{:>width$}", line, width = width + 1)),
                self.style_blue("|"),
                line_content(self.source, line)
            ));

            for label in &diagnostic.labels {
                self.render_underline(&mut output, label, line, &gutter);
            }

            output.push_str(&format!("{} {}\n", gutter, self.style_blue("|")));
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("  {} {}\n", self.style_blue("="), note));
        }

        output
    }

    fn render_underline(&self, output: &mut String, label: &Label, line: usize, gutter: &str) {
        let (label_line, start_col) = line_col(self.source, label.span.start);
        if label_line != line {
            return;
        }

        // Empty spans (end of input) still get one caret
        let width = if label.span.is_empty() {
            1
        } else {
            self.source
                .get(label.span.start..label.span.end)
                .map(|text| text.chars().count())
                .unwrap_or(1)
        };

        let mut underline = " ".repeat(start_col - 1);
        underline.push_str(&self.style_red(&"^".repeat(width)));
        if !label.message.is_empty() {
            underline.push(' ');
            underline.push_str(&self.style_red(&label.message));
        }

        output.push_str(&format!("{} {} {}\n", gutter, self.style_blue("|"), underline));
    }

    fn style_red(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[31m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn style_red_bold(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[1;31m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn style_blue(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[34m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn style_bold(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[1m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }
}

/// Render a batch of diagnostics followed by an abort summary
pub fn render_diagnostics(source: &str, file_name: &str, diagnostics: &[Diagnostic], use_color: bool) -> String {
    let renderer = DiagnosticRenderer::new(source, file_name, use_color);
    let mut output = String::new();

    for diagnostic in diagnostics {
        output.push_str(&renderer.render(diagnostic));
        output.push('\n');
    }

    let error_count = diagnostics.len();
    if error_count > 0 {
        output.push_str(&format!(
            "error: aborting due to {} error{}\n",
            error_count,
            if error_count == 1 { "" } else { "s" }
        ));
    }

    output
}
