use std::fmt::Display;

const INDENT: &str = "    ";

pub struct StringBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl StringBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Joins every line and terminates the result with a newline.
    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn push<T: Display>(&mut self, text: T) {
        let text = text.to_string();

        for line in text.split('\n') {
            if line.is_empty() {
                self.blank();
            } else {
                self.lines
                    .push(format!("{}{line}", INDENT.repeat(self.depth)));
            }
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth -= 1;
    }

    /// Pushes `<header> {`, the body one level deeper, then `}`.
    pub fn block(&mut self, header: impl Display, body: impl FnOnce(&mut Self)) {
        self.push(format!("{header} {{"));
        self.indent();
        body(self);
        self.dedent();
        self.push("}");
    }
}
