//! Line-oriented text building for generated source files

/// Prefix every line of `text` with `width` spaces
pub fn reindent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered list of output lines, joined with `\n` on [`SourceBuilder::finish`]
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    lines: Vec<String>,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a single line verbatim
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    /// Push an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Push every line of `text`, each prefixed with `width` spaces
    pub fn indented(&mut self, width: usize, text: &str) -> &mut Self {
        let pad = " ".repeat(width);
        for line in text.lines() {
            self.lines.push(format!("{}{}", pad, line));
        }
        self
    }

    /// Push `text` with only its first line prefixed; continuation lines
    /// already carry their own indentation (multi-line attribute values)
    pub fn hanging(&mut self, width: usize, text: &str) -> &mut Self {
        let mut lines = text.lines();
        if let Some(first) = lines.next() {
            self.lines.push(format!("{}{}", " ".repeat(width), first));
        }
        self.lines.extend(lines.map(str::to_string));
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines with a trailing newline
    pub fn finish(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindent_prefixes_every_line() {
        assert_eq!(reindent("a\n  b", 2), "  a\n    b");
    }

    #[test]
    fn test_reindent_empty_text_stays_empty() {
        assert_eq!(reindent("", 4), "");
    }

    #[test]
    fn test_hanging_only_pads_first_line() {
        let mut b = SourceBuilder::new();
        b.hanging(4, "data={[\n    1\n    ]}");
        assert_eq!(b.finish(), "    data={[\n    1\n    ]}\n");
    }

    #[test]
    fn test_indented_pads_all_lines() {
        let mut b = SourceBuilder::new();
        b.line("(").indented(2, "x\ny").line(")");
        assert_eq!(b.len(), 4);
        assert_eq!(b.finish(), "(\n  x\n  y\n)\n");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let mut b = SourceBuilder::new();
        b.line("a").blank().line("b");
        assert_eq!(b.finish(), "a\n\nb\n");
    }
}
