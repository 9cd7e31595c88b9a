use std::io::{self, Write};

pub const DIVIDER: &str = "---------------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Divider,
    Text(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn divider(&mut self) {
        self.blocks.push(OutputBlock::Divider);
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    /// Like `say`, but keeps blank lines (file contents are echoed as-is).
    pub fn verbatim(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn extend(&mut self, other: Output) {
        self.blocks.extend(other.blocks);
    }

    /// Every block ends up on its own line.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for block in &self.blocks {
            match block {
                OutputBlock::Divider => writeln!(w, "{DIVIDER}")?,
                OutputBlock::Text(line) => writeln!(w, "{line}")?,
            }
        }
        Ok(())
    }

    /// Plain-text rendering, mostly for assertions.
    pub fn text(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_skips_blank_lines_but_verbatim_keeps_them() {
        let mut out = Output::new();
        out.say("   ");
        out.say("hello");
        out.verbatim("");
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("hello".to_string()),
                OutputBlock::Text(String::new()),
            ]
        );
    }

    #[test]
    fn text_puts_each_block_on_a_line() {
        let mut out = Output::new();
        out.divider();
        out.say("a");
        assert_eq!(out.text(), format!("{DIVIDER}\na\n"));
    }
}
