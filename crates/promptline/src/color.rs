/// Foreground/background pair from the 256-color terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

impl ColorPair {
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self { fg, bg }
    }

    /// Wrap `text` in 256-color escape sequences, padded with a single
    /// space on each side and followed by a reset.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[38;5;{}m\x1b[48;5;{}m {} \x1b[0m", self.fg, self.bg, text)
    }
}
