use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A piece of text the host places somewhere on screen.
///
/// The core only ever replaces the text; where and when it is drawn is up
/// to the host. A region with a fixed width renders padded or truncated to
/// exactly that many characters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    text: String,
    align: Align,
    width: Option<usize>,
}

impl TextRegion {
    pub fn new(align: Align) -> Self {
        Self {
            text: String::new(),
            align,
            width: None,
        }
    }

    pub fn fixed(width: usize, align: Align) -> Self {
        Self {
            width: Some(width),
            ..Self::new(align)
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replace the text. Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Lay the text out in its fixed width, or in `available` columns when
    /// the region has none.
    pub fn render(&self, available: usize) -> String {
        let width = self.width.unwrap_or(available);
        let text: String = self.text.chars().take(width).collect();
        match self.align {
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_pads_and_truncates() {
        let region = TextRegion::fixed(8, Align::Left).with_text("Overall");
        assert_eq!(region.render(80), "Overall ");

        let region = TextRegion::fixed(4, Align::Left).with_text("Current File");
        assert_eq!(region.render(80), "Curr");

        let region = TextRegion::fixed(0, Align::Left).with_text("hidden");
        assert_eq!(region.render(80), "");
    }

    #[test]
    fn test_flexible_width_uses_available() {
        let region = TextRegion::new(Align::Right).with_text("0:00:42");
        assert_eq!(region.render(10), "   0:00:42");
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut region = TextRegion::new(Align::Left);
        assert!(region.set_text("1.00 kB/s"));
        assert!(!region.set_text("1.00 kB/s"));
        assert_eq!(region.text(), "1.00 kB/s");
    }
}
