//! Fixed-width plain-text layout for receipts

/// Narrowest width a receipt is laid out at
pub const MIN_WIDTH: usize = 16;

/// Display width of `s`, one column per char
fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Plain-text receipt builder
///
/// Accumulates lines of at most `width` columns where possible; a left/right
/// pair that does not fit is written with a single space between.
pub struct TextReceiptBuilder {
    buf: String,
    width: usize,
}

impl TextReceiptBuilder {
    /// Create a builder for the given paper width in characters
    ///
    /// Common widths: 32 (58mm), 48 (80mm)
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Print text centered in the line width
    pub fn text_center(&mut self, s: &str) -> &mut Self {
        let pad = self.width.saturating_sub(text_width(s)) / 2;
        self.write(&" ".repeat(pad));
        self.write_line(s)
    }

    /// Print left and right text on the same line
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = text_width(left);
        let rw = text_width(right);

        if lw + rw >= self.width {
            self.write_line(&format!("{} {}", left, right));
        } else {
            let spaces = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(spaces));
            self.write_line(right);
        }
        self
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for TextReceiptBuilder {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_RECEIPT_WIDTH)
    }
}
