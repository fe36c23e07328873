//! Question input buffer and product filter.

/// Fixed product categories offered as filters. Domain configuration, not
/// structure: the backend accepts any string.
pub const PRODUCTS: &[&str] = &[
    "Credit card",
    "Debt collection",
    "Mortgages",
    "Bank account",
    "Credit reporting",
];

/// Multi-line question buffer plus filter selection.
///
/// The buffer clears on successful submission; the filter selection
/// persists until explicitly changed.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    /// 0 = all products, 1..=PRODUCTS.len() indexes into PRODUCTS.
    product_index: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True when the buffer trims to nothing.
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Shift+Enter inserts a literal line break.
    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Advance the filter: All → each product → back to All.
    pub fn cycle_product(&mut self) {
        self.product_index = (self.product_index + 1) % (PRODUCTS.len() + 1);
    }

    /// Selected product, `None` for "All products".
    pub fn product(&self) -> Option<&'static str> {
        if self.product_index == 0 {
            None
        } else {
            Some(PRODUCTS[self.product_index - 1])
        }
    }

    /// Filter label for the input bar.
    pub fn product_label(&self) -> &'static str {
        self.product().unwrap_or("All products")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        let mut input = InputState::new();
        assert!(input.is_blank());
        input.push_char(' ');
        input.push_newline();
        assert!(input.is_blank());
        input.push_char('q');
        assert!(!input.is_blank());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut input = InputState::new();
        input.push_char('h');
        input.push_char('i');
        input.backspace();
        assert_eq!(input.buffer(), "h");
        input.clear_buffer();
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn test_product_cycle_wraps_through_all() {
        let mut input = InputState::new();
        assert_eq!(input.product(), None);

        let mut seen = Vec::new();
        for _ in 0..PRODUCTS.len() {
            input.cycle_product();
            seen.push(input.product().unwrap());
        }
        assert_eq!(seen, PRODUCTS);

        input.cycle_product();
        assert_eq!(input.product(), None);
        assert_eq!(input.product_label(), "All products");
    }

    #[test]
    fn test_filter_persists_when_buffer_clears() {
        let mut input = InputState::new();
        input.cycle_product();
        input.push_char('q');
        input.clear_buffer();
        assert_eq!(input.product(), Some("Credit card"));
    }
}
