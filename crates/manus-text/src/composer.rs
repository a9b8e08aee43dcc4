//! Text composition from confirmed symbol events
//!
//! DELETE removes the last character, SPACE appends a space, a letter
//! appends itself. The composer owns the accumulated string; exporting it
//! (file save, display) is the caller's concern.

use manus_core::{Symbol, SymbolEvent};

/// Accumulated recognized text for one session
#[derive(Debug, Clone, Default)]
pub struct TextComposer {
    text: String,
}

impl TextComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one confirmed event into the text
    pub fn apply(&mut self, event: &SymbolEvent) {
        self.apply_symbol(event.symbol);
    }

    /// Fold one symbol into the text
    pub fn apply_symbol(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Delete => {
                self.text.pop();
            }
            symbol => {
                if let Some(c) = symbol.to_char() {
                    self.text.push(c);
                }
            }
        }
    }

    /// The composed text so far
    pub fn contents(&self) -> &str {
        &self.text
    }

    /// Discard everything
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(composer: &mut TextComposer, symbols: &[Symbol]) {
        for &symbol in symbols {
            composer.apply_symbol(symbol);
        }
    }

    #[test]
    fn test_letters_and_space_accumulate() {
        let mut composer = TextComposer::new();
        apply_all(
            &mut composer,
            &[Symbol::H, Symbol::I, Symbol::Space, Symbol::U],
        );
        assert_eq!(composer.contents(), "HI U");
    }

    #[test]
    fn test_delete_is_backspace() {
        let mut composer = TextComposer::new();
        apply_all(&mut composer, &[Symbol::A, Symbol::B, Symbol::Delete]);
        assert_eq!(composer.contents(), "A");

        // Deleting past empty is a no-op
        apply_all(&mut composer, &[Symbol::Delete, Symbol::Delete]);
        assert_eq!(composer.contents(), "");
        apply_all(&mut composer, &[Symbol::C]);
        assert_eq!(composer.contents(), "C");
    }

    #[test]
    fn test_apply_event() {
        let mut composer = TextComposer::new();
        composer.apply(&manus_core::SymbolEvent::new(Symbol::V, 0.93));
        assert_eq!(composer.contents(), "V");
    }

    #[test]
    fn test_clear() {
        let mut composer = TextComposer::new();
        apply_all(&mut composer, &[Symbol::A, Symbol::Space, Symbol::B]);
        assert!(!composer.is_empty());
        composer.clear();
        assert!(composer.is_empty());
        assert_eq!(composer.len(), 0);
    }
}
