use crate::visitor::{Accept, Visitor};
use folio_model::{Decoration, Element};

/// Running total of whitespace-separated words across a tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordCounter {
    count: usize,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Visitor for WordCounter {
    fn visit_text_block(&mut self, content: &str, _decoration: Decoration) {
        self.count += content.split_whitespace().count();
    }
}

/// Count the words in `element` and everything below it
pub fn count_words(element: &Element) -> usize {
    let mut counter = WordCounter::new();
    element.accept(&mut counter);
    counter.count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_whitespace_tokens() {
        assert_eq!(count_words(&Element::text("a b  c")), 3);
        assert_eq!(count_words(&Element::text("  leading\tand\ntrailing  ")), 3);
        assert_eq!(count_words(&Element::text("")), 0);
        assert_eq!(count_words(&Element::text("   ")), 0);
    }

    #[test]
    fn test_non_text_contributes_nothing() {
        assert_eq!(count_words(&Element::image("a b c.png")), 0);
        assert_eq!(count_words(&Element::table(3, 3)), 0);
        assert_eq!(count_words(&Element::container("Named section")), 0);
    }

    #[test]
    fn test_additive_over_children() {
        let children = vec![
            Element::text("Hello world"),
            Element::container_with(
                "Ch1",
                vec![
                    Element::text("One two three"),
                    Element::container_with("Deep", vec![Element::text("four")]),
                ],
            ),
            Element::image("photo.jpg"),
            Element::styled_text("bold words here", Decoration::bold()),
        ];

        let expected: usize = children.iter().map(count_words).sum();
        let parent = Element::container_with("Root", children);

        assert_eq!(count_words(&parent), expected);
        assert_eq!(count_words(&parent), 9);
    }

    #[test]
    fn test_counter_accumulates_across_trees() {
        let mut counter = WordCounter::new();
        Element::text("one two").accept(&mut counter);
        Element::text("three").accept(&mut counter);
        assert_eq!(counter.count(), 3);
    }
}
