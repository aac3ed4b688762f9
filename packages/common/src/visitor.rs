use folio_model::{Decoration, Element};

/// Visitor pattern for traversing the document tree immutably
///
/// Every hook defaults to a no-op, so a visitor only overrides the variants
/// it cares about. Traversal order is owned by [`walk_element`]: a container
/// is visited once, then each child in order, then `leave_container` fires.
/// Hooks cannot skip or reorder children.
pub trait Visitor {
    fn visit_text_block(&mut self, _content: &str, _decoration: Decoration) {
        // Leaf node, no children to walk
    }

    fn visit_image(&mut self, _path: &str) {
        // Leaf node, no children to walk
    }

    fn visit_table(&mut self, _rows: usize, _cols: usize) {
        // Leaf node, no children to walk
    }

    fn visit_container(&mut self, _name: &str, _children: &[Element]) {}

    fn leave_container(&mut self, _name: &str) {}
}

pub fn walk_element<V: Visitor + ?Sized>(visitor: &mut V, element: &Element) {
    match element {
        Element::TextBlock {
            content,
            decoration,
        } => visitor.visit_text_block(content, *decoration),
        Element::Image { path } => visitor.visit_image(path),
        Element::Table { rows, cols } => visitor.visit_table(*rows, *cols),
        Element::Container { name, children } => {
            visitor.visit_container(name, children);
            for child in children {
                walk_element(visitor, child);
            }
            visitor.leave_container(name);
        }
    }
}

/// `element.accept(&mut visitor)` sugar over [`walk_element`]
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

impl Accept for Element {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk_element(visitor, self);
    }
}
