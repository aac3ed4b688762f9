use crate::ast::Element;
use std::slice;

/// Depth-first, pre-order iterator over everything below an element.
///
/// The starting element itself is not yielded.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Element>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(element) => {
                    if element.is_container() {
                        self.stack.push(element.children().iter());
                    }
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl Element {
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children().iter()],
        }
    }

    /// Number of nodes below this element
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Number of containers below this element
    pub fn container_count(&self) -> usize {
        self.descendants().filter(|e| e.is_container()).count()
    }
}
