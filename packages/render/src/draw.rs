use crate::renderer::Renderer;
use folio_common::{walk_element, Visitor};
use folio_model::{Decoration, Element};

/// Render a tree through a [`Renderer`], one line per node
pub trait Draw {
    fn draw_into(&self, renderer: &dyn Renderer, out: &mut Vec<String>);

    fn draw(&self, renderer: &dyn Renderer) -> Vec<String> {
        let mut out = Vec::new();
        self.draw_into(renderer, &mut out);
        out
    }
}

impl Draw for Element {
    fn draw_into(&self, renderer: &dyn Renderer, out: &mut Vec<String>) {
        let mut visitor = DrawVisitor {
            renderer,
            lines: out,
        };
        walk_element(&mut visitor, self);
    }
}

struct DrawVisitor<'a> {
    renderer: &'a dyn Renderer,
    lines: &'a mut Vec<String>,
}

impl Visitor for DrawVisitor<'_> {
    fn visit_text_block(&mut self, content: &str, decoration: Decoration) {
        self.lines.push(
            self.renderer
                .render_text(content, decoration.bold, decoration.italic),
        );
    }

    fn visit_image(&mut self, path: &str) {
        self.lines.push(self.renderer.render_image(path));
    }

    fn visit_table(&mut self, rows: usize, cols: usize) {
        self.lines.push(self.renderer.render_table(rows, cols));
    }

    fn visit_container(&mut self, _name: &str, _children: &[Element]) {
        self.lines.push(self.renderer.section_start());
    }

    fn leave_container(&mut self, _name: &str) {
        self.lines.push(self.renderer.section_end());
    }
}

/// Render `element` and join the lines with newlines
pub fn render_to_string(element: &Element, renderer: &dyn Renderer) -> String {
    element.draw(renderer).join("\n")
}
