use crate::visitor::{Accept, Visitor};
use folio_model::{Decoration, Element};

const XML_HEADER: &str = "<?xml version=\"1.0\"?>";
const INDENT: &str = "  ";

/// How section nesting affects indentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthMode {
    /// Sections are closed on leave and indentation returns to the parent's depth
    #[default]
    Nested,
    /// Legacy layout: depth grows on every section entry and never shrinks,
    /// and sections are never closed
    Accumulating,
}

/// Visitor that serialises a tree into indented, tagged text
#[derive(Debug)]
pub struct XmlExporter {
    mode: DepthMode,
    depth: usize,
    buffer: String,
}

impl XmlExporter {
    pub fn new(mode: DepthMode) -> Self {
        let mut exporter = Self {
            mode,
            depth: 0,
            buffer: String::new(),
        };
        exporter.add_line(XML_HEADER);
        exporter
    }

    fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for XmlExporter {
    fn default() -> Self {
        Self::new(DepthMode::default())
    }
}

impl Visitor for XmlExporter {
    fn visit_text_block(&mut self, content: &str, decoration: Decoration) {
        let mut attributes = String::new();
        if decoration.bold {
            attributes.push_str(" bold=\"true\"");
        }
        if decoration.italic {
            attributes.push_str(" italic=\"true\"");
        }
        let line = format!(
            "<paragraph{}>{}</paragraph>",
            attributes,
            escape_xml(content)
        );
        self.add_line(&line);
    }

    fn visit_image(&mut self, path: &str) {
        let line = format!("<image src=\"{}\" />", escape_xml(path));
        self.add_line(&line);
    }

    fn visit_table(&mut self, rows: usize, cols: usize) {
        let line = format!("<table rows=\"{}\" cols=\"{}\" />", rows, cols);
        self.add_line(&line);
    }

    fn visit_container(&mut self, name: &str, _children: &[Element]) {
        let line = format!("<section name=\"{}\">", escape_xml(name));
        self.add_line(&line);
        self.depth += 1;
    }

    fn leave_container(&mut self, _name: &str) {
        if self.mode == DepthMode::Nested {
            self.depth = self.depth.saturating_sub(1);
            self.add_line("</section>");
        }
    }
}

/// Serialise `element`; every container, including `element` itself, becomes a section
pub fn export_xml(element: &Element, mode: DepthMode) -> String {
    let mut exporter = XmlExporter::new(mode);
    element.accept(&mut exporter);
    exporter.finish()
}

/// Serialise a document root.
///
/// The root becomes the `<document>` wrapper rather than a section, so the
/// section count equals the number of containers below the root.
pub fn export_document(root: &Element, mode: DepthMode) -> String {
    let mut exporter = XmlExporter::new(mode);
    exporter.add_line("<document>");
    exporter.depth += 1;

    for child in root.children() {
        child.accept(&mut exporter);
    }

    exporter.depth = 0;
    exporter.add_line("</document>");
    exporter.finish()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_tree() -> Element {
        Element::container_with(
            "Root",
            vec![
                Element::container_with(
                    "A",
                    vec![Element::container_with("A1", vec![Element::text("deep")])],
                ),
                Element::container_with("B", vec![Element::text("shallow")]),
            ],
        )
    }

    #[test]
    fn test_one_section_per_container() {
        let tree = nested_tree();
        let xml = export_xml(&tree, DepthMode::Nested);
        assert_eq!(xml.matches("<section").count(), 1 + tree.container_count());
        assert_eq!(xml.matches("</section>").count(), 4);

        let legacy = export_xml(&tree, DepthMode::Accumulating);
        assert_eq!(legacy.matches("<section").count(), 4);
        assert_eq!(legacy.matches("</section>").count(), 0);
    }

    #[test]
    fn test_nested_depth_returns_to_parent() {
        let xml = export_document(&nested_tree(), DepthMode::Nested);
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\"?>\n",
                "<document>\n",
                "  <section name=\"A\">\n",
                "    <section name=\"A1\">\n",
                "      <paragraph>deep</paragraph>\n",
                "    </section>\n",
                "  </section>\n",
                "  <section name=\"B\">\n",
                "    <paragraph>shallow</paragraph>\n",
                "  </section>\n",
                "</document>\n",
            )
        );
    }

    #[test]
    fn test_accumulating_depth_only_increases() {
        let xml = export_document(&nested_tree(), DepthMode::Accumulating);
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\"?>\n",
                "<document>\n",
                "  <section name=\"A\">\n",
                "    <section name=\"A1\">\n",
                "      <paragraph>deep</paragraph>\n",
                "      <section name=\"B\">\n",
                "        <paragraph>shallow</paragraph>\n",
                "</document>\n",
            )
        );
    }

    #[test]
    fn test_leaf_tags_and_escaping() {
        let tree = Element::container_with(
            "Root",
            vec![
                Element::styled_text(
                    "a < b & c",
                    Decoration {
                        bold: true,
                        italic: true,
                    },
                ),
                Element::image("img/\"quoted\".png"),
                Element::table(2, 3),
            ],
        );

        let xml = export_document(&tree, DepthMode::Nested);
        assert!(xml.contains(
            "  <paragraph bold=\"true\" italic=\"true\">a &lt; b &amp; c</paragraph>\n"
        ));
        assert!(xml.contains("  <image src=\"img/&quot;quoted&quot;.png\" />\n"));
        assert!(xml.contains("  <table rows=\"2\" cols=\"3\" />\n"));
    }

    #[test]
    fn test_empty_document() {
        let xml = export_document(&Element::container("Root"), DepthMode::Nested);
        assert_eq!(xml, "<?xml version=\"1.0\"?>\n<document>\n</document>\n");
    }
}
