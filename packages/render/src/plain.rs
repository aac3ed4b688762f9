use crate::renderer::Renderer;

/// Console-style output with bracketed emphasis markers
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render_text(&self, content: &str, bold: bool, italic: bool) -> String {
        let mut prefix = String::new();
        if bold {
            prefix.push_str("[BOLD]");
        }
        if italic {
            prefix.push_str("[ITALIC]");
        }

        if prefix.is_empty() {
            content.to_string()
        } else {
            format!("{} {}", prefix, content)
        }
    }

    fn render_image(&self, path: &str) -> String {
        format!("[IMAGE: {}]", path)
    }

    fn render_table(&self, rows: usize, cols: usize) -> String {
        format!("[TABLE: {}x{}]", rows, cols)
    }

    fn section_start(&self) -> String {
        "--- Section Start ---".to_string()
    }

    fn section_end(&self) -> String {
        "--- Section End ---".to_string()
    }
}
