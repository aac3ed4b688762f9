use crate::renderer::Renderer;

/// Markup output; every node becomes one HTML line
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_text(&self, content: &str, bold: bool, italic: bool) -> String {
        let mut html = escape_html(content);
        if bold {
            html = format!("<strong>{}</strong>", html);
        }
        if italic {
            html = format!("<em>{}</em>", html);
        }
        format!("<p>{}</p>", html)
    }

    fn render_image(&self, path: &str) -> String {
        format!("<img src=\"{}\" />", escape_html(path))
    }

    fn render_table(&self, rows: usize, cols: usize) -> String {
        format!(
            "<table data-rows=\"{}\" data-cols=\"{}\"></table>",
            rows, cols
        )
    }

    fn section_start(&self) -> String {
        "<section>".to_string()
    }

    fn section_end(&self) -> String {
        "</section>".to_string()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
