use crate::{
    render_to_string, Draw, HtmlRenderer, PlainTextRenderer, RenderError, Renderer, RendererKind,
};
use folio_model::{Decoration, Element};

fn sample() -> Element {
    Element::container_with(
        "Root",
        vec![
            Element::text("Introduction paragraph"),
            Element::container_with("Chapter 1", vec![Element::text("Chapter 1 content")]),
            Element::styled_text("Bold text", Decoration::bold()),
            Element::styled_text("Italic text", Decoration::italic()),
            Element::image("photo.jpg"),
            Element::table(2, 3),
        ],
    )
}

#[test]
fn test_plain_text_rendering() {
    let lines = sample().draw(&PlainTextRenderer);

    println!("Plain output:\n{}", lines.join("\n"));

    assert_eq!(
        lines,
        vec![
            "--- Section Start ---",
            "Introduction paragraph",
            "--- Section Start ---",
            "Chapter 1 content",
            "--- Section End ---",
            "[BOLD] Bold text",
            "[ITALIC] Italic text",
            "[IMAGE: photo.jpg]",
            "[TABLE: 2x3]",
            "--- Section End ---",
        ]
    );
}

#[test]
fn test_html_rendering() {
    let html = render_to_string(&sample(), &HtmlRenderer);

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<section>\n<p>Introduction paragraph</p>\n<section>"));
    assert!(html.contains("<p><strong>Bold text</strong></p>"));
    assert!(html.contains("<p><em>Italic text</em></p>"));
    assert!(html.contains("<img src=\"photo.jpg\" />"));
    assert!(html.contains("<table data-rows=\"2\" data-cols=\"3\"></table>"));
    assert!(html.ends_with("</section>"));
    assert_eq!(html.matches("<section>").count(), 2);
    assert_eq!(html.matches("</section>").count(), 2);
}

#[test]
fn test_bold_and_italic_together() {
    assert_eq!(
        PlainTextRenderer.render_text("both", true, true),
        "[BOLD][ITALIC] both"
    );
    assert_eq!(
        HtmlRenderer.render_text("both", true, true),
        "<p><em><strong>both</strong></em></p>"
    );
}

#[test]
fn test_escape_html_entities() {
    let element = Element::text("<script>alert(\"x\") & 'y'</script>");
    let html = render_to_string(&element, &HtmlRenderer);
    assert_eq!(
        html,
        "<p>&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;</p>"
    );
}

#[test]
fn test_empty_container_is_bare_markers() {
    let empty = Element::container("Empty");
    assert_eq!(
        empty.draw(&PlainTextRenderer),
        vec!["--- Section Start ---", "--- Section End ---"]
    );
    assert_eq!(render_to_string(&empty, &HtmlRenderer), "<section>\n</section>");
}

#[test]
fn test_leaf_draws_single_line() {
    assert_eq!(Element::image("a.png").draw(&HtmlRenderer), vec!["<img src=\"a.png\" />"]);
}

#[test]
fn test_renderers_are_interchangeable() {
    let tree = sample();
    let renderers: Vec<Box<dyn Renderer>> =
        vec![Box::new(PlainTextRenderer), Box::new(HtmlRenderer)];

    for renderer in &renderers {
        let first = tree.draw(renderer.as_ref());
        let second = tree.draw(renderer.as_ref());
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }
}

#[test]
fn test_draw_into_appends() {
    let mut out = vec!["header".to_string()];
    Element::text("body").draw_into(&PlainTextRenderer, &mut out);
    assert_eq!(out, vec!["header", "body"]);
}

#[test]
fn test_renderer_kind_from_str() {
    assert_eq!("plain".parse::<RendererKind>(), Ok(RendererKind::Plain));
    assert_eq!("HTML".parse::<RendererKind>(), Ok(RendererKind::Html));
    assert_eq!(
        "pdf".parse::<RendererKind>(),
        Err(RenderError::UnknownFormat("pdf".to_string()))
    );

    let renderer = RendererKind::Html.renderer();
    assert_eq!(renderer.section_start(), "<section>");
    assert_eq!(RendererKind::Plain.to_string(), "plain");
}
