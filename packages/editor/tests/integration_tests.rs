//! Integration tests for editor crate

use folio_common::{export_document, DepthMode};
use folio_editor::{
    load, save, Command, CommandLog, Document, DocumentBuilder, LifecycleState, StateError,
    StatusBar,
};
use folio_model::{Decoration, Element, NodePath};
use folio_render::{Draw, HtmlRenderer, PlainTextRenderer};
use std::sync::Arc;

#[test]
fn test_word_count_scenario() {
    let mut doc = Document::new();
    assert_eq!(doc.word_count(), 0);

    doc.add_element(Element::text("Hello world")).unwrap();
    assert_eq!(doc.word_count(), 2);

    doc.add_element(Element::container_with(
        "Ch1",
        vec![Element::text("One two three")],
    ))
    .unwrap();
    assert_eq!(doc.word_count(), 5);

    let xml = export_document(doc.root(), DepthMode::default());
    assert_eq!(xml.matches("<section").count(), 1);
    assert_eq!(xml.matches("<paragraph").count(), 2);
}

#[test]
fn test_document_lifecycle() {
    let mut doc = DocumentBuilder::new(&Default::default())
        .header("Quarterly")
        .build();
    let status = Arc::new(StatusBar::new());
    doc.attach(status.clone());

    let mut log = CommandLog::new();
    log.execute(Command::add(Element::text("Draft text")), &mut doc)
        .unwrap();
    log.execute(Command::add(Element::container("Appendix")), &mut doc)
        .unwrap();

    doc.submit_for_review().unwrap();
    log.execute(Command::add(Element::image("chart.png")), &mut doc)
        .unwrap();
    assert!(log
        .execute(Command::add(Element::container("Late section")), &mut doc)
        .is_err());

    doc.publish().unwrap();
    assert_eq!(
        doc.edit(),
        Err(StateError::Locked {
            state: LifecycleState::Published
        })
    );
    assert!(doc.transition_to(LifecycleState::Draft).is_err());

    let stats = status.stats();
    assert_eq!(stats.elements, 3);
    assert_eq!(stats.words, 2);
    // three inserts and two transitions
    assert_eq!(stats.updates, 5);
}

#[test]
fn test_clone_is_deep() {
    let mut doc = Document::new();
    doc.add_element(Element::styled_text("Title", Decoration::bold()))
        .unwrap();
    doc.add_element(Element::container_with(
        "Ch1",
        vec![Element::image("a.png"), Element::table(2, 2)],
    ))
    .unwrap();

    let original = doc.root().clone();
    let mut copy = original.clone();

    let tags = |e: &Element| e.descendants().map(Element::type_tag).collect::<Vec<_>>();
    assert_eq!(tags(&copy), tags(&original));

    copy.push(&NodePath::from_indices(vec![1]), Element::text("extra"))
        .unwrap();
    assert_eq!(original.node_count(), 4);
    assert_eq!(copy.node_count(), 5);
    assert_eq!(doc.root(), &original);
}

#[test]
fn test_render_loaded_snapshot() {
    let mut doc = Document::new();
    doc.add_element(Element::text("Hello <world>")).unwrap();
    doc.add_element(Element::container_with("Ch1", vec![Element::table(3, 4)]))
        .unwrap();

    let loaded = load(&save(&doc).unwrap()).unwrap();

    let plain = loaded.root().draw(&PlainTextRenderer);
    assert_eq!(plain, doc.root().draw(&PlainTextRenderer));
    assert!(plain.contains(&"[TABLE: 3x4]".to_string()));

    let html = loaded.root().draw(&HtmlRenderer);
    assert!(html.contains(&"<p>Hello &lt;world&gt;</p>".to_string()));
}
