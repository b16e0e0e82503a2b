use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_renders_header_and_controls() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Sigma Web Dev - AI Teaching Assistant"),
        "missing title in {html}"
    );
    assert!(html.contains("+ New chat"), "missing new-chat pill in {html}");
    assert!(html.contains("Ask"), "missing ask button in {html}");
    assert!(
        html.contains("Generate quiz"),
        "missing quiz button in {html}"
    );
    assert!(html.contains("Export PDF"), "missing export button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn language_selector_lists_all_languages() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("English"), "missing English in {html}");
    assert!(html.contains("Hindi"), "missing Hindi in {html}");
    assert!(html.contains("Marathi"), "missing Marathi in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn fresh_view_shows_only_the_empty_panels() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();
    // One default session pill, no answer thread yet.
    assert!(html.contains("New chat"), "missing session pill in {html}");
    assert!(
        html.contains("Generate a quiz to test what you just learned."),
        "missing quiz hint in {html}"
    );
    assert!(
        html.contains("Upload a course video"),
        "missing upload panel in {html}"
    );
    assert!(
        !html.contains("Relevant video chunks"),
        "videos panel should be hidden in {html}"
    );
    assert!(
        !html.contains("Where you need practice"),
        "topics panel should be hidden in {html}"
    );
}
