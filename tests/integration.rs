//! Integration tests for markup-scene.
//!
//! These tests drive the public conversion API end to end: markup and
//! stylesheet text in, a populated [`Scene`] and a [`ConversionResult`] out.

use pretty_assertions::assert_eq;

use markup_scene::config::ConverterConfig;
use markup_scene::convert::{ConversionResult, Converter};
use markup_scene::css::parse_stylesheet;
use markup_scene::geometry::{Axis, RectTransform, Size};
use markup_scene::markup::parse_markup;
use markup_scene::resource::{placeholder_image, MemoryAssetSource};
use markup_scene::scene::{
    Button, ComponentKind, Graphic, LayoutGroup, LayoutRoot, Scene, SceneHost, Slider,
};
use markup_scene::testing::dump_scene;

fn convert_on(canvas: Size, markup: &str, css: &str) -> (Scene, ConversionResult) {
    let mut scene = Scene::with_canvas(canvas.width, canvas.height);
    let parent = scene.root().unwrap();
    let document = parse_markup(markup).unwrap();
    let stylesheet = parse_stylesheet(css);
    let mut converter = Converter::new(MemoryAssetSource::new());
    let result = converter.convert(&mut scene, &document, &stylesheet, parent, canvas);
    (scene, result)
}

fn convert(markup: &str, css: &str) -> (Scene, ConversionResult) {
    convert_on(Size::new(800.0, 600.0), markup, css)
}

fn size_of(scene: &Scene, name: &str) -> (f32, f32) {
    let node = scene
        .find_by_name(name)
        .unwrap_or_else(|| panic!("no node named {name}"));
    let size = scene.rect_size(node);
    (size.width, size.height)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_button_scenario() {
    let (scene, result) = convert(r#"<Root><Button name="Ok" width="120" height="40"/></Root>"#, "");

    assert_eq!(result.created_node_count, 2);
    assert_eq!(result.created_nodes.len(), 2);
    assert_eq!(size_of(&scene, "Root"), (800.0, 600.0));
    assert_eq!(size_of(&scene, "Ok"), (120.0, 40.0));

    let ok = scene.find_by_name("Ok").unwrap();
    assert!(scene.component::<Graphic>(ok).is_some());
    let button = scene.component::<Button>(ok).unwrap();
    assert_eq!(button.target_graphic, Some(ok));
    assert!(button.interactable);

    let root = result.root().unwrap();
    assert!(scene.component::<LayoutRoot>(root).is_some());
}

#[test]
fn test_row_group_attached_once() {
    let (scene, _) = convert(
        r#"<Root class="row"><Label/><Label/></Root>"#,
        ".row { flex-direction: row; }",
    );
    let root = scene.find_by_name("Root").unwrap();
    let groups = scene
        .components(root)
        .iter()
        .filter(|c| c.kind() == ComponentKind::LayoutGroup)
        .count();
    assert_eq!(groups, 1);
    assert_eq!(scene.component::<LayoutGroup>(root).unwrap().axis, Axis::Horizontal);
}

#[test]
fn test_rgba_background_alpha() {
    let (scene, result) = convert(
        r#"<UXML><VisualElement name="Panel" class="panel"/></UXML>"#,
        ".panel { background-color: rgba(10, 20, 30, 0.5); }",
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    let panel = scene.find_by_name("Panel").unwrap();
    let color = scene.component::<Graphic>(panel).unwrap().color;
    assert!((color.a - 0.5).abs() < 1e-4);
    assert!((color.r - 10.0 / 255.0).abs() < 1e-4);
    assert!((color.g - 20.0 / 255.0).abs() < 1e-4);
    assert!((color.b - 30.0 / 255.0).abs() < 1e-4);
}

#[test]
fn test_missing_svg_gets_placeholder() {
    let (scene, result) = convert(r#"<UXML><Image name="Logo" src="missing.svg"/></UXML>"#, "");
    let logo = scene.find_by_name("Logo").unwrap();
    let sprite = scene
        .component::<Graphic>(logo)
        .and_then(|g| g.sprite.clone())
        .expect("placeholder sprite");
    assert!(sprite.is_placeholder());
    assert_eq!(sprite.image, placeholder_image());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("missing.svg"));
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

#[test]
fn test_unit_round_trip() {
    let (scene, result) = convert_on(
        Size::new(1000.0, 800.0),
        r#"<UXML>
            <VisualElement name="Px" style="width: 200px"/>
            <VisualElement name="Pct" style="width: 20%"/>
        </UXML>"#,
        "",
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(size_of(&scene, "Px").0, 200.0);
    assert_eq!(size_of(&scene, "Pct").0, 200.0);
}

#[test]
fn test_attribute_outranks_stylesheet_and_inline_style() {
    let (scene, _) = convert(
        r#"<UXML>
            <Button name="A" class="foo" width="80"/>
            <Button name="B" class="foo" width="80" style="width: 60px"/>
            <Button name="C" class="foo" style="width: 60px"/>
            <Button name="D" class="foo"/>
        </UXML>"#,
        ".foo { width: 50px; }",
    );
    assert_eq!(size_of(&scene, "A").0, 80.0);
    assert_eq!(size_of(&scene, "B").0, 80.0);
    assert_eq!(size_of(&scene, "C").0, 60.0);
    assert_eq!(size_of(&scene, "D").0, 50.0);
}

#[test]
fn test_unrecognized_tag_fallback() {
    let (scene, result) = convert(r#"<UXML><Frobnicator name="F"/></UXML>"#, "");
    assert_eq!(result.created_node_count, 2);
    let node = scene.find_by_name("F").unwrap();
    assert!(scene.children(node).is_empty());
    let color = scene.component::<Graphic>(node).unwrap().color;
    assert!(!color.is_opaque());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Frobnicator"));
}

#[test]
fn test_absolute_child_leaves_the_flow() {
    let (scene, result) = convert(
        r#"<UXML class="row"><Button name="Ok" width="50"/><VisualElement name="Overlay" class="abs"/></UXML>"#,
        ".row { flex-direction: row; } .abs { position: absolute; }",
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    let overlay = scene.find_by_name("Overlay").unwrap();
    assert_eq!(scene.rect(overlay).unwrap(), RectTransform::stretched());
    assert_eq!(size_of(&scene, "Overlay"), (800.0, 600.0));
    assert_eq!(size_of(&scene, "Ok").0, 50.0);
}

#[test]
fn test_overflowing_slider_range_falls_back() {
    let (scene, result) = convert(
        r#"<UXML><Slider name="S" low-value="-3e38" high-value="3e38"/></UXML>"#,
        "",
    );
    assert_eq!(result.created_node_count, 2);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("high-value"));
    let slider = scene.find_by_name("S").unwrap();
    assert!(scene.component::<Slider>(slider).is_none());
    assert!(scene.children(slider).is_empty());
}

#[test]
fn test_conversion_is_idempotent() {
    let markup = r#"<UXML class="col">
        <Label name="Title" text="Settings"/>
        <Slider name="Volume" value="0.3"/>
        <Toggle name="Mute" label="Mute"/>
        <Button name="Apply" class="wide">Apply</Button>
    </UXML>"#;
    let css = ".col { flex-direction: column; padding: 8px; } .wide { width: 50%; height: 32px; }";
    let document = parse_markup(markup).unwrap();
    let stylesheet = parse_stylesheet(css);
    let canvas = Size::new(800.0, 600.0);

    let mut scene = Scene::with_canvas(canvas.width, canvas.height);
    let root = scene.root().unwrap();
    let first = scene.create_node("First", root).unwrap();
    let second = scene.create_node("Second", root).unwrap();
    let mut converter = Converter::new(MemoryAssetSource::new());
    let a = converter.convert(&mut scene, &document, &stylesheet, first, canvas);
    let b = converter.convert(&mut scene, &document, &stylesheet, second, canvas);

    assert_eq!(a.created_node_count, document.root.element_count());
    assert_eq!(a.created_node_count, 5);
    assert_eq!(a.created_node_count, b.created_node_count);
    assert_eq!(a.warnings, b.warnings);
    for (&x, &y) in a.created_nodes.iter().zip(&b.created_nodes) {
        assert_eq!(scene.name(x), scene.name(y));
        let (rx, ry) = (scene.rect(x).unwrap(), scene.rect(y).unwrap());
        assert!(rx.approx_eq(&ry, 1e-4), "{:?}: {rx:?} != {ry:?}", scene.name(x));
    }
    assert_eq!(dump_scene(&scene, a.root().unwrap()), dump_scene(&scene, b.root().unwrap()));
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn test_scene_dump_snapshot() {
    let (scene, result) = convert(r#"<UXML><Button name="Ok" width="120" height="40">Go</Button></UXML>"#, "");
    let dump = dump_scene(&scene, result.root().unwrap());
    insta::assert_snapshot!(dump, @r#"
    UXML 800x600 @0,0 [Image(a=0.1), LayoutRoot]
      Ok 120x40 @0,0 [Image(a=1), Button]
        Text 120x40 @0,0 [Text("Go")]
    "#);
}

// ---------------------------------------------------------------------------
// Files and batches
// ---------------------------------------------------------------------------

#[test]
fn test_batch_convert_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("menu.uxml"),
        r#"<UXML><VisualElement name="Big" class="big"/></UXML>"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("menu.uss"), ".big { width: 300px; }").unwrap();
    std::fs::write(dir.path().join("broken.uxml"), "<UXML><Button></UXML>").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not markup").unwrap();

    let mut scene = Scene::with_canvas(800.0, 600.0);
    let parent = scene.root().unwrap();
    let mut converter = Converter::new(MemoryAssetSource::new())
        .with_config(ConverterConfig::new().with_canvas(800.0, 600.0));
    let report = converter.batch_convert(dir.path(), &mut scene, parent).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(size_of(&scene, "Big").0, 300.0);

    let summary = report.summary();
    assert!(summary.starts_with("converted 1 of 2 file(s), 1 failed"));
    assert!(summary.contains("broken.uxml: failed: malformed markup"));
    assert!(summary.contains("menu.uxml: 2 node(s) created, 0 warning(s)"));
}

#[test]
fn test_batch_convert_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = Scene::with_canvas(800.0, 600.0);
    let parent = scene.root().unwrap();
    let mut converter = Converter::new(MemoryAssetSource::new());
    assert!(converter
        .batch_convert(dir.path().join("nope"), &mut scene, parent)
        .is_err());
}

#[test]
fn test_cache_persists_until_cleared() {
    let mut scene = Scene::with_canvas(800.0, 600.0);
    let parent = scene.root().unwrap();
    let mut converter = Converter::new(MemoryAssetSource::new());
    converter
        .convert_str(&mut scene, r#"<UXML><Image src="a.svg"/></UXML>"#, "", parent)
        .unwrap();
    assert!(converter.resources().cached("a.svg").is_some());
    converter.resources_mut().clear_cache();
    assert_eq!(converter.resources().cache_len(), 0);
}
