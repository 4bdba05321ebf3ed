//! The conversion driver.
//!
//! [`Converter::convert`] walks a markup document depth-first. For every
//! element it resolves a [`WidgetKind`], builds the widget sub-tree, runs the
//! style cascade on the widget root and then recurses into the element's
//! children, parenting them under the widget's content node. Nodes are
//! recorded in post-order, one per markup element.
//!
//! Nothing in a walk is fatal: a recipe that fails is replaced by a plain
//! container and every problem ends up as a warning on the
//! [`ConversionResult`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ConverterConfig;
use crate::css::{parse_stylesheet, Stylesheet};
use crate::geometry::Size;
use crate::layout::context::describe;
use crate::layout::{apply_cascade, LayoutContext};
use crate::markup::{parse_markup, MarkupDocument, MarkupElement, MarkupError};
use crate::resource::{AssetSource, ResourceResolver};
use crate::scene::{NodeId, SceneHost};
use crate::widget::{KindResolver, WidgetKind};
use crate::widgets::{self, BuiltWidget, WidgetContext};

/// Whole-file failures. Element-level problems are warnings instead.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What one conversion produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionResult {
    /// Number of markup elements turned into nodes.
    pub created_node_count: usize,
    /// Widget root node of every element, children before their parent.
    pub created_nodes: Vec<NodeId>,
    /// Warnings in the order they were raised.
    pub warnings: Vec<String>,
}

impl ConversionResult {
    /// Node created for the document root, if the walk got that far.
    pub fn root(&self) -> Option<NodeId> {
        self.created_nodes.last().copied()
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} node(s) created, {} warning(s)",
            self.created_node_count,
            self.warnings.len()
        )
    }

    fn record(&mut self, node: NodeId) {
        self.created_nodes.push(node);
        self.created_node_count += 1;
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Outcome of one file of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ConversionResult, ConvertError>,
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        match &self.result {
            Ok(result) => write!(f, "{name}: {}", result.summary()),
            Err(err) => write!(f, "{name}: failed: {err}"),
        }
    }
}

/// Per-file outcomes of [`Converter::batch_convert`], in file name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    /// Human-readable report: a totals line followed by one line per file.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "converted {} of {} file(s), {} failed",
            self.succeeded(),
            self.files.len(),
            self.failed()
        );
        for file in &self.files {
            out.push('\n');
            out.push_str(&file.to_string());
        }
        out
    }
}

/// State of one walk.
struct Walk<'w, H> {
    host: &'w mut H,
    stylesheet: &'w Stylesheet,
    canvas: Size,
    result: ConversionResult,
}

/// Converts markup documents into scene nodes.
///
/// The converter owns the kind resolver and the resource resolver, so the
/// sprite cache persists across conversions until
/// [`ResourceResolver::clear_cache`] is called.
pub struct Converter {
    config: ConverterConfig,
    kinds: KindResolver,
    resources: ResourceResolver,
}

impl Converter {
    /// A converter with the default config reading assets from `source`.
    pub fn new(source: impl AssetSource + 'static) -> Self {
        let config = ConverterConfig::default();
        let resources = ResourceResolver::new(source).with_options(config.resources);
        Self {
            config,
            kinds: KindResolver::default(),
            resources,
        }
    }

    /// Replace the config (builder). Resource options are applied to the resolver.
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.resources.configure(config.resources);
        self.config = config;
        self
    }

    /// Replace the kind resolver (builder).
    pub fn with_kinds(mut self, kinds: KindResolver) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn kinds(&self) -> &KindResolver {
        &self.kinds
    }

    pub fn kinds_mut(&mut self) -> &mut KindResolver {
        &mut self.kinds
    }

    pub fn resources(&self) -> &ResourceResolver {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceResolver {
        &mut self.resources
    }

    /// Convert `document` into nodes under `parent`, with `canvas` as the
    /// size of the document root.
    pub fn convert<H: SceneHost>(
        &mut self,
        host: &mut H,
        document: &MarkupDocument,
        stylesheet: &Stylesheet,
        parent: NodeId,
        canvas: Size,
    ) -> ConversionResult {
        let mut walk = Walk {
            host,
            stylesheet,
            canvas,
            result: ConversionResult::default(),
        };
        self.visit(&mut walk, &document.root, None, parent);

        let Walk { host, result, .. } = walk;
        if let Some(root) = result.root() {
            host.force_layout_rebuild(root);
        }
        tracing::info!(root = %document.root.tag_name, "conversion finished: {}", result.summary());
        result
    }

    /// Parse and convert markup and stylesheet text on the configured canvas.
    pub fn convert_str<H: SceneHost>(
        &mut self,
        host: &mut H,
        markup: &str,
        stylesheet: &str,
        parent: NodeId,
    ) -> Result<ConversionResult, ConvertError> {
        let document = parse_markup(markup)?;
        let stylesheet = parse_stylesheet(stylesheet);
        let canvas = self.config.canvas();
        Ok(self.convert(host, &document, &stylesheet, parent, canvas))
    }

    /// Convert a markup file, together with the stylesheet of the same stem
    /// next to it when one exists.
    pub fn convert_file<H: SceneHost>(
        &mut self,
        host: &mut H,
        path: impl AsRef<Path>,
        parent: NodeId,
    ) -> Result<ConversionResult, ConvertError> {
        let path = path.as_ref();
        let markup = std::fs::read_to_string(path).map_err(|source| ConvertError::io(path, source))?;
        let stylesheet_path = path.with_extension(&self.config.stylesheet_extension);
        let stylesheet = if stylesheet_path.is_file() {
            std::fs::read_to_string(&stylesheet_path)
                .map_err(|source| ConvertError::io(&stylesheet_path, source))?
        } else {
            String::new()
        };
        self.convert_str(host, &markup, &stylesheet, parent)
    }

    /// Convert every markup file directly inside `folder`, each under
    /// `parent`. A failing file is recorded and the batch carries on; only an
    /// unreadable folder is an error.
    pub fn batch_convert<H: SceneHost>(
        &mut self,
        folder: impl AsRef<Path>,
        host: &mut H,
        parent: NodeId,
    ) -> Result<BatchReport, ConvertError> {
        let folder = folder.as_ref();
        let entries = std::fs::read_dir(folder).map_err(|source| ConvertError::io(folder, source))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.is_markup_file(path))
            .collect();
        paths.sort();

        let mut report = BatchReport::default();
        for path in paths {
            let result = self.convert_file(host, &path, parent);
            let outcome = FileOutcome { path, result };
            match &outcome.result {
                Ok(_) => tracing::info!("{outcome}"),
                Err(_) => tracing::warn!("{outcome}"),
            }
            report.files.push(outcome);
        }
        tracing::info!(
            folder = %folder.display(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "batch conversion finished"
        );
        Ok(report)
    }

    fn is_markup_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.config.markup_extension))
    }

    /// Convert one element and its subtree.
    fn visit<H: SceneHost>(
        &mut self,
        walk: &mut Walk<'_, H>,
        element: &MarkupElement,
        parent_element: Option<&MarkupElement>,
        parent: NodeId,
    ) {
        let resolution = self.kinds.resolve(&element.qualified_type_name());
        tracing::debug!(
            element = %describe(element),
            kind = %resolution.kind,
            tier = ?resolution.tier,
            "resolved element kind"
        );
        let Some((built, kind)) = self.build_widget(walk, element, resolution.kind, parent) else {
            return;
        };

        let mut ctx = LayoutContext {
            element,
            kind,
            node: built.root,
            parent_element,
            parent_node: Some(parent),
            canvas: walk.canvas,
            stylesheet: walk.stylesheet,
            resources: &mut self.resources,
            default_font_size: self.config.default_font_size,
            is_root: parent_element.is_none(),
            warnings: Vec::new(),
        };
        apply_cascade(walk.host, &mut ctx);
        walk.result.warnings.append(&mut ctx.warnings);

        for child in &element.children {
            self.visit(walk, child, Some(element), built.content);
        }
        walk.result.record(built.root);
    }

    /// Run the recipe for `kind`, falling back to a plain container. `None`
    /// when not even the container could be created; the subtree is skipped.
    fn build_widget<H: SceneHost>(
        &mut self,
        walk: &mut Walk<'_, H>,
        element: &MarkupElement,
        kind: WidgetKind,
        parent: NodeId,
    ) -> Option<(BuiltWidget, WidgetKind)> {
        let mut ctx = WidgetContext {
            element,
            parent,
            resources: &mut self.resources,
            font: &self.config.default_font,
            font_size: self.config.default_font_size,
        };
        let (built, kind) = match widgets::build(walk.host, kind, &mut ctx) {
            Ok(built) => (built, kind),
            Err(err) => {
                walk.result.warn(format!(
                    "{}: could not build {kind} ({err}), built as a container instead",
                    describe(element)
                ));
                match widgets::container::build(walk.host, &mut ctx, WidgetKind::Container) {
                    Ok(built) => (built, WidgetKind::Container),
                    Err(err) => {
                        walk.result.warn(format!(
                            "{}: skipped with its children: {err}",
                            describe(element)
                        ));
                        return None;
                    }
                }
            }
        };
        for warning in &built.warnings {
            walk.result.warn(warning.clone());
        }
        Some((built, kind))
    }
}
