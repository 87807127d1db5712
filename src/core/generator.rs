//! Headless label generation for one component.
//!
//! Everything the interactive shell asks for arrives in a [`GenerateRequest`];
//! the only side effects are reading the component template and writing the
//! three output files.

use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use super::{
    emit::{METADATA_FILE_NAME, MODULE_FILE_NAME, MetadataOptions, emit_markup, emit_metadata, emit_module},
    extract::{ExtractionRules, LabelCollision, LabelTable, RunMetrics, extract},
    markup::{SerializeOptions, load_markup_file},
    naming::NamingStyle,
};
use crate::config::ConfigLoadResult;

/// Where a component's input and outputs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    pub component: String,
    /// `<lwcRoot>/<component>`
    pub component_dir: PathBuf,
    /// `<lwcRoot>/<component>/<component>.html`
    pub markup: PathBuf,
    /// `<labelsRoot>/<component>`
    pub output_dir: PathBuf,
}

impl ComponentPaths {
    pub fn new(lwc_root: &Path, labels_root: &Path, component: &str) -> Self {
        let component_dir = lwc_root.join(component);
        Self {
            component: component.to_string(),
            markup: component_dir.join(format!("{}.html", component)),
            component_dir,
            output_dir: labels_root.join(component),
        }
    }

    /// Generated template; same file name as the source template.
    pub fn generated_markup(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.component))
    }

    pub fn module(&self) -> PathBuf {
        self.output_dir.join(MODULE_FILE_NAME)
    }

    pub fn metadata(&self) -> PathBuf {
        self.output_dir.join(METADATA_FILE_NAME)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub component: String,
    pub style: NamingStyle,
    pub lwc_root: PathBuf,
    pub labels_root: PathBuf,
    pub rules: ExtractionRules,
    pub serialize: SerializeOptions,
    pub language: String,
}

impl GenerateRequest {
    pub fn from_config(component: &str, style: NamingStyle, loaded: &ConfigLoadResult) -> Self {
        Self {
            component: component.to_string(),
            style,
            lwc_root: loaded.lwc_root(),
            labels_root: loaded.labels_root(),
            rules: loaded.config.extraction_rules(),
            serialize: SerializeOptions {
                indent: loaded.config.indent,
            },
            language: loaded.config.language.clone(),
        }
    }

    pub fn paths(&self) -> ComponentPaths {
        ComponentPaths::new(&self.lwc_root, &self.labels_root, &self.component)
    }
}

/// Why a run stopped before writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Empty, or would escape the component root.
    InvalidComponentName(String),
    ComponentDirMissing(PathBuf),
    MarkupMissing(PathBuf),
    /// A label module already exists and the user did not confirm.
    OverwriteDeclined(PathBuf),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::InvalidComponentName(name) => {
                write!(f, "Invalid component name: \"{}\"", name)
            }
            AbortReason::ComponentDirMissing(path) => {
                write!(f, "Component directory not found: {}", path.display())
            }
            AbortReason::MarkupMissing(path) => {
                write!(f, "HTML file not found: {}", path.display())
            }
            AbortReason::OverwriteDeclined(path) => {
                write!(f, "Kept existing {}", path.display())
            }
        }
    }
}

#[derive(Debug)]
pub struct GenerationReport {
    pub paths: ComponentPaths,
    pub labels: LabelTable,
    pub metrics: RunMetrics,
    pub collisions: Vec<LabelCollision>,
}

#[derive(Debug)]
pub enum GenerateOutcome {
    Generated(GenerationReport),
    Aborted(AbortReason),
}

/// Check that the component name is usable and its template exists.
pub fn validate(paths: &ComponentPaths) -> Option<AbortReason> {
    let name = paths.component.as_str();
    let is_plain_name = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if !is_plain_name {
        return Some(AbortReason::InvalidComponentName(name.to_string()));
    }
    if !paths.component_dir.is_dir() {
        return Some(AbortReason::ComponentDirMissing(paths.component_dir.clone()));
    }
    if !paths.markup.is_file() {
        return Some(AbortReason::MarkupMissing(paths.markup.clone()));
    }
    None
}

/// Extract labels from the component template and write the three outputs.
///
/// `confirm_overwrite` is called with the module path only when a module was
/// generated before; returning `false` aborts without touching any file.
pub fn generate<F>(request: &GenerateRequest, confirm_overwrite: F) -> Result<GenerateOutcome>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    let paths = request.paths();
    if let Some(reason) = validate(&paths) {
        return Ok(GenerateOutcome::Aborted(reason));
    }

    let module_path = paths.module();
    if module_path.exists() && !confirm_overwrite(&module_path)? {
        return Ok(GenerateOutcome::Aborted(AbortReason::OverwriteDeclined(
            module_path,
        )));
    }

    let document = load_markup_file(&paths.markup)?;
    let extraction = extract(document, &request.rules, request.style);

    let markup = emit_markup(&extraction.document, &request.serialize);
    let module = emit_module(&extraction.labels);
    let metadata = emit_metadata(
        &extraction.labels,
        &MetadataOptions {
            category: &request.component,
            language: &request.language,
        },
    );

    fs::create_dir_all(&paths.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            paths.output_dir.display()
        )
    })?;
    write_files(
        &paths.output_dir,
        [
            (paths.generated_markup(), markup),
            (module_path, module),
            (paths.metadata(), metadata),
        ],
    )?;

    Ok(GenerateOutcome::Generated(GenerationReport {
        paths,
        labels: extraction.labels,
        metrics: extraction.metrics,
        collisions: extraction.collisions,
    }))
}

/// Stage every file in `dir` before replacing any target, so a write error
/// never leaves a partial file behind. Unpersisted temp files are removed on
/// drop.
fn write_files<const N: usize>(dir: &Path, files: [(PathBuf, String); N]) -> Result<()> {
    let mut staged = Vec::with_capacity(N);
    for (path, content) in files {
        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        staged.push((file, path));
    }

    for (file, path) in staged {
        file.persist(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
