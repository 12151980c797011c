//! Injects the graph script and stylesheet into notebook output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::loader::{LoadError, load_file};
use crate::markup::Markup;
use crate::template::{Template, TemplateError};

pub const DEFAULT_RESOURCE_DIR: &str = "resources";
pub const SCRIPT_FILE_NAME: &str = "test.js";
pub const STYLESHEET_FILE_NAME: &str = "test.css";

/// Id of the element the graph script draws into
pub const GRAPH_CONTAINER_ID: &str = "graph-div";

const GRAPH_TEMPLATE: Template<'static> = Template::new(
    r#"
    <style> $css_text </style>
    <div id="graph-div"></div>
    <script> $js_text </script>
    "#,
);

/// Errors that can occur while rendering the graph markup
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Renders the graph container with its script and stylesheet inlined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRenderer {
    script: PathBuf,
    stylesheet: PathBuf,
}

impl GraphRenderer {
    pub fn new(script: impl Into<PathBuf>, stylesheet: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            stylesheet: stylesheet.into(),
        }
    }

    /// Use `test.js` and `test.css` inside `dir`
    pub fn from_resource_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(SCRIPT_FILE_NAME), dir.join(STYLESHEET_FILE_NAME))
    }

    pub fn script_path(&self) -> &Path {
        &self.script
    }

    pub fn stylesheet_path(&self) -> &Path {
        &self.stylesheet
    }

    /// Read both assets and substitute them into the container template.
    ///
    /// Assets are read fresh on every call. Their text is inserted verbatim,
    /// so content containing `</style>` or `</script>` breaks the markup.
    pub fn render(&self) -> Result<Markup, RenderError> {
        log::debug!(
            "Rendering graph from {} and {}",
            self.script.display(),
            self.stylesheet.display()
        );

        let js_text = load_file(&self.script)?;
        let css_text = load_file(&self.stylesheet)?;

        let values = HashMap::from([("css_text", css_text), ("js_text", js_text)]);
        let html = GRAPH_TEMPLATE.substitute(&values)?;

        Ok(Markup::new(html))
    }
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::from_resource_dir(DEFAULT_RESOURCE_DIR)
    }
}

/// Render the graph from `resources/test.js` and `resources/test.css`,
/// relative to the working directory
pub fn render_graph() -> Result<Markup, RenderError> {
    GraphRenderer::default().render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders() {
        assert_eq!(GRAPH_TEMPLATE.placeholders(), vec!["css_text", "js_text"]);
        assert!(
            GRAPH_TEMPLATE
                .source()
                .contains(&format!("<div id=\"{GRAPH_CONTAINER_ID}\"></div>"))
        );
    }

    #[test]
    fn test_default_paths() {
        let renderer = GraphRenderer::default();
        assert_eq!(renderer.script_path(), Path::new("resources/test.js"));
        assert_eq!(renderer.stylesheet_path(), Path::new("resources/test.css"));
    }

    #[test]
    fn test_render_exact_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test.js"), "draw();").unwrap();
        std::fs::write(dir.path().join("test.css"), "svg{}").unwrap();

        let markup = GraphRenderer::from_resource_dir(dir.path())
            .render()
            .unwrap();
        assert_eq!(
            markup.as_str(),
            "\n    <style> svg{} </style>\n    <div id=\"graph-div\"></div>\n    <script> draw(); </script>\n    "
        );
    }

    #[test]
    fn test_missing_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test.js"), "draw();").unwrap();

        let err = GraphRenderer::from_resource_dir(dir.path())
            .render()
            .unwrap_err();
        match err {
            RenderError::Load(e) => assert!(e.path().ends_with("test.css")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
