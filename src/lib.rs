//! Notebook helpers for a d3 graph visualization.
//!
//! [`render_graph`] inlines the graph script and stylesheet next to the
//! container element they draw into. [`update_transition`] emits a follow-up
//! script that animates the drawn rectangle to a new size. Both return
//! [`Markup`], which a [`DisplaySink`] hands to the notebook host.

pub mod config;
pub mod display;
pub mod graph;
pub mod loader;
pub mod markup;
pub mod template;
pub mod transition;

pub use config::{Config, ConfigError};
pub use display::{BundleSink, DisplayError, DisplaySink, EvcxrSink, HtmlSink, MemorySink};
pub use graph::{GraphRenderer, RenderError, render_graph};
pub use loader::{LoadError, load_file};
pub use markup::Markup;
pub use template::{Template, TemplateError};
pub use transition::{Transition, update_transition};
