//! Pushes a size transition into the already-rendered graph.
//!
//! The emitted script refers to the global `svg` selection created by the
//! graph script, so it only does anything after the graph markup has been
//! displayed in the same page.

use std::collections::HashMap;
use std::fmt::Display;

use crate::markup::Markup;
use crate::template::Template;

/// Element id of the rectangle the graph script draws
pub const DEFAULT_TARGET: &str = "my-rect";
pub const DEFAULT_DURATION_MS: u64 = 1000;

const TRANSITION_TEMPLATE: Template<'static> = Template::new(
    r#"
    <script>
    svg.select('#$target')
        .transition()
        .duration($duration)
        .attr("width", $width)
        .attr("height", $height);
    </script>
    "#,
);

/// An animated width/height change applied to one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    target: String,
    duration_ms: u64,
}

impl Transition {
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Id of the element to animate, without the leading `#`
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Build the script that animates the target to `width` x `height`.
    ///
    /// Both values are inserted as their `Display` text with no validation
    /// or escaping. The target id is inserted the same way.
    pub fn render(&self, width: impl Display, height: impl Display) -> Markup {
        let values = HashMap::from([
            ("target", self.target.clone()),
            ("duration", self.duration_ms.to_string()),
            ("width", width.to_string()),
            ("height", height.to_string()),
        ]);
        log::debug!(
            "Transition #{} to {} x {} over {}ms",
            self.target,
            values["width"],
            values["height"],
            self.duration_ms
        );
        Markup::new(TRANSITION_TEMPLATE.safe_substitute(&values))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

/// Animate `#my-rect` to the given size over one second
pub fn update_transition(width: impl Display, height: impl Display) -> Markup {
    Transition::new().render(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders() {
        assert_eq!(
            TRANSITION_TEMPLATE.placeholders(),
            vec!["target", "duration", "width", "height"]
        );
    }

    #[test]
    fn test_update_transition_exact_output() {
        let markup = update_transition(100, 50);
        assert_eq!(
            markup.as_str(),
            "\n    <script>\n    svg.select('#my-rect')\n        .transition()\n        .duration(1000)\n        .attr(\"width\", 100)\n        .attr(\"height\", 50);\n    </script>\n    "
        );
    }

    #[test]
    fn test_float_values() {
        let markup = update_transition(12.5, 0.25);
        assert!(markup.as_str().contains(".attr(\"width\", 12.5)"));
        assert!(markup.as_str().contains(".attr(\"height\", 0.25)"));
    }

    #[test]
    fn test_custom_target_and_duration() {
        let markup = Transition::new()
            .with_target("other-rect")
            .with_duration(250)
            .render(10, 20);
        assert!(markup.as_str().contains("svg.select('#other-rect')"));
        assert!(markup.as_str().contains(".duration(250)"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let markup = update_transition("0); alert('x'", 1);
        assert!(markup.as_str().contains(".attr(\"width\", 0); alert('x')\n"));
    }
}
