//! Answer indicator icon
//!
//! A decorative sparkle shown next to generated answers. All visual
//! parameters are fixed.

/// Fill color of the answer icon
pub const ANSWER_ICON_FILL: &str = "rgba(238, 178, 187, 1)";
/// Accessible label of the answer icon
pub const ANSWER_ICON_LABEL: &str = "Answer logo";

/// Sparkle glyph, 28x28 filled
const SPARKLE_28_PATH: &str = "M10.06 17.94a3.5 3.5 0 0 0-1.4-.86L6.6 16.4a.9.9 0 0 1 0-1.7l2.06-.68a3.5 3.5 0 0 0 2.19-2.2l.68-2.05a.9.9 0 0 1 1.7 0l.68 2.06a3.5 3.5 0 0 0 2.2 2.2l2.05.67a.9.9 0 0 1 0 1.7l-2.06.68a3.5 3.5 0 0 0-2.2 2.2l-.67 2.05a.9.9 0 0 1-1.7 0l-.67-2.06a3.5 3.5 0 0 0-.8-1.33ZM20.6 8.68l-1.1-.36a1.5 1.5 0 0 1-.94-.95l-.36-1.1a.5.5 0 0 0-.94 0l-.36 1.1a1.5 1.5 0 0 1-.94.95l-1.1.36a.5.5 0 0 0 0 .94l1.1.36a1.5 1.5 0 0 1 .94.95l.36 1.1a.5.5 0 0 0 .94 0l.36-1.1a1.5 1.5 0 0 1 .95-.95l1.1-.36a.5.5 0 0 0 0-.94Z";

/// Immutable vector icon node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconElement {
    pub size: u32,
    pub fill: &'static str,
    pub path: &'static str,
    pub aria_label: &'static str,
    pub aria_hidden: bool,
}

impl IconElement {
    /// Attributes of the root `<svg>` element, in render order
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", self.size.to_string()),
            ("height", self.size.to_string()),
            ("viewBox", format!("0 0 {0} {0}", self.size)),
            ("fill", self.fill.to_string()),
            ("aria-hidden", self.aria_hidden.to_string()),
            ("aria-label", self.aria_label.to_string()),
        ]
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Render as SVG markup
    pub fn to_svg(&self) -> String {
        let attrs: String = self
            .attributes()
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, value))
            .collect();
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\"{}><path fill=\"{}\" d=\"{}\"/></svg>",
            attrs, self.fill, self.path
        )
    }
}

/// The answer icon
pub fn answer_icon() -> IconElement {
    IconElement {
        size: 28,
        fill: ANSWER_ICON_FILL,
        path: SPARKLE_28_PATH,
        aria_label: ANSWER_ICON_LABEL,
        aria_hidden: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_attributes() {
        let icon = answer_icon();

        assert_eq!(icon.attribute("aria-label").as_deref(), Some("Answer logo"));
        assert_eq!(icon.attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(icon.attribute("fill").as_deref(), Some(ANSWER_ICON_FILL));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(answer_icon(), answer_icon());
        assert_eq!(answer_icon().to_svg(), answer_icon().to_svg());
    }

    #[test]
    fn test_svg_markup() {
        let svg = answer_icon().to_svg();

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"aria-label="Answer logo""#));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.contains(r#"viewBox="0 0 28 28""#));
        assert!(svg.ends_with("</svg>"));
    }
}
