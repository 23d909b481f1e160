use {
    crate::types::{LogicalPixels, LpxSuffix},
    anyhow::{Context as _, Result},
    once_cell::sync::Lazy,
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, path::Path},
    tracing::warn,
};

// Dimension names known to the bundled widgets.
pub const CONTROL_MIN_WIDTH: &str = "control-min-width";
pub const TOOL_BUTTON_MIN_WIDTH: &str = "tool-button-min-width";
pub const TOOL_BUTTON_HEIGHT: &str = "tool-button-height";
pub const TOOL_BUTTON_PADDING: &str = "tool-button-padding";
pub const GLYPH_ADVANCE: &str = "glyph-advance";
pub const GLYPH_DESCENT: &str = "glyph-descent";

const FALLBACK_DIMENSION: LogicalPixels = LogicalPixels::from_f32(16.0);

static DEFAULT_DIMENSIONS: Lazy<HashMap<String, LogicalPixels>> = Lazy::new(|| {
    [
        (CONTROL_MIN_WIDTH, 80.0),
        (TOOL_BUTTON_MIN_WIDTH, 64.0),
        (TOOL_BUTTON_HEIGHT, 48.0),
        (TOOL_BUTTON_PADDING, 12.0),
        (GLYPH_ADVANCE, 8.0),
        (GLYPH_DESCENT, 12.0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.lpx()))
    .collect()
});

/// Named scale-independent dimensions used by widgets.
///
/// A theme starts from the built-in defaults; loading a file overlays the
/// values it names and keeps the defaults for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    dimensions: HashMap<String, LogicalPixels>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS.clone(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON file mapping dimension names to logical pixel values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)?;
        let loaded: HashMap<String, LogicalPixels> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse theme file {path:?}"))?;
        let mut theme = Self::default();
        theme.dimensions.extend(loaded);
        Ok(theme)
    }

    pub fn set_dimension(&mut self, name: impl Into<String>, value: LogicalPixels) -> &mut Self {
        self.dimensions.insert(name.into(), value);
        self
    }

    pub fn dimension(&self, name: &str) -> LogicalPixels {
        if let Some(value) = self.dimensions.get(name) {
            *value
        } else {
            warn!("unknown theme dimension {name:?}");
            FALLBACK_DIMENSION
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::types::PpxSuffix};

    #[test]
    fn defaults_and_overrides() {
        let mut theme = Theme::new();
        assert_eq!(theme.dimension(CONTROL_MIN_WIDTH), 80.0.lpx());
        theme.set_dimension(CONTROL_MIN_WIDTH, 100.0.lpx());
        assert_eq!(theme.dimension(CONTROL_MIN_WIDTH), 100.0.lpx());
    }

    #[test]
    fn unknown_name_falls_back() {
        let theme = Theme::new();
        assert_eq!(theme.dimension("no-such-dimension"), FALLBACK_DIMENSION);
    }

    #[test]
    fn parses_flat_json() {
        let dimensions: HashMap<String, LogicalPixels> =
            serde_json::from_str(r#"{ "control-min-width": 96.0 }"#).unwrap();
        assert_eq!(dimensions["control-min-width"], 96.0.lpx());
    }

    #[test]
    fn physical_conversion() {
        let theme = Theme::new();
        assert_eq!(theme.dimension(TOOL_BUTTON_HEIGHT).to_physical(2.0), 96.ppx());
    }
}
