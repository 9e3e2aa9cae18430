//! Construction-time switch attributes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use twinswitch_core::{
    Choice, DEFAULT_CHECKED, DEFAULT_TOUCH_SLOP_DP, DEFAULT_UNCHECKED, Density, Host, Padding,
    Rgba, Size, SwitchStyle, ToggleSwitch, glyphs,
};

use crate::ConfigError;

/// Switch attributes as written in a config file.
///
/// Every field is optional. Lengths are in density-independent pixels and
/// are converted with `density` on resolution.
///
/// # Example
///
/// ```rust
/// use twinswitch_config::SwitchConfig;
///
/// let config = SwitchConfig::from_toml(r##"
///     color_checked = "#FF5722"
///     is_male = false
///     density = 2.0
///
///     [padding]
///     start = 4
///     end = 4
/// "##).unwrap();
///
/// let resolved = config.resolve();
/// assert!(!resolved.initial.is_a());
/// assert_eq!(resolved.style.padding.start, 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Selected-zone color (`#RRGGBB`, `#AARRGGBB`, or a color name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_checked: Option<String>,

    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_unchecked: Option<String>,

    /// Initial selection: `true` for A.
    #[serde(alias = "is_male", skip_serializing_if = "Option::is_none")]
    pub selected_a: Option<bool>,

    /// Physical pixels per dp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,

    /// Inner padding in dp.
    pub padding: PaddingConfig,

    /// Tap tolerance in dp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_slop_dp: Option<f32>,

    /// Width used when the host leaves the width unconstrained, in dp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width_dp: Option<f32>,

    /// Height used when the host leaves the height unconstrained, in dp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_dp: Option<f32>,

    /// Fill color of the built-in icons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

/// Per-edge padding in dp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    /// Top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Bottom edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    /// Leading edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f32>,
    /// Trailing edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f32>,
}

/// Fully resolved construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Visual style in pixels.
    pub style: SwitchStyle,
    /// Initial selection.
    pub initial: Choice,
    /// Fill color of the built-in icons.
    pub icon_fill: Rgba,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            style: SwitchStyle::default(),
            initial: Choice::A,
            icon_fill: glyphs::DEFAULT_FILL,
        }
    }
}

impl ResolvedConfig {
    /// Build a switch with the built-in icons in `icon_fill`.
    pub fn build<H: Host>(&self, host: H) -> ToggleSwitch<H> {
        ToggleSwitch::new(self.style.clone(), host)
            .with_glyphs(
                glyphs::male().with_fill(self.icon_fill),
                glyphs::female().with_fill(self.icon_fill),
            )
            .with_selected(self.initial)
    }
}

fn color_or(
    field: &'static str,
    value: Option<&str>,
    default: Rgba,
    on_error: &mut dyn FnMut(ConfigError),
) -> Rgba {
    match value.map(Rgba::parse) {
        None => default,
        Some(Ok(color)) => color,
        Some(Err(source)) => {
            on_error(ConfigError::InvalidColor { field, source });
            default
        }
    }
}

fn length_or(
    field: &'static str,
    value: Option<f32>,
    default: f32,
    on_error: &mut dyn FnMut(ConfigError),
) -> f32 {
    match value {
        None => default,
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            on_error(ConfigError::InvalidValue {
                field,
                reason: format!("{v} is not a non-negative length"),
            });
            default
        }
    }
}

impl SwitchConfig {
    /// Parse attributes from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load attributes from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load attributes, falling back to defaults if the file is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded switch config");
                config
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(path = %path.display(), "no switch config, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unusable switch config, using defaults");
                Self::default()
            }
        }
    }

    /// Save attributes to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Resolve to pixel values. Invalid attributes are logged and replaced by defaults.
    pub fn resolve(&self) -> ResolvedConfig {
        self.resolve_with(&mut |err: ConfigError| {
            tracing::warn!(error = %err, "invalid switch attribute, using default");
        })
    }

    /// Resolve to pixel values, failing on the first invalid attribute.
    pub fn resolve_strict(&self) -> Result<ResolvedConfig, ConfigError> {
        let mut first = None;
        let resolved = self.resolve_with(&mut |err: ConfigError| {
            first.get_or_insert(err);
        });
        match first {
            Some(err) => Err(err),
            None => Ok(resolved),
        }
    }

    fn resolve_with(&self, on_error: &mut dyn FnMut(ConfigError)) -> ResolvedConfig {
        let density = match self.density {
            None => Density::default(),
            Some(d) if d.is_finite() && d > 0.0 => Density(d),
            Some(d) => {
                on_error(ConfigError::InvalidValue {
                    field: "density",
                    reason: format!("{d} is not a positive scale"),
                });
                Density::default()
            }
        };

        let px = |dp: f32| density.dp_to_px(dp);
        let mut dp = |field: &'static str, value: Option<f32>| length_or(field, value, 0.0, on_error);
        let padding = Padding {
            top: px(dp("padding.top", self.padding.top)),
            bottom: px(dp("padding.bottom", self.padding.bottom)),
            start: px(dp("padding.start", self.padding.start)),
            end: px(dp("padding.end", self.padding.end)),
        };
        let min_size = Size::new(
            px(dp("min_width_dp", self.min_width_dp)),
            px(dp("min_height_dp", self.min_height_dp)),
        );
        let touch_slop = density.dp_to_px_f32(length_or(
            "touch_slop_dp",
            self.touch_slop_dp,
            DEFAULT_TOUCH_SLOP_DP,
            on_error,
        ));

        let style = SwitchStyle::default()
            .checked(color_or(
                "color_checked",
                self.color_checked.as_deref(),
                DEFAULT_CHECKED,
                on_error,
            ))
            .unchecked(color_or(
                "color_unchecked",
                self.color_unchecked.as_deref(),
                DEFAULT_UNCHECKED,
                on_error,
            ))
            .padding(padding)
            .touch_slop(touch_slop)
            .min_size(min_size);

        ResolvedConfig {
            style,
            initial: Choice::from_is_a(self.selected_a.unwrap_or(true)),
            icon_fill: color_or(
                "icon_color",
                self.icon_color.as_deref(),
                glyphs::DEFAULT_FILL,
                on_error,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = SwitchConfig::default().resolve();
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.style.checked, Rgba::from_rgb(0x03, 0xA9, 0xF4));
        assert_eq!(resolved.style.unchecked, Rgba::from_rgb(0xE0, 0xE0, 0xE0));
        assert!(resolved.initial.is_a());
    }

    #[test]
    fn malformed_colors_fall_back() {
        let config = SwitchConfig {
            color_checked: Some("#XYZ".to_string()),
            color_unchecked: Some("navy".to_string()),
            ..Default::default()
        };
        let resolved = config.resolve();
        assert_eq!(resolved.style.checked, DEFAULT_CHECKED);
        assert_eq!(resolved.style.unchecked, Rgba::from_rgb(0, 0, 0x80));
    }

    #[test]
    fn strict_resolution_reports_first_error() {
        let config = SwitchConfig {
            color_checked: Some("mauve".to_string()),
            density: Some(-1.0),
            ..Default::default()
        };
        let err = config.resolve_strict().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field: "density", .. }),
            "got: {err}"
        );
    }

    #[test]
    fn dp_values_scale_with_density() {
        let config = SwitchConfig {
            density: Some(2.0),
            padding: PaddingConfig {
                top: Some(2.0),
                bottom: Some(2.0),
                start: Some(6.0),
                end: Some(-1.0),
            },
            touch_slop_dp: Some(4.0),
            min_width_dp: Some(120.0),
            min_height_dp: Some(40.0),
            ..Default::default()
        };
        let resolved = config.resolve();
        assert_eq!(resolved.style.padding.top, 4);
        assert_eq!(resolved.style.padding.start, 12);
        assert_eq!(resolved.style.padding.end, 0);
        assert_eq!(resolved.style.touch_slop, 8.0);
        assert_eq!(resolved.style.min_size, Size::new(240, 80));
    }

    #[test]
    fn is_male_alias_sets_initial_selection() {
        let config = SwitchConfig::from_toml("is_male = false").unwrap();
        assert_eq!(config.selected_a, Some(false));
        assert_eq!(config.resolve().initial, Choice::B);
    }

    #[test]
    fn build_applies_initial_and_style() {
        let config = SwitchConfig::from_toml(
            r##"
            selected_a = false
            color_checked = "#FF5722"
            "##,
        )
        .unwrap();
        let switch = config.resolve().build(());
        assert!(!switch.is_selected_a());
        assert_eq!(switch.style().checked, Rgba::from_rgb(0xFF, 0x57, 0x22));
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        assert!(SwitchConfig::from_toml("selected_a = \"yes\"").is_err());
    }
}
