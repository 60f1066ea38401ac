//! Style token vocabulary and the class map that resolves tokens to concrete class names.
//!
//! The stylesheet itself lives outside this crate. Components only ask for tokens by name;
//! the active [`ButtonStyles`] map (usually the JSON class map emitted by a CSS-module
//! bundler) turns each token into the class the stylesheet actually defines.

use leptos::*;
use serde::Deserialize;

use crate::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named style tokens requested by the button primitive.
pub enum StyleToken {
    /// Base button surface, always applied.
    Button,
    /// Member of a visually joined button cluster.
    Grouped,
    /// Neutral kind.
    Default,
    /// Emphasized kind.
    Primary,
    /// Secondary kind.
    Secondary,
    /// Destructive kind.
    Danger,
    /// Drops the box around the button.
    NoBox,
    /// Applied when the button has no icon.
    NoIcon,
    /// Spacing between an icon and the label that follows it.
    IconWithText,
}

impl StyleToken {
    /// Stable token name, matching the key used in stylesheet class maps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Grouped => "grouped",
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::NoBox => "noBox",
            Self::NoIcon => "noIcon",
            Self::IconWithText => "iconWithText",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Token-to-class map for the button stylesheet.
///
/// Keys missing from a loaded map keep their default class, which is the token name itself.
pub struct ButtonStyles {
    button: String,
    grouped: String,
    default: String,
    primary: String,
    secondary: String,
    danger: String,
    no_box: String,
    no_icon: String,
    icon_with_text: String,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            button: StyleToken::Button.name().to_string(),
            grouped: StyleToken::Grouped.name().to_string(),
            default: StyleToken::Default.name().to_string(),
            primary: StyleToken::Primary.name().to_string(),
            secondary: StyleToken::Secondary.name().to_string(),
            danger: StyleToken::Danger.name().to_string(),
            no_box: StyleToken::NoBox.name().to_string(),
            no_icon: StyleToken::NoIcon.name().to_string(),
            icon_with_text: StyleToken::IconWithText.name().to_string(),
        }
    }
}

impl ButtonStyles {
    /// Parses a CSS-module style class map such as `{"button": "Button_button__a1"}`.
    ///
    /// Unknown keys are ignored so the full module export can be passed through as-is.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::StyleMap`] when `raw` is not a JSON object of strings.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Concrete class name for `token`.
    pub fn class_for(&self, token: StyleToken) -> &str {
        match token {
            StyleToken::Button => &self.button,
            StyleToken::Grouped => &self.grouped,
            StyleToken::Default => &self.default,
            StyleToken::Primary => &self.primary,
            StyleToken::Secondary => &self.secondary,
            StyleToken::Danger => &self.danger,
            StyleToken::NoBox => &self.no_box,
            StyleToken::NoIcon => &self.no_icon,
            StyleToken::IconWithText => &self.icon_with_text,
        }
    }
}

/// Makes `styles` the class map used by buttons rendered below the current owner.
pub fn provide_button_styles(styles: ButtonStyles) {
    provide_context(styles);
}

/// Active class map, or the token-name defaults when no provider is mounted.
pub fn use_button_styles() -> ButtonStyles {
    use_context::<ButtonStyles>().unwrap_or_default()
}
