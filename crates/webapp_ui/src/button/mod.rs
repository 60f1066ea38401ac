//! Button kinds, the configuration record, and the render plan consumed by the component.

use std::str::FromStr;

use leptos::*;
use serde::Deserialize;

use crate::icon::{deserialize_icon_name, IconDefinition};
use crate::styles::{ButtonStyles, StyleToken};
use crate::UiError;

mod component;

pub use component::{Button, ConfiguredButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Semantic visual variants of the button.
pub enum ButtonKind {
    /// Neutral button.
    Default,
    /// Emphasized action.
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Danger,
}

impl Default for ButtonKind {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonKind {
    /// Style token applied for this kind.
    pub const fn style_token(self) -> StyleToken {
        match self {
            Self::Default => StyleToken::Default,
            Self::Primary => StyleToken::Primary,
            Self::Secondary => StyleToken::Secondary,
            Self::Danger => StyleToken::Danger,
        }
    }

    /// Stable kind name.
    pub const fn token(self) -> &'static str {
        self.style_token().name()
    }
}

impl FromStr for ButtonKind {
    type Err = UiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "danger" => Ok(Self::Danger),
            other => Err(UiError::UnsupportedKind(other.to_string())),
        }
    }
}

impl TryFrom<&str> for ButtonKind {
    type Error = UiError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl TryFrom<String> for ButtonKind {
    type Error = UiError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
/// HTML `type` of the rendered element.
pub enum ButtonType {
    /// Plain button; never submits a form.
    Button,
    /// Form submit button.
    Submit,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

impl FromStr for ButtonType {
    type Err = UiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "button" => Ok(Self::Button),
            "submit" => Ok(Self::Submit),
            other => Err(UiError::UnsupportedType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ButtonType {
    type Error = UiError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Plain-data description of a button.
///
/// Every field is optional. Loaded from JSON, `kind` and `type` use their lowercase names and
/// `icon` names an entry of the built-in catalog.
pub struct ButtonConfig {
    /// Visual kind.
    pub kind: ButtonKind,
    /// Non-interactive when set. Read by [`ConfiguredButton`]; the [`Button`] component takes a
    /// reactive `disabled` prop instead.
    pub disabled: bool,
    /// Icon drawn ahead of the label.
    #[serde(deserialize_with = "deserialize_icon_name")]
    pub icon: Option<IconDefinition>,
    /// Text label.
    pub label: Option<String>,
    /// Part of a visually joined cluster; only the outer edges keep their limits.
    pub grouped: bool,
    /// Element type.
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    /// `data-testid` attribute.
    pub test_id: Option<String>,
    /// `aria-label` attribute.
    pub aria_label: Option<String>,
    /// Extra caller class, placed after the kind class.
    pub class_name: Option<String>,
    /// Element id.
    pub id: Option<String>,
    /// Id of the form the button belongs to.
    pub form: Option<String>,
    /// Drops the box around the button.
    pub no_box: bool,
}

impl ButtonConfig {
    /// Parses a JSON button description.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, on a `kind` outside the supported set (the message names the
    /// offending value), on an unsupported `type`, or on an icon missing from the catalog.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).inspect_err(|err| {
            logging::error!("button config rejected: {err}");
        })
    }

    /// Label text, when it is non-empty.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassPart {
    Token(StyleToken),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon placement resolved for one render.
pub struct IconSlot {
    /// Icon to draw.
    pub icon: IconDefinition,
    /// Whether a label follows the icon.
    pub with_text: bool,
}

impl IconSlot {
    /// Token applied to the icon, present only when a label follows it.
    pub fn token(&self) -> Option<StyleToken> {
        self.with_text.then_some(StyleToken::IconWithText)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the component needs to draw a button, computed from a [`ButtonConfig`].
///
/// Class order is fixed: base, grouped, kind, caller class, no-box, no-icon.
pub struct ButtonPlan {
    classes: Vec<ClassPart>,
    icon: Option<IconSlot>,
}

impl ButtonPlan {
    /// Builds the plan for `config`. `has_content` reports whether any child content follows
    /// the icon; a non-empty config `label` counts as content.
    pub fn new(config: &ButtonConfig, has_content: bool) -> Self {
        let has_content = has_content || config.label_text().is_some();
        let mut classes = vec![ClassPart::Token(StyleToken::Button)];
        if config.grouped {
            classes.push(ClassPart::Token(StyleToken::Grouped));
        }
        classes.push(ClassPart::Token(config.kind.style_token()));
        if let Some(class_name) = config.class_name.as_deref().filter(|name| !name.is_empty()) {
            classes.push(ClassPart::Custom(class_name.to_string()));
        }
        if config.no_box {
            classes.push(ClassPart::Token(StyleToken::NoBox));
        }
        if config.icon.is_none() {
            classes.push(ClassPart::Token(StyleToken::NoIcon));
        }

        let icon = config.icon.map(|icon| IconSlot {
            icon,
            with_text: has_content,
        });
        if icon.is_some() && !has_content && config.aria_label.is_none() {
            logging::debug_warn!(
                "icon-only button `{}` has no aria-label",
                config.id.as_deref().unwrap_or("<anonymous>")
            );
        }

        Self { classes, icon }
    }

    /// Builds the plan for a kind given by name.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnsupportedKind`] naming `kind` when it is not one of the supported
    /// kinds; no plan is produced in that case.
    pub fn from_kind_name(
        kind: &str,
        config: ButtonConfig,
        has_content: bool,
    ) -> Result<Self, UiError> {
        let kind = kind.parse::<ButtonKind>().inspect_err(|err| {
            logging::error!("button rejected: {err}");
        })?;
        Ok(Self::new(&ButtonConfig { kind, ..config }, has_content))
    }

    /// Resolved class names in application order.
    pub fn class_list(&self, styles: &ButtonStyles) -> Vec<String> {
        self.classes
            .iter()
            .map(|part| match part {
                ClassPart::Token(token) => styles.class_for(*token).to_string(),
                ClassPart::Custom(class) => class.clone(),
            })
            .filter(|class| !class.is_empty())
            .collect()
    }

    /// Space-joined class attribute value.
    pub fn class(&self, styles: &ButtonStyles) -> String {
        self.class_list(styles).join(" ")
    }

    /// Icon placement, if an icon is drawn.
    pub fn icon(&self) -> Option<IconSlot> {
        self.icon
    }

    /// Class for the icon element; empty when the icon stands alone.
    pub fn icon_class(&self, styles: &ButtonStyles) -> String {
        self.icon
            .and_then(|slot| slot.token())
            .map(|token| styles.class_for(token).to_string())
            .unwrap_or_default()
    }
}

/// Runs `handler` with `event` unless the button is disabled. Returns whether it ran.
pub fn dispatch_click<E: 'static>(disabled: bool, handler: Option<&Callback<E>>, event: E) -> bool {
    match handler {
        Some(handler) if !disabled => {
            handler.call(event);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::icon::icons;

    fn classes(config: &ButtonConfig, has_content: bool) -> Vec<String> {
        ButtonPlan::new(config, has_content).class_list(&ButtonStyles::default())
    }

    #[test]
    fn each_kind_adds_only_its_own_token() {
        for (kind, token) in [
            (ButtonKind::Default, "default"),
            (ButtonKind::Primary, "primary"),
            (ButtonKind::Secondary, "secondary"),
            (ButtonKind::Danger, "danger"),
        ] {
            let config = ButtonConfig {
                kind,
                icon: Some(icons::CHECK),
                ..ButtonConfig::default()
            };

            assert_eq!(classes(&config, true), vec!["button", token]);
        }
    }

    #[test]
    fn kind_names_parse_by_exact_match() {
        assert_eq!("primary".parse::<ButtonKind>().expect("kind"), ButtonKind::Primary);
        assert_eq!(ButtonKind::try_from("danger").expect("kind"), ButtonKind::Danger);
        assert!("Primary".parse::<ButtonKind>().is_err());
        assert!(" default".parse::<ButtonKind>().is_err());
    }

    #[test]
    fn unsupported_kind_fails_without_a_plan() {
        let err = ButtonPlan::from_kind_name("bogus", ButtonConfig::default(), true)
            .expect_err("bogus is not a kind");

        assert!(matches!(&err, UiError::UnsupportedKind(kind) if kind == "bogus"));
        assert_eq!(err.to_string(), "Unsupported kind bogus");
    }

    #[test]
    fn primary_text_button_without_icon() {
        let plan = ButtonPlan::from_kind_name("primary", ButtonConfig::default(), true)
            .expect("primary plan");

        assert_eq!(
            plan.class_list(&ButtonStyles::default()),
            vec!["button", "primary", "noIcon"]
        );
        assert!(plan.icon().is_none());
        assert_eq!(plan.icon_class(&ButtonStyles::default()), "");
    }

    #[test]
    fn danger_icon_only_button_has_no_spacing_token() {
        let config = ButtonConfig {
            icon: Some(icons::XMARK),
            aria_label: Some("Close".to_string()),
            ..ButtonConfig::default()
        };
        let plan = ButtonPlan::from_kind_name("danger", config, false).expect("danger plan");

        assert_eq!(plan.class(&ButtonStyles::default()), "button danger");
        assert_eq!(
            plan.icon(),
            Some(IconSlot {
                icon: icons::XMARK,
                with_text: false,
            })
        );
        assert_eq!(plan.icon_class(&ButtonStyles::default()), "");
    }

    #[test]
    fn icon_with_label_gets_spacing_token() {
        let config = ButtonConfig {
            icon: Some(icons::PLUS),
            label: Some("Add".to_string()),
            ..ButtonConfig::default()
        };
        let plan = ButtonPlan::new(&config, false);

        assert_eq!(plan.icon().map(|slot| slot.with_text), Some(true));
        assert_eq!(plan.icon_class(&ButtonStyles::default()), "iconWithText");
    }

    #[test]
    fn empty_label_does_not_count_as_text() {
        let config = ButtonConfig {
            icon: Some(icons::PLUS),
            label: Some(String::new()),
            aria_label: Some("Add".to_string()),
            ..ButtonConfig::default()
        };
        let plan = ButtonPlan::new(&config, false);

        assert_eq!(config.label_text(), None);
        assert_eq!(plan.icon().map(|slot| slot.with_text), Some(false));
        assert_eq!(plan.icon_class(&ButtonStyles::default()), "");
    }

    #[test]
    fn grouped_is_added_alongside_the_kind() {
        let config = ButtonConfig {
            kind: ButtonKind::Secondary,
            grouped: true,
            ..ButtonConfig::default()
        };

        assert_eq!(
            classes(&config, true),
            vec!["button", "grouped", "secondary", "noIcon"]
        );
    }

    #[test]
    fn caller_class_sits_between_kind_and_box_tokens() {
        let config = ButtonConfig {
            class_name: Some("toolbar-save".to_string()),
            no_box: true,
            ..ButtonConfig::default()
        };

        assert_eq!(
            classes(&config, true),
            vec!["button", "default", "toolbar-save", "noBox", "noIcon"]
        );
    }

    #[test]
    fn empty_caller_class_is_dropped() {
        let config = ButtonConfig {
            class_name: Some(String::new()),
            ..ButtonConfig::default()
        };

        assert_eq!(classes(&config, true), vec!["button", "default", "noIcon"]);
    }

    #[test]
    fn tokens_resolve_through_the_class_map() {
        let styles = ButtonStyles::from_json(
            r#"{"button":"Button_button__a","primary":"Button_primary__b","noIcon":"Button_noIcon__c"}"#,
        )
        .expect("class map");
        let config = ButtonConfig {
            kind: ButtonKind::Primary,
            ..ButtonConfig::default()
        };

        assert_eq!(
            ButtonPlan::new(&config, true).class(&styles),
            "Button_button__a Button_primary__b Button_noIcon__c"
        );
    }

    #[test]
    fn config_loads_from_json() {
        let config = ButtonConfig::from_json(
            r#"{"kind":"danger","icon":"trash","label":"Delete","type":"submit","form":"edit","testId":"delete-row","grouped":true}"#,
        )
        .expect("config");

        assert_eq!(
            config,
            ButtonConfig {
                kind: ButtonKind::Danger,
                icon: Some(icons::TRASH),
                label: Some("Delete".to_string()),
                button_type: ButtonType::Submit,
                form: Some("edit".to_string()),
                test_id: Some("delete-row".to_string()),
                grouped: true,
                ..ButtonConfig::default()
            }
        );
    }

    #[test]
    fn config_with_unsupported_kind_names_the_value() {
        let err = ButtonConfig::from_json(r#"{"kind":"bogus"}"#).expect_err("bogus kind");

        assert!(err.to_string().contains("Unsupported kind bogus"));
    }

    #[test]
    fn config_rejects_unknown_type_and_icon() {
        let err = ButtonConfig::from_json(r#"{"type":"reset"}"#).expect_err("reset type");
        assert!(err.to_string().contains("Unsupported button type reset"));

        let err = ButtonConfig::from_json(r#"{"icon":"rocket"}"#).expect_err("unknown icon");
        assert!(err.to_string().contains("Unknown icon rocket"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ButtonConfig::from_json("{}").expect("config");

        assert_eq!(config, ButtonConfig::default());
        assert_eq!(config.kind, ButtonKind::Default);
        assert_eq!(config.button_type.as_str(), "button");
    }

    #[test]
    fn click_reaches_handler_only_while_enabled() {
        let runtime = create_runtime();
        let clicks = Rc::new(Cell::new(0));
        let handler = Callback::new({
            let clicks = Rc::clone(&clicks);
            move |count: u32| clicks.set(clicks.get() + count)
        });

        assert!(dispatch_click(false, Some(&handler), 1));
        assert!(!dispatch_click(true, Some(&handler), 10));
        assert!(!dispatch_click::<u32>(false, None, 100));
        assert_eq!(clicks.get(), 1);

        runtime.dispose();
    }
}
