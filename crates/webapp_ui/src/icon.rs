//! Icon descriptors and the inline SVG renderer used by the button primitive.
//!
//! Descriptors follow the Font Awesome shape (prefix, name, view box size, single path) so
//! icon sets exported from that ecosystem can be dropped in without conversion. The bundled
//! catalog is a small subset of Font Awesome Free solid icons.

use leptos::*;
use serde::{Deserialize, Deserializer};

use crate::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A single-path SVG icon.
pub struct IconDefinition {
    /// Icon set prefix, e.g. `fas`.
    pub prefix: &'static str,
    /// Icon name within its set.
    pub name: &'static str,
    /// View box width.
    pub width: u16,
    /// View box height.
    pub height: u16,
    /// SVG path data.
    pub path: &'static str,
}

impl IconDefinition {
    /// SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Built-in icon catalog.
pub mod icons {
    use super::IconDefinition;

    /// Checkmark.
    pub const CHECK: IconDefinition = IconDefinition {
        prefix: "fas",
        name: "check",
        width: 448,
        height: 512,
        path: "M438.6 105.4c12.5 12.5 12.5 32.8 0 45.3l-256 256c-12.5 12.5-32.8 12.5-45.3 0l-128-128c-12.5-12.5-12.5-32.8 0-45.3s32.8-12.5 45.3 0L160 338.7 393.4 105.4c12.5-12.5 32.8-12.5 45.3 0z",
    };

    /// Dismiss cross.
    pub const XMARK: IconDefinition = IconDefinition {
        prefix: "fas",
        name: "xmark",
        width: 384,
        height: 512,
        path: "M342.6 150.6c12.5-12.5 12.5-32.8 0-45.3s-32.8-12.5-45.3 0L192 210.7 86.6 105.4c-12.5-12.5-32.8-12.5-45.3 0s-12.5 32.8 0 45.3L146.7 256 41.4 361.4c-12.5 12.5-12.5 32.8 0 45.3s32.8 12.5 45.3 0L192 301.3 297.4 406.6c12.5 12.5 32.8 12.5 45.3 0s12.5-32.8 0-45.3L237.3 256 342.6 150.6z",
    };

    /// Plus sign.
    pub const PLUS: IconDefinition = IconDefinition {
        prefix: "fas",
        name: "plus",
        width: 448,
        height: 512,
        path: "M256 80c0-17.7-14.3-32-32-32s-32 14.3-32 32V224H48c-17.7 0-32 14.3-32 32s14.3 32 32 32H192V432c0 17.7 14.3 32 32 32s32-14.3 32-32V288H400c17.7 0 32-14.3 32-32s-14.3-32-32-32H256V80z",
    };

    /// Trash can.
    pub const TRASH: IconDefinition = IconDefinition {
        prefix: "fas",
        name: "trash",
        width: 448,
        height: 512,
        path: "M135.2 17.7L128 32H32C14.3 32 0 46.3 0 64S14.3 96 32 96H416c17.7 0 32-14.3 32-32s-14.3-32-32-32H320l-7.2-14.3C307.4 6.8 296.3 0 284.2 0H163.8c-12.1 0-23.2 6.8-28.6 17.7zM416 128H32L53.2 467c1.6 25.3 22.6 45 47.9 45H346.9c25.3 0 46.3-19.7 47.9-45L416 128z",
    };

    pub(crate) const ALL: [IconDefinition; 4] = [CHECK, XMARK, PLUS, TRASH];
}

/// Looks up a catalog icon by name.
///
/// # Errors
///
/// Returns [`UiError::UnknownIcon`] when `name` is not in the catalog.
pub fn lookup_icon(name: &str) -> Result<IconDefinition, UiError> {
    icons::ALL
        .into_iter()
        .find(|icon| icon.name == name)
        .ok_or_else(|| UiError::UnknownIcon(name.to_string()))
}

pub(crate) fn deserialize_icon_name<'de, D>(
    deserializer: D,
) -> Result<Option<IconDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    Option::<String>::deserialize(deserializer)?
        .map(|name| lookup_icon(&name).map_err(D::Error::custom))
        .transpose()
}

#[component]
/// Renders an icon descriptor as inline, decorative SVG.
pub fn Icon(
    /// Icon to draw.
    icon: IconDefinition,
    /// Optional class name; empty strings are omitted.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let class = (!class.is_empty()).then_some(class);

    view! {
        <svg
            class=class
            data-prefix=icon.prefix
            data-icon=icon.name
            xmlns="http://www.w3.org/2000/svg"
            viewBox=icon.view_box()
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
        >
            <path d=icon.path />
        </svg>
    }
}
