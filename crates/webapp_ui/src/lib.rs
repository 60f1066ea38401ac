//! Button primitive for the web front-end.
//!
//! The crate owns the Leptos `Button` component, the closed set of button kinds, and the
//! token vocabulary it requests from the external stylesheet. Concrete visual rules live in
//! the stylesheet; this crate only resolves token names to class names through
//! [`ButtonStyles`]. Icons are drawn from [`IconDefinition`] descriptors.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod error;
mod icon;
mod styles;

pub use button::{
    dispatch_click, Button, ButtonConfig, ButtonKind, ButtonPlan, ButtonType, ConfiguredButton,
    IconSlot,
};
pub use error::UiError;
pub use icon::{icons, lookup_icon, Icon, IconDefinition};
pub use styles::{provide_button_styles, use_button_styles, ButtonStyles, StyleToken};

/// Convenience imports for crates rendering buttons.
pub mod prelude {
    pub use crate::{
        icons, provide_button_styles, Button, ButtonConfig, ButtonKind, ButtonStyles, ButtonType,
        ConfiguredButton, Icon, IconDefinition,
    };
}
