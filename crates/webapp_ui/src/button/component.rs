use leptos::ev::MouseEvent;

use super::*;
use crate::icon::Icon;
use crate::styles::use_button_styles;

fn render_button(
    config: ButtonConfig,
    disabled: MaybeSignal<bool>,
    on_click: Option<Callback<MouseEvent>>,
    content: Option<View>,
) -> impl IntoView {
    let styles = use_button_styles();
    let plan = ButtonPlan::new(&config, content.is_some());
    let icon_class = plan.icon_class(&styles);
    let ButtonConfig {
        button_type,
        test_id,
        aria_label,
        id,
        form,
        ..
    } = config;

    view! {
        <button
            id=id
            type=button_type.as_str()
            class=plan.class(&styles)
            data-testid=test_id
            disabled=move || disabled.get()
            form=form
            aria-label=aria_label
            on:click=move |ev| {
                dispatch_click(disabled.get_untracked(), on_click.as_ref(), ev);
            }
        >
            {plan.icon().map(|slot| view! { <Icon icon=slot.icon class=icon_class /> })}
            {content}
        </button>
    }
}

#[component]
/// Styled button with an optional leading icon, grouping, and kind-specific styling.
pub fn Button(
    #[prop(default = ButtonKind::Default)] kind: ButtonKind,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconDefinition>,
    #[prop(optional)] grouped: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] test_id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] form: Option<String>,
    #[prop(optional)] no_box: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = ButtonConfig {
        kind,
        icon,
        grouped,
        button_type,
        test_id,
        aria_label,
        class_name,
        id,
        form,
        no_box,
        ..ButtonConfig::default()
    };
    let content = children.map(|children| children().into_view());
    render_button(config, disabled, on_click, content)
}

#[component]
/// Renders a button from a plain [`ButtonConfig`], using its `label` as the content.
pub fn ConfiguredButton(
    config: ButtonConfig,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let disabled = MaybeSignal::Static(config.disabled);
    let content = config.label_text().map(|label| label.to_string().into_view());
    render_button(config, disabled, on_click, content)
}
