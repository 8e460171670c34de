use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, State};
use wasm_bindgen::JsValue;

use appdeck_common::{CrdInfo, Parameter};

use crate::components::{Breadcrumb, Crumb};
use crate::format::{setting_display_value, visible_settings};

/// Read-only workload summary: breadcrumb, descriptor line, settings table
/// and one parent-controlled action button. Everything shown is supplied by
/// the parent; the component fetches nothing and keeps no state of its own.
#[component]
pub fn Workload(
    /// Action button label.
    btn_value: String,
    /// Route the action button navigates to.
    pathname: String,
    /// Workload title, also the breadcrumb leaf.
    title: String,
    /// Descriptor of the backing custom resource, when known.
    #[prop(optional_no_strip)]
    crd_info: Option<CrdInfo>,
    /// Opaque bag attached to the action button's navigation.
    #[prop(optional_no_strip)]
    state: Option<serde_json::Value>,
    /// Configurable settings, shown in input order.
    settings: Vec<Parameter>,
    /// Whether the action button is visible. The button stays mounted either
    /// way; only its display style toggles.
    btn_is_show: bool,
) -> impl IntoView {
    let display = if btn_is_show { "block" } else { "none" };

    let navigate = use_navigate();
    let on_action = move |_| {
        let history_state = state.as_ref().map(|bag| JsValue::from_str(&bag.to_string()));
        navigate(
            &pathname,
            NavigateOptions {
                state: State(history_state),
                ..Default::default()
            },
        );
    };

    view! {
        <div class="workload-detail">
            <Breadcrumb crumbs=vec![
                Crumb::Link { label: "Home", href: "/" },
                Crumb::Text("Workloads".to_string()),
                Crumb::Text(title.clone()),
            ]/>

            <div class="workload-summary">
                <p class="title">{title}</p>
                {match crd_info {
                    Some(info) => view! {
                        <p class="crd-line">
                            {info.api_version}
                            <span>",kind="</span>
                            {info.kind}
                        </p>
                    }
                    .into_view(),
                    // Empty line keeps the layout height when no descriptor
                    // was supplied.
                    None => view! { <p class="crd-line"></p> }.into_view(),
                }}

                <p class="title">"Configurable Settings:"</p>
                {visible_settings(&settings)
                    .into_iter()
                    .map(|item| view! {
                        <div class="setting-row">
                            <span class="setting-name">{item.name.clone()}</span>
                            <span class="setting-value">{setting_display_value(item)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button
                class="btn btn-primary create-button"
                style:display=display
                on:click=on_action
            >
                {btn_value}
            </button>
        </div>
    }
}
