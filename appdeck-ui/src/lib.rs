//! Appdeck dashboard - Leptos-based WebAssembly UI
//!
//! Client-side rendered dashboard for an application-delivery control
//! plane: lists the applications deployed in the selected environment and
//! renders workload detail screens, against the backend REST API.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
mod config;
pub mod format;
mod pages;
pub mod state;

use pages::{ApplicationCreate, ApplicationDetail, ApplicationList};
use state::CurrentEnv;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Environment selection is written by the navbar selector and read by
    // the routed views.
    let current_env = CurrentEnv(create_rw_signal(None));
    provide_context(current_env);

    view! {
        <Stylesheet id="leptos" href="/pkg/appdeck-ui.css"/>
        <Title text="Appdeck - Application Delivery Dashboard"/>
        <Meta name="description" content="Appdeck application delivery dashboard"/>

        <Router>
            <nav class="navbar">
                <div class="navbar-brand">
                    <h1>"Appdeck"</h1>
                    <span class="tagline">"Application Delivery Dashboard"</span>
                </div>
                <div class="navbar-menu">
                    <A href="/" class="navbar-item">"Applications"</A>
                    <A href="/applications/create" class="navbar-item">"Create"</A>
                </div>
                <div class="navbar-env">
                    <EnvSelect/>
                </div>
            </nav>

            <main class="container">
                <Routes>
                    <Route path="/" view=ApplicationList/>
                    <Route path="/applications/create" view=ApplicationCreate/>
                    <Route path="/applications/detail" view=ApplicationDetail/>
                </Routes>
            </main>

            <footer class="footer">
                <p>"Appdeck v0.1.0"</p>
            </footer>
        </Router>
    }
}

/// Environment selector in the top navigation. Owns the only writer of
/// [`CurrentEnv`].
#[component]
fn EnvSelect() -> impl IntoView {
    let CurrentEnv(current_env) = expect_context::<CurrentEnv>();

    let envs = create_local_resource(|| (), |_| async move { api::list_environments().await });

    // The first environment becomes the selection once the list arrives and
    // nothing is picked yet.
    create_effect(move |_| {
        if current_env.get().is_none() {
            if let Some(Ok(list)) = envs.get() {
                if let Some(first) = list.first() {
                    current_env.set(Some(first.name.clone()));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = envs.get() {
            logging::log!("Failed to load environments: {}", err.message);
        }
    });

    view! {
        <select
            class="env-select"
            on:change=move |ev| current_env.set(Some(event_target_value(&ev)))
        >
            {move || match envs.get() {
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|env| {
                        let selected = current_env.get().as_deref() == Some(env.name.as_str());
                        view! {
                            <option value=env.name.clone() selected=selected>
                                {env.name.clone()}
                            </option>
                        }
                    })
                    .collect_view(),
                _ => view! { <option value="">"No environments"</option> }.into_view(),
            }}
        </select>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
