use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, State, A};

use appdeck_common::Application;

use crate::api;
use crate::components::{Breadcrumb, Crumb, EmptyState, LoadingSpinner};
use crate::format::{format_created, status_accent_class, trait_spacer_height};
use crate::state::{AppSelection, CurrentEnv};

/// Applications deployed in the currently selected environment, one card
/// per application.
#[component]
pub fn ApplicationList() -> impl IntoView {
    let CurrentEnv(current_env) = expect_context::<CurrentEnv>();

    // Keyed on the environment: switching environments re-runs the fetch,
    // and a response still in flight for the previous key is discarded.
    let apps = create_local_resource(
        move || current_env.get(),
        |env| async move {
            match env {
                Some(env) => Some(api::list_applications(&env).await),
                None => None,
            }
        },
    );

    view! {
        <div class="app-list">
            <Breadcrumb crumbs=vec![
                Crumb::Link { label: "Home", href: "/" },
                Crumb::Text("Applications".to_string()),
            ]/>

            <div class="page-actions">
                <A href="/applications/create" class="btn btn-primary">"create"</A>
            </div>

            {move || apps.loading().get().then(|| view! { <LoadingSpinner overlay=true/> })}

            {move || match apps.get().flatten() {
                // Nothing fetched yet, or no environment selected.
                None => ().into_view(),
                Some(Err(err)) => view! {
                    <p class="error">"Failed to load applications: " {err.message}</p>
                }
                .into_view(),
                Some(Ok(list)) => {
                    if list.is_empty() {
                        view! {
                            <EmptyState
                                title="No applications"
                                description="Create an application to get started"
                            />
                        }
                        .into_view()
                    } else {
                        let env_name = current_env.get().unwrap_or_default();
                        view! {
                            <div class="card-grid">
                                {list
                                    .into_iter()
                                    .map(|app| view! {
                                        <ApplicationCard app=app env_name=env_name.clone()/>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}

/// One application card: name, pinned-offset creation time, status-colored
/// workload label and one row per trait. Clicking opens the detail screen
/// with the selection riding in the history state.
#[component]
fn ApplicationCard(app: Application, env_name: String) -> impl IntoView {
    let navigate = use_navigate();
    let selection = AppSelection {
        app_name: app.name.clone(),
        env_name,
    };

    let open_detail = move |_| {
        navigate(
            "/applications/detail",
            NavigateOptions {
                state: State(Some(selection.to_history_state())),
                ..Default::default()
            },
        );
    };

    let workload_class = format!("workload-label {}", status_accent_class(&app.status));
    let spacer_height = trait_spacer_height(app.traits.len());
    let has_traits = !app.traits.is_empty();

    view! {
        <div class="app-card" on:click=open_detail>
            <div class="app-card-header">
                <span class="app-card-title">{app.name.clone()}</span>
                <span class="app-card-extra">{format_created(&app.created)}</span>
            </div>
            <div class="app-card-body">
                // Alignment spacer, sized by trait count.
                <div class="trait-spacer" style:height=spacer_height></div>
                <div class="workload-row">
                    {has_traits.then(|| view! { <div class="indent" style="width: 30px"></div> })}
                    <div class=workload_class>{app.workload.clone()}</div>
                </div>
                {app.traits
                    .iter()
                    .map(|name| view! {
                        <div class="trait-row">
                            <div class="indent" style="width: 50px"></div>
                            <div class="trait-label">{name.clone()}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
