use leptos::*;
use leptos_router::use_location;

use appdeck_common::{Application, WorkloadDefinition};

use crate::api::{self, ApiError};
use crate::components::{EmptyState, LoadingSpinner};
use crate::pages::Workload;
use crate::state::AppSelection;

/// Everything the workload summary needs for one selected application.
#[derive(Clone)]
struct DetailData {
    app: Application,
    definition: WorkloadDefinition,
    selection: AppSelection,
}

async fn load_detail(selection: AppSelection) -> Result<DetailData, ApiError> {
    let apps = api::list_applications(&selection.env_name).await?;
    let app = apps
        .into_iter()
        .find(|app| app.name == selection.app_name)
        .ok_or_else(|| {
            ApiError::from(appdeck_common::Error::AppNotFound(selection.app_name.clone()))
        })?;
    let definition = api::get_workload_definition(&app.workload).await?;
    Ok(DetailData { app, definition, selection })
}

/// Detail screen for the application picked on the list. The selection rides
/// in as opaque history state written by the card click.
#[component]
pub fn ApplicationDetail() -> impl IntoView {
    let location = use_location();
    let selection = Signal::derive(move || {
        location
            .state
            .get()
            .0
            .as_ref()
            .and_then(AppSelection::from_history_state)
    });

    let detail = create_local_resource(
        move || selection.get(),
        |selection| async move {
            let selection = selection?;
            Some(load_detail(selection).await)
        },
    );

    create_effect(move |_| {
        if let Some(Some(Err(err))) = detail.get() {
            logging::log!("Failed to load application detail: {}", err.message);
        }
    });

    view! {
        <div class="app-detail">
            {move || detail.loading().get().then(|| view! { <LoadingSpinner overlay=true/> })}

            {move || {
                if selection.get().is_none() {
                    return view! {
                        <EmptyState
                            title="No application selected"
                            description="Pick an application from the list"
                        />
                    }
                    .into_view();
                }

                match detail.get().flatten() {
                    // Still in flight; the spinner above covers this.
                    None => ().into_view(),
                    Some(Err(err)) => view! {
                        <p class="error">"Failed to load application: " {err.message}</p>
                    }
                    .into_view(),
                    Some(Ok(data)) => {
                        let state = serde_json::to_value(&data.selection).ok();
                        view! {
                            <Workload
                                btn_value="Create Application".to_string()
                                pathname="/applications/create".to_string()
                                title=data.app.name.clone()
                                crd_info=data.definition.crd_info.clone()
                                state=state
                                settings=data.definition.parameters.clone()
                                btn_is_show=true
                            />
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
