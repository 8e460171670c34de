use leptos::*;

use crate::components::{Breadcrumb, Crumb};

/// Creation route target. The submission flow belongs to the backend
/// console; this screen is the form shell the list's create button and the
/// workload action button navigate to.
#[component]
pub fn ApplicationCreate() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());

    view! {
        <div class="app-create">
            <Breadcrumb crumbs=vec![
                Crumb::Link { label: "Home", href: "/" },
                Crumb::Text("Applications".to_string()),
                Crumb::Text("Create".to_string()),
            ]/>

            <h1>"Create Application"</h1>

            <form class="create-form">
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        placeholder="my-app"
                        class="form-input"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn btn-primary" disabled=move || name.get().is_empty()>
                    "Submit"
                </button>
            </form>
        </div>
    }
}
