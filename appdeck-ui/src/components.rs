//! Reusable presentational primitives shared by the dashboard screens.

use leptos::*;
use leptos_router::A;

/// One entry in a [`Breadcrumb`] trail.
#[derive(Clone)]
pub enum Crumb {
    /// A navigable entry.
    Link { label: &'static str, href: &'static str },
    /// A static entry.
    Text(String),
}

/// Home-rooted breadcrumb trail rendered above each screen.
#[component]
pub fn Breadcrumb(crumbs: Vec<Crumb>) -> impl IntoView {
    view! {
        <nav class="breadcrumb">
            {crumbs
                .into_iter()
                .map(|crumb| match crumb {
                    Crumb::Link { label, href } => view! {
                        <span class="breadcrumb-item">
                            <A href=href>{label}</A>
                        </span>
                    }
                    .into_view(),
                    Crumb::Text(text) => view! {
                        <span class="breadcrumb-item">{text}</span>
                    }
                    .into_view(),
                })
                .collect_view()}
        </nav>
    }
}

/// Placeholder shown instead of a list when there is nothing to show.
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">"📭"</div>
            <h3>{title}</h3>
            {description.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}

/// Loading spinner, optionally overlaying the content it loads for.
#[component]
pub fn LoadingSpinner(#[prop(optional, default = false)] overlay: bool) -> impl IntoView {
    let class = if overlay { "loading-overlay" } else { "loading-spinner" };

    view! {
        <div class=class role="status" aria-live="polite">
            <div class="spinner"></div>
        </div>
    }
}
