//! Application router component.
//!
//! Path-based routing on top of the History API.
//!
//! # Architecture
//!
//! - **The location signal is the source of truth**: route and query are
//!   both derived from `AppContext::location`
//! - **Pages remount only on route changes**: query-only changes (filters,
//!   modal tab) never rebuild the page
//! - **popstate events**: browser back/forward update the location signal
//! - **The transaction modal is global**: it overlays whatever page is shown

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::bets::BetHistory;
use super::games::GameListing;
use super::hooks::use_modal_sync;
use super::modal::TransactionModal;
use super::nav::NavBar;
use super::profile::ProfilePage;
use super::providers::ProviderList;
use crate::app::AppContext;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::models::Location;
        use crate::utils::dom;

        let location = ctx.location;
        let closure = Closure::wrap(Box::new(move || {
            location.set(Location::from_parts(
                &dom::current_path(),
                &dom::current_search(),
            ));
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    use_modal_sync(ctx);

    let route = Memo::new(move |_| ctx.location.with(|l| l.route.clone()));

    view! {
        <div class=css::app>
            <NavBar route=route />

            <main class=css::main>
                {move || match route.get() {
                    AppRoute::Games => view! { <GameListing /> }.into_any(),
                    AppRoute::Providers => view! { <ProviderList /> }.into_any(),
                    AppRoute::BetHistory => view! { <BetHistory /> }.into_any(),
                    AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
                    AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
                }}
            </main>

            <Show when=move || ctx.modal.is_open.get()>
                <TransactionModal />
            </Show>
        </div>
    }
}

#[component]
fn NotFound(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::notFound>
            <h1>"Page not found"</h1>
            <p class=css::muted>{format!("Nothing lives at {}", path)}</p>
            <button class=css::button on:click=move |_| ctx.navigate(AppRoute::Games)>
                "Browse games"
            </button>
        </section>
    }
}
