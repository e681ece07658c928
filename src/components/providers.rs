//! Provider directory page.

use leptos::prelude::*;

use super::hooks::use_load;
use crate::app::AppContext;
use crate::core::gate::{GateView, gate};
use crate::core::{api, codec};
use crate::models::{AppRoute, FilterSection, FilterState, Provider};

stylance::import_crate_style!(css, "src/components/games.module.css");

/// Grid of game providers. Selecting one opens the game listing filtered to it.
#[component]
pub fn ProviderList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let providers = use_load("providers", api::load_providers());

    let show_games = Callback::new(move |slug: String| {
        let mut filters = FilterState::new();
        filters.select(FilterSection::Provider, slug);
        ctx.navigate_with(AppRoute::Games, codec::encode(&filters));
    });

    view! {
        <section class=css::content>
            <h1 class=css::heading>"Providers"</h1>
            {move || providers.with(|status| match gate(status) {
                GateView::Pending => view! {
                    <div class=css::grid>
                        {(0..6).map(|_| view! { <div class=css::skeletonCard></div> }).collect_view()}
                    </div>
                }.into_any(),
                GateView::Failed(message) => view! {
                    <div class=css::placeholder>
                        <p>"Providers could not be loaded."</p>
                        <p class=css::muted>{message.to_string()}</p>
                    </div>
                }.into_any(),
                GateView::Ready(list) => view! {
                    <div class=css::grid>
                        {list.iter().cloned().map(|provider| {
                            view! { <ProviderCard provider=provider on_select=show_games /> }
                        }).collect_view()}
                    </div>
                }.into_any(),
            })}
        </section>
    }
}

#[component]
fn ProviderCard(provider: Provider, on_select: Callback<String>) -> impl IntoView {
    let slug = provider.slug.clone();
    view! {
        <button class=css::card on:click=move |_| on_select.run(slug.clone())>
            {provider.logo.clone().map(|src| view! {
                <img class=css::thumbnail src=src alt=provider.name.clone() loading="lazy" />
            })}
            <h3 class=css::cardTitle>{provider.name.clone()}</h3>
            <p class=css::muted>{format!("{} games", provider.game_count)}</p>
        </button>
    }
}
