//! Game listing page.
//!
//! Filter selections round-trip through the URL: toggling a filter pushes a
//! new query, and [`use_filter_sync`] decodes it back into the page's
//! filter store. Back/forward therefore restores earlier selections.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::{use_filter_sync, use_load};
use crate::app::{AppContext, FilterSignal};
use crate::components::icons as ic;
use crate::config::PAGE_SIZE;
use crate::core::gate::{GateView, gate};
use crate::core::{Navigation, api, codec};
use crate::models::{
    FilterSection, FilterState, Game, GetGameUrlRequestBody, GetGameUrlResponse, LaunchMode,
    page_count, paginate,
};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/games.module.css");

/// Game listing with a filter sidebar and a paginated grid.
#[component]
pub fn GameListing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filters = FilterSignal::new(codec::decode(
        &ctx.location.with_untracked(|l| l.query.clone()),
    ));
    use_filter_sync(filters, ctx.location);

    let games = use_load("games", api::load_games());

    // Filter UI writes go to the URL; the sync effect brings them back.
    let push_filters = move |next: FilterState| {
        let nav = ctx.navigation();
        let query = codec::apply(&next, &nav.query());
        nav.push_query(&query);
    };

    let on_toggle = Callback::new(move |(section, value): (FilterSection, String)| {
        let mut next = filters.0.get_untracked();
        next.toggle(section, &value);
        push_filters(next);
    });

    let on_clear_section = Callback::new(move |section: FilterSection| {
        let mut next = filters.0.get_untracked();
        next.clear_section(section);
        push_filters(next);
    });

    let on_page = Callback::new(move |page: u32| {
        let mut next = filters.0.get_untracked();
        next.set_page(page);
        push_filters(next);
    });

    let on_clear = move |_: leptos::ev::MouseEvent| {
        let mut next = filters.0.get_untracked();
        next.clear();
        push_filters(next);
    };

    let filtered = Memo::new(move |_| {
        games.with(|status| {
            status.value().map(|all| {
                filters.0.with(|f| {
                    all.iter()
                        .filter(|game| f.matches(game))
                        .cloned()
                        .collect::<Vec<_>>()
                })
            })
        })
    });

    let gate_state = Memo::new(move |_| {
        games.with(|status| match gate(status) {
            GateView::Pending => None,
            GateView::Failed(message) => Some(Err(message.to_string())),
            GateView::Ready(_) => Some(Ok(())),
        })
    });

    view! {
        <div class=css::listing>
            <aside class=css::sidebar>
                <div class=css::sidebarHeader>
                    <span>
                        {move || format!("Filters ({})", filters.0.with(FilterState::active_count))}
                    </span>
                    <button class=css::clearButton on:click=on_clear>"Clear"</button>
                </div>
                {FilterSection::ALL.into_iter().map(|section| {
                    let options = Signal::derive(move || {
                        games.with(|status| {
                            status.value().map(|all| section.options(all)).unwrap_or_default()
                        })
                    });
                    view! {
                        <FilterGroup
                            section=section
                            options=options
                            filters=filters
                            on_toggle=on_toggle
                            on_clear=on_clear_section
                        />
                    }
                }).collect_view()}
            </aside>

            <section class=css::content>
                {move || match gate_state.get() {
                    None => view! { <GridSkeleton /> }.into_any(),
                    Some(Err(message)) => view! {
                        <div class=css::placeholder>
                            <p>"Games could not be loaded."</p>
                            <p class=css::muted>{message}</p>
                        </div>
                    }.into_any(),
                    Some(Ok(())) => view! {
                        <GameGrid games=filtered filters=filters on_page=on_page />
                    }.into_any(),
                }}
            </section>
        </div>
    }
}

/// One sidebar section of checkboxes.
#[component]
fn FilterGroup(
    section: FilterSection,
    options: Signal<Vec<String>>,
    filters: FilterSignal,
    on_toggle: Callback<(FilterSection, String)>,
    on_clear: Callback<FilterSection>,
) -> impl IntoView {
    let has_selection = move || filters.0.with(|f| f.selected(section).next().is_some());

    view! {
        <Show when=move || options.with(|o| !o.is_empty())>
            <fieldset class=css::filterGroup>
                <legend class=css::filterLegend>
                    {section.label()}
                    <Show when=has_selection>
                        <button class=css::clearButton on:click=move |_| on_clear.run(section)>
                            "clear"
                        </button>
                    </Show>
                </legend>
                {move || options.get().into_iter().map(|value| {
                    let checked = {
                        let value = value.clone();
                        move || filters.0.with(|f| f.is_selected(section, &value))
                    };
                    let toggled = value.clone();
                    view! {
                        <label class=css::filterOption>
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:change=move |_| on_toggle.run((section, toggled.clone()))
                            />
                            <span>{value}</span>
                        </label>
                    }
                }).collect_view()}
            </fieldset>
        </Show>
    }
}

/// Placeholder cards shown until the catalog loads.
#[component]
fn GridSkeleton() -> impl IntoView {
    view! {
        <div class=css::grid>
            {(0..8).map(|_| view! { <div class=css::skeletonCard></div> }).collect_view()}
        </div>
    }
}

/// Current page of the filtered catalog plus the pager.
#[component]
fn GameGrid(
    games: Memo<Option<Vec<Game>>>,
    filters: FilterSignal,
    on_page: Callback<u32>,
) -> impl IntoView {
    let total = Signal::derive(move || games.with(|g| g.as_ref().map_or(0, Vec::len)));
    let pages = Signal::derive(move || page_count(total.get(), PAGE_SIZE));
    let page = Signal::derive(move || filters.0.with(FilterState::page).min(pages.get()));

    let visible = move || {
        games.with(|g| {
            g.as_deref()
                .map(|all| paginate(all, page.get(), PAGE_SIZE).to_vec())
                .unwrap_or_default()
        })
    };

    view! {
        <p class=css::muted>{move || format!("{} games", total.get())}</p>

        <Show
            when=move || { total.get() > 0 }
            fallback=|| view! {
                <div class=css::placeholder>"No games match these filters."</div>
            }
        >
            <div class=css::grid>
                <For
                    each=visible
                    key=|game| game.id.clone()
                    children=move |game| view! { <GameCard game=game /> }
                />
            </div>
            <Pager page=page pages=pages on_page=on_page />
        </Show>
    }
}

#[component]
fn GameCard(game: Game) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (launch_error, set_launch_error) = signal::<Option<String>>(None);

    let game_id = game.id.clone();
    let launch = Callback::new(move |mode: LaunchMode| {
        let currency = ctx.profile.with_untracked(|p| {
            p.value()
                .map(|profile| profile.currency.clone())
                .unwrap_or_else(|| "USDT".to_string())
        });
        let body = GetGameUrlRequestBody {
            game_id: game_id.clone(),
            currency,
            mode,
            return_url: None,
        };
        set_launch_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::request_game_url(&body).await {
                Ok(GetGameUrlResponse::Success { url }) => dom::open_url(&url),
                Ok(GetGameUrlResponse::Error { message }) => {
                    let _ = set_launch_error.try_set(Some(message));
                }
                Err(e) => {
                    let _ = set_launch_error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    let subtitle = match &game.rtp {
        Some(rtp) => format!("{} · {} · RTP {:.2}%", game.provider, game.category, rtp),
        None => format!("{} · {}", game.provider, game.category),
    };

    view! {
        <article class=css::card>
            {game.thumbnail.clone().map(|src| view! {
                <img class=css::thumbnail src=src alt=game.name.clone() loading="lazy" />
            })}
            <h3 class=css::cardTitle>{game.name.clone()}</h3>
            <p class=css::muted>{subtitle}</p>
            <div class=css::cardActions>
                <button class=css::playButton on:click=move |_| launch.run(LaunchMode::Real)>
                    "Play"
                </button>
                <button class=css::demoButton on:click=move |_| launch.run(LaunchMode::Demo)>
                    "Demo"
                </button>
            </div>
            {move || launch_error.get().map(|e| view! { <p class=css::error>{e}</p> })}
        </article>
    }
}

#[component]
fn Pager(page: Signal<u32>, pages: Signal<u32>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || { pages.get() > 1 }>
            <nav class=css::pager>
                <button
                    class=css::pagerButton
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_page.run(page.get_untracked() - 1)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <span>{move || format!("Page {} of {}", page.get(), pages.get())}</span>
                <button
                    class=css::pagerButton
                    disabled=move || page.get() >= pages.get()
                    on:click=move |_| on_page.run(page.get_untracked() + 1)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        </Show>
    }
}
