//! Top navigation bar.
//!
//! Page links on the left; balance and the wallet button on the right.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{AppRoute, TransactionTab};

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Navigation bar with page links and the wallet entry point.
#[component]
pub fn NavBar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let balance = Signal::derive(move || {
        ctx.profile.with(|p| {
            p.value()
                .map(|profile| format!("{} {}", profile.balance, profile.currency))
                .unwrap_or_else(|| "—".to_string())
        })
    });

    let open_wallet = move |_: leptos::ev::MouseEvent| {
        ctx.modal.open(TransactionTab::WalletInfo);
    };

    view! {
        <header class=css::bar>
            <span class=css::brand title=format!("{} v{}", APP_NAME, APP_VERSION)>{APP_NAME}</span>

            <nav class=css::links>
                {AppRoute::nav_items().into_iter().map(|item| {
                    let target = item.clone();
                    let is_active = {
                        let item = item.clone();
                        move || route.get() == item
                    };
                    let icon = match item {
                        AppRoute::Providers => ic::PROVIDERS,
                        AppRoute::BetHistory => ic::HISTORY,
                        AppRoute::Profile => ic::USER,
                        _ => ic::GAMES,
                    };
                    view! {
                        <a
                            href=item.to_path()
                            class=move || if is_active() {
                                format!("{} {}", css::link, css::linkActive)
                            } else {
                                css::link.to_string()
                            }
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ctx.navigate(target.clone());
                            }
                        >
                            <Icon icon=icon />
                            <span>{item.label()}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class=css::wallet>
                <span class=css::balance>{balance}</span>
                <button class=css::button on:click=open_wallet title="Open wallet">
                    <Icon icon=ic::WALLET />
                    <span>"Wallet"</span>
                </button>
            </div>
        </header>
    }
}
