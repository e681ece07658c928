//! Profile page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::gate::{GateView, gate};
use crate::models::{TransactionTab, UserProfile};
use crate::utils::format::format_eth_address;

stylance::import_crate_style!(css, "src/components/tables.module.css");

/// Account summary with shortcuts into the transaction modal.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Profile"</h1>
            {move || ctx.profile.with(|status| match gate(status) {
                GateView::Pending => view! { <p class=css::muted>"Loading profile..."</p> }.into_any(),
                GateView::Failed(message) => view! {
                    <p class=css::error>{format!("Profile could not be loaded: {}", message)}</p>
                }.into_any(),
                GateView::Ready(profile) => view! { <ProfileDetails profile=profile.clone() /> }.into_any(),
            })}
        </section>
    }
}

#[component]
fn ProfileDetails(profile: UserProfile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let address_row = |label: &'static str, address: Option<String>| {
        address.map(|address| {
            view! {
                <dt>{label}</dt>
                <dd title=address.clone()>{format_eth_address(&address)}</dd>
            }
        })
    };

    view! {
        <dl class=css::details>
            <dt>"Username"</dt>
            <dd>{profile.username}</dd>
            <dt>"Balance"</dt>
            <dd>{format!("{} {}", profile.balance, profile.currency)}</dd>
            {address_row("Deposit address", profile.deposit_address)}
            {address_row("Wallet", profile.wallet_address)}
        </dl>

        <div class=css::actions>
            {[TransactionTab::Deposit, TransactionTab::Withdraw, TransactionTab::Swap]
                .into_iter()
                .map(|tab| view! {
                    <button class=css::button on:click=move |_| ctx.modal.open(tab)>
                        <Icon icon=ic::tab_icon(tab) />
                        <span>{tab.label()}</span>
                    </button>
                })
                .collect_view()}
        </div>
    }
}
