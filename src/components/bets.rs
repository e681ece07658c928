//! Bet history page.

use leptos::prelude::*;

use super::hooks::use_load;
use crate::core::api;
use crate::core::gate::{GateView, gate};
use crate::core::validate::balance_units;
use crate::models::BetRecord;
use crate::utils::format::format_datetime;

stylance::import_crate_style!(css, "src/components/tables.module.css");

/// Table of the user's recent bets, newest first.
#[component]
pub fn BetHistory() -> impl IntoView {
    let bets = use_load("bets", api::load_bets());

    view! {
        <section class=css::page>
            <h1 class=css::heading>"Bet history"</h1>
            {move || bets.with(|status| match gate(status) {
                GateView::Pending => view! { <p class=css::muted>"Loading bets..."</p> }.into_any(),
                GateView::Failed(message) => view! {
                    <p class=css::error>{format!("Bets could not be loaded: {}", message)}</p>
                }.into_any(),
                GateView::Ready(list) if list.is_empty() => view! {
                    <p class=css::muted>"No bets yet."</p>
                }.into_any(),
                GateView::Ready(list) => {
                    let mut rows = list.clone();
                    rows.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
                    view! { <BetTable rows=rows /> }.into_any()
                }
            })}
        </section>
    }
}

#[component]
fn BetTable(rows: Vec<BetRecord>) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>"Game"</th>
                    <th class=css::numeric>"Stake"</th>
                    <th class=css::numeric>"Payout"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|bet| {
                    let payout_class = if balance_units(&bet.payout) > balance_units(&bet.stake) {
                        format!("{} {}", css::numeric, css::positive)
                    } else {
                        css::numeric.to_string()
                    };
                    view! {
                        <tr>
                            <td class=css::muted>{format_datetime(bet.placed_at)}</td>
                            <td>{bet.game_name}</td>
                            <td class=css::numeric>{format!("{} {}", bet.stake, bet.currency)}</td>
                            <td class=payout_class>{bet.payout}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
