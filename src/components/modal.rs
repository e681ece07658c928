//! Wallet transaction modal.
//!
//! Visibility and the active tab live in [`ModalSignals`](crate::app::ModalSignals)
//! and are mirrored into the `tab` query parameter by the modal sync hook,
//! so this component only reads and writes the signals.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::use_load;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SWAP_CURRENCIES;
use crate::core::gate::{GateView, gate};
use crate::core::validate::{
    balance_units, validate_amount, validate_swap, validate_withdraw_address,
};
use crate::core::{ValidationError, api};
use crate::models::api::{SwapRequestBody, WithdrawRequestBody};
use crate::models::{LoadStatus, Transaction, TransactionTab};
use crate::utils::format::{format_datetime, format_eth_address};

stylance::import_crate_style!(css, "src/components/modal.module.css");

/// Modal overlay with the four wallet tabs.
#[component]
pub fn TransactionModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let modal = ctx.modal;

    view! {
        <div class=css::backdrop on:click=move |_| modal.close()>
            <div class=css::dialog on:click=|ev| ev.stop_propagation()>
                <header class=css::header>
                    <nav class=css::tabs>
                        {TransactionTab::ALL.into_iter().map(|tab| view! {
                            <button
                                class=move || if modal.active_tab.get() == tab {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                                on:click=move |_| modal.select_tab(tab)
                            >
                                <Icon icon=ic::tab_icon(tab) />
                                <span>{tab.label()}</span>
                            </button>
                        }).collect_view()}
                    </nav>
                    <button class=css::close title="Close" on:click=move |_| modal.close()>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::body>
                    {move || match modal.active_tab.get() {
                        TransactionTab::WalletInfo => view! { <WalletInfoTab /> }.into_any(),
                        TransactionTab::Deposit => view! { <DepositTab /> }.into_any(),
                        TransactionTab::Withdraw => view! { <WithdrawTab /> }.into_any(),
                        TransactionTab::Swap => view! { <SwapTab /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Tabs
// ============================================================================

#[component]
fn WalletInfoTab() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transactions = use_load("transactions", api::load_transactions());

    view! {
        {move || ctx.profile.with(|status| status.value().map(|profile| view! {
            <dl class=css::summary>
                <dt>"Balance"</dt>
                <dd>{format!("{} {}", profile.balance, profile.currency)}</dd>
                {profile.wallet_address.clone().map(|address| view! {
                    <dt>"Wallet"</dt>
                    <dd title=address.clone()>{format_eth_address(&address)}</dd>
                })}
            </dl>
        }))}

        <h3 class=css::subheading>"Recent transactions"</h3>
        {move || transactions.with(|status| match gate(status) {
            GateView::Pending => view! { <p class=css::muted>"Loading..."</p> }.into_any(),
            GateView::Failed(message) => view! {
                <p class=css::error>{message.to_string()}</p>
            }.into_any(),
            GateView::Ready(list) if list.is_empty() => view! {
                <p class=css::muted>"No transactions yet."</p>
            }.into_any(),
            GateView::Ready(list) => view! {
                <ul class=css::transactions>
                    {list.iter().cloned().map(|tx| view! { <TransactionRow tx=tx /> }).collect_view()}
                </ul>
            }.into_any(),
        })}
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> impl IntoView {
    view! {
        <li class=css::transaction>
            <span>{tx.kind.label()}</span>
            <span>{format!("{} {}", tx.amount, tx.currency)}</span>
            <span class=css::muted>{tx.status.label()}</span>
            <span class=css::muted>{format_datetime(tx.created_at)}</span>
        </li>
    }
}

#[component]
fn DepositTab() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        {move || ctx.profile.with(|status| {
            match status.value().and_then(|p| p.deposit_address.clone().map(|a| (a, p.currency.clone()))) {
                Some((address, currency)) => view! {
                    <p>{format!("Send {} to this address:", currency)}</p>
                    <code class=css::address>{address}</code>
                }.into_any(),
                None => view! {
                    <p class=css::muted>"No deposit address is assigned to this account yet."</p>
                }.into_any(),
            }
        })}
    }
}

#[component]
fn WithdrawTab() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let address = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let outcome = RwSignal::new(LoadStatus::<Transaction>::Idle);
    let touched = RwSignal::new(false);

    let balance = Signal::derive(move || {
        ctx.profile
            .with(|p| p.value().map(|profile| balance_units(&profile.balance)))
            .unwrap_or(0)
    });

    // Empty fields stay quiet until the first submit.
    let address_error = Memo::new(move |_| {
        let input = address.get();
        if input.is_empty() && !touched.get() {
            return None;
        }
        validate_withdraw_address(&input).err()
    });
    let amount_error = Memo::new(move |_| {
        let input = amount.get();
        if input.is_empty() && !touched.get() {
            return None;
        }
        validate_amount(&input, balance.get()).err()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_withdraw_address(&address.get_untracked()).and_then(|to| {
            validate_amount(&amount.get_untracked(), balance.get_untracked()).map(|_| to)
        });
        let Ok(to) = checked else {
            touched.set(true);
            return;
        };
        let currency = ctx
            .profile
            .with_untracked(|p| p.value().map(|profile| profile.currency.clone()))
            .unwrap_or_default();
        let body = WithdrawRequestBody {
            address: to.to_checksum(None),
            amount: amount.get_untracked().trim().to_string(),
            currency,
        };
        submit_transaction(ctx, outcome, async move { api::submit_withdraw(&body).await });
    };

    view! {
        <form class=css::form on:submit=submit>
            <label class=css::field>
                <span>"Destination address"</span>
                <input
                    type="text"
                    placeholder="0x..."
                    spellcheck="false"
                    prop:value=address
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                <FieldError error=address_error />
            </label>
            <label class=css::field>
                <span>"Amount"</span>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=amount
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <FieldError error=amount_error />
            </label>
            <SubmitRow label="Withdraw" outcome=outcome />
        </form>
    }
}

#[component]
fn SwapTab() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let from = RwSignal::new(SWAP_CURRENCIES[0].to_string());
    let to = RwSignal::new(SWAP_CURRENCIES[1].to_string());
    let amount = RwSignal::new(String::new());
    let outcome = RwSignal::new(LoadStatus::<Transaction>::Idle);
    let touched = RwSignal::new(false);

    let balance = Signal::derive(move || {
        ctx.profile
            .with(|p| p.value().map(|profile| balance_units(&profile.balance)))
            .unwrap_or(0)
    });

    let error = Memo::new(move |_| {
        let (from, to, amount) = (from.get(), to.get(), amount.get());
        if amount.is_empty() && from != to && !touched.get() {
            return None;
        }
        validate_swap(&from, &to, &amount, balance.get()).err()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (from, to, value) = (from.get_untracked(), to.get_untracked(), amount.get_untracked());
        if validate_swap(&from, &to, &value, balance.get_untracked()).is_err() {
            touched.set(true);
            return;
        }
        let body = SwapRequestBody {
            from,
            to,
            amount: value.trim().to_string(),
        };
        submit_transaction(ctx, outcome, async move { api::submit_swap(&body).await });
    };

    let currency_select = move |signal: RwSignal<String>| {
        view! {
            <select on:change=move |ev| signal.set(event_target_value(&ev))>
                {SWAP_CURRENCIES.iter().map(|&c| view! {
                    <option value=c selected=move || signal.get() == c>{c}</option>
                }).collect_view()}
            </select>
        }
    };

    view! {
        <form class=css::form on:submit=submit>
            <div class=css::pair>
                <label class=css::field>
                    <span>"From"</span>
                    {currency_select(from)}
                </label>
                <Icon icon=ic::SWAP />
                <label class=css::field>
                    <span>"To"</span>
                    {currency_select(to)}
                </label>
            </div>
            <label class=css::field>
                <span>"Amount"</span>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=amount
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <FieldError error=error />
            <SubmitRow label="Swap" outcome=outcome />
        </form>
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

/// Run a transaction request and refresh the profile balance once it lands.
fn submit_transaction<Fut>(ctx: AppContext, outcome: RwSignal<LoadStatus<Transaction>>, request: Fut)
where
    Fut: std::future::Future<Output = Result<Transaction, crate::core::FetchError>> + 'static,
{
    if outcome.with_untracked(LoadStatus::is_loading) {
        return;
    }
    outcome.set(LoadStatus::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let result = request.await;
        let succeeded = result.is_ok();
        let _ = outcome.try_set(match result {
            Ok(tx) => LoadStatus::Success(tx),
            Err(e) => LoadStatus::Error(e.to_string()),
        });
        // A failed profile load stays failed.
        if succeeded && ctx.profile.with_untracked(LoadStatus::is_success) {
            ctx.profile.set(LoadStatus::Idle);
            ctx.load_profile();
        }
    });
}

#[component]
fn FieldError(#[prop(into)] error: Signal<Option<ValidationError>>) -> impl IntoView {
    move || error.get().map(|e| view! { <p class=css::error>{e.to_string()}</p> })
}

#[component]
fn SubmitRow(label: &'static str, outcome: RwSignal<LoadStatus<Transaction>>) -> impl IntoView {
    view! {
        <div class=css::submitRow>
            <button
                type="submit"
                class=css::submit
                disabled=move || outcome.with(LoadStatus::is_loading)
            >
                {label}
            </button>
            {move || outcome.with(|status| match status {
                LoadStatus::Success(tx) => Some(view! {
                    <p class=css::success>{format!("Submitted: {}", tx.status.label())}</p>
                }.into_any()),
                LoadStatus::Error(message) => Some(view! {
                    <p class=css::error>{message.clone()}</p>
                }.into_any()),
                _ => None,
            })}
        </div>
    }
}
