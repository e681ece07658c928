//! Platform REST calls.
//!
//! Thin wrappers binding endpoints to their payload types. Catalog data
//! (games, providers) is cached for the session; user data is not.

use crate::config::{api_url, cache, endpoints};
use crate::core::error::FetchError;
use crate::models::api::{
    BetHistoryResponse, GameListResponse, ProviderListResponse, SwapRequestBody,
    TransactionListResponse, WithdrawRequestBody,
};
use crate::models::{
    BetRecord, Game, GetGameUrlRequestBody, GetGameUrlResponse, Provider, Transaction, UserProfile,
};
use crate::utils::{fetch_json, fetch_json_cached, post_json};

pub async fn load_games() -> Result<Vec<Game>, FetchError> {
    let response: GameListResponse =
        fetch_json_cached(&api_url(endpoints::GAMES), cache::GAMES_KEY).await?;
    Ok(response.games)
}

pub async fn load_providers() -> Result<Vec<Provider>, FetchError> {
    let response: ProviderListResponse =
        fetch_json_cached(&api_url(endpoints::PROVIDERS), cache::PROVIDERS_KEY).await?;
    Ok(response.providers)
}

/// Ask the lobby for a launch URL.
pub async fn request_game_url(body: &GetGameUrlRequestBody) -> Result<GetGameUrlResponse, FetchError> {
    post_json(&api_url(endpoints::GAME_URL), body).await
}

pub async fn load_bets() -> Result<Vec<BetRecord>, FetchError> {
    let response: BetHistoryResponse = fetch_json(&api_url(endpoints::BETS)).await?;
    Ok(response.bets)
}

pub async fn load_profile() -> Result<UserProfile, FetchError> {
    fetch_json(&api_url(endpoints::PROFILE)).await
}

pub async fn load_transactions() -> Result<Vec<Transaction>, FetchError> {
    let response: TransactionListResponse = fetch_json(&api_url(endpoints::TRANSACTIONS)).await?;
    Ok(response.transactions)
}

pub async fn submit_withdraw(body: &WithdrawRequestBody) -> Result<Transaction, FetchError> {
    post_json(&format!("{}/withdraw", api_url(endpoints::TRANSACTIONS)), body).await
}

pub async fn submit_swap(body: &SwapRequestBody) -> Result<Transaction, FetchError> {
    post_json(&format!("{}/swap", api_url(endpoints::TRANSACTIONS)), body).await
}
