//! Request and response payloads of the platform REST API.
//!
//! Wire names are camelCase.

use serde::{Deserialize, Serialize};

// ============================================================================
// Game Catalog
// ============================================================================

/// A game in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    /// Provider slug (matches [`Provider::slug`]).
    pub provider: String,
    pub category: String,
    #[serde(default)]
    pub volatility: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Return to player, in percent.
    #[serde(default)]
    pub rtp: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse {
    pub games: Vec<Game>,
}

/// A game provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub game_count: u32,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderListResponse {
    pub providers: Vec<Provider>,
}

// ============================================================================
// Lobby URL
// ============================================================================

/// Play mode requested when launching a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    #[default]
    Real,
    Demo,
}

/// Body of the lobby URL request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGameUrlRequestBody {
    pub game_id: String,
    pub currency: String,
    pub mode: LaunchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Lobby URL response, discriminated by the boolean `error` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGameUrlResponse", into = "RawGameUrlResponse")]
pub enum GetGameUrlResponse {
    Success { url: String },
    Error { message: String },
}

/// Wire shape of [`GetGameUrlResponse`].
#[derive(Clone, Serialize, Deserialize)]
pub struct RawGameUrlResponse {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RawGameUrlResponse> for GetGameUrlResponse {
    fn from(raw: RawGameUrlResponse) -> Self {
        match (raw.error, raw.url) {
            (false, Some(url)) => Self::Success { url },
            (false, None) => Self::Error {
                message: "missing lobby url".to_string(),
            },
            (true, _) => Self::Error {
                message: raw.message.unwrap_or_else(|| "unknown error".to_string()),
            },
        }
    }
}

impl From<GetGameUrlResponse> for RawGameUrlResponse {
    fn from(response: GetGameUrlResponse) -> Self {
        match response {
            GetGameUrlResponse::Success { url } => Self {
                error: false,
                url: Some(url),
                message: None,
            },
            GetGameUrlResponse::Error { message } => Self {
                error: true,
                url: None,
                message: Some(message),
            },
        }
    }
}

// ============================================================================
// Chat
// ============================================================================

/// A message in the lobby chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub username: String,
    pub text: String,
    /// Unix timestamp in seconds.
    pub sent_at: u64,
}

/// A page of chat history. `next_cursor` is absent on the oldest page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

// ============================================================================
// Bets, Profile, Transactions
// ============================================================================

/// A settled or pending bet in the user's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub id: String,
    pub game_name: String,
    /// Decimal string in `currency` units.
    pub stake: String,
    /// Decimal string in `currency` units, `"0"` for a loss.
    pub payout: String,
    pub currency: String,
    /// Unix timestamp in seconds.
    pub placed_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetHistoryResponse {
    pub bets: Vec<BetRecord>,
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    /// Decimal string in `currency` units.
    pub balance: String,
    pub currency: String,
    /// Deposit address assigned to the account.
    #[serde(default)]
    pub deposit_address: Option<String>,
    /// Connected external wallet.
    #[serde(default)]
    pub wallet_address: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Swap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Swap => "Swap",
        }
    }
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// A wallet transaction record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub amount: String,
    pub currency: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// Unix timestamp in seconds.
    pub created_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// Body of a withdraw request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequestBody {
    pub address: String,
    pub amount: String,
    pub currency: String,
}

/// Body of a swap request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequestBody {
    pub from: String,
    pub to: String,
    pub amount: String,
}
