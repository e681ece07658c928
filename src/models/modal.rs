//! Wallet transaction modal state.

use std::fmt;

/// Tabs of the transaction modal.
///
/// The query value (`?tab=deposit`) is the camelCase name of the variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransactionTab {
    #[default]
    WalletInfo,
    Deposit,
    Withdraw,
    Swap,
}

impl TransactionTab {
    /// Every tab, in display order.
    pub const ALL: [TransactionTab; 4] = [Self::WalletInfo, Self::Deposit, Self::Withdraw, Self::Swap];

    /// Value carried by the `tab` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::WalletInfo => "walletInfo",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Swap => "swap",
        }
    }

    /// Parse a `tab` query value. Unknown values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_param() == value)
    }

    /// Tab button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WalletInfo => "Wallet",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Swap => "Swap",
        }
    }
}

impl fmt::Display for TransactionTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Open/closed state and active tab of the transaction modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub active_tab: TransactionTab,
}

impl ModalState {
    /// A closed modal remembering `tab` as its last active tab.
    pub const fn closed(tab: TransactionTab) -> Self {
        Self {
            is_open: false,
            active_tab: tab,
        }
    }

    /// An open modal showing `tab`.
    pub const fn opened(tab: TransactionTab) -> Self {
        Self {
            is_open: true,
            active_tab: tab,
        }
    }

    /// The `tab` query value this state requires: the active tab when open,
    /// nothing when closed.
    pub fn query_value(&self) -> Option<&'static str> {
        self.is_open.then(|| self.active_tab.as_param())
    }
}
