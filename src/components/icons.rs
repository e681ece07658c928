//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::TransactionTab;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownToLine as Deposit, LuArrowLeftRight as Swap, LuArrowUpFromLine as Withdraw,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuGamepad2 as Games,
        LuHistory as History, LuLayoutGrid as Providers, LuUser as User, LuWallet as Wallet,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeftRight as Swap, BsBoxArrowInDown as Deposit, BsBoxArrowUp as Withdraw,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsClockHistory as History,
        BsController as Games, BsGrid as Providers, BsPerson as User, BsWallet2 as Wallet,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(GAMES, Games);
themed_icon!(PROVIDERS, Providers);
themed_icon!(HISTORY, History);
themed_icon!(USER, User);
themed_icon!(WALLET, Wallet);
themed_icon!(DEPOSIT, Deposit);
themed_icon!(WITHDRAW, Withdraw);
themed_icon!(SWAP, Swap);

/// Icon for a transaction modal tab.
pub fn tab_icon(tab: TransactionTab) -> Icon {
    match tab {
        TransactionTab::WalletInfo => WALLET,
        TransactionTab::Deposit => DEPOSIT,
        TransactionTab::Withdraw => WITHDRAW,
        TransactionTab::Swap => SWAP,
    }
}
