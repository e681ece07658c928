//! Path-based page routes.

use super::query::QueryString;

/// Application pages, addressed by URL path.
///
/// - `/` or `/games` → game listing
/// - `/providers` → provider listing
/// - `/bets` → bet history
/// - `/profile` → user profile
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    #[default]
    Games,
    Providers,
    BetHistory,
    Profile,
    NotFound {
        path: String,
    },
}

impl AppRoute {
    /// Parse a URL path into a route. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/games" => Self::Games,
            "/providers" => Self::Providers,
            "/bets" => Self::BetHistory,
            "/profile" => Self::Profile,
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical URL path of this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Games => "/games".to_string(),
            Self::Providers => "/providers".to_string(),
            Self::BetHistory => "/bets".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Providers => "Providers",
            Self::BetHistory => "Bet History",
            Self::Profile => "Profile",
            Self::NotFound { .. } => "Not Found",
        }
    }

    /// Routes shown in the navigation bar.
    pub fn nav_items() -> [AppRoute; 4] {
        [Self::Games, Self::Providers, Self::BetHistory, Self::Profile]
    }
}

/// Current browser location as seen by the app: page route plus query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub route: AppRoute,
    pub query: QueryString,
}

impl Location {
    pub fn new(route: AppRoute, query: QueryString) -> Self {
        Self { route, query }
    }

    /// Build from `location.pathname` and `location.search`.
    pub fn from_parts(pathname: &str, search: &str) -> Self {
        Self {
            route: AppRoute::from_path(pathname),
            query: QueryString::parse(search),
        }
    }

    /// Path plus query, suitable for `history.pushState`.
    pub fn href(&self) -> String {
        format!("{}{}", self.route.to_path(), self.query.to_search())
    }
}
