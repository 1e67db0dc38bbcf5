use serde::{Deserialize, Serialize};

/// Fixed catalog of navigation glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Orders,
    Products,
    Customers,
    Content,
    Finance,
    Analytics,
    Marketing,
    Discounts,
    Globe,
    Apps,
    Store,
    Settings,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Orders => "orders",
            Icon::Products => "products",
            Icon::Customers => "customers",
            Icon::Content => "content",
            Icon::Finance => "finance",
            Icon::Analytics => "analytics",
            Icon::Marketing => "marketing",
            Icon::Discounts => "discounts",
            Icon::Globe => "globe",
            Icon::Apps => "apps",
            Icon::Store => "store",
            Icon::Settings => "settings",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Orders => "📥",
            Icon::Products => "🏷️",
            Icon::Customers => "👤",
            Icon::Content => "📄",
            Icon::Finance => "🏦",
            Icon::Analytics => "📊",
            Icon::Marketing => "🎯",
            Icon::Discounts => "💸",
            Icon::Globe => "🌐",
            Icon::Apps => "🧩",
            Icon::Store => "🏪",
            Icon::Settings => "⚙️",
        }
    }
}
