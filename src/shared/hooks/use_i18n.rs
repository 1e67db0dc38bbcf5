use dioxus::prelude::*;

use crate::shared::i18n::I18n;

/// Dictionary provided by `AppProvider`, or the built-in strings outside it
pub fn use_i18n() -> I18n {
    try_use_context::<I18n>().unwrap_or_default()
}
