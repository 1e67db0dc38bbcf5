use dioxus::prelude::*;

use crate::app::components::AppProvider;
use crate::app::layouts::{DocumentHead, Frame, Navigation, TopBar};
use crate::app::routes::Route;
use crate::config::ShellConfig;
use crate::server_fns::get_shell_config;
use crate::shared::hooks::{use_i18n, use_mobile_navigation};
use crate::shared::i18n::{CONFIG_ERROR, LOADING};

/// Route layout: loads the shell config and renders the chrome around the
/// matched page
#[component]
pub fn Shell() -> Element {
    // Current path comes from the router, on the server as well
    let location = use_route::<Route>().to_string();

    let config_resource = use_server_future(move || async move { get_shell_config().await })?;

    match &*config_resource.read() {
        Some(Ok(config)) => rsx! {
            AppShell { config: config.clone(), location }
        },
        Some(Err(e)) => {
            tracing::error!("Failed to load shell config: {}", e);
            rsx! {
                ShellFallback { message_key: CONFIG_ERROR }
            }
        }
        None => rsx! {
            ShellFallback { message_key: LOADING }
        },
    }
}

#[component]
fn AppShell(config: ShellConfig, location: String) -> Element {
    // Pages read the config loaded here instead of fetching it again
    use_context_provider(|| config.clone());
    let mut mobile_nav = use_mobile_navigation(config.dismiss_behavior);
    let navigation_open = mobile_nav.is_open();

    rsx! {
        AppProvider { i18n: config.i18n.clone(),
            DocumentHead {
                app_name: config.app_name.clone(),
                lang: config.lang.clone(),
                color_scheme: config.color_scheme,
                head_links: config.head_links.clone(),
            }
            Frame {
                top_bar: rsx! {
                    TopBar {
                        app_name: config.app_name.clone(),
                        navigation_open,
                        on_navigation_toggle: move |_| mobile_nav.toggle(),
                    }
                },
                navigation: rsx! {
                    Navigation {
                        config: config.navigation.clone(),
                        location: location.clone(),
                        on_item_select: move |_| mobile_nav.dismiss_if_open(),
                    }
                },
                show_mobile_navigation: navigation_open,
                on_navigation_dismiss: move |_| mobile_nav.dismiss(),
                Outlet::<Route> {}
            }
        }
    }
}

/// Bare page shown while the config loads or when it is unavailable
#[component]
fn ShellFallback(message_key: &'static str) -> Element {
    let message = use_i18n().translate(message_key);

    rsx! {
        div { class: "c-frame c-frame--fallback",
            p { class: "c-frame__status", "{message}" }
            main { class: "c-frame__main",
                Outlet::<Route> {}
            }
        }
    }
}
