use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    hook::{use_maintenance_mode, MaintenanceState},
    model::auth::AuthContext,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::user::get_user, model::auth::AuthState};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context_provider(AuthContext::new);
    let maintenance = use_maintenance_mode();

    // Hydration is complete once effects run on the client
    #[cfg(feature = "web")]
    use_effect(move || {
        auth_context.set(AuthState::Loading);
        spawn(async move {
            let state = match get_user().await {
                Ok(user) => AuthState::from(user),
                Err(err) => AuthState::Error(err),
            };
            auth_context.set(state);
        });
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Performance review cycles and feedback"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if maintenance() == MaintenanceState::Active {
            MaintenancePage {}
        } else {
            Router::<Route> {}
        }
    }
}

#[component]
fn MaintenancePage() -> Element {
    rsx! {
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center",
            p { class: "text-3xl font-bold", "Down for maintenance" }
            p { class: "opacity-70", "{SITE_NAME} will be back shortly." }
        }
    }
}
