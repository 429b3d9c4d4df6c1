use dioxus::prelude::*;

use crate::client::{
    component::Header,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    let auth_context = use_context::<AuthContext>();
    let lookup_error = match &*auth_context.read() {
        AuthState::Error(err) => Some(err.message.clone()),
        _ => None,
    };

    rsx!(div {
        Header {}
        if let Some(message) = lookup_error {
            div {
                class: "fixed w-full pt-20 z-20",
                p {
                    class: "bg-base-200 text-error text-center py-2",
                    "Could not check your session: {message}"
                }
            }
        }
        main {
            Outlet::<Route> {}
        }
    })
}
