use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

const LOGO: Asset = asset!("/assets/favicon.svg");

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if auth_context.read().user().is_some() {
            nav.push(Route::Home {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Hydrating | AuthState::Loading | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        img {
                            width: 176,
                            height: 176,
                            src: LOGO,
                        }
                        p {
                            class: "text-2xl",
                            {SITE_NAME}
                        }
                    }
                    div {
                        a {
                            href: "/api/auth/login",
                            div {
                                class: "btn btn-outline flex gap-2 items-center",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaGoogle
                                }
                                p {
                                    "Sign in with Google"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
