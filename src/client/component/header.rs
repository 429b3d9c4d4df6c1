use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let fetch_completed = state.is_settled();
    let user_logged_in = state.user().is_some();
    let user_is_admin = state.is_admin();
    let user_is_super_admin = state.is_super_admin();
    let user_name = state.user().map(|u| u.name.clone()).unwrap_or_default();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                p {
                    class: "hidden md:block opacity-70",
                    "{user_name}"
                }
                if user_is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        p { "Admin" }
                    }
                }
                if user_is_super_admin {
                    Link {
                        to: Route::SuperAdmin {},
                        class: "btn btn-outline",
                        p { "Super admin" }
                    }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p { "Logout" }
                    }
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaGoogle
                        }
                        p { "Login" }
                    }
                }
            }
        }
    })
}
