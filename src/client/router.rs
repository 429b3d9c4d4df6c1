use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn, SuperAdminRouteGuard};
use crate::client::route::{Admin, Home, Login, NotFound, SuperAdmin};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Home {},
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[route("/admin")]
    Admin {},
    #[end_layout]

    #[layout(SuperAdminRouteGuard)]
    #[route("/admin/super")]
    SuperAdmin {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
