use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::user::PaginatedUsersDto,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_all_users;

const PER_PAGE: u64 = 20;

#[component]
pub fn Admin() -> Element {
    #[allow(unused_mut)]
    let mut page = use_signal(|| 1u64);
    let mut users = use_signal(|| None::<Result<PaginatedUsersDto, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_all_users(page(), PER_PAGE).await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => users.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch users: {}", err);
            users.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        match users() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Users" }
                        div {
                            class: "overflow-x-auto card bg-base-200",
                            table {
                                class: "table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Roles" }
                                    }
                                }
                                tbody {
                                    for user in data.users.iter() {
                                        tr {
                                            key: "{user.id}",
                                            td { "{user.name}" }
                                            td { "{user.email}" }
                                            td {
                                                {user.roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "flex items-center justify-center gap-4 mt-4",
                            button {
                                class: "btn btn-sm",
                                disabled: data.page <= 1,
                                onclick: move |_| page.set(page() - 1),
                                "Previous"
                            }
                            span { "Page {data.page} of {data.total_pages.max(1)}" }
                            button {
                                class: "btn btn-sm",
                                disabled: data.page >= data.total_pages,
                                onclick: move |_| page.set(page() + 1),
                                "Next"
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}
