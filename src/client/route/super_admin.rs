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
    model::{
        organization::OrganizationDto,
        user::{PaginatedUsersDto, Role, UserDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        organization::{create_organization, get_organizations},
        user::{get_all_users, update_user_roles},
    },
    model::organization::CreateOrganizationDto,
};

const ROLES: [Role; 4] = [Role::Employee, Role::Manager, Role::Admin, Role::SuperAdmin];

#[component]
pub fn SuperAdmin() -> Element {
    let mut organizations = use_signal(|| None::<Result<Vec<OrganizationDto>, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_organizations().await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => organizations.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch organizations: {}", err);
            organizations.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Super admin | {SITE_NAME}" }
        match organizations() {
            Some(Ok(list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        h1 { class: "text-lg sm:text-2xl", "Organizations" }
                        OrganizationForm { refetch_trigger }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                if list.is_empty() {
                                    p { class: "opacity-50", "No organizations yet" }
                                }
                                for org in list {
                                    div {
                                        key: "{org.id}",
                                        class: "flex justify-between",
                                        span { "{org.name}" }
                                        span { class: "opacity-70", {org.domain.clone().unwrap_or_default()} }
                                    }
                                }
                            }
                        }
                        h2 { class: "text-lg sm:text-xl", "Roles" }
                        RoleEditor {}
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

#[component]
fn OrganizationForm(mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut domain = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            let domain_value = domain().trim().to_string();
            let payload = CreateOrganizationDto {
                name: name().trim().to_string(),
                domain: (!domain_value.is_empty()).then_some(domain_value),
            };

            match create_organization(&payload).await {
                Ok(_) => {
                    name.set(String::new());
                    domain.set(String::new());
                    error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to create organization: {}", err);
                    error.set(Some(err.message));
                }
            }
        });
    };

    rsx! {
        form {
            class: "flex flex-col md:flex-row gap-2",
            onsubmit: on_submit,
            input {
                class: "input input-bordered",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input input-bordered",
                placeholder: "Email domain",
                value: "{domain}",
                oninput: move |evt| domain.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: name().trim().is_empty(),
                "Create"
            }
            if let Some(message) = error() {
                p { class: "text-error", "{message}" }
            }
        }
    }
}

#[component]
fn RoleEditor() -> Element {
    let mut users = use_signal(|| None::<Result<PaginatedUsersDto, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_all_users(1, 100).await
    });

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
        div {
            class: "card bg-base-200 overflow-x-auto",
            match users() {
                Some(Ok(data)) => rsx! {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "User" }
                                for role in ROLES {
                                    th { key: "{role.as_str()}", {role.as_str()} }
                                }
                            }
                        }
                        tbody {
                            for user in data.users {
                                RoleRow { key: "{user.id}", user: user.clone(), refetch_trigger }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "text-error p-4", "{err}" }
                },
                None => rsx! {
                    span { class: "loading loading-spinner m-4" }
                },
            }
        }
    }
}

#[component]
fn RoleRow(user: UserDto, mut refetch_trigger: Signal<u32>) -> Element {
    rsx! {
        tr {
            td { "{user.email}" }
            for role in ROLES {
                td {
                    key: "{role.as_str()}",
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: user.has_role(role),
                        onchange: {
                            let user = user.clone();
                            move |_| {
                                let mut roles: Vec<String> = user
                                    .roles
                                    .iter()
                                    .filter(|r| **r != role)
                                    .map(|r| r.as_str().to_string())
                                    .collect();
                                if !user.has_role(role) {
                                    roles.push(role.as_str().to_string());
                                }

                                #[cfg(feature = "web")]
                                {
                                    let user_id = user.id.clone();
                                    spawn(async move {
                                        if let Err(err) = update_user_roles(&user_id, roles).await {
                                            tracing::error!("Failed to update roles: {}", err);
                                        }
                                        refetch_trigger.set(refetch_trigger() + 1);
                                    });
                                }
                                #[cfg(not(feature = "web"))]
                                let _ = roles;
                            }
                        },
                    }
                }
            }
        }
    }
}
