use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Markdown, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{
        feedback::{FeedbackDto, FeedbackStatus},
        review::DashboardDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::review::{
    complete_review, get_assigned_reviews, get_dashboard, get_received_reviews,
};

#[component]
pub fn Home() -> Element {
    let mut dashboard = use_signal(|| None::<Result<DashboardDto, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_dashboard().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => dashboard.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch dashboard: {}", err);
            dashboard.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "{SITE_NAME}" }
        match dashboard() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        DashboardStats { dashboard: data }
                        div {
                            class: "grid md:grid-cols-2 gap-6",
                            ReviewList { title: "Reviews to write", received: false }
                            ReviewList { title: "Feedback about you", received: true }
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

#[component]
fn DashboardStats(dashboard: DashboardDto) -> Element {
    let stats = [
        ("To write", dashboard.assigned),
        ("Given", dashboard.given),
        ("Received", dashboard.received),
        ("Completed", dashboard.completed),
        ("Active cycles", dashboard.active_cycles),
    ];

    rsx! {
        div {
            class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
            for (label, value) in stats {
                div {
                    key: "{label}",
                    class: "stat",
                    div { class: "stat-title", "{label}" }
                    div { class: "stat-value", "{value}" }
                }
            }
        }
    }
}

#[component]
fn ReviewList(title: &'static str, received: bool) -> Element {
    let mut reviews = use_signal(|| None::<Result<Vec<FeedbackDto>, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        if received {
            get_received_reviews().await
        } else {
            get_assigned_reviews().await
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => reviews.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch reviews: {}", err);
            reviews.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "{title}" }
                match reviews() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "opacity-50", "Nothing here yet" }
                    },
                    Some(Ok(list)) => rsx! {
                        for feedback in list {
                            ReviewItem {
                                key: "{feedback.id}",
                                feedback: feedback.clone(),
                                can_complete: !received,
                                refetch_trigger,
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "text-error", "{err}" }
                    },
                    None => rsx! {
                        span { class: "loading loading-spinner" }
                    },
                }
            }
        }
    }
}

#[component]
fn ReviewItem(feedback: FeedbackDto, can_complete: bool, mut refetch_trigger: Signal<u32>) -> Element {
    let review_type = feedback.review_type.as_str();
    let status = feedback.status.as_str();
    let updated = feedback.updated_at.format("%Y-%m-%d").to_string();
    let show_complete = can_complete && feedback.status != FeedbackStatus::Completed;
    let feedback_id = feedback.id.clone();
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let on_complete = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            let feedback_id = feedback_id.clone();
            spawn(async move {
                match complete_review(&feedback_id).await {
                    Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                    Err(err) => {
                        tracing::error!("Failed to complete review: {}", err);
                        error.set(Some(err.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (&feedback_id, &mut refetch_trigger);
    };

    rsx! {
        div {
            class: "border-b border-base-300 pb-3",
            div {
                class: "flex justify-between gap-2 text-sm",
                span { class: "badge badge-outline capitalize", "{review_type}" }
                span { class: "opacity-70", "{status} · {updated}" }
            }
            if let Some(content) = feedback.content {
                Markdown { content: content.overall_comment, class: "mt-2" }
            }
            if show_complete {
                button {
                    class: "btn btn-sm btn-outline mt-2",
                    onclick: on_complete,
                    "Mark complete"
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
        }
    }
}
