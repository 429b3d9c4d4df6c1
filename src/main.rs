mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler::cycle_maintenance, service::auth::GoogleTokenVerifier,
            startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let verifier =
            GoogleTokenVerifier::new(http_client.clone(), config.google_client_id.clone());

        if config.maintenance_mode {
            tracing::warn!("Maintenance mode is enabled");
        }
        tracing::info!("Starting server");

        // Start cycle maintenance scheduler
        let scheduler_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = cycle_maintenance::start_scheduler(scheduler_db).await {
                tracing::error!("Cycle maintenance scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                verifier,
                config.maintenance_mode,
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
