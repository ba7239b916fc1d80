//! Server construction and wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use mockable::DefaultClock;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::{ProfileSource, RecordSource};
use backend::domain::{DirectoryService, DirectoryStore, ProfileEnrichmentService};
use backend::inbound::http::departments::list_departments;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{get_user, list_users};
use backend::outbound::gravatar::GravatarHttpSource;
use backend::outbound::record_source::{FileRecordSource, HttpRecordSource};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the record source selected by configuration: remote endpoint when
/// one is configured, local file otherwise.
fn build_record_source(config: &ServerConfig) -> std::io::Result<Arc<dyn RecordSource>> {
    match config.records_url() {
        Some(url) => {
            let source = HttpRecordSource::new(url.clone(), config.profile_timeout())
                .map_err(|error| std::io::Error::other(format!("records client: {error}")))?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(FileRecordSource::new(config.data_path()))),
    }
}

/// Assemble the directory state: record store, enrichment service, and the
/// query layer behind the driving port.
pub fn build_directory_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let clock = Arc::new(DefaultClock);
    let record_source = build_record_source(config)?;
    let store = Arc::new(DirectoryStore::with_ttl(
        record_source,
        clock.clone(),
        config.records_ttl(),
    ));

    let profile_source: Arc<dyn ProfileSource> = Arc::new(
        GravatarHttpSource::new(config.profile_endpoint().clone(), config.profile_timeout())
            .map_err(|error| std::io::Error::other(format!("gravatar client: {error}")))?,
    );
    let enrichment = Arc::new(ProfileEnrichmentService::with_ttl(
        profile_source,
        clock,
        config.profile_ttl(),
    ));

    let directory = Arc::new(DirectoryService::new(store, enrichment));
    Ok(HttpState::new(directory, config.avatar_base().clone()))
}

/// Assemble the application with routes, middleware, and docs.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .wrap(Trace)
        .app_data(health_state)
        .app_data(http_state)
        .service(live)
        .service(ready)
        .service(
            web::scope("/api/v1")
                .service(list_users)
                .service(get_user)
                .service(list_departments),
        );
    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    app
}

/// Generate a demo backing document when the configured file is missing.
#[cfg(feature = "example-data")]
pub fn seed_demo_data(config: &ServerConfig) -> std::io::Result<()> {
    use example_data::{generate_demo_members, write_members_file};
    use tracing::info;

    const DEMO_SEED: u64 = 42;
    const DEMO_COUNT: usize = 12;

    let path = config.data_path();
    if path.exists() {
        return Ok(());
    }

    let members = generate_demo_members(DEMO_SEED, DEMO_COUNT).map_err(std::io::Error::other)?;
    write_members_file(path, &members).map_err(std::io::Error::other)?;
    info!(
        path = %path.display(),
        count = members.len(),
        "seeded demo directory data"
    );
    Ok(())
}
