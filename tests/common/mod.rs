#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use link_registry::api::routes;
use link_registry::application::services::LinkService;
use link_registry::domain::entities::{Link, NewLink};
use link_registry::domain::repositories::LinkRepository;
use link_registry::infrastructure::persistence::MemoryLinkRepository;
use link_registry::routes::app_router;
use link_registry::state::AppState;
use link_registry::utils::slug::RandomSlugGenerator;

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(RandomSlugGenerator::default()),
    ));

    (AppState::new(link_service), repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, slug: &str, url: &str) -> Link {
    repo.create(NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap()
}

/// API routes only, no static files or outer middleware.
pub fn api_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let app: Router = routes::routes().with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

pub fn client_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client")
}

/// The complete application router serving the repository's `client/` directory.
pub fn app_server(expose_stack: bool) -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let app = app_router(state, client_dir(), expose_stack);

    (TestServer::new(app).unwrap(), repo)
}
