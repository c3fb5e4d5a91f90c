pub mod error;
pub mod forms;
pub mod pages;
pub mod state;
pub mod templates;

pub use state::{AppState, AppStateInner};

use axum::Router;
use axum::routing::get;

/// Full page router. Static assets are layered on by the server binary so
/// tests can drive these routes without a filesystem.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/livers", get(pages::livers))
        .route("/liver/{name_id}", get(pages::liver_detail))
        .route("/news", get(pages::news))
        .route("/topic/{id}", get(pages::topic))
        .route("/audition", get(pages::audition).post(forms::submit_audition))
        .route("/auditionSuc", get(pages::audition_success))
        .route("/contact", get(pages::contact).post(forms::submit_contact))
        .route("/contactSuc", get(pages::contact_success))
        .route("/PrivacyPolicy", get(pages::privacy_policy))
        .with_state(state)
}
