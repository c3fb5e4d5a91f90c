use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::PageError;
use crate::state::AppState;
use crate::templates::{
    AuditionPage, AuditionSuccessPage, ContactPage, ContactSuccessPage, HomePage, LiverPage,
    LiversPage, NewsPage, PrivacyPolicyPage, TopicPage,
};

fn render<T: Template>(template: T) -> Result<Html<String>, PageError> {
    Ok(Html(template.render()?))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let db = state.clone();
    let news = tokio::task::spawn_blocking(move || db.db.latest_news(3)).await??;
    let db = state.clone();
    let livers = tokio::task::spawn_blocking(move || db.db.picked_livers()).await??;
    render(HomePage { news, livers })
}

pub async fn livers(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let db = state.clone();
    let livers = tokio::task::spawn_blocking(move || db.db.all_livers()).await??;
    render(LiversPage { livers })
}

pub async fn liver_detail(
    State(state): State<AppState>,
    Path(name_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let db = state.clone();
    let liver = tokio::task::spawn_blocking(move || db.db.liver_by_name_id(&name_id)).await??;
    render(LiverPage { liver })
}

pub async fn news(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let db = state.clone();
    let news = tokio::task::spawn_blocking(move || db.db.all_news()).await??;
    render(NewsPage { news })
}

pub async fn topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let db = state.clone();
    let news = tokio::task::spawn_blocking(move || db.db.news_by_id(id)).await??;
    render(TopicPage { news })
}

pub async fn audition() -> Result<Html<String>, PageError> {
    render(AuditionPage)
}

pub async fn audition_success() -> Result<Html<String>, PageError> {
    render(AuditionSuccessPage)
}

pub async fn contact() -> Result<Html<String>, PageError> {
    render(ContactPage)
}

pub async fn contact_success() -> Result<Html<String>, PageError> {
    render(ContactSuccessPage)
}

pub async fn privacy_policy() -> Result<Html<String>, PageError> {
    render(PrivacyPolicyPage)
}
