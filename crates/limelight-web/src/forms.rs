use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::error;

use crate::error::PageError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
enum SubmissionKind {
    Audition,
    Contact,
}

pub async fn submit_audition(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Result<impl IntoResponse, PageError> {
    submit(state, SubmissionKind::Audition, form).await
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Result<impl IntoResponse, PageError> {
    submit(state, SubmissionKind::Contact, form).await
}

/// The row must be durably recorded before any email is attempted; the
/// redirect is issued without waiting on delivery. Mail failures never reach
/// the client.
async fn submit(
    state: AppState,
    kind: SubmissionKind,
    form: SubmissionForm,
) -> Result<impl IntoResponse, PageError> {
    let db = state.clone();
    let row = form.clone();
    tokio::task::spawn_blocking(move || match kind {
        SubmissionKind::Audition => db.db.insert_audition(&row.name, &row.email, &row.message),
        SubmissionKind::Contact => db.db.insert_contact(&row.name, &row.email, &row.message),
    })
    .await??;

    tokio::spawn(notify(state, kind, form));

    Ok((StatusCode::FOUND, [(header::LOCATION, kind.success_path())]))
}

/// Detached best-effort notification task. Sends applicant confirmation then
/// operator notification, logging failures and dropping them.
async fn notify(state: AppState, kind: SubmissionKind, form: SubmissionForm) {
    if let Err(err) = state
        .mailer
        .send(&form.email, kind.applicant_subject(), kind.applicant_body(&form))
        .await
    {
        error!("Confirmation mail to {} failed: {}", form.email, err);
    }
    if let Err(err) = state
        .mailer
        .send_to_operator(kind.operator_subject(), kind.operator_body(&form))
        .await
    {
        error!("Operator notification failed: {}", err);
    }
}

impl SubmissionKind {
    fn success_path(self) -> &'static str {
        match self {
            Self::Audition => "/auditionSuc",
            Self::Contact => "/contactSuc",
        }
    }

    fn applicant_subject(self) -> &'static str {
        match self {
            Self::Audition => "We received your audition",
            Self::Contact => "We received your message",
        }
    }

    fn applicant_body(self, form: &SubmissionForm) -> String {
        match self {
            Self::Audition => format!(
                "Hello {},\n\nWe received your audition and will be in touch soon.",
                form.name
            ),
            Self::Contact => format!(
                "Hello {},\n\nWe received your message and will get back to you shortly.",
                form.name
            ),
        }
    }

    fn operator_subject(self) -> &'static str {
        match self {
            Self::Audition => "New audition submission",
            Self::Contact => "New contact message",
        }
    }

    fn operator_body(self, form: &SubmissionForm) -> String {
        match self {
            Self::Audition => format!(
                "Hello,\n\nA new audition arrived from {}.\n\n{}",
                form.name, form.email
            ),
            Self::Contact => format!(
                "Hello,\n\nA new message arrived from {}.\n\n{}\n\n{}",
                form.name, form.email, form.message
            ),
        }
    }
}
