use std::sync::Arc;

use limelight_db::Database;
use limelight_mailer::Mailer;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub mailer: Mailer,
}
