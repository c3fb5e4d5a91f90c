/// Database row types — these map directly to SQLite rows and flow straight
/// into the page templates.

pub struct NewsRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub date: String,
}

pub struct LiverRow {
    pub id: i64,
    pub name_id: String,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub avatar_url: String,
    pub twitter_url: Option<String>,
    pub youtube_url: Option<String>,
    pub pick: bool,
}
