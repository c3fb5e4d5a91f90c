use askama::Template;

use limelight_db::models::{LiverRow, NewsRow};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub news: Vec<NewsRow>,
    pub livers: Vec<LiverRow>,
}

#[derive(Template)]
#[template(path = "livers.html")]
pub struct LiversPage {
    pub livers: Vec<LiverRow>,
}

/// Detail page over an optional subject: an unknown slug still renders the
/// page shell rather than a 404, matching the site's historical behavior.
#[derive(Template)]
#[template(path = "liver.html")]
pub struct LiverPage {
    pub liver: Option<LiverRow>,
}

#[derive(Template)]
#[template(path = "news.html")]
pub struct NewsPage {
    pub news: Vec<NewsRow>,
}

#[derive(Template)]
#[template(path = "topic.html")]
pub struct TopicPage {
    pub news: Option<NewsRow>,
}

#[derive(Template)]
#[template(path = "audition.html")]
pub struct AuditionPage;

#[derive(Template)]
#[template(path = "audition_success.html")]
pub struct AuditionSuccessPage;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage;

#[derive(Template)]
#[template(path = "contact_success.html")]
pub struct ContactSuccessPage;

#[derive(Template)]
#[template(path = "privacy_policy.html")]
pub struct PrivacyPolicyPage;
