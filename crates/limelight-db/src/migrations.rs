use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS news (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            body        TEXT NOT NULL,
            date        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_news_date
            ON news(date);

        CREATE TABLE IF NOT EXISTS livers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name_id     TEXT NOT NULL UNIQUE,
            name        TEXT NOT NULL,
            tagline     TEXT NOT NULL DEFAULT '',
            bio         TEXT NOT NULL DEFAULT '',
            avatar_url  TEXT NOT NULL DEFAULT '',
            twitter_url TEXT,
            youtube_url TEXT,
            pick        INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS auditions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS contacts (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
