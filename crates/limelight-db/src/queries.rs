use crate::Database;
use crate::models::{LiverRow, NewsRow};
use anyhow::Result;
use rusqlite::{Connection, Row};

impl Database {
    // -- News --

    pub fn latest_news(&self, limit: u32) -> Result<Vec<NewsRow>> {
        self.with_conn(|conn| {
            query_news(
                conn,
                "SELECT id, title, body, date FROM news ORDER BY date DESC LIMIT ?1",
                rusqlite::params![limit],
            )
        })
    }

    pub fn all_news(&self) -> Result<Vec<NewsRow>> {
        self.with_conn(|conn| {
            query_news(
                conn,
                "SELECT id, title, body, date FROM news ORDER BY date DESC",
                rusqlite::params![],
            )
        })
    }

    pub fn news_by_id(&self, id: i64) -> Result<Option<NewsRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, body, date FROM news WHERE id = ?1")?;
            let row = stmt.query_row([id], news_from_row).optional()?;
            Ok(row)
        })
    }

    // -- Livers --

    pub fn all_livers(&self) -> Result<Vec<LiverRow>> {
        self.with_conn(|conn| query_livers(conn, &format!("SELECT {LIVER_COLS} FROM livers")))
    }

    pub fn picked_livers(&self) -> Result<Vec<LiverRow>> {
        self.with_conn(|conn| {
            query_livers(conn, &format!("SELECT {LIVER_COLS} FROM livers WHERE pick = 1"))
        })
    }

    pub fn liver_by_name_id(&self, name_id: &str) -> Result<Option<LiverRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!("SELECT {LIVER_COLS} FROM livers WHERE name_id = ?1"))?;
            let row = stmt.query_row([name_id], liver_from_row).optional()?;
            Ok(row)
        })
    }

    // -- Submissions --

    pub fn insert_audition(&self, name: &str, email: &str, message: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO auditions (name, email, message) VALUES (?1, ?2, ?3)",
                (name, email, message),
            )?;
            Ok(())
        })
    }

    pub fn insert_contact(&self, name: &str, email: &str, message: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO contacts (name, email, message) VALUES (?1, ?2, ?3)",
                (name, email, message),
            )?;
            Ok(())
        })
    }
}

const LIVER_COLS: &str =
    "id, name_id, name, tagline, bio, avatar_url, twitter_url, youtube_url, pick";

fn news_from_row(row: &Row<'_>) -> rusqlite::Result<NewsRow> {
    Ok(NewsRow {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        date: row.get(3)?,
    })
}

fn liver_from_row(row: &Row<'_>) -> rusqlite::Result<LiverRow> {
    Ok(LiverRow {
        id: row.get(0)?,
        name_id: row.get(1)?,
        name: row.get(2)?,
        tagline: row.get(3)?,
        bio: row.get(4)?,
        avatar_url: row.get(5)?,
        twitter_url: row.get(6)?,
        youtube_url: row.get(7)?,
        pick: row.get(8)?,
    })
}

fn query_news<P: rusqlite::Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<NewsRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, news_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn query_livers(conn: &Connection, sql: &str) -> Result<Vec<LiverRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], liver_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
