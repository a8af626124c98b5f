use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};
use tracing::debug;

use crate::db::{Chat, Membership, Message, MessageView, User};

use super::Store;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS chats (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        chatname TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        chat_id INTEGER NOT NULL REFERENCES chats (id),
        content TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS chatuser (
        chat_id INTEGER NOT NULL REFERENCES chats (id),
        user_id INTEGER NOT NULL REFERENCES users (id),
        PRIMARY KEY (chat_id, user_id)
    )",
];

const MESSAGE_VIEW: &str = "SELECT chats.chatname AS chatname, messages.content AS content, users.username AS username
    FROM messages
    JOIN users ON users.id = messages.user_id
    JOIN chats ON chats.id = messages.chat_id";

#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `url` and bootstraps the schema.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// A private database living in one connection that the pool never recycles.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        for stmt in SCHEMA {
            sqlx::query(stmt)
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_user(&self, username: &str) -> Result<User, sqlx::Error> {
        let id = sqlx::query("INSERT INTO users (username) VALUES (?)")
            .bind(username)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(User { id, username: username.to_owned() })
    }

    async fn create_chat(&self, name: &str) -> Result<Chat, sqlx::Error> {
        let id = sqlx::query("INSERT INTO chats (chatname) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Chat { id, name: name.to_owned() })
    }

    async fn add_members(&self, chat_id: i64, user_ids: &[i64]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for &user_id in user_ids {
            let added = sqlx::query("INSERT OR IGNORE INTO chatuser (chat_id, user_id) VALUES (?, ?)")
                .bind(chat_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();

            if added == 0 {
                debug!(chat_id, user_id, "already a member");
            }
        }

        tx.commit().await
    }

    async fn chat_members(&self, chat_id: i64) -> Result<Vec<Membership>, sqlx::Error> {
        sqlx::query_as("SELECT chat_id, user_id FROM chatuser WHERE chat_id = ? ORDER BY user_id")
            .bind(chat_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn chat_exists(&self, chat_id: i64) -> Result<bool, sqlx::Error> {
        Ok(
            sqlx::query("SELECT 1 FROM chats WHERE id = ?")
                .bind(chat_id)
                .fetch_optional(&self.pool)
                .await?
                .is_some()
        )
    }

    async fn create_message(&self, chat_id: i64, user_id: i64, content: &str) -> Result<Message, sqlx::Error> {
        let id = sqlx::query("INSERT INTO messages (user_id, chat_id, content) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(chat_id)
            .bind(content)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Message { id, user_id, chat_id, content: content.to_owned() })
    }

    async fn chat_messages(&self, chat_id: i64) -> Result<Vec<MessageView>, sqlx::Error> {
        let sql = format!("{MESSAGE_VIEW} WHERE messages.chat_id = ? ORDER BY messages.id");
        sqlx::query_as(&sql)
            .bind(chat_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn message(&self, id: i64) -> Result<Option<MessageView>, sqlx::Error> {
        let sql = format!("{MESSAGE_VIEW} WHERE messages.id = ?");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_message(&self, id: i64) -> Result<u64, sqlx::Error> {
        Ok(
            sqlx::query("DELETE FROM messages WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?
                .rows_affected()
        )
    }
}
