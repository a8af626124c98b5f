//! Storage access.
//!
//! Handlers only see [`Store`]; [`sqlite::SqliteStore`] is the implementation the
//! binary wires in. Every statement behind it is parameterized.

pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{Chat, Membership, Message, MessageView, User};

pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn create_user(&self, username: &str) -> Result<User, sqlx::Error>;

    async fn create_chat(&self, name: &str) -> Result<Chat, sqlx::Error>;

    /// Adds every user to the chat, in order, as a single unit: either all
    /// memberships are stored or none are. Pairs that already exist are skipped.
    async fn add_members(&self, chat_id: i64, user_ids: &[i64]) -> Result<(), sqlx::Error>;

    async fn chat_members(&self, chat_id: i64) -> Result<Vec<Membership>, sqlx::Error>;

    async fn chat_exists(&self, chat_id: i64) -> Result<bool, sqlx::Error>;

    async fn create_message(&self, chat_id: i64, user_id: i64, content: &str) -> Result<Message, sqlx::Error>;

    /// Messages of a chat in insertion order.
    async fn chat_messages(&self, chat_id: i64) -> Result<Vec<MessageView>, sqlx::Error>;

    async fn message(&self, id: i64) -> Result<Option<MessageView>, sqlx::Error>;

    /// Returns the number of rows removed, zero when the id is unknown.
    async fn delete_message(&self, id: i64) -> Result<u64, sqlx::Error>;
}
