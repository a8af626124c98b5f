use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,

    // unique: id
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub name: String,

    // unique: id
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub user_id: i64,
    pub chat_id: i64,
    pub content: String,

    // unique: id
    // references: user_id -> users, chat_id -> chats
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub chat_id: i64,
    pub user_id: i64,

    // unique: chat_id, user_id
}

/// A message joined with its chat's name and its author's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MessageView {
    pub chatname: String,
    pub content: String,
    pub username: String,
}

pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub(crate) fn require_id(field: &str, value: i64) -> AppResult<()> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!("{field} must be a positive id")));
    }
    Ok(())
}
