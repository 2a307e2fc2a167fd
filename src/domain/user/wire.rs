//! Wire types for user responses and profile-change requests (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user profile. Private fields (email, API key) are only populated on
/// `GET /v0/privateprofile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_link1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_link2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_link3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_link4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_account_balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<Decimal>,
}

/// Response for `GET /v0/usercredit/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCredit {
    pub credit: Decimal,
}

/// Response for `GET /v0/portfolio/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub portfolio_items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub market_id: i64,
    #[serde(default)]
    pub question_title: String,
    pub yes_shares_owned: Decimal,
    pub no_shares_owned: Decimal,
}

// ─── Request bodies ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameChange {
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmojiChange {
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionChange {
    pub description: String,
}

/// Body for `POST /v0/profilechange/links`. Absent links are left unchanged
/// by the server; empty strings clear them.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinksChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_link1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_link2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_link3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_link4: Option<String>,
}
