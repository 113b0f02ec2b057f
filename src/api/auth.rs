// ABOUTME: Authentication request and response payloads of the backend API
// ABOUTME: Register, login, and token refresh DTOs with client-side account validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::AppResult;
use crate::models::{Email, UserId, Username};
use serde::{Deserialize, Serialize};

/// `POST /api/auth/register` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRegisterRequest {
    /// Account email
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
    /// Display name
    pub username: String,
}

impl AuthRegisterRequest {
    /// Build a request, normalizing email and username
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the email or username is malformed
    pub fn new(email: &str, password: impl Into<String>, username: &str) -> AppResult<Self> {
        Ok(Self {
            email: Email::parse(email)?.into(),
            password: password.into(),
            username: Username::parse(username)?.into(),
        })
    }
}

/// `POST /api/auth/register` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRegisterResponse {
    /// Identifier of the new user
    pub user_id: UserId,
}

/// `POST /api/auth/login` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLoginRequest {
    /// Account email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// `POST /api/auth/login` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthLoginResponse {
    /// Bearer token
    pub access_token: String,
    /// Token lifetime (seconds)
    pub expires_in: u64,
}

/// `POST /api/auth/refresh` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRefreshResponse {
    /// Fresh bearer token
    pub access_token: String,
    /// Token lifetime (seconds)
    pub expires_in: u64,
}
