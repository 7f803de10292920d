//! # Expense Client SDK
//!
//! A typed Rust client for the expense tracker API.

use expense_types::{Category, CategoryId, Expenditure, ExpenditureId, ExpenditureRequest};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Expense tracker API client.
pub struct ExpenseClient {
    base_url: String,
    http: Client,
}

impl ExpenseClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Records a new expenditure.
    pub async fn create_expenditure(
        &self,
        req: &ExpenditureRequest,
    ) -> Result<Expenditure, ClientError> {
        let resp = self
            .request(Method::POST, "/expenditures")
            .json(req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Gets an expenditure by ID.
    pub async fn get_expenditure(&self, id: ExpenditureId) -> Result<Expenditure, ClientError> {
        self.get(&format!("/expenditures/{}", id)).await
    }

    /// Lists all expenditures.
    pub async fn list_expenditures(&self) -> Result<Vec<Expenditure>, ClientError> {
        self.get("/expenditures").await
    }

    /// Replaces an expenditure.
    pub async fn update_expenditure(
        &self,
        id: ExpenditureId,
        req: &ExpenditureRequest,
    ) -> Result<Expenditure, ClientError> {
        let resp = self
            .request(Method::PUT, &format!("/expenditures/{}", id))
            .json(req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Deletes an expenditure.
    pub async fn delete_expenditure(&self, id: ExpenditureId) -> Result<(), ClientError> {
        let resp = self
            .request(Method::DELETE, &format!("/expenditures/{}", id))
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, resp).await)
        }
    }

    /// Lists the category palette.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get("/categories").await
    }

    /// Gets a category by ID.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, ClientError> {
        self.get(&format!("/categories/{}", id)).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.request(Method::GET, path).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Self::api_error(status, resp).await)
        }
    }

    async fn api_error(status: reqwest::StatusCode, resp: reqwest::Response) -> ClientError {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
