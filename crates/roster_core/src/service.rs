use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{CatName, CatRecord, NewCatRecord},
    error::ApiError,
    protocol::{CatNameQuery, CatPayload, ListCatsResponse, SingleCatResponse, UpdateSalaryQuery},
};

use tracing::warn;

use crate::{config::ClientSettings, error::TransportError, events::RosterOperation};

#[async_trait]
pub trait RosterService: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CatRecord>, TransportError>;
    async fn fetch_one(&self, name: &CatName) -> Result<Option<CatRecord>, TransportError>;
    async fn create(&self, record: &NewCatRecord) -> Result<(), TransportError>;
    async fn remove(&self, name: &CatName) -> Result<(), TransportError>;
    async fn update_salary(&self, name: &CatName, salary: u64) -> Result<(), TransportError>;
}

pub struct HttpRosterService {
    http: Client,
    base_url: String,
}

impl HttpRosterService {
    pub fn new(settings: &ClientSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(http: Client, settings: &ClientSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cats_url(&self) -> String {
        format!("{}/cats/", self.base_url)
    }

    fn cat_url(&self) -> String {
        format!("{}/cat/", self.base_url)
    }
}

async fn ensure_success(
    operation: RosterOperation,
    response: Response,
) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .map_err(|source| TransportError::Request { operation, source })?;
    let detail = match serde_json::from_str::<ApiError>(&body) {
        Ok(api_error) => api_error.message(),
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        Err(_) => body,
    };
    Err(TransportError::Status {
        operation,
        status: status.as_u16(),
        detail,
    })
}

async fn decode_body<T: DeserializeOwned>(
    operation: RosterOperation,
    response: Response,
) -> Result<T, TransportError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| TransportError::Request { operation, source })?;
    serde_json::from_slice(&bytes).map_err(|source| TransportError::Decode { operation, source })
}

#[async_trait]
impl RosterService for HttpRosterService {
    async fn list_all(&self) -> Result<Vec<CatRecord>, TransportError> {
        let operation = RosterOperation::List;
        let response = self
            .http
            .get(self.cats_url())
            .send()
            .await
            .map_err(|source| TransportError::Request { operation, source })?;
        let response = ensure_success(operation, response).await?;
        let body: ListCatsResponse = decode_body(operation, response).await?;
        let mut records = Vec::new();
        for (index, row) in body.rows().into_iter().enumerate() {
            match row {
                Ok(payload) => records.push(CatRecord::from(payload)),
                Err(err) => warn!(index, error = %err, "roster: skipping malformed cat row"),
            }
        }
        Ok(records)
    }

    async fn fetch_one(&self, name: &CatName) -> Result<Option<CatRecord>, TransportError> {
        let operation = RosterOperation::Fetch;
        let response = self
            .http
            .get(self.cat_url())
            .query(&CatNameQuery {
                catname: name.0.clone(),
            })
            .send()
            .await
            .map_err(|source| TransportError::Request { operation, source })?;
        let response = ensure_success(operation, response).await?;
        let body: Option<SingleCatResponse> = decode_body(operation, response).await?;
        Ok(body
            .and_then(|body| body.message)
            .map(CatRecord::from))
    }

    async fn create(&self, record: &NewCatRecord) -> Result<(), TransportError> {
        let operation = RosterOperation::Create;
        let response = self
            .http
            .post(self.cat_url())
            .json(&CatPayload::from(record))
            .send()
            .await
            .map_err(|source| TransportError::Request { operation, source })?;
        ensure_success(operation, response).await?;
        Ok(())
    }

    async fn remove(&self, name: &CatName) -> Result<(), TransportError> {
        let operation = RosterOperation::Remove;
        let response = self
            .http
            .delete(self.cat_url())
            .query(&CatNameQuery {
                catname: name.0.clone(),
            })
            .send()
            .await
            .map_err(|source| TransportError::Request { operation, source })?;
        ensure_success(operation, response).await?;
        Ok(())
    }

    async fn update_salary(&self, name: &CatName, salary: u64) -> Result<(), TransportError> {
        let operation = RosterOperation::UpdateSalary;
        let response = self
            .http
            .patch(self.cat_url())
            .query(&UpdateSalaryQuery {
                catname: name.0.clone(),
                salary,
            })
            .send()
            .await
            .map_err(|source| TransportError::Request { operation, source })?;
        ensure_success(operation, response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
