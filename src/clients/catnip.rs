use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{ClientError, base_url, check_response};
use crate::api::{CreateFactRequest, LoginRequest, LoginResponse, MessageResponse};
use crate::models::Fact;

/// Typed client for the catnip server API.
#[derive(Debug, Clone)]
pub struct CatnipClient {
    client: Client,
    base_url: Url,
}

impl CatnipClient {
    pub fn new(client: Client, server_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            base_url: base_url(server_url)?,
        })
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let url = self.endpoint("api/login")?;
        debug!("POST {url}");

        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(url).json(&body).send().await?;
        let login = check_response(response).await?.json().await?;
        Ok(login)
    }

    pub async fn list_facts(&self) -> Result<Vec<Fact>, ClientError> {
        let url = self.endpoint("api/facts")?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let facts = check_response(response).await?.json().await?;
        Ok(facts)
    }

    pub async fn create_fact(&self, token: &str, text: &str) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint("api/facts/create")?;
        debug!("POST {url}");

        let body = CreateFactRequest {
            new_cat_fact: Some(text.to_string()),
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        let message = check_response(response).await?.json().await?;
        Ok(message)
    }
}
