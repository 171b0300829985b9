use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::config::ClientConfig;
use crate::error::ErrorBody;
use crate::models::comments::{self, CreateComment};
use crate::models::members::{LoginMember, LoginResponse, MemberResponse, RegisterMember};
use crate::models::portfolio::{
    self, CreatePortfolio, PortfolioDetail, PortfolioWithAuthor, PriceFilter,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a structured error body.
    #[error("{status} {error}: {message}")]
    Api {
        status: u16,
        error: String,
        message: String,
    },

    #[error("You need to log in first")]
    NotLoggedIn,

    #[error("No portfolio is currently open")]
    NoCurrentPortfolio,
}

impl ClientError {
    /// The server's error code (`conflict`, `not_found`, ...), if the server answered.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Thin typed wrapper over the marketplace HTTP API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch `config.json` from `config_url` and build a client for the server it names.
    pub async fn from_config_url(config_url: &str) -> Result<Self, ClientError> {
        let config: ClientConfig = reqwest::get(config_url)
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(base_url = %config.base_url(), "loaded client config");
        Ok(Self::new(config.base_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/allMembers`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL of the filter endpoint for `filter`.
    pub fn filter_url(&self, filter: &PriceFilter) -> String {
        self.endpoint(&format!(
            "/filterPortfolios/{}/{}/{}",
            filter.min_price,
            filter.max_price,
            urlencoding::encode(filter.category_segment())
        ))
    }

    pub async fn register(&self, input: &RegisterMember) -> Result<MemberResponse, ClientError> {
        self.send(self.http.post(self.endpoint("/registerMember")).json(input))
            .await
    }

    pub async fn login(&self, input: &LoginMember) -> Result<LoginResponse, ClientError> {
        self.send(self.http.post(self.endpoint("/loginMember")).json(input))
            .await
    }

    pub async fn all_members(&self) -> Result<Vec<MemberResponse>, ClientError> {
        self.send(self.http.get(self.endpoint("/allMembers"))).await
    }

    pub async fn account_info(
        &self,
        token: &str,
        account_id: Uuid,
    ) -> Result<MemberResponse, ClientError> {
        let url = self.endpoint(&format!("/myAccountInfo/{account_id}"));
        self.send(self.http.get(url).bearer_auth(token)).await
    }

    pub async fn add_portfolio(
        &self,
        token: &str,
        input: &CreatePortfolio,
    ) -> Result<portfolio::Model, ClientError> {
        let request = self.http.post(self.endpoint("/addPortfolio"));
        self.send(request.bearer_auth(token).json(input)).await
    }

    pub async fn all_portfolios(&self) -> Result<Vec<portfolio::Model>, ClientError> {
        self.send(self.http.get(self.endpoint("/allPortfolios"))).await
    }

    pub async fn member_portfolios(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<portfolio::Model>, ClientError> {
        let url = self.endpoint(&format!("/myPortfolios/{account_id}"));
        self.send(self.http.get(url)).await
    }

    pub async fn portfolios_with_authors(&self) -> Result<Vec<PortfolioWithAuthor>, ClientError> {
        self.send(self.http.get(self.endpoint("/portfoliosAndAuthors")))
            .await
    }

    pub async fn portfolio_detail(&self, id: Uuid) -> Result<PortfolioDetail, ClientError> {
        let url = self.endpoint(&format!("/portfolioWithAuthor/{id}"));
        self.send(self.http.get(url)).await
    }

    pub async fn filter_portfolios(
        &self,
        filter: &PriceFilter,
    ) -> Result<Vec<PortfolioWithAuthor>, ClientError> {
        self.send(self.http.get(self.filter_url(filter))).await
    }

    pub async fn add_comment(
        &self,
        token: &str,
        input: &CreateComment,
    ) -> Result<comments::Model, ClientError> {
        let request = self.http.post(self.endpoint("/addComment"));
        self.send(request.bearer_auth(token).json(input)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let parsed: Option<ErrorBody> = serde_json::from_str(&body).ok();
    Err(match parsed {
        Some(ErrorBody { error, message }) => ClientError::Api {
            status: status.as_u16(),
            error,
            message,
        },
        None => ClientError::Api {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("unknown")
                .to_lowercase()
                .replace(' ', "_"),
            message: body,
        },
    })
}
