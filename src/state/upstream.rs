use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use crate::{
    graphql::{
        Company,
        NewUser,
        User,
        UserPatch,
    },
    error::Error,
};

/// The REST service that owns users and companies.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// `GET /users/{id}`
    async fn user(&self, id: &str) -> Result<User, Error>;

    /// `GET /companies/{id}`
    async fn company(&self, id: &str) -> Result<Company, Error>;

    /// `GET /companies/{id}/users`
    async fn company_users(&self, company_id: &str) -> Result<Vec<User>, Error>;

    /// `POST /users`
    async fn create_user(&self, user: &NewUser) -> Result<User, Error>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &str) -> Result<User, Error>;

    /// `PATCH /users/{id}`
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, Error>;
}

pub struct HttpUpstream {
    client: Client,
    base_url: Url,
}

impl HttpUpstream {
    pub fn new(base_url: Url) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpUpstream {
            client,
            base_url,
        })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base urls, which are refused at startup.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn fetch(&self, request: RequestBuilder) -> Result<Vec<u8>, Error> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let body = self.fetch(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn user(&self, id: &str) -> Result<User, Error> {
        self.send(self.request(Method::GET, &["users", id])).await
    }

    async fn company(&self, id: &str) -> Result<Company, Error> {
        self.send(self.request(Method::GET, &["companies", id])).await
    }

    async fn company_users(&self, company_id: &str) -> Result<Vec<User>, Error> {
        self.send(self.request(Method::GET, &["companies", company_id, "users"])).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        self.send(self.request(Method::POST, &["users"]).json(user)).await
    }

    async fn delete_user(&self, id: &str) -> Result<User, Error> {
        let body = self.fetch(self.request(Method::DELETE, &["users", id])).await?;
        // Some upstreams answer DELETE with no body at all.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(User::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, Error> {
        self.send(self.request(Method::PATCH, &["users", id]).json(patch)).await
    }
}
