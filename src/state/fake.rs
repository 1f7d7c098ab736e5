//! In-memory stand-in for the REST service, used by schema tests.

use std::sync::Mutex;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use crate::{
    graphql::{
        Company,
        NewUser,
        User,
        UserPatch,
    },
    state::upstream::Upstream,
    error::Error,
};

pub struct FakeUpstream {
    users: Mutex<Vec<User>>,
    companies: Vec<Company>,
    requests: Mutex<Vec<(String, Option<Value>)>>,
    next_id: Mutex<u32>,
}

impl FakeUpstream {
    pub fn new(users: Vec<User>, companies: Vec<Company>) -> Self {
        FakeUpstream {
            users: Mutex::new(users),
            companies,
            requests: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
        }
    }

    /// Every request received so far, as `"VERB /path"` plus the JSON body.
    pub fn requests(&self) -> Vec<(String, Option<Value>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn stored_user(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap()
            .iter()
            .find(|user| user.id.as_deref() == Some(id))
            .cloned()
    }

    fn record(&self, request: String, body: Option<Value>) {
        self.requests.lock().unwrap().push((request, body));
    }

    fn not_found(path: &str) -> Error {
        Error::upstream_status(StatusCode::NOT_FOUND, &format!("http://fake{}", path))
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn user(&self, id: &str) -> Result<User, Error> {
        let path = format!("/users/{}", id);
        self.record(format!("GET {}", path), None);
        self.stored_user(id).ok_or_else(|| Self::not_found(&path))
    }

    async fn company(&self, id: &str) -> Result<Company, Error> {
        let path = format!("/companies/{}", id);
        self.record(format!("GET {}", path), None);
        self.companies
            .iter()
            .find(|company| company.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| Self::not_found(&path))
    }

    async fn company_users(&self, company_id: &str) -> Result<Vec<User>, Error> {
        self.record(format!("GET /companies/{}/users", company_id), None);
        Ok(
            self.users.lock().unwrap()
                .iter()
                .filter(|user| user.company_id.as_deref() == Some(company_id))
                .cloned()
                .collect()
        )
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        self.record("POST /users".to_string(), Some(serde_json::to_value(user)?));

        let mut next_id = self.next_id.lock().unwrap();
        let created = User {
            id: Some(next_id.to_string()),
            first_name: Some(user.first_name.clone()),
            age: Some(user.age),
            company_id: user.company_id.clone(),
        };
        *next_id += 1;
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_user(&self, id: &str) -> Result<User, Error> {
        let path = format!("/users/{}", id);
        self.record(format!("DELETE {}", path), None);

        let mut users = self.users.lock().unwrap();
        let index = users
            .iter()
            .position(|user| user.id.as_deref() == Some(id))
            .ok_or_else(|| Self::not_found(&path))?;
        users.remove(index);
        Ok(serde_json::from_value(json!({}))?)
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, Error> {
        let path = format!("/users/{}", id);
        self.record(format!("PATCH {}", path), Some(serde_json::to_value(patch)?));

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|user| user.id.as_deref() == Some(id))
            .ok_or_else(|| Self::not_found(&path))?;
        if let Some(first_name) = &patch.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }
        if let Some(company_id) = &patch.company_id {
            user.company_id = Some(company_id.clone());
        }
        Ok(user.clone())
    }
}
