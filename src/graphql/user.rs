use serde_derive::{Deserialize, Serialize};
use crate::{
    graphql::{
        context::Context,
        company::Company,
    },
    utils::id::deserialize_optional_id,
    error::Error,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub(crate) id: Option<String>,
    pub(crate) first_name: Option<String>,
    pub(crate) age: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub(crate) company_id: Option<String>,
}

#[cfg(test)]
impl User {
    pub fn new(id: &str, first_name: &str, age: i32, company_id: Option<&str>) -> Self {
        User {
            id: Some(id.to_string()),
            first_name: Some(first_name.to_string()),
            age: Some(age),
            company_id: company_id.map(str::to_string),
        }
    }
}

#[juniper::graphql_object(context = Context)]
impl User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn age(&self) -> Option<i32> {
        self.age
    }

    fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }

    async fn company(&self, context: &Context) -> Result<Option<Company>, Error> {
        // No reference, nothing to ask the upstream for.
        let company_id = match self.company_id.as_deref() {
            Some(company_id) => company_id,
            None => return Ok(None),
        };
        let company = context.state().upstream().company(company_id).await?;
        Ok(Some(company))
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Body of `PATCH /users/{id}`. Only the fields that were given are sent, so
/// the upstream keeps everything else as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

pub struct QueryUser;

impl QueryUser {
    pub async fn user(context: &Context, id: &str) -> Result<Option<User>, Error> {
        let user = context.state().upstream().user(id).await?;
        Ok(Some(user))
    }
}

pub struct MutationUser;

impl MutationUser {
    pub async fn add(context: &Context, user: NewUser) -> Result<Option<User>, Error> {
        let user = context.state().upstream().create_user(&user).await?;
        Ok(Some(user))
    }

    pub async fn delete(context: &Context, id: &str) -> Result<Option<User>, Error> {
        let user = context.state().upstream().delete_user(id).await?;
        Ok(Some(user))
    }

    pub async fn edit(context: &Context, id: &str, patch: UserPatch) -> Result<Option<User>, Error> {
        let user = context.state().upstream().update_user(id, &patch).await?;
        Ok(Some(user))
    }
}
