use serde_derive::Deserialize;
use crate::{
    graphql::{
        context::Context,
        user::User,
    },
    utils::id::deserialize_optional_id,
    error::Error,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
}

#[cfg(test)]
impl Company {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Company {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        }
    }
}

#[juniper::graphql_object(context = Context)]
impl Company {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    async fn users(&self, context: &Context) -> Result<Option<Vec<User>>, Error> {
        let id = match self.id.as_deref() {
            Some(id) => id,
            None => return Ok(Some(Vec::new())),
        };
        let users = context.state().upstream().company_users(id).await?;
        Ok(Some(users))
    }
}

pub struct QueryCompany;

impl QueryCompany {
    pub async fn company(context: &Context, id: &str) -> Result<Option<Company>, Error> {
        let company = context.state().upstream().company(id).await?;
        Ok(Some(company))
    }
}
