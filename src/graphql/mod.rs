use juniper::{
    EmptySubscription,
    RootNode,
};
use crate::error::Error;

mod context;
mod company;
mod user;

pub use context::Context;
pub use company::Company;
pub use user::{
    NewUser,
    User,
    UserPatch,
};

use company::QueryCompany;
use user::{
    MutationUser,
    QueryUser,
};

pub struct QueryRoot;

#[juniper::graphql_object(context = Context)]
impl QueryRoot {
    async fn user(context: &Context, id: String) -> Result<Option<User>, Error> {
        QueryUser::user(context, &id).await
    }

    async fn company(context: &Context, id: String) -> Result<Option<Company>, Error> {
        QueryCompany::company(context, &id).await
    }
}

pub struct MutationRoot;

#[juniper::graphql_object(context = Context)]
impl MutationRoot {
    async fn add_user(
        context: &Context,
        first_name: String,
        age: i32,
        company_id: Option<String>,
    ) -> Result<Option<User>, Error> {
        MutationUser::add(context, NewUser { first_name, age, company_id }).await
    }

    async fn delete_user(context: &Context, id: String) -> Result<Option<User>, Error> {
        MutationUser::delete(context, &id).await
    }

    async fn edit_user(
        context: &Context,
        id: String,
        first_name: Option<String>,
        age: Option<i32>,
        company_id: Option<String>,
    ) -> Result<Option<User>, Error> {
        MutationUser::edit(context, &id, UserPatch { first_name, age, company_id }).await
    }
}

pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<Context>>;

pub fn schema() -> Schema {
    Schema::new(QueryRoot, MutationRoot, EmptySubscription::new())
}
