use warp::{
    Filter,
    Rejection,
    reply::{Reply, Response},
    filters::BoxedFilter,
    header,
    path,
};
use juniper_warp::{
    make_graphql_filter,
    graphiql_filter,
};
use crate::{
    graphql::{
        Context,
        schema,
    },
    state::State,
};

fn context_filter(state: State) -> BoxedFilter<(Context,)> {
    warp::any()
        .map(move || Context::new(state.clone()))
        .boxed()
}

/// Passes only for GET requests from a browser asking for an html page.
fn html_page() -> BoxedFilter<()> {
    warp::get()
        .and(header::optional::<String>("accept"))
        .and_then(|accept: Option<String>| async move {
            match accept {
                Some(accept) if accept.contains("text/html") => Ok(()),
                _ => Err::<(), Rejection>(warp::reject::not_found()),
            }
        })
        .untuple_one()
        .boxed()
}

pub fn routes(state: State, graphiql: bool) -> BoxedFilter<(Response,)> {
    let graphql = path("graphql")
        .and(path::end())
        .and(make_graphql_filter(schema(), context_filter(state)))
        .map(|reply| Reply::into_response(reply))
        .boxed();

    if !graphiql {
        return graphql;
    }

    path("graphql")
        .and(path::end())
        .and(html_page())
        .and(graphiql_filter("/graphql", None))
        .map(|reply| Reply::into_response(reply))
        .or(graphql)
        .unify()
        .boxed()
}
