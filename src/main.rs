#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::sync::Arc;

mod argument;
mod config;
mod error;
mod graphql;
mod route;
mod state;
mod utils;

use argument::parse_arguments;
use config::Config;
use state::{State, upstream::HttpUpstream};

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = parse_arguments();
    let config = Config::from_matches(&args).unwrap_or_else(|err| err.exit());

    let upstream = match HttpUpstream::new(config.upstream.clone()) {
        Ok(upstream) => upstream,
        Err(err) => {
            error!("Failed to build the upstream client: {}", err);
            std::process::exit(1);
        }
    };
    let state = State::init(Arc::new(upstream));

    info!("Forwarding to upstream {}", config.upstream);
    if config.graphiql {
        info!("GraphiQL enabled on /graphql");
    }
    info!("Listening on 0.0.0.0:{}", config.port);

    warp::serve(route::routes(state, config.graphiql))
        .run(([0, 0, 0, 0], config.port))
        .await;
}
