use clap::{App, Arg, ArgMatches};

pub const DEFAULT_PORT: &str = "4000";
pub const DEFAULT_UPSTREAM: &str = "http://localhost:3000";

pub fn app() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("GraphQL gateway for the users and companies REST service.")
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("Port to listen on.")
                .takes_value(true)
                .default_value(DEFAULT_PORT),
        )
        .arg(
            Arg::with_name("upstream")
                .short("u")
                .long("upstream")
                .value_name("URL")
                .help("Base url of the REST service.")
                .takes_value(true)
                .default_value(DEFAULT_UPSTREAM),
        )
        .arg(
            Arg::with_name("no-graphiql")
                .long("no-graphiql")
                .help("Do not serve the GraphiQL page on /graphql."),
        )
}

pub fn parse_arguments() -> ArgMatches<'static> {
    app().get_matches()
}
