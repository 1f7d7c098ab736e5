use clap::{ArgMatches, ErrorKind};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub upstream: Url,
    pub graphiql: bool,
}

impl Config {
    pub fn from_matches(args: &ArgMatches) -> Result<Self, clap::Error> {
        let port = value_t!(args, "port", u16)?;

        let raw = args.value_of("upstream").unwrap_or(crate::argument::DEFAULT_UPSTREAM);
        let upstream = Url::parse(raw.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                clap::Error::with_description(
                    &format!("Invalid value for '--upstream <URL>': {} is not a base url", raw),
                    ErrorKind::ValueValidation,
                )
            })?;

        Ok(Config {
            port,
            upstream,
            graphiql: !args.is_present("no-graphiql"),
        })
    }
}
