use crate::source::{LocalityQuery, LocalitySource};
use crate::{LookupError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
#[cfg(feature = "http")]
const DEFAULT_USER_AGENT: &str = "postcheck";

#[cfg(feature = "http")]
mod imp {
    use super::{
        LocalityQuery, LocalitySource, LookupError, Result, DEFAULT_TIMEOUT_SECS,
        DEFAULT_USER_AGENT,
    };
    use reqwest::blocking::Client;
    use reqwest::header::{ACCEPT, AUTHORIZATION};
    use serde_json::Value;
    use std::time::Duration;
    use tracing::debug;
    use url::Url;

    #[derive(Debug, Clone)]
    pub struct HttpLocalitySource {
        base_url: Url,
        token: Option<String>,
        client: Client,
    }

    impl HttpLocalitySource {
        pub fn new(
            base_url: &str,
            token: Option<String>,
            user_agent: Option<&str>,
            timeout_secs: Option<u64>,
        ) -> Result<Self> {
            let base_url = Url::parse(base_url)?;
            if !matches!(base_url.scheme(), "http" | "https") {
                return Err(LookupError::Parse(
                    "lookup url must use http or https".to_string(),
                ));
            }
            let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
            let client = Client::builder()
                .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
                .timeout(timeout)
                .connect_timeout(timeout.min(Duration::from_secs(10)))
                .build()?;
            Ok(Self {
                base_url,
                token: token.filter(|token| !token.trim().is_empty()),
                client,
            })
        }

        pub fn request_url(&self, query: &LocalityQuery) -> Url {
            let mut url = self.base_url.clone();
            {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("q", &query.q);
                if let Some(state) = query.state {
                    pairs.append_pair("state", state.as_str());
                }
            }
            url
        }
    }

    impl LocalitySource for HttpLocalitySource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn search(&self, query: &LocalityQuery) -> Result<Value> {
            let url = self.request_url(query);
            debug!(host = url.host_str().unwrap_or_default(), q = %query.q, "locality lookup");

            let mut request = self.client.get(url).header(ACCEPT, "application/json");
            if let Some(token) = &self.token {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            let response = request.send()?;
            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }

            let body = response.text()?;
            serde_json::from_str(&body).map_err(|err| LookupError::Parse(err.to_string()))
        }
    }

}

#[cfg(not(feature = "http"))]
mod imp {
    use super::{LocalityQuery, LocalitySource, LookupError, Result};
    use serde_json::Value;

    #[derive(Debug, Clone)]
    pub struct HttpLocalitySource;

    impl HttpLocalitySource {
        pub fn new(
            _base_url: &str,
            _token: Option<String>,
            _user_agent: Option<&str>,
            _timeout_secs: Option<u64>,
        ) -> Result<Self> {
            Ok(Self)
        }
    }

    impl LocalitySource for HttpLocalitySource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn search(&self, _query: &LocalityQuery) -> Result<Value> {
            Err(LookupError::Unavailable(
                "HTTP lookups require the http feature".to_string(),
            ))
        }
    }

}

pub use imp::HttpLocalitySource;
