//! Blocking HTTP GET for catalog pages, wiki API calls and databank pages.
//!
//! Uses the curl crate (libcurl) with a connect and a total timeout on every
//! request, so one unreachable host cannot stall a resolver run. Runs in the
//! current thread; call from `spawn_blocking` if used from async code.

mod error;

pub use error::FetchError;

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ShipdexConfig;

/// Anything that can GET a URL and hand back the body as text.
///
/// The resolver sources only depend on this trait; tests swap in canned bodies.
pub trait Fetch: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// GET `url` and decode the body as JSON.
pub fn get_json<T, F>(fetch: &F, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let body = fetch.get_text(url)?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// libcurl-backed [`Fetch`]: follows redirects, sends a User-Agent, enforces timeouts.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(user_agent: impl Into<String>, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &ShipdexConfig) -> Self {
        Self::new(
            cfg.user_agent.clone(),
            cfg.connect_timeout(),
            cfg.request_timeout(),
        )
    }
}

impl Fetch for CurlFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        // Empty string = accept every encoding libcurl can decode.
        easy.accept_encoding("")?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        tracing::trace!(url, bytes = body.len(), "GET ok");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Canned-response fetcher for unit tests: exact URL -> body, everything else is a 404.
/// Records every requested URL in order.
#[cfg(test)]
pub(crate) mod testing {
    use super::{Fetch, FetchError};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct StaticFetch {
        bodies: HashMap<String, String>,
        pub(crate) requested: Mutex<Vec<String>>,
    }

    impl StaticFetch {
        pub(crate) fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.bodies.insert(url.into(), body.into());
            self
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl Fetch for StaticFetch {
        fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    code: 404,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StaticFetch;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        ok: bool,
    }

    #[test]
    fn get_json_decodes_body() {
        let fetch = StaticFetch::default().with("http://t/ok", r#"{"ok": true}"#);
        let probe: Probe = get_json(&fetch, "http://t/ok").unwrap();
        assert!(probe.ok);
    }

    #[test]
    fn get_json_reports_decode_error_with_url() {
        let fetch = StaticFetch::default().with("http://t/bad", "<html>");
        let err = get_json::<Probe, _>(&fetch, "http://t/bad").unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref url, .. } if url == "http://t/bad"));
    }

    #[test]
    fn get_json_passes_through_status_error() {
        let fetch = StaticFetch::default();
        let err = get_json::<Probe, _>(&fetch, "http://t/none").unwrap_err();
        assert!(err.is_not_found());
    }
}
