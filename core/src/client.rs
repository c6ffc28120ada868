//! Client configuration and the single request-dispatch routine.
//!
//! # Design
//! `Lipisha` owns a [`Config`] plus one `ureq::Agent` built at construction.
//! The agent reuses connections and is safe to share across threads, so one
//! client can serve concurrent callers; no call writes any client state.
//! Every endpoint wrapper funnels into [`Lipisha::dispatch`], which is the
//! only place that touches the network: it injects the credentials, resolves
//! the environment's base URL, form-encodes the body and POSTs it.
//!
//! The gateway signals business failures inside HTTP 200 JSON bodies and has
//! been observed to return readable bodies on 4xx/5xx too, so the agent is
//! built with `http_status_as_error(false)` and `dispatch` returns any
//! readable body as `Ok`. Only transport-level failures become errors.

use std::time::Duration;

use log::debug;
use ureq::Agent;

use crate::error::Error;
use crate::form::Form;

/// Production API root, used when [`Config::is_production`] is set.
pub const PRODUCTION_URL: &str = "https://lipisha.com/payments/accounts/index.php/v2/api";

/// Sandbox API root for test accounts.
pub const SANDBOX_URL: &str = "http://developer.lipisha.com/index.php/v2/api";

/// Fixed connect-plus-read deadline applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway credentials and environment selection.
///
/// Fields are public and read on every dispatch; the library itself never
/// mutates them.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key from the gateway dashboard.
    pub api_key: String,
    /// API signature from the gateway dashboard.
    pub api_signature: String,
    /// Route calls to the production host instead of the sandbox.
    pub is_production: bool,
    /// Emit the resolved URL, encoded body and raw response for every call.
    pub debug: bool,
}

impl Config {
    /// A sandbox configuration with debug logging off.
    pub fn new(api_key: &str, api_signature: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_signature: api_signature.to_string(),
            is_production: false,
            debug: false,
        }
    }
}

/// Synchronous client for the Lipisha payment gateway.
///
/// Construct once and reuse; the underlying agent pools connections. All
/// endpoint methods return the raw JSON response body. Interpreting the
/// gateway's `status`/`content` envelope is left to the caller.
#[derive(Clone)]
pub struct Lipisha {
    pub config: Config,
    agent: Agent,
    base_url: Option<String>,
}

impl Lipisha {
    pub fn new(config: Config) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            config,
            agent,
            base_url: None,
        }
    }

    /// A client whose base URL overrides the environment selection. Intended
    /// for pointing at a local stub server in tests.
    pub fn with_base_url(config: Config, base_url: &str) -> Self {
        let mut client = Self::new(config);
        client.base_url = Some(base_url.trim_end_matches('/').to_string());
        client
    }

    fn base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url,
            None if self.config.is_production => PRODUCTION_URL,
            None => SANDBOX_URL,
        }
    }

    /// POST `form` to `endpoint` and return the raw response body.
    ///
    /// Credentials from the active config are set last, replacing any
    /// same-named caller fields. Public as a low-level escape hatch for
    /// gateway endpoints without a typed wrapper.
    pub fn dispatch(&self, endpoint: &str, mut form: Form) -> Result<String, Error> {
        form.set("api_key", &self.config.api_key);
        form.set("api_signature", &self.config.api_signature);

        let url = format!("{}{}", self.base_url(), endpoint);
        let body = form.encode();

        if self.config.debug {
            debug!(target: "lipisha", "{url}");
            debug!(target: "lipisha", "{body}");
        }

        let mut response = self
            .agent
            .post(&url)
            .content_type("application/x-www-form-urlencoded")
            .send(body.as_bytes())
            .map_err(|e| {
                if self.config.debug {
                    debug!(target: "lipisha", "transport failure: {e}");
                }
                Error::Transport(e)
            })?;

        let text = response.body_mut().read_to_string().map_err(|e| {
            if self.config.debug {
                debug!(target: "lipisha", "body read failure: {e}");
            }
            Error::Read(e)
        })?;

        if self.config.debug {
            debug!(target: "lipisha", "{text}");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_defaults_to_sandbox_without_debug() {
        let config = Config::new("K", "S");
        assert_eq!(config.api_key, "K");
        assert_eq!(config.api_signature, "S");
        assert!(!config.is_production);
        assert!(!config.debug);
    }

    #[test]
    fn base_url_follows_environment_flag() {
        let client = Lipisha::new(Config::new("K", "S"));
        assert_eq!(client.base_url(), SANDBOX_URL);

        let mut config = Config::new("K", "S");
        config.is_production = true;
        let client = Lipisha::new(config);
        assert_eq!(client.base_url(), PRODUCTION_URL);
    }

    #[test]
    fn base_url_override_wins_over_environment() {
        let mut config = Config::new("K", "S");
        config.is_production = true;
        let client = Lipisha::with_base_url(config, "http://127.0.0.1:9999");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let client = Lipisha::with_base_url(Config::new("K", "S"), "http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
