// src/core/fetch.rs

// Blocking HTTP layer for the listing pages: bounded retry on transient
// server errors, plus a one-time fallback session with certificate
// verification disabled for hosts with broken TLS.

use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{
    BACKOFF_FACTOR, BASE_URL, REQUEST_TIMEOUT_SECS, RETRY_STATUSES, RETRY_TOTAL, USER_AGENT,
};

#[derive(Debug)]
pub enum FetchError {
    /// Final attempt still answered with a non-success status.
    Status { status: u16, attempts: u32, url: String },
    /// Connection, timeout or TLS failure from the transport.
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { status, attempts, url } => {
                write!(f, "HTTP {status} for {url} after {attempts} attempt(s)")
            }
            FetchError::Transport(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Status { .. } => None,
            FetchError::Transport(e) => Some(e),
        }
    }
}

/// Holds the verifying session for a run, and lazily the insecure one.
/// Each page goes through the verifying session first; the insecure
/// session is only built on the first TLS failure and reused afterwards.
pub struct SessionManager {
    primary: Client,
    insecure: Option<Client>,
    insecure_builds: usize,
}

impl SessionManager {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            primary: build_client(true)?,
            insecure: None,
            insecure_builds: 0,
        })
    }

    /// How many times the insecure session was constructed (0 or 1).
    pub fn insecure_builds(&self) -> usize {
        self.insecure_builds
    }

    /// Fetch one listing page, falling back to the insecure session when
    /// the verifying one dies on a certificate problem.
    pub fn fetch_page(&mut self, page: u32) -> Result<String, FetchError> {
        let url = page_url(page);
        match get_with_retry(&self.primary, &url) {
            Err(FetchError::Transport(e)) if chain_mentions_tls(&e) => {
                loge!("Net: TLS verification failed on {url}: {e}");
                let client = self.insecure_session().map_err(FetchError::Transport)?;
                get_with_retry(client, &url)
            }
            other => other,
        }
    }

    fn insecure_session(&mut self) -> Result<&Client, reqwest::Error> {
        match self.insecure {
            Some(ref client) => Ok(client),
            None => {
                let client = build_client(false)?;
                self.insecure_builds += 1;
                logf!("Net: built fallback session without certificate verification");
                Ok(self.insecure.insert(client))
            }
        }
    }
}

pub fn page_url(page: u32) -> String {
    format!("{BASE_URL}/page/{page}")
}

fn build_client(verify: bool) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
    if !verify {
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder.build()
}

/// GET with the transient-error retry policy. Only the statuses in
/// `RETRY_STATUSES` are retried; everything else fails on first sight.
pub fn get_with_retry(client: &Client, url: &str) -> Result<String, FetchError> {
    let mut failures = 0u32;
    loop {
        let resp = client.get(url).send().map_err(FetchError::Transport)?;
        let status = resp.status().as_u16();
        if resp.status().is_success() {
            return resp.text().map_err(FetchError::Transport);
        }
        if !RETRY_STATUSES.contains(&status) {
            return Err(FetchError::Status { status, attempts: failures + 1, url: s!(url) });
        }
        failures += 1;
        if failures >= RETRY_TOTAL {
            return Err(FetchError::Status { status, attempts: failures, url: s!(url) });
        }
        let delay = backoff_delay(failures);
        logd!(
            "Net: HTTP {status} on {url}, attempt {failures}/{RETRY_TOTAL}, retrying in {}s",
            delay.as_secs()
        );
        thread::sleep(delay);
    }
}

/// Delay before the next attempt after `failures` transient failures:
/// 0s, then factor * 2^(n-1) seconds (0, 2, 4, …).
fn backoff_delay(failures: u32) -> Duration {
    if failures <= 1 {
        return Duration::from_secs(0);
    }
    Duration::from_secs(BACKOFF_FACTOR << (failures - 1))
}

/// True when anything in the error chain points at a TLS/certificate
/// problem. reqwest buries the rustls error a few levels down, so the
/// whole chain is scanned.
pub fn chain_mentions_tls(err: &(dyn Error + 'static)) -> bool {
    let mut cur: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(e) = cur {
        let msg = e.to_string().to_ascii_lowercase();
        if msg.contains("certificate") || msg.contains("tls") || msg.contains("ssl") {
            return true;
        }
        cur = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn backoff_schedule_is_zero_then_exponential() {
        assert_eq!(backoff_delay(1), Duration::from_secs(0));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn page_url_has_fixed_shape() {
        assert_eq!(page_url(3), "https://ssr1.scrape.center/page/3");
    }

    #[test]
    fn tls_failure_is_detected_deep_in_the_chain() {
        let outer = Outer(io::Error::other("invalid peer certificate: UnknownIssuer"));
        assert!(chain_mentions_tls(&outer));
    }

    #[test]
    fn plain_connection_errors_are_not_tls() {
        let outer = Outer(io::Error::other("connection reset by peer"));
        assert!(!chain_mentions_tls(&outer));
    }

    #[test]
    fn insecure_session_is_built_at_most_once() {
        let mut sm = SessionManager::new().unwrap();
        assert_eq!(sm.insecure_builds(), 0);
        sm.insecure_session().unwrap();
        sm.insecure_session().unwrap();
        assert_eq!(sm.insecure_builds(), 1);
    }
}
