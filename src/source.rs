//! Record sources.
//!
//! The pipeline consumes a source through the [`RecordSource`] trait so the
//! network-backed [`RandomUserSource`] can be swapped for the in-memory
//! sources in [`crate::testing`]. A fetch happens exactly once per run and is
//! never retried here.

use crate::error::SourceError;
use crate::record::RawRecord;

/// Default provider endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://randomuser.me/api/";

/// Default number of records requested per run.
pub const DEFAULT_BATCH_SIZE: usize = 5000;

/// Anything that can supply one batch of raw person records.
pub trait RecordSource {
    /// Short label used in log lines.
    fn describe(&self) -> String;

    /// Fetch `batch_size` raw records.
    ///
    /// # Errors
    /// Returns [`SourceError::Unavailable`] on any transport or decoding failure.
    fn fetch(&self, batch_size: usize) -> Result<Vec<RawRecord>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self, batch_size: usize) -> Result<Vec<RawRecord>, SourceError> {
        (**self).fetch(batch_size)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "http-source")))]
#[cfg(feature = "http-source")]
pub use http::RandomUserSource;

#[cfg(feature = "http-source")]
mod http {
    use super::{RecordSource, DEFAULT_SOURCE_URL};
    use crate::error::SourceError;
    use crate::record::RawRecord;
    use serde::Deserialize;
    use std::time::Duration;
    use tracing::{debug, info};

    #[derive(Deserialize)]
    struct ApiResponse {
        results: Vec<RawRecord>,
    }

    /// Fetches records from a randomuser.me compatible JSON endpoint.
    #[derive(Debug, Clone)]
    pub struct RandomUserSource {
        url: String,
        timeout: Duration,
    }

    impl RandomUserSource {
        #[must_use]
        pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
            Self {
                url: url.into(),
                timeout,
            }
        }

        fn unavailable(&self, reason: String) -> SourceError {
            SourceError::Unavailable {
                url: self.url.clone(),
                reason,
            }
        }
    }

    impl Default for RandomUserSource {
        fn default() -> Self {
            Self::new(DEFAULT_SOURCE_URL, Duration::from_secs(30))
        }
    }

    impl RecordSource for RandomUserSource {
        fn describe(&self) -> String {
            self.url.clone()
        }

        fn fetch(&self, batch_size: usize) -> Result<Vec<RawRecord>, SourceError> {
            info!(url = %self.url, batch_size, "downloading records");
            let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
            let response = agent
                .get(&self.url)
                .query("results", &batch_size.to_string())
                .call()
                .map_err(|err| self.unavailable(format!("request failed: {err}")))?;

            let body: ApiResponse = response
                .into_json()
                .map_err(|err| self.unavailable(format!("failed decoding response: {err}")))?;

            debug!(received = body.results.len(), "decoded provider payload");
            Ok(body.results)
        }
    }
}
