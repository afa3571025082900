//! z/OSMF data set reads, used to pull the generation report back off the
//! host after the CALL completes.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::error::{GenError, Result};

/// Side-channel read of a named text resource. The report lands in a data
/// set, not the result set, so it comes back through here.
#[async_trait]
pub trait ReportSource {
    async fn read_dataset(&self, dsname: &str) -> Result<String>;
}

/// z/OSMF REST files client (`GET /zosmf/restfiles/ds/<dsname>`).
pub struct ZosmfFiles {
    http: reqwest::Client,
    base: String,
    user: String,
    password: String,
}

impl ZosmfFiles {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let host = cfg.require("ZOSMF_HOST")?;
        let user = cfg.require("TSO_USER_ID")?;
        let password = cfg.require("TSO_PASSWORD")?;
        let timeout = cfg.get_u64("REQUEST_TIMEOUT").unwrap_or(60);

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .build()
            .map_err(|e| GenError::Zosmf(e.to_string()))?;

        Ok(Self { http, base: format!("https://{host}/zosmf"), user, password })
    }
}

#[async_trait]
impl ReportSource for ZosmfFiles {
    async fn read_dataset(&self, dsname: &str) -> Result<String> {
        let url = format!("{}/restfiles/ds/{dsname}", self.base.trim_end_matches('/'));
        debug!(%url, "reading data set");

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("X-CSRF-ZOSMF-HEADER", "adbgen")
            .send()
            .await
            .map_err(|e| GenError::Zosmf(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => resp.text().await.map_err(|e| GenError::Zosmf(e.to_string())),
            status => {
                let text = resp.text().await.unwrap_or_default();
                Err(GenError::Zosmf(format!("read of {dsname} failed: {status} - {text}")))
            }
        }
    }
}
