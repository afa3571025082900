//! External call seam: the ADB2RE stored procedure invocation.
//!
//! Connection lifecycle is the transport's concern; the harness only hands
//! it the six positional argument strings and consumes the result rows.

pub mod zosmf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::{Config, Endpoint, GenDefaults};
use crate::error::{GenError, Result};

/// The six positional arguments of `CALL <sqlid>.ADB2RE(?,?,?,?,?,?)`.
/// The sixth slot receives the procedure return code and is always sent
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureArgs {
    pub parameter_list: String,
    pub request_list: String,
    pub sql_output_list: String,
    pub rpt_output_list: String,
    /// `"DEBUG"` to run GEN in debug mode, empty otherwise.
    pub debug_mode: String,
    pub return_code: String,
}

/// One CALL, all result rows back. Implementations own the connection;
/// fakes stand in for the subsystem in tests.
#[async_trait]
pub trait GenCaller {
    async fn call(&self, args: &ProcedureArgs) -> Result<Vec<Vec<String>>>;
}

/// Caller backed by a Db2 native REST service fronting the CALL statement.
/// The service URL comes from `GEN_SERVICE_URL` when set, otherwise it is
/// derived from the subsystem endpoint.
pub struct RestCaller {
    http: reqwest::Client,
    url: String,
    user: String,
    password: String,
    sqlid: String,
}

impl RestCaller {
    pub fn from_config(cfg: &Config, defaults: &GenDefaults, endpoint: &Endpoint) -> Result<Self> {
        let timeout = cfg.get_u64("REQUEST_TIMEOUT").unwrap_or(60);
        let url = cfg.get("GEN_SERVICE_URL").unwrap_or_else(|| {
            format!("https://{}:{}/services/ADB2RE/genDdl", endpoint.host, endpoint.port)
        });
        let password = cfg.require("TSO_PASSWORD")?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .build()
            .map_err(|e| GenError::Procedure(e.to_string()))?;

        Ok(Self {
            http,
            url,
            user: defaults.tso_user.clone(),
            password,
            sqlid: defaults.sqlid.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CallResponse {
    #[serde(rename = "resultSet", default)]
    result_set: Vec<Vec<String>>,
}

#[async_trait]
impl GenCaller for RestCaller {
    async fn call(&self, args: &ProcedureArgs) -> Result<Vec<Vec<String>>> {
        let statement = format!("CALL {}.ADB2RE(?, ?, ?, ?, ?, ?)", self.sqlid);
        debug!(url = %self.url, %statement, "calling GEN service");

        let body = serde_json::json!({
            "statement": statement,
            "arguments": [
                args.parameter_list,
                args.request_list,
                args.sql_output_list,
                args.rpt_output_list,
                args.debug_mode,
                args.return_code,
            ],
        });

        let resp = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenError::Procedure(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenError::Procedure(format!("GEN service returned {status}: {text}")));
        }

        let payload: CallResponse = resp
            .json()
            .await
            .map_err(|e| GenError::Procedure(format!("malformed GEN service response: {e}")))?;
        debug!(rows = payload.result_set.len(), "GEN call complete");
        Ok(payload.result_set)
    }
}
