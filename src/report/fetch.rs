//! PSK Reporter retrieval service client

use std::time::Duration;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_QUERY_URL: &str = "https://retrieve.pskreporter.info/query";
const USER_AGENT: &str = concat!("pskmap/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Reports of one sender over a lookback window
#[derive(Debug, Clone)]
pub(crate) struct ReportQuery {
    pub(crate) base_url: String,
    pub(crate) callsign: String,
    pub(crate) lookback_secs: u32,
}

impl ReportQuery {
    pub(crate) fn url(&self) -> String {
        format!(
            "{}?senderCallsign={}&flowStartSeconds=-{}&rronly=1&noactive=1",
            self.base_url,
            self.callsign.to_uppercase(),
            self.lookback_secs
        )
    }
}

/// Fetch the raw XML document for a query
pub(crate) fn fetch_reports(query: &ReportQuery) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(query.url()).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    Ok(response.text()?)
}
