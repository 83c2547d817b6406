//! Run configuration

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::report::ReportQuery;

pub(crate) const PLACEHOLDER_CALLSIGN: &str = "YOUR_CALLSIGN";
pub(crate) const PLACEHOLDER_LOCATOR: &str = "YOUR_GRIDSQUARE_LOCATOR";

/// Default lookback window for report queries (5 minutes)
pub(crate) const DEFAULT_LOOKBACK_SECS: u32 = 300;

/// Immutable settings shared by every mode
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) callsign: String,
    pub(crate) locator: Option<String>,
    pub(crate) lookback_secs: u32,
    /// PSK Reporter query endpoint
    pub(crate) query_url: String,
    pub(crate) output_dir: PathBuf,
    pub(crate) night_shade: bool,
    pub(crate) quiet: bool,
}

impl Config {
    /// Reject unset placeholders before any network or file access
    pub(crate) fn validate(&self) -> Result<()> {
        let callsign = self.callsign.trim();
        if callsign.is_empty() || callsign.eq_ignore_ascii_case(PLACEHOLDER_CALLSIGN) {
            return Err(Error::Config(
                "set your callsign with --callsign or PSKMAP_CALLSIGN".to_string(),
            ));
        }

        if let Some(locator) = &self.locator
            && locator.trim().eq_ignore_ascii_case(PLACEHOLDER_LOCATOR)
        {
            return Err(Error::Config(
                "set your locator with --locator or PSKMAP_LOCATOR".to_string(),
            ));
        }

        if self.lookback_secs == 0 {
            return Err(Error::Config("--lookback must be positive".to_string()));
        }

        Ok(())
    }

    pub(crate) fn query(&self) -> ReportQuery {
        ReportQuery {
            base_url: self.query_url.clone(),
            callsign: self.callsign.trim().to_string(),
            lookback_secs: self.lookback_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DEFAULT_QUERY_URL;

    fn config(callsign: &str) -> Config {
        Config {
            callsign: callsign.to_string(),
            locator: None,
            lookback_secs: DEFAULT_LOOKBACK_SECS,
            query_url: DEFAULT_QUERY_URL.to_string(),
            output_dir: PathBuf::from("plots"),
            night_shade: true,
            quiet: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config("N0CALL").validate().is_ok());
    }

    #[test]
    fn test_placeholder_callsign_rejected() {
        assert!(config(PLACEHOLDER_CALLSIGN).validate().is_err());
        assert!(config("your_callsign").validate().is_err());
        assert!(config("  ").validate().is_err());
    }

    #[test]
    fn test_placeholder_locator_rejected() {
        let mut c = config("N0CALL");
        c.locator = Some(PLACEHOLDER_LOCATOR.to_string());
        assert!(c.validate().is_err());
        c.locator = Some("FN31pr".to_string());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_lookback_rejected() {
        let mut c = config("N0CALL");
        c.lookback_secs = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_query_uses_trimmed_callsign() {
        let q = config(" N0CALL ").query();
        assert_eq!(q.callsign, "N0CALL");
        assert_eq!(q.lookback_secs, 300);
        assert_eq!(q.base_url, DEFAULT_QUERY_URL);
    }
}
