//! Insight analysis and report download.

use plab_core::entities::InsightReport;
use plab_core::enums::ReportFormat;
use plab_core::ids::SessionId;
use std::path::{Path, PathBuf};

use crate::{
    ApiClient,
    disposition::{fallback_file_name, filename_from_disposition},
    error::ApiError,
    http::{FailureMessage, check_response},
    segment,
};

const ANALYZE_FAILED: FailureMessage =
    FailureMessage::Server("Failed to analyze insights. Please try again.");
const DOWNLOAD_FAILED: FailureMessage = FailureMessage::Generic("Failed to download the report.");

/// A report body together with the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DownloadedReport {
    /// Write the report into `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Save`] if the directory or file cannot be written.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, ApiError> {
        let path = dir.join(&self.file_name);
        let save_err = |source| ApiError::Save {
            path: path.clone(),
            source,
        };
        tokio::fs::create_dir_all(dir).await.map_err(save_err)?;
        tokio::fs::write(&path, &self.bytes).await.map_err(save_err)?;
        tracing::debug!(path = %path.display(), bytes = self.bytes.len(), "report saved");
        Ok(path)
    }
}

impl ApiClient {
    /// Fetch the raw insight report for a session.
    ///
    /// The payload is decoded leniently; run it through
    /// `plab_core::normalize` before display.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status (with
    /// the server's `message` when it sent one), or a body that is not a JSON
    /// object.
    pub async fn analyze_insights(&self, session: &SessionId) -> Result<InsightReport, ApiError> {
        let url = self.url(&format!("/api/insights/analyze/{}", segment(session)));
        tracing::debug!(method = "GET", %url, "analyzing insights");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, %e, "analyze request failed"))?;
        let resp = check_response(resp, ANALYZE_FAILED).await?;
        let bytes = resp.bytes().await?;
        decode_report(&bytes).inspect_err(|e| {
            tracing::warn!(%url, %e, "insight report could not be decoded");
        })
    }

    /// Download the server-rendered report in `format`.
    ///
    /// The file name comes from `Content-Disposition`, falling back to
    /// `research-results-<id>.<format>`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (always with the generic message).
    pub async fn download_report(
        &self,
        session: &SessionId,
        format: ReportFormat,
    ) -> Result<DownloadedReport, ApiError> {
        let url = self.url(&format!(
            "/api/insights/download/{}?format={format}",
            segment(session)
        ));
        tracing::debug!(method = "GET", %url, "downloading report");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, %e, "download request failed"))?;
        let resp = check_response(resp, DOWNLOAD_FAILED).await?;

        let file_name = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| fallback_file_name(session, format));
        let bytes = resp.bytes().await?.to_vec();

        Ok(DownloadedReport { file_name, bytes })
    }
}

/// Empty and `null` bodies decode to an empty report; any other non-object
/// body is an error.
fn decode_report(bytes: &[u8]) -> Result<InsightReport, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(InsightReport::default());
    }
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::Parse(format!("insight report: {e}")))?;
    match value {
        serde_json::Value::Null => Ok(InsightReport::default()),
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| ApiError::Parse(format!("insight report: {e}"))),
        other => Err(ApiError::Parse(format!(
            "insight report: expected an object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_null_bodies_are_empty_reports() {
        assert_eq!(decode_report(b"").unwrap(), InsightReport::default());
        assert_eq!(decode_report(b" null ").unwrap(), InsightReport::default());
    }

    #[test]
    fn non_object_body_is_a_parse_error() {
        assert!(matches!(decode_report(b"[1, 2]"), Err(ApiError::Parse(_))));
        assert!(matches!(decode_report(b"<html>"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn partial_report_keeps_known_sections() {
        let report = decode_report(br#"{"summary": "ok", "insights": null}"#).unwrap();
        assert_eq!(report.summary, "ok");
        assert!(report.insights.is_empty());
    }

    #[tokio::test]
    async fn save_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("reports").join("nested");
        let report = DownloadedReport {
            file_name: "r.json".into(),
            bytes: b"{}".to_vec(),
        };

        let path = report.save_to(&dir).await.unwrap();

        assert_eq!(path, dir.join("r.json"));
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }

    #[tokio::test]
    async fn save_into_a_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let report = DownloadedReport {
            file_name: "r.pdf".into(),
            bytes: vec![1, 2, 3],
        };

        let err = report.save_to(&blocker).await.unwrap_err();
        assert!(matches!(err, ApiError::Save { .. }));
    }
}
