//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_manifest() {
        let error = Error::InvalidManifest("配列ではありません".to_string());
        assert_eq!(format!("{}", error), "Invalid manifest: 配列ではありません");
    }

    #[test]
    fn test_error_display_http_status() {
        let error = Error::HttpStatus(404);
        assert_eq!(format!("{}", error), "HTTP status 404");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Dom("aria-hidden".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Dom"));
        assert!(debug.contains("aria-hidden"));
    }
}
