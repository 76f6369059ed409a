//! Remote loading of translation tables that are not bundled

use super::table::TranslationTable;
use crate::core::{BackendConfig, Error, Result};
use std::future::Future;
use std::time::Duration;

/// Source of translation tables for languages that are not cached yet
pub trait TranslationBackend: Send + Sync {
    fn fetch(&self, code: &str) -> impl Future<Output = Result<TranslationTable>> + Send;
}

/// Fetches tables over HTTP from `<base_url><load_path>`
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }

    /// URL of the table for a language code
    pub fn table_url(&self, code: &str) -> String {
        let path = self
            .config
            .load_path
            .replace("{{lng}}", code)
            .replace("{{ns}}", &self.config.namespace);
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

impl TranslationBackend for HttpBackend {
    async fn fetch(&self, code: &str) -> Result<TranslationTable> {
        let url = self.table_url(code);
        log::debug!("Fetching translations for '{}' from {}", code, url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                code: code.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        TranslationTable::from_json_str(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn backend_for(base_url: String) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url,
            timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_table_url() {
        let backend = HttpBackend::new(&BackendConfig {
            base_url: "https://cdn.example.test/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            backend.table_url("de"),
            "https://cdn.example.test/locales/de/translation.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = serve_once("200 OK", r#"{"clearChat": "Chat leeren"}"#).await;
        let table = backend_for(base).fetch("de").await.unwrap();

        assert_eq!(table.get("clearChat"), Some("Chat leeren"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let base = serve_once("404 Not Found", "{}").await;
        let err = backend_for(base).fetch("de").await.unwrap_err();

        assert!(matches!(err, Error::Fetch { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let err = backend_for(format!("http://{}", addr)).fetch("de").await.unwrap_err();

        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_body() {
        let base = serve_once("200 OK", "<html>oops</html>").await;
        let err = backend_for(base).fetch("de").await.unwrap_err();

        assert!(matches!(err, Error::InvalidTable(_)));
    }
}
