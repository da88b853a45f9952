/// HTTP delivery of form submissions
///
/// The application endpoint is a spreadsheet-backed script we don't own:
/// we POST JSON and only look at the status code.
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::application::{ApplicationPayload, Attachment};
use super::newsletter::SignupPayload;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// Result of a newsletter signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Delivered to the newsletter endpoint
    Sent,
    /// No endpoint configured; accepted without sending anywhere
    AcceptedLocally,
}

/// Cheap to clone (reqwest::Client is reference counted)
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    application_endpoint: String,
    newsletter_endpoint: Option<String>,
}

impl SubmissionClient {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            application_endpoint: config.application_endpoint.clone(),
            newsletter_endpoint: config.newsletter_endpoint.clone(),
        })
    }

    /// Read the attachments, then POST the application
    pub async fn submit_application(
        &self,
        mut payload: ApplicationPayload,
        attachments: Vec<PathBuf>,
    ) -> Result<()> {
        payload.files = read_attachments(&attachments).await?;

        log_summary(&payload);
        self.post_json(&self.application_endpoint, &payload).await
    }

    pub async fn subscribe(&self, payload: SignupPayload) -> Result<SignupOutcome> {
        match &self.newsletter_endpoint {
            Some(endpoint) => {
                self.post_json(endpoint, &payload).await?;
                Ok(SignupOutcome::Sent)
            }
            None => {
                log::info!("📬 No newsletter endpoint configured, signup accepted locally");
                Ok(SignupOutcome::AcceptedLocally)
            }
        }
    }

    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<()> {
        let response = self.http.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            log::error!("❌ HTTP {} from {}: {}", status, url, text);
            return Err(SiteError::Rejected {
                status: status.as_u16(),
            });
        }

        log::info!("✅ POST {} -> {}", url, status);
        Ok(())
    }
}

/// Load each picked file as text, the way the endpoint stores them
pub async fn read_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>> {
    let mut attachments = Vec::with_capacity(paths.len());

    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| SiteError::Attachment {
                path: path.clone(),
                source,
            })?;

        attachments.push(Attachment {
            file_name: file_name(path),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    Ok(attachments)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn log_summary(payload: &ApplicationPayload) {
    log::info!(
        "📨 Sending application for {} {} with {} attachment(s)",
        payload.first_name,
        payload.last_name,
        payload.files.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::YesNo;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use warp::Filter;

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            impacted: YesNo::No,
            first_name: "Theo".to_string(),
            last_name: "Yusra".to_string(),
            email: "theo@example.com".to_string(),
            phone: "315-555-0101".to_string(),
            address: "Syracuse, NY".to_string(),
            over18: YesNo::Yes,
            interest: "Digital storytelling workshops".to_string(),
            sample_writing: None,
            files: Vec::new(),
        }
    }

    fn client_for(application: String, newsletter: Option<String>) -> SubmissionClient {
        let config = SiteConfig {
            application_endpoint: application,
            newsletter_endpoint: newsletter,
            request_timeout_secs: 5,
            ..SiteConfig::default()
        };
        SubmissionClient::new(&config).unwrap()
    }

    /// Endpoint that records every JSON body and answers with `status`
    fn spawn_endpoint(status: u16) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let route = warp::post()
            .and(warp::path("exec"))
            .and(warp::body::json())
            .map(move |body: serde_json::Value| {
                sink.lock().unwrap().push(body);
                warp::reply::with_status(
                    "ok",
                    warp::http::StatusCode::from_u16(status).unwrap(),
                )
            });

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        (format!("http://{}/exec", addr), received)
    }

    #[tokio::test]
    async fn test_application_posted_with_attachments() {
        let (url, received) = spawn_endpoint(200);
        let client = client_for(url, None);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "When I think of freedom").unwrap();

        client
            .submit_application(payload(), vec![file.path().to_path_buf()])
            .await
            .unwrap();

        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["firstName"], "Theo");
        assert_eq!(bodies[0]["impacted"], "no");
        assert_eq!(bodies[0]["files"][0]["content"], "When I think of freedom");
        assert_eq!(
            bodies[0]["files"][0]["fileName"],
            file_name(file.path()).as_str()
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let (url, _received) = spawn_endpoint(500);
        let client = client_for(url, None);

        let err = client.submit_application(payload(), Vec::new()).await.unwrap_err();
        assert!(matches!(err, SiteError::Rejected { status: 500 }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = client_for(format!("http://127.0.0.1:{port}/exec"), None);
        let err = client.submit_application(payload(), Vec::new()).await.unwrap_err();
        assert!(matches!(err, SiteError::Http(_)));
    }

    #[tokio::test]
    async fn test_missing_attachment_fails_before_sending() {
        let (url, received) = spawn_endpoint(200);
        let client = client_for(url, None);

        let err = client
            .submit_application(payload(), vec![PathBuf::from("/nonexistent/poem.txt")])
            .await
            .unwrap_err();

        assert!(matches!(err, SiteError::Attachment { .. }));
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signup_without_endpoint_is_local() {
        let client = client_for("http://127.0.0.1:9/exec".to_string(), None);
        let outcome = client
            .subscribe(SignupPayload {
                name: "Daquan".to_string(),
                email: "daquan@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(outcome, SignupOutcome::AcceptedLocally);
    }

    #[tokio::test]
    async fn test_signup_sent_to_endpoint() {
        let (url, received) = spawn_endpoint(200);
        let client = client_for("http://127.0.0.1:9/exec".to_string(), Some(url));

        let outcome = client
            .subscribe(SignupPayload {
                name: "Daquan".to_string(),
                email: "daquan@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, SignupOutcome::Sent);
        assert_eq!(received.lock().unwrap()[0]["email"], "daquan@example.com");
    }
}
