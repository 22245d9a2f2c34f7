//! documentation feedback
use {
    crate::{
        client::{ApiResponse, DashClient},
        error::Result,
    },
    serde::{Deserialize, Serialize},
    tokio::{runtime::Handle, task::JoinHandle},
    tracing::{debug, warn},
};

/// a "was this page helpful?" answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    /// the documentation page
    pub page: String,
    /// whether it helped
    pub helpful: bool,
    /// an optional free-form comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Feedback {
    /// make feedback for a page, dropping blank comments
    pub fn new(page: impl Into<String>, helpful: bool, comment: Option<String>) -> Self {
        Self {
            page: page.into(),
            helpful,
            comment: comment.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl DashClient {
    /// send documentation feedback
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<ApiResponse> {
        self.post_json(&self.feedback_endpoint, feedback).await
    }

    /// send documentation feedback without waiting for it
    pub fn spawn_feedback(&self, feedback: Feedback) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            warn!(page = %feedback.page, "no async runtime, dropping feedback");
            return None;
        };

        let client = self.clone();

        Some(handle.spawn(async move {
            match client.submit_feedback(&feedback).await {
                Ok(_) => debug!(page = %feedback.page, "feedback submitted"),
                Err(e) => warn!(page = %feedback.page, "feedback submission failed: {}", e),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::client::{ClientOptions, PageContext, testing::respond_once},
    };

    #[test]
    fn blank_comments_are_dropped() {
        let feedback = Feedback::new("getting-started", true, Some("   ".to_string()));
        assert_eq!(
            serde_json::to_string(&feedback).unwrap(),
            r#"{"page":"getting-started","helpful":true}"#
        );
    }

    #[tokio::test]
    async fn posts_to_feedback_endpoint() {
        let (addr, request) = respond_once("200 OK", r#"{"success":true}"#).await;
        let client = DashClient::new(
            ClientOptions::for_base_url(format!("http://{}", addr))
                .with_page(PageContext::with_token("abc")),
        )
        .unwrap();

        let feedback = Feedback::new("commands", false, Some("missing examples".to_string()));
        client.submit_feedback(&feedback).await.unwrap();
        let raw = request.await.unwrap();

        assert!(raw.starts_with("POST /api/documentation/feedback HTTP/1.1\r\n"));
        assert!(raw.ends_with(
            r#"{"page":"commands","helpful":false,"comment":"missing examples"}"#
        ));
    }
}
