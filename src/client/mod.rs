//! dashboard api stuff
//!
//! everything here is fire-and-forget from the ui's point of view: a failed
//! request is logged and that's it. nothing is retried and nothing is rolled
//! back.
use {
    crate::{error::*, getopt},
    reqwest::{
        Client, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
    tokio::{runtime::Handle, task::JoinHandle},
    tracing::{debug, info, warn},
    url::Url,
};

pub mod feedback;

/// what the page told us about itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// the anti-forgery token embedded in the page
    pub csrf_token: Option<String>,
}

impl PageContext {
    /// a page context with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            csrf_token: Some(token.into()),
        }
    }
}

/// everything needed to build a [`DashClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// the dashboard base url
    pub base_url: String,
    /// where theme preferences go
    pub theme_endpoint: String,
    /// where documentation feedback goes
    pub feedback_endpoint: String,
    /// the anti-forgery header name
    pub csrf_header: String,
    /// request timeout
    pub timeout: Duration,
    /// connect timeout
    pub connect_timeout: Duration,
    /// the user agent
    pub user_agent: String,
    /// the page the client acts for
    pub page: PageContext,
}

impl ClientOptions {
    /// build options from the loaded configuration
    pub fn from_config() -> Self {
        Self {
            base_url: getopt!(sync.base_url),
            theme_endpoint: getopt!(sync.theme_endpoint),
            feedback_endpoint: getopt!(sync.feedback_endpoint),
            csrf_header: getopt!(sync.csrf_header),
            timeout: Duration::from_secs(getopt!(http.timeout_secs)),
            connect_timeout: Duration::from_secs(getopt!(http.connect_timeout_secs)),
            user_agent: getopt!(http.user_agent),
            page: PageContext {
                csrf_token: getopt!(raw session.csrf_token),
            },
        }
    }

    /// default options pointed at `base_url`
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            theme_endpoint: "/api/preferences/theme".to_string(),
            feedback_endpoint: "/api/documentation/feedback".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("{}/v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            page: PageContext::default(),
        }
    }

    /// set the page context
    pub fn with_page(mut self, page: PageContext) -> Self {
        self.page = page;
        self
    }
}

/// the body posted when the theme changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeUpdate {
    /// the new theme id
    pub theme: String,
}

/// what the dashboard answers
///
/// older endpoints answer `{"success": true}`, newer ones
/// `{"status": "success", "message": ..., "theme": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// `"success"` or `"error"`
    #[serde(default)]
    pub status: Option<String>,
    /// boolean success flag
    #[serde(default)]
    pub success: Option<bool>,
    /// a human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// the theme the server stored
    #[serde(default)]
    pub theme: Option<String>,
}

impl ApiResponse {
    /// whether the server says it worked
    pub fn is_success(&self) -> bool {
        match (self.success, self.status.as_deref()) {
            (Some(flag), _) => flag,
            (None, Some(status)) => status.eq_ignore_ascii_case("success"),
            (None, None) => false,
        }
    }
}

/// the dashboard client
#[derive(Clone, Debug)]
pub struct DashClient {
    /// the http client
    client: Client,
    /// the dashboard base url
    base_url: Url,
    /// where theme preferences go
    theme_endpoint: String,
    /// where documentation feedback goes
    feedback_endpoint: String,
    /// the anti-forgery header name
    csrf_header: HeaderName,
    /// the page the client acts for
    page: PageContext,
}

impl DashClient {
    /// make a new dashboard client
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Self::build_http_client(&options)?;
        let base_url = Url::parse(&options.base_url)?;
        let csrf_header = HeaderName::from_bytes(options.csrf_header.as_bytes())?;

        if options.page.csrf_token.is_none() {
            warn!(
                "no anti-forgery token in the page context, requests will be sent without {}",
                csrf_header
            );
        }

        info!("initialized dashboard client for {}", base_url);

        Ok(Self {
            client,
            base_url,
            theme_endpoint: options.theme_endpoint,
            feedback_endpoint: options.feedback_endpoint,
            csrf_header,
            page: options.page,
        })
    }

    /// build an http client from the options
    fn build_http_client(options: &ClientOptions) -> Result<Client> {
        Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .build()
            .map_err(ThemeError::from)
    }

    /// the dashboard base url
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// push a theme preference to the server
    pub async fn sync_theme(&self, theme: &str) -> Result<ApiResponse> {
        let body = ThemeUpdate {
            theme: theme.to_string(),
        };
        let response = self.post_json(&self.theme_endpoint, &body).await?;

        if let Some(stored) = response.theme.as_deref()
            && stored != theme
        {
            warn!("server stored theme {} but {} was sent", stored, theme);
        }

        Ok(response)
    }

    /// push a theme preference without waiting for it
    ///
    /// returns `None` (and logs) when there's no tokio runtime to run it on.
    pub fn spawn_theme_sync(&self, theme: &str) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            warn!(theme, "no async runtime, skipping theme sync");
            return None;
        };

        let client = self.clone();
        let theme = theme.to_string();

        Some(handle.spawn(async move {
            match client.sync_theme(&theme).await {
                Ok(_) => debug!(theme = %theme, "theme preference synced"),
                Err(e) => warn!(theme = %theme, "theme sync failed: {}", e),
            }
        }))
    }

    /// post a json body to an endpoint and read the standard response
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<ApiResponse> {
        let url = self.base_url.join(endpoint)?;
        let mut request = self.client.post(url.clone()).json(body);

        match self.page.csrf_token.as_deref() {
            Some(token) => {
                request = request.header(self.csrf_header.clone(), HeaderValue::from_str(token)?);
            }
            None => debug!("posting to {} without an anti-forgery token", url),
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(rejected(status, &text));
        }

        let parsed: ApiResponse = serde_json::from_str(&text)?;

        if !parsed.is_success() {
            return Err(rejected(status, &text));
        }

        Ok(parsed)
    }
}

/// turn a non-success answer into an error, keeping the server's message
fn rejected(status: StatusCode, body: &str) -> ThemeError {
    let message = serde_json::from_str::<ApiResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

    ThemeError::SyncRejected {
        status: status.as_u16(),
        message,
    }
}


#[cfg(test)]
mod tests {
    use {super::*, super::testing::respond_once};

    fn client_for(addr: std::net::SocketAddr, page: PageContext) -> DashClient {
        DashClient::new(ClientOptions::for_base_url(format!("http://{}", addr)).with_page(page))
            .unwrap()
    }

    #[test]
    fn response_success_shapes() {
        let modern: ApiResponse =
            serde_json::from_str(r#"{"status":"success","theme":"dark"}"#).unwrap();
        let legacy: ApiResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let failed: ApiResponse =
            serde_json::from_str(r#"{"status":"error","message":"nope"}"#).unwrap();

        assert!(modern.is_success());
        assert!(legacy.is_success());
        assert!(!failed.is_success());
        assert!(!ApiResponse::default().is_success());
    }

    #[tokio::test]
    async fn posts_theme_with_token_header() {
        let (addr, request) =
            respond_once("200 OK", r#"{"status":"success","theme":"dark"}"#).await;
        let client = client_for(addr, PageContext::with_token("tok-123"));

        let response = client.sync_theme("dark").await.unwrap();
        let raw = request.await.unwrap();

        assert_eq!(response.theme.as_deref(), Some("dark"));
        assert!(raw.starts_with("POST /api/preferences/theme HTTP/1.1\r\n"));
        assert!(raw.to_lowercase().contains("x-csrftoken: tok-123\r\n"));
        assert!(raw.ends_with(r#"{"theme":"dark"}"#));
    }

    #[tokio::test]
    async fn missing_token_still_sends() {
        let (addr, request) = respond_once("200 OK", r#"{"success":true}"#).await;
        let client = client_for(addr, PageContext::default());

        client.sync_theme("light").await.unwrap();
        let raw = request.await.unwrap();

        assert!(!raw.to_lowercase().contains("x-csrftoken"));
    }

    #[tokio::test]
    async fn non_2xx_is_a_rejection_with_server_message() {
        let (addr, _request) = respond_once(
            "403 Forbidden",
            r#"{"status":"error","message":"Premium required for this theme"}"#,
        )
        .await;
        let client = client_for(addr, PageContext::default());

        match client.sync_theme("neon").await {
            Err(ThemeError::SyncRejected { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Premium required for this theme");
            }
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let (addr, _request) = respond_once("200 OK", "<html>login</html>").await;
        let client = client_for(addr, PageContext::default());

        assert!(matches!(
            client.sync_theme("dark").await,
            Err(ThemeError::Json(_))
        ));
    }

    #[tokio::test]
    async fn spawned_sync_swallows_failures() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client_for(addr, PageContext::default());

        let handle = client.spawn_theme_sync("dark").unwrap();

        assert!(handle.await.is_ok());
    }

    #[test]
    fn spawn_without_runtime_is_skipped() {
        let client =
            DashClient::new(ClientOptions::for_base_url("http://127.0.0.1:9")).unwrap();

        assert!(client.spawn_theme_sync("dark").is_none());
    }

    #[test]
    fn bad_header_name_is_rejected() {
        let mut options = ClientOptions::for_base_url("http://127.0.0.1:9");
        options.csrf_header = "X CSRF".to_string();

        assert!(matches!(
            DashClient::new(options),
            Err(ThemeError::HeaderName(_))
        ));
    }
}
