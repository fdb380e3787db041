//! Hugging Face inference gateway using reqwest.

use crate::GatewayMetrics;
use crate::huggingface::dto::ApiErrorBody;
use crate::huggingface::{
    ChatCompletionBody, ChatCompletionReply, HuggingFaceEndpoints, TextToImageBody, WhoamiReply,
};
use async_trait::async_trait;
use moodcanvas_core::{ChatRequest, Credential, ImageArtifact};
use moodcanvas_error::{
    GatewayError, GatewayErrorKind, HttpError, MoodcanvasError, MoodcanvasResult,
};
use moodcanvas_interface::{AccountInfo, ChatCompletion, InferenceGateway, TextToImage};
use reqwest::{Client, Response, header::CONTENT_TYPE};
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

const PROVIDER: &str = "huggingface";

/// Hugging Face inference API gateway.
///
/// Holds the credential for its whole lifetime. Without one the gateway is
/// not ready and every call fails with
/// [`GatewayErrorKind::MissingCredential`] before touching the network.
#[derive(Debug, Clone)]
pub struct HuggingFaceGateway {
    client: Client,
    credential: Option<Credential>,
    endpoints: HuggingFaceEndpoints,
}

impl HuggingFaceGateway {
    /// Creates a gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(has_credential = credential.is_some()))]
    pub fn new(
        credential: Option<Credential>,
        endpoints: HuggingFaceEndpoints,
    ) -> MoodcanvasResult<Self> {
        let client = Client::builder()
            .timeout(*endpoints.timeout())
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(chat_url = %endpoints.chat_url(), image_base_url = %endpoints.image_base_url(), "Created HuggingFace gateway");

        Ok(Self {
            client,
            credential,
            endpoints,
        })
    }

    /// Endpoint configuration in use.
    pub fn endpoints(&self) -> &HuggingFaceEndpoints {
        &self.endpoints
    }

    fn credential(&self) -> MoodcanvasResult<&Credential> {
        self.credential
            .as_ref()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::MissingCredential).into())
    }

    /// Turns a non-success response into a gateway error carrying the status.
    async fn status_error(response: Response) -> MoodcanvasError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = ApiErrorBody::message_from(&body);
        error!(status, error = %message, "HuggingFace API error");
        let kind = if status == 400 && message.contains("not supported") {
            GatewayErrorKind::Unsupported(message)
        } else {
            GatewayErrorKind::Http { status, message }
        };
        GatewayError::new(kind).into()
    }

    fn transport_error(e: reqwest::Error) -> MoodcanvasError {
        error!(error = ?e, "HTTP request failed");
        GatewayError::new(GatewayErrorKind::Transport(e.to_string())).into()
    }

    fn record<T>(
        result: &MoodcanvasResult<T>,
        model: &str,
        operation: &str,
        started: Instant,
    ) {
        let metrics = GatewayMetrics::get();
        match result {
            Ok(_) => metrics.record_request(
                PROVIDER,
                model,
                operation,
                started.elapsed().as_secs_f64(),
            ),
            Err(e) => {
                let label = e
                    .gateway_kind()
                    .map(GatewayErrorKind::metric_label)
                    .unwrap_or("unknown");
                metrics.record_error(PROVIDER, model, operation, label);
            }
        }
    }

    async fn send_chat(&self, request: &ChatRequest) -> MoodcanvasResult<String> {
        let token = self.credential()?;
        let body = ChatCompletionBody::from(request);

        debug!(
            url = %self.endpoints.chat_url(),
            messages = body.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoints.chat_url())
            .bearer_auth(token.expose())
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let reply: ChatCompletionReply = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion");
            GatewayError::new(GatewayErrorKind::Decode(format!(
                "Failed to parse chat completion: {}",
                e
            )))
        })?;

        reply.first_text().map(str::to_string).ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::Decode(
                "chat completion contained no message content".to_string(),
            ))
            .into()
        })
    }

    async fn send_image(&self, prompt: &str, model: &str) -> MoodcanvasResult<ImageArtifact> {
        let token = self.credential()?;
        let url = self.endpoints.image_url(model);

        debug!(url = %url, prompt_len = prompt.len(), "Sending text-to-image request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, "image/png")
            .json(&TextToImageBody::new(prompt))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());

        if mime.as_deref() == Some("application/json") {
            let body = response.text().await.unwrap_or_default();
            warn!(body = %body, "Image endpoint answered with JSON instead of an image");
            return Err(GatewayError::new(GatewayErrorKind::Decode(format!(
                "expected image bytes, got JSON: {}",
                ApiErrorBody::message_from(&body)
            )))
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::new(GatewayErrorKind::Transport(e.to_string())))?;

        if bytes.is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::EmptyImage).into());
        }

        debug!(len = bytes.len(), mime = ?mime, "Received image");
        Ok(ImageArtifact::new(bytes.to_vec(), mime))
    }

    async fn send_whoami(&self) -> MoodcanvasResult<String> {
        let token = self.credential()?;

        let response = self
            .client
            .get(self.endpoints.whoami_url())
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let reply: WhoamiReply = response.json().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::Decode(format!(
                "Failed to parse account reply: {}",
                e
            )))
        })?;
        Ok(reply.name().clone())
    }
}

impl InferenceGateway for HuggingFaceGateway {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn is_ready(&self) -> bool {
        self.credential.is_some()
    }
}

#[async_trait]
impl ChatCompletion for HuggingFaceGateway {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn chat_completion(&self, request: &ChatRequest) -> MoodcanvasResult<String> {
        let started = Instant::now();
        let result = self.send_chat(request).await;
        Self::record(&result, request.model(), "chat", started);
        result
    }
}

#[async_trait]
impl TextToImage for HuggingFaceGateway {
    #[instrument(skip(self, prompt))]
    async fn text_to_image(&self, prompt: &str, model: &str) -> MoodcanvasResult<ImageArtifact> {
        let started = Instant::now();
        let result = self.send_image(prompt, model).await;
        Self::record(&result, model, "text_to_image", started);
        result
    }
}

#[async_trait]
impl AccountInfo for HuggingFaceGateway {
    #[instrument(skip(self))]
    async fn whoami(&self) -> MoodcanvasResult<String> {
        let started = Instant::now();
        let result = self.send_whoami().await;
        Self::record(&result, "-", "whoami", started);
        result
    }
}
