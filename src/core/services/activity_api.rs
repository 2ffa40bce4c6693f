use async_trait::async_trait;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{ActivitySet, ApiReply, EmailBody, ReplyBody};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    // The request never produced a response
    #[error("{0}")]
    Network(String),
    // The body was not the expected JSON, carries the parser's message
    #[error("{0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<ActivitySet, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
}

// Talks to the activities backend with the browser fetch API
#[derive(Clone)]
pub struct HttpActivityApi {
    base_url: String,
    // Escapes one path segment or query value
    encode: fn(&str) -> String,
}

impl HttpActivityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_encoder(base_url, encode_component)
    }

    fn with_encoder(base_url: impl Into<String>, encode: fn(&str) -> String) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            encode,
        }
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn action_url(&self, activity: &str, action: &str) -> String {
        format!("{}/activities/{}/{}", self.base_url, (self.encode)(activity), action)
    }

    // The reference backend reads the email from the query string, the body carries it too
    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!("{}?email={}", self.action_url(activity, "signup"), (self.encode)(email))
    }

    async fn post_email(&self, url: &str, email: &str) -> Result<ApiReply, ApiError> {
        let body = serde_json::to_string(&EmailBody { email })
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let headers = Headers::new().map_err(network_error)?;
        headers.set("Content-Type", "application/json").map_err(network_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;
        let response = fetch(&request).await?;
        let status = response.status();
        let body = read_json::<ReplyBody>(&response).await?;
        Ok(ApiReply { status, body })
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<ActivitySet, ApiError> {
        let request = Request::new_with_str(&self.activities_url()).map_err(network_error)?;
        let response = fetch(&request).await?;
        read_json::<ActivitySet>(&response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let url = self.signup_url(activity, email);
        self.post_email(&url, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let url = self.action_url(activity, "unregister");
        self.post_email(&url, email).await
    }
}

fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

async fn fetch(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network_error)?;
    value.dyn_into::<Response>().map_err(network_error)
}

async fn read_json<T>(response: &Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let promise = response.json().map_err(decode_error)?;
    let value = JsFuture::from(promise).await.map_err(decode_error)?;
    serde_wasm_bindgen::from_value::<T>(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(describe_js_error(&value))
}

fn decode_error(value: JsValue) -> ApiError {
    ApiError::Decode(describe_js_error(&value))
}
