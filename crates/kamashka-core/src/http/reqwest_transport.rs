//! Reqwest Transport
//!
//! `HttpTransport` over reqwest: the browser's fetch on wasm, hyper natively.

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, HttpTransport, Method, MultipartField, RequestBody};
use crate::config::SiteConfig;
use crate::error::{ApiError, ApiResult};

/// Shared client for every call to the API
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: SiteConfig,
}

impl ReqwestTransport {
    pub fn new(config: SiteConfig) -> ApiResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build().map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn build(&self, request: ApiRequest) -> ApiResult<reqwest::RequestBuilder> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, self.config.url_for(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        #[cfg(target_arch = "wasm32")]
        if request.credentials {
            builder = builder.fetch_credentials_include();
        }

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => builder.multipart(build_form(fields)?),
        };
        Ok(builder)
    }
}

fn build_form(fields: Vec<MultipartField>) -> ApiResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File { name, attachment } => {
                let part = reqwest::multipart::Part::bytes(attachment.bytes)
                    .file_name(attachment.file_name)
                    .mime_str(&attachment.mime_type)
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let builder = self.build(request)?;
        let exchange = async move {
            let response = builder.send().await.map_err(transport_error)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(transport_error)?;
            Ok::<_, ApiError>(ApiResponse { status, body })
        };

        #[cfg(target_arch = "wasm32")]
        {
            with_timeout(exchange, self.config.timeout).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            exchange.await
        }
    }
}

/// fetch has no client-level timeout; race the exchange against a timer instead
#[cfg(target_arch = "wasm32")]
async fn with_timeout<F>(exchange: F, timeout: std::time::Duration) -> ApiResult<ApiResponse>
where
    F: std::future::Future<Output = ApiResult<ApiResponse>>,
{
    use futures::future::{select, Either};

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = gloo_timers::future::TimeoutFuture::new(millis);
    futures::pin_mut!(exchange);
    futures::pin_mut!(timer);
    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    #[test]
    fn test_build_multipart_request() {
        let transport = ReqwestTransport::new(SiteConfig::new("http://localhost:8000")).unwrap();
        let request = ApiRequest::post("/job-applications/")
            .header("X-CSRFToken", "tok")
            .multipart(vec![
                MultipartField::Text { name: "full_name".into(), value: "Ada".into() },
                MultipartField::File {
                    name: "resume".into(),
                    attachment: Attachment::new("cv.pdf", "application/pdf", vec![1, 2, 3]),
                },
            ]);
        let built = transport.build(request).unwrap().build().unwrap();
        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://localhost:8000/job-applications/");
        assert_eq!(built.headers().get("X-CSRFToken").unwrap(), "tok");
    }

    #[test]
    fn test_build_query_request() {
        let transport = ReqwestTransport::new(SiteConfig::default()).unwrap();
        let request = ApiRequest::get("/blog-posts/").query(vec![
            ("page".into(), "2".into()),
            ("search".into(), "rust lang".into()),
        ]);
        let built = transport.build(request).unwrap().build().unwrap();
        assert_eq!(built.url().query(), Some("page=2&search=rust+lang"));
    }
}
