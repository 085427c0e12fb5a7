//! Endpoint Client
//!
//! One method per backend endpoint, all going through the configured
//! transport.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::application::ApplicationSubmission;
use crate::contact::ContactSubmission;
use crate::csrf::CsrfToken;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse, HttpTransport, CSRF_HEADER};
use crate::listing::{categories_from_value, normalize_list, FilterState, ListResult};
use crate::models::{BlogPost, ContactReply, JobPosting, TokenReply};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Client for the content/recruitment API
#[derive(Debug, Clone)]
pub struct SiteApi<T> {
    transport: T,
}

impl<T: HttpTransport> SiteApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========================
    // Security token
    // ========================

    /// Single best-effort attempt; any failure yields `CsrfToken::Unavailable`
    pub async fn fetch_csrf_token(&self) -> CsrfToken {
        match self.try_fetch_csrf_token().await {
            Ok(token) => token,
            Err(err) => {
                log::warn!("CSRF fetch failed: {}", err);
                CsrfToken::Unavailable
            }
        }
    }

    async fn try_fetch_csrf_token(&self) -> ApiResult<CsrfToken> {
        let request = ApiRequest::get("/csrf-token/").with_credentials();
        let reply: TokenReply = self.transport.send(request).await?.error_for_status()?.json()?;
        Ok(CsrfToken::from_value(reply.csrf_token))
    }

    // ========================
    // Blog
    // ========================

    pub async fn list_blog_posts(&self, filters: &FilterState) -> ApiResult<ListResult<BlogPost>> {
        let query = filters.query_pairs();
        log::debug!("Fetching blog posts with params {:?}", query);
        let response = self.get(ApiRequest::get("/blog-posts/").query(query)).await?;
        normalize_list(&response.body)
    }

    pub async fn fetch_blog_post(&self, slug: &str) -> ApiResult<BlogPost> {
        let path = format!("/blog-posts/{}/", encode_segment(slug));
        let response = self.transport.send(ApiRequest::get(path)).await?;
        if response.status == 404 {
            return Err(ApiError::NotFound("Blog post not found".to_string()));
        }
        response.error_for_status()?.json()
    }

    pub async fn list_blog_categories(&self) -> ApiResult<Vec<String>> {
        let response = self.get(ApiRequest::get("/blog-categories/")).await?;
        categories_from_value(response.json()?)
    }

    // ========================
    // Careers
    // ========================

    pub async fn list_job_postings(&self) -> ApiResult<ListResult<JobPosting>> {
        log::debug!("Fetching job postings");
        let response = self.get(ApiRequest::get("/job-postings/")).await?;
        normalize_list(&response.body)
    }

    pub async fn fetch_job_posting(&self, job_id: &str) -> ApiResult<JobPosting> {
        let path = format!("/job-postings/{}/", encode_segment(job_id));
        let response = self.transport.send(ApiRequest::get(path).with_credentials()).await?;
        if response.status == 404 {
            return Err(ApiError::NotFound("Job not found.".to_string()));
        }
        response.error_for_status()?.json()
    }

    pub async fn submit_job_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> ApiResult<()> {
        let request = ApiRequest::post("/job-applications/")
            .with_credentials()
            .header(CSRF_HEADER, submission.token.as_str())
            .multipart(submission.multipart_fields());
        self.transport.send(request).await?.error_for_status()?;
        Ok(())
    }

    // ========================
    // Contact
    // ========================

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> ApiResult<()> {
        let body = serde_json::to_value(&submission.draft)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::post("/contact/")
            .with_credentials()
            .header(CSRF_HEADER, submission.token.as_str())
            .json(body);

        let response = self.transport.send(request).await?.error_for_status()?;
        let reply: ContactReply = response.json()?;
        if reply.success {
            Ok(())
        } else {
            Err(ApiError::Status { status: response.status, message: reply.error })
        }
    }

    async fn get(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.transport.send(request).await?.error_for_status()
    }
}
