//! Test Transport
//!
//! Records every request and answers from a FIFO script. A gated answer
//! stays pending until the test releases it.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse, HttpTransport};

pub type Gate = oneshot::Sender<ApiResult<ApiResponse>>;

enum Scripted {
    Ready(ApiResult<ApiResponse>),
    Gated(oneshot::Receiver<ApiResult<ApiResponse>>),
}

#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    script: RefCell<VecDeque<Scripted>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(ApiResponse::new(status, body))));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, &body.to_string())
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.script.borrow_mut().push_back(Scripted::Ready(Err(err)));
        self
    }

    /// Queue an answer that resolves only when the returned sender fires
    pub fn gate(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(outcome)) => outcome,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
            None => Err(ApiError::Transport("no scripted response".to_string())),
        }
    }
}
