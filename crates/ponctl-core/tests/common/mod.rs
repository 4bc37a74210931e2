//! Shared helpers for controller integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use secrecy::SecretString;
use url::Url;
use wiremock::MockServer;

use ponctl_api::{ApiClient, Session};
use ponctl_core::Confirmation;

/// Start a mock backend and an API client pointed at it.
pub async fn setup() -> (MockServer, Arc<ApiClient>) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).expect("mock server URI");
    let session = Session::bearer(SecretString::from("test-token".to_owned()));
    let client = ApiClient::with_client(reqwest::Client::new(), base_url, session);
    (server, Arc::new(client))
}

/// Confirmation double with a fixed reply and a call counter.
pub struct Scripted {
    reply: bool,
    calls: AtomicUsize,
}

impl Scripted {
    pub fn approving() -> Self {
        Self {
            reply: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn declining() -> Self {
        Self {
            reply: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn prompts(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Confirmation for Scripted {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
    }
}
