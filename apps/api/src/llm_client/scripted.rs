//! Local chat-completions endpoint that answers with canned replies, in order.
//! Once the script runs out it answers with blank content.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use super::LlmClient;

#[derive(Default)]
struct Script {
    replies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

pub(crate) struct ScriptedLlm {
    pub client: LlmClient,
    script: Arc<Script>,
}

impl ScriptedLlm {
    pub async fn start(replies: &[&str]) -> Self {
        let script = Arc::new(Script {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            calls: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/v1/chat/completions", post(reply))
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = LlmClient {
            client: Client::builder().no_proxy().build().unwrap(),
            api_key: "test-key".into(),
            api_url: format!("http://{addr}/v1/chat/completions"),
        };
        Self { client, script }
    }

    /// Requests received so far.
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }
}

async fn reply(State(script): State<Arc<Script>>, Json(_request): Json<Value>) -> Json<Value> {
    script.calls.fetch_add(1, Ordering::SeqCst);
    let content = script.replies.lock().await.pop_front().unwrap_or_default();
    Json(json!({
        "choices": [{"message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1}
    }))
}
