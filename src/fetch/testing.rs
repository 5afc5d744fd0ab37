//! In-memory transports for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpTransport, TransportError, TransportResponse};

pub(crate) type Outcome = Result<TransportResponse, TransportError>;

pub(crate) fn ok_json(value: &Value) -> Outcome {
    Ok(TransportResponse {
        status: 200,
        body: serde_json::to_vec(value).unwrap(),
    })
}

pub(crate) fn status(code: u16) -> Outcome {
    Ok(TransportResponse {
        status: code,
        body: b"{\"error\":\"unavailable\"}".to_vec(),
    })
}

pub(crate) fn raw_body(body: &str) -> Outcome {
    Ok(TransportResponse {
        status: 200,
        body: body.as_bytes().to_vec(),
    })
}

pub(crate) fn network(message: &str) -> Outcome {
    Err(TransportError::Network(message.to_string()))
}

/// Replays a fixed sequence of outcomes, repeating the final one forever.
pub(crate) struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn sequence(outcomes: Vec<Outcome>) -> Self {
        assert!(!outcomes.is_empty(), "script needs at least one outcome");
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(outcome: Outcome) -> Self {
        Self::sequence(vec![outcome])
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes.front().cloned().unwrap()
        }
    }
}

/// Serves fixed JSON bodies by exact URL; anything else is a 404.
#[derive(Default)]
pub(crate) struct RoutedTransport {
    routes: HashMap<String, Outcome>,
}

impl RoutedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, url: &str, outcome: Outcome) -> Self {
        self.routes.insert(url.to_string(), outcome);
        self
    }
}

#[async_trait]
impl HttpTransport for RoutedTransport {
    async fn get(&self, url: &str) -> Outcome {
        self.routes.get(url).cloned().unwrap_or_else(|| status(404))
    }
}
