//! Scripted manager used by the adapter tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use unity_core::manager::{ApiError, ApiManager, ApiResult};

/// Manager stub that replays canned response documents per action
///
/// Every call is recorded so tests can assert call counts and parameter
/// shapes. Running out of scripted responses for an action is a test bug
/// and surfaces as a transport error.
pub struct ScriptedManager {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedManager {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response document for the given action
    pub fn respond(self, action: &str, doc: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(action.to_string())
            .or_default()
            .push_back(doc);
        self
    }

    /// Every `(action, params)` pair seen so far, in call order
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls issued for one action
    pub fn calls_for(&self, action: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(seen, _)| seen == action)
            .count()
    }
}

#[async_trait]
impl ApiManager for ScriptedManager {
    async fn call(&self, action: &str, params: Value) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((action.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .get_mut(action)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| ApiError::transport(action, "no scripted response left"))
    }
}
