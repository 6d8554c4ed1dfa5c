//! Fakes shared by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::MemoApi;
use crate::error::{Error, Result};
use crate::models::{Memo, MemoDraft, MemoId};
use crate::prompt::Prompt;

pub const SERVER_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

pub fn memo(id: i64, title: &str) -> Memo {
    Memo {
        id: MemoId::Number(id),
        title: title.to_string(),
        content: format!("{title} content"),
        created_at: SERVER_TIMESTAMP.to_string(),
    }
}

/// In-memory memo service with switchable failures and a call log.
pub struct FakeMemoApi {
    memos: Mutex<Vec<Memo>>,
    calls: Mutex<Vec<String>>,
    reachable: AtomicBool,
    mutation_error: Mutex<Option<String>>,
    next_id: AtomicI64,
}

impl FakeMemoApi {
    pub fn with_memos(memos: Vec<Memo>) -> Self {
        Self {
            memos: Mutex::new(memos),
            calls: Mutex::new(Vec::new()),
            reachable: AtomicBool::new(true),
            mutation_error: Mutex::new(None),
            next_id: AtomicI64::new(42),
        }
    }

    pub fn unreachable() -> Self {
        let api = Self::with_memos(Vec::new());
        api.set_reachable(false);
        api
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Make create/update/delete fail with the given message.
    pub fn fail_mutations(&self, message: &str) {
        *self.mutation_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_memos(&self) -> Vec<Memo> {
        self.memos.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_reachable(&self) -> Result<()> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::Transport("Network Error".to_string()))
        }
    }

    fn check_mutation(&self) -> Result<()> {
        self.check_reachable()?;
        match self.mutation_error.lock().unwrap().clone() {
            Some(message) => Err(Error::Transport(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MemoApi for FakeMemoApi {
    async fn list(&self) -> Result<Vec<Memo>> {
        self.record("list".to_string());
        self.check_reachable()?;
        Ok(self.server_memos())
    }

    async fn get(&self, id: &MemoId) -> Result<Memo> {
        self.record(format!("get {id}"));
        self.check_reachable()?;
        self.server_memos()
            .into_iter()
            .find(|memo| &memo.id == id)
            .ok_or_else(|| Error::Transport("Request failed with HTTP 404".to_string()))
    }

    async fn create(&self, draft: &MemoDraft) -> Result<Memo> {
        self.record(format!("create {}", draft.title));
        self.check_mutation()?;
        let memo = Memo {
            id: MemoId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: SERVER_TIMESTAMP.to_string(),
        };
        self.memos.lock().unwrap().insert(0, memo.clone());
        Ok(memo)
    }

    async fn update(&self, id: &MemoId, draft: &MemoDraft) -> Result<Memo> {
        self.record(format!("update {id}"));
        self.check_mutation()?;
        let mut memos = self.memos.lock().unwrap();
        let memo = memos
            .iter_mut()
            .find(|memo| &memo.id == id)
            .ok_or_else(|| Error::Transport("Request failed with HTTP 404".to_string()))?;
        memo.title.clone_from(&draft.title);
        memo.content.clone_from(&draft.content);
        Ok(memo.clone())
    }

    async fn delete(&self, id: &MemoId) -> Result<()> {
        self.record(format!("delete {id}"));
        self.check_mutation()?;
        self.memos.lock().unwrap().retain(|memo| &memo.id != id);
        Ok(())
    }

    async fn health(&self) -> Result<serde_json::Value> {
        self.check_reachable()?;
        Ok(serde_json::json!({ "status": "UP" }))
    }
}

/// Prompt with a fixed answer that records what it was asked.
pub struct ScriptedPrompt {
    answer: bool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
