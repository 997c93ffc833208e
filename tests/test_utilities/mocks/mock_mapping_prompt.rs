use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vcpkg_sbom::prelude::*;

/// Mock MappingPrompt replaying scripted operator decisions
///
/// Once the script runs out every further prompt aborts.
#[derive(Clone, Default)]
pub struct MockMappingPrompt {
    decisions: Arc<Mutex<VecDeque<PromptDecision>>>,
    pub asked: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockMappingPrompt {
    pub fn new(decisions: Vec<PromptDecision>) -> Self {
        Self {
            decisions: Arc::new(Mutex::new(decisions.into())),
            asked: Arc::default(),
        }
    }

    pub fn asked_ports(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl MappingPrompt for MockMappingPrompt {
    fn prompt(
        &self,
        name: &str,
        _version: &str,
        _suggestions: &[CpeDictionaryEntry],
    ) -> PromptDecision {
        self.asked.lock().unwrap().push(name.to_string());
        self.decisions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PromptDecision::Abort)
    }
}
