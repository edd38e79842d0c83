// SPDX-License-Identifier: MIT

//! Runtime state for a single workflow invocation

use serde::{Deserialize, Serialize};

use super::update::StateUpdate;

/// Title and body of the generated post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogContent {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// State threaded through the workflow nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    topic: String,
    #[serde(default)]
    content: BlogContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_language: Option<String>,
}

impl WorkflowState {
    /// Create the initial state for a topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            content: BlogContent::default(),
            current_language: None,
        }
    }

    /// Request a translation target
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.current_language = Some(language.into());
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The topic as given, unless it is empty
    pub fn non_empty_topic(&self) -> Option<&str> {
        (!self.topic.is_empty()).then_some(self.topic.as_str())
    }

    pub fn content(&self) -> &BlogContent {
        &self.content
    }

    pub fn title(&self) -> Option<&str> {
        self.content.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.content.content.as_deref()
    }

    pub fn current_language(&self) -> Option<&str> {
        self.current_language.as_deref()
    }

    /// Merge a node's update into the state
    pub fn apply(&mut self, update: StateUpdate) {
        let StateUpdate {
            title,
            content,
            current_language,
        } = update;

        if let Some(title) = title {
            self.content.title = Some(title);
        }
        if let Some(content) = content {
            self.content.content = Some(content);
        }
        if let Some(language) = current_language {
            self.current_language = Some(language);
        }
    }

    /// Convert state to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_state_has_only_topic() {
        let state = WorkflowState::new("Rust ownership model");
        assert_eq!(state.topic(), "Rust ownership model");
        assert!(state.title().is_none());
        assert!(state.body().is_none());
        assert!(state.current_language().is_none());
    }

    #[test]
    fn test_non_empty_topic() {
        assert_eq!(
            WorkflowState::new("  lifetimes ").non_empty_topic(),
            Some("  lifetimes ")
        );
        assert_eq!(WorkflowState::new("   ").non_empty_topic(), Some("   "));
        assert!(WorkflowState::new("").non_empty_topic().is_none());
    }

    #[test]
    fn test_apply_overwrites_set_fields() {
        let mut state = WorkflowState::new("topic");
        state.apply(StateUpdate::title("first"));
        state.apply(StateUpdate::title("second"));
        assert_eq!(state.title(), Some("second"));
    }

    #[test]
    fn test_apply_preserves_unset_fields() {
        let mut state = WorkflowState::new("topic").with_language("japanese");
        state.apply(StateUpdate::title_and_body("title", "body"));
        state.apply(StateUpdate::body("translated"));

        assert_eq!(state.title(), Some("title"));
        assert_eq!(state.body(), Some("translated"));
        assert_eq!(state.current_language(), Some("japanese"));
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut state = WorkflowState::new("topic").with_language("French");
        let before = state.clone();
        state.apply(StateUpdate::none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_to_json() {
        let mut state = WorkflowState::new("topic");
        state.apply(StateUpdate::title_and_body("# T", "body"));

        assert_eq!(
            state.to_json(),
            json!({
                "topic": "topic",
                "content": {"title": "# T", "content": "body"}
            })
        );
    }

    #[test]
    fn test_deserialize_initial_state() {
        let state: WorkflowState =
            serde_json::from_value(json!({"topic": "async", "current_language": "Japanese"}))
                .unwrap();
        assert_eq!(state.topic(), "async");
        assert_eq!(state.current_language(), Some("Japanese"));
        assert_eq!(state.content(), &BlogContent::default());
    }
}
