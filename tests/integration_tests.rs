//! Integration tests for workflow setup and execution
//!
//! These tests run the topic and language workflows end to end against
//! scripted mock models.

use async_trait::async_trait;
use blogflow_rs::adk::error::ModelError;
use blogflow_rs::adk::model::{Content, GenerationConfig, Model, Part};
use blogflow_rs::blogflow::config::ConfigLoader;
use blogflow_rs::blogflow::error::{BlogflowError, WorkflowError};
use blogflow_rs::blogflow::workflow::graph::NodeId;
use blogflow_rs::blogflow::workflow::{
    route_decision, Branch, StateUpdate, UseCase, WorkflowFactory, WorkflowState,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Components
// ============================================================================

/// Mock model that returns predefined responses and records every prompt
struct MockModel {
    responses: Vec<Result<String, fn() -> ModelError>>,
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    configs: Mutex<Vec<Option<GenerationConfig>>>,
}

impl MockModel {
    fn new(responses: &[&str]) -> Arc<Self> {
        Self::scripted(responses.iter().map(|r| Ok(r.to_string())).collect())
    }

    fn scripted(responses: Vec<Result<String, fn() -> ModelError>>) -> Arc<Self> {
        Arc::new(Self {
            responses,
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
            configs: Mutex::new(vec![]),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, idx: usize) -> String {
        self.prompts.lock().unwrap()[idx].clone()
    }
}

#[async_trait]
impl Model for MockModel {
    fn provider(&self) -> &str {
        "mock"
    }

    async fn generate_content(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> Result<Content, ModelError> {
        let prompt = history.last().map(Content::text).unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);
        self.configs.lock().unwrap().push(config.cloned());

        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            Some(Ok(text)) => Ok(Content {
                role: "model".to_string(),
                parts: vec![Part::Text(text.clone())],
            }),
            Some(Err(make_error)) => Err(make_error()),
            None => Ok(Content::model("Max responses reached")),
        }
    }
}

const TITLE: &str = "# Mastering Ownership in Rust";
const BODY: &str = "Ownership is Rust's most unique feature...";

fn rate_limited() -> ModelError {
    ModelError::RateLimited {
        retry_after_secs: Some(30),
    }
}

const TOPIC_REPLIES: [&str; 2] = [TITLE, BODY];

fn factory(model: &Arc<MockModel>) -> WorkflowFactory {
    WorkflowFactory::new(model.clone())
}

fn content_only_state(topic: &str, language: Option<&str>) -> WorkflowState {
    let mut state = WorkflowState::new(topic);
    if let Some(language) = language {
        state = state.with_language(language);
    }
    state.apply(StateUpdate::title_and_body(TITLE, BODY));
    state
}

// ============================================================================
// Topic workflow
// ============================================================================

#[tokio::test]
async fn test_topic_workflow_generates_title_then_body() {
    let model = MockModel::new(&TOPIC_REPLIES);
    let workflow = factory(&model).setup(UseCase::Topic).unwrap();

    let state = workflow
        .run(WorkflowState::new("Rust ownership model"))
        .await
        .unwrap();

    assert_eq!(state.title(), Some(TITLE));
    assert_eq!(state.body(), Some(BODY));
    assert_eq!(model.calls(), 2);
    assert!(model.prompt(0).contains("Rust ownership model"));
    assert!(model.prompt(1).contains("Rust ownership model"));
    assert!(model.prompt(1).contains(TITLE));
}

#[tokio::test]
async fn test_topic_workflow_final_state_json() {
    let model = MockModel::new(&TOPIC_REPLIES);
    let workflow = factory(&model).setup(UseCase::Topic).unwrap();

    let state = workflow.run(WorkflowState::new("Agentic AI")).await.unwrap();

    assert_eq!(
        state.to_json(),
        json!({
            "topic": "Agentic AI",
            "content": {"title": TITLE, "content": BODY}
        })
    );
}

#[tokio::test]
async fn test_empty_topic_does_not_invoke_model() {
    let model = MockModel::new(&TOPIC_REPLIES);
    let workflow = factory(&model).setup(UseCase::Topic).unwrap();

    let state = workflow.run(WorkflowState::new("")).await.unwrap();

    assert_eq!(model.calls(), 0);
    assert!(state.title().is_none());
    assert!(state.body().is_none());
}

#[tokio::test]
async fn test_whitespace_topic_still_invokes_model() {
    let model = MockModel::new(&TOPIC_REPLIES);
    let workflow = factory(&model).setup(UseCase::Topic).unwrap();

    let state = workflow.run(WorkflowState::new("   ")).await.unwrap();

    assert_eq!(model.calls(), 2);
    assert!(model.prompt(0).contains("\"   \""));
    assert_eq!(state.title(), Some(TITLE));
    assert_eq!(state.body(), Some(BODY));
}

#[tokio::test]
async fn test_model_error_propagates_unmodified() {
    let model = MockModel::scripted(vec![
        Ok(TITLE.to_string()),
        Err(rate_limited as fn() -> ModelError),
    ]);
    let workflow = factory(&model).setup(UseCase::Topic).unwrap();

    let err = workflow
        .run(WorkflowState::new("Rust"))
        .await
        .unwrap_err();

    assert!(err.is_transient());
    assert!(matches!(
        err,
        BlogflowError::Model(ModelError::RateLimited {
            retry_after_secs: Some(30)
        })
    ));
    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn test_generation_config_reaches_model() {
    let model = MockModel::new(&TOPIC_REPLIES);
    let config = GenerationConfig {
        temperature: Some(0.2),
        ..GenerationConfig::default()
    };
    let workflow = factory(&model)
        .with_generation_config(config.clone())
        .setup(UseCase::Topic)
        .unwrap();

    workflow.run(WorkflowState::new("Rust")).await.unwrap();

    let configs = model.configs.lock().unwrap();
    assert_eq!(configs.len(), 2);
    assert!(configs.iter().all(|c| c.as_ref() == Some(&config)));
}

// ============================================================================
// Language workflow
// ============================================================================

#[tokio::test]
async fn test_language_workflow_translates_to_japanese() {
    let model = MockModel::new(&[TITLE, BODY, "所有権はRustの最もユニークな機能です..."]);
    let workflow = factory(&model).setup(UseCase::Language).unwrap();

    let state = workflow
        .run(WorkflowState::new("Rust ownership model").with_language("japanese"))
        .await
        .unwrap();

    assert_eq!(model.calls(), 3);
    assert!(model.prompt(2).contains("japanese"));
    assert!(model.prompt(2).contains(BODY));
    assert_eq!(state.title(), Some(TITLE), "title is not translated");
    assert_eq!(state.body(), Some("所有権はRustの最もユニークな機能です..."));
    assert_eq!(state.current_language(), Some("japanese"));
}

#[tokio::test]
async fn test_language_workflow_translates_to_traditional_chinese() {
    let model = MockModel::new(&[TITLE, BODY, "所有權是 Rust 最獨特的功能..."]);
    let workflow = factory(&model).setup(UseCase::Language).unwrap();

    let state = workflow
        .run(WorkflowState::new("Rust ownership model").with_language("traditional chinese"))
        .await
        .unwrap();

    assert_eq!(model.calls(), 3);
    assert!(model.prompt(2).contains("traditional chinese"));
    assert_eq!(state.title(), Some(TITLE));
    assert_eq!(state.body(), Some("所有權是 Rust 最獨特的功能..."));
}

#[tokio::test]
async fn test_unsupported_language_ends_after_content() {
    let model = MockModel::new(&[TITLE, BODY, "should not be used"]);
    let workflow = factory(&model).setup(UseCase::Language).unwrap();

    let state = workflow
        .run(WorkflowState::new("Rust ownership model").with_language("french"))
        .await
        .unwrap();

    assert_eq!(model.calls(), 2);
    assert_eq!(
        state,
        content_only_state("Rust ownership model", Some("french"))
    );
}

#[tokio::test]
async fn test_absent_language_ends_after_content() {
    let model = MockModel::new(&[TITLE, BODY, "should not be used"]);
    let workflow = factory(&model).setup(UseCase::Language).unwrap();

    let state = workflow
        .run(WorkflowState::new("Rust ownership model"))
        .await
        .unwrap();

    assert_eq!(model.calls(), 2);
    assert_eq!(state, content_only_state("Rust ownership model", None));
}

#[tokio::test]
async fn test_empty_topic_fails_at_translation() {
    let model = MockModel::new(&[TITLE, BODY, "unused"]);
    let workflow = factory(&model).setup(UseCase::Language).unwrap();

    let err = workflow
        .run(WorkflowState::new("").with_language("Japanese"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BlogflowError::MissingField {
            node: "japanese_translation",
            field: "content.content"
        }
    ));
    assert!(!err.is_transient());
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_workflows_are_independent() {
    let model = MockModel::new(&[TITLE, BODY, TITLE, BODY, "translated"]);
    let factory = factory(&model);

    let topic = factory.setup(UseCase::Topic).unwrap();
    let language = factory.setup(UseCase::Language).unwrap();
    assert_eq!(topic.name(), "topic");
    assert_eq!(language.name(), "language");

    let first = topic.run(WorkflowState::new("Rust")).await.unwrap();
    let second = language
        .run(WorkflowState::new("Rust").with_language("japanese"))
        .await
        .unwrap();

    assert_eq!(first.body(), Some(BODY));
    assert_eq!(second.body(), Some("translated"));
    assert!(topic.spec().transition(NodeId::Route).is_none());
}

// ============================================================================
// Routing and setup
// ============================================================================

#[test]
fn test_route_decision_examples() {
    let cases = [
        (Some("japanese"), Branch::Japanese),
        (Some("traditional chinese"), Branch::Chinese),
        (Some("Japanese"), Branch::Japanese),
        (Some("spanish"), Branch::End),
        (None, Branch::End),
    ];

    for (language, expected) in cases {
        let mut state = WorkflowState::new("t");
        if let Some(language) = language {
            state = state.with_language(language);
        }
        assert_eq!(route_decision(&state), expected, "language {:?}", language);
    }
}

#[test]
fn test_unknown_use_case_is_rejected() {
    let err = "podcast".parse::<UseCase>().unwrap_err();
    assert_eq!(err, WorkflowError::UnknownUseCase("podcast".to_string()));
}

#[test]
fn test_language_graph_mermaid() {
    let mermaid = UseCase::Language.graph_spec().unwrap().to_mermaid();
    assert!(mermaid.contains("content_creation --> route;"));
    assert!(mermaid.contains("chinese_translation --> __end__;"));
}

#[test]
fn test_factory_from_config_rejects_unknown_provider() {
    let config = ConfigLoader::parse_yaml("model:\n  provider: nonsense\n").unwrap();
    let err = WorkflowFactory::from_config(&config.model).err().unwrap();
    assert!(matches!(
        err,
        BlogflowError::Model(ModelError::UnsupportedProvider(_))
    ));
}
