// SPDX-License-Identifier: MIT

//! Partial state updates returned by workflow nodes

/// Fields a node may change. `None` keeps the current value, `Some` overwrites it.
///
/// `topic` is fixed when the state is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub current_language: Option<String>,
}

impl StateUpdate {
    /// An update that changes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the title only
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the body only; the title is preserved by the merge
    pub fn body(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Set both title and body
    pub fn title_and_body(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            current_language: None,
        }
    }

    /// Set the requested language
    pub fn language(current_language: Option<String>) -> Self {
        Self {
            current_language,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.current_language.is_none()
    }
}
