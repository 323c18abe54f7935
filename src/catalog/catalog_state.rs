use super::CatalogLoad;

/// Where the catalog is in its one-shot lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Suggested questions plus the list selection
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    questions: Vec<String>,
    status: CatalogStatus,
    selected: usize,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Store the fetch outcome
    ///
    /// Returns the message to surface when the fetch failed. Only the first
    /// load is applied; the catalog does not reload.
    pub fn apply(&mut self, load: CatalogLoad) -> Option<String> {
        if self.status != CatalogStatus::Loading {
            log::debug!("Ignoring repeated catalog load");
            return None;
        }

        self.selected = 0;
        match load.error {
            None => {
                self.questions = load.questions;
                self.status = CatalogStatus::Loaded;
                None
            }
            Some(e) => {
                let message = format!("Could not load suggested questions: {}", e);
                self.questions.clear();
                self.status = CatalogStatus::Failed(e.to_string());
                Some(message)
            }
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.questions.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected_question(&self) -> Option<&str> {
        self.questions.get(self.selected).map(String::as_str)
    }

    /// Move the selection down, wrapping at the end
    pub fn select_next(&mut self) {
        if !self.questions.is_empty() {
            self.selected = (self.selected + 1) % self.questions.len();
        }
    }

    /// Move the selection up, wrapping at the top
    pub fn select_previous(&mut self) {
        if !self.questions.is_empty() {
            self.selected = if self.selected == 0 {
                self.questions.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}

#[cfg(test)]
#[path = "catalog_state_tests.rs"]
mod catalog_state_tests;
