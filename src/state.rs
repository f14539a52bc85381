use std::path::Path;

use crate::config::AppConfig;
use crate::data::eligibility::{EligibilityResult, evaluate};
use crate::data::handle::DatasetHandle;
use crate::data::model::CompetitionCategory;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset (None when loading failed).
    pub handle: Option<DatasetHandle>,

    /// Fatal load error. While set, no query inputs are offered.
    pub load_error: Option<String>,

    /// Score as typed; values `<= 0` mean "not entered yet".
    pub score: f64,

    /// Selected course; defaults to the first course in sorted order.
    pub course: Option<String>,

    pub category: CompetitionCategory,

    /// Result for the current inputs (cached until an input changes).
    pub result: EligibilityResult,

    /// Non-fatal status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let path = config.data_path.clone();
        let mut state = Self {
            config,
            handle: None,
            load_error: None,
            score: 0.0,
            course: None,
            category: CompetitionCategory::default(),
            result: EligibilityResult::NoQuery,
            status_message: None,
        };
        state.open_dataset(&path);
        state
    }

    /// Load a dataset, replacing whatever was loaded before.
    pub fn open_dataset(&mut self, path: &Path) {
        match DatasetHandle::open(path) {
            Ok(handle) => self.set_handle(handle),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.handle = None;
                self.course = None;
                self.load_error = Some(e.to_string());
                self.reevaluate();
            }
        }
    }

    /// Re-read the current file if it changed on disk.
    pub fn reload(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        match handle.reload_if_changed() {
            Ok(true) => {
                self.status_message = Some("Dataset reloaded".to_string());
                let course = self.course.take();
                self.course = self.valid_course(course);
                self.reevaluate();
            }
            Ok(false) => self.status_message = Some("Dataset unchanged".to_string()),
            Err(e) => {
                log::error!("Reload failed: {e:#}");
                self.status_message = Some(format!("Reload failed: {e}"));
            }
        }
    }

    fn set_handle(&mut self, handle: DatasetHandle) {
        self.handle = Some(handle);
        self.load_error = None;
        self.status_message = None;
        let course = self.course.take();
        self.course = self.valid_course(course);
        self.reevaluate();
    }

    /// Keep `course` if the dataset still has it, else fall back to the first.
    fn valid_course(&self, course: Option<String>) -> Option<String> {
        let courses = self.handle.as_ref()?.dataset().courses();
        match course {
            Some(c) if courses.contains(&c) => Some(c),
            _ => courses.first().cloned(),
        }
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
        self.reevaluate();
    }

    pub fn set_course(&mut self, course: String) {
        self.course = Some(course);
        self.reevaluate();
    }

    pub fn set_category(&mut self, category: CompetitionCategory) {
        self.category = category;
        self.reevaluate();
    }

    /// Score to query with, if one was entered.
    pub fn entered_score(&self) -> Option<f64> {
        (self.score > 0.0).then_some(self.score)
    }

    /// Recompute `result` after an input change.
    pub fn reevaluate(&mut self) {
        self.result = match (&self.handle, &self.course) {
            (Some(handle), Some(course)) => evaluate(
                handle.dataset().offers(),
                self.entered_score(),
                course,
                self.category,
            ),
            (Some(_), None) if self.entered_score().is_some() => EligibilityResult::NoOffersFound,
            _ => EligibilityResult::NoQuery,
        };
        log::debug!(
            "evaluated course={:?} category={} score={:?}: {}",
            self.course,
            self.category,
            self.entered_score(),
            match &self.result {
                EligibilityResult::NoQuery => "no query".to_string(),
                EligibilityResult::NoOffersFound => "no offers".to_string(),
                EligibilityResult::Evaluated(e) =>
                    format!("{}/{} eligible", e.eligible_count, e.total_offers),
            }
        );
    }
}
