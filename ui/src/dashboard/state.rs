//! Presentation state and the two-request load that settles it.

use std::fmt::Display;
use std::future::Future;

use api::{AssessmentRecord, ProfileRecord};

/// What the dashboard shows. Only `Loading → Error` and `Loading → Ready` happen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PresentationState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready {
        profile: ProfileRecord,
        assessment: AssessmentRecord,
    },
}

impl PresentationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PresentationState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn ready(&self) -> Option<(&ProfileRecord, &AssessmentRecord)> {
        match self {
            PresentationState::Ready {
                profile,
                assessment,
            } => Some((profile, assessment)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PresentationState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Holder of the page's single state transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardViewModel {
    state: PresentationState,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Applies the load outcome. Returns `false` (and changes nothing) once the
    /// state has already left `Loading`, or if `next` is itself `Loading`.
    pub fn settle(&mut self, next: PresentationState) -> bool {
        if self.state.is_settled() || next.is_loading() {
            return false;
        }
        self.state = next;
        true
    }
}

/// Awaits the joined record pair and reduces it to the settled state.
///
/// The joining itself belongs to the data source (`RemoteDataSource::fetch_both`
/// waits for both requests and reports the profile error first); this only maps
/// the outcome, substituting `fallback` for a blank failure message.
pub async fn load_dashboard<F, E>(records: F, fallback: &str) -> PresentationState
where
    F: Future<Output = Result<(ProfileRecord, AssessmentRecord), E>>,
    E: Display,
{
    match records.await {
        Ok((profile, assessment)) => PresentationState::Ready {
            profile,
            assessment,
        },
        Err(err) => PresentationState::Error {
            message: failure_message(&err, fallback),
        },
    }
}

fn failure_message(err: &impl Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
