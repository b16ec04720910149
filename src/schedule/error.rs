use thiserror::Error;

/// Input rejected before any generation work starts.
///
/// Anything else (unknown plan or goal, no meal types, a zero meal count, a
/// slot with no eligible meal) falls back to a documented default instead
/// of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("user profile is required")]
    MissingProfile,
    #[error("meal catalog is empty")]
    EmptyCatalog,
}
