use crate::shared::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Lifecycle of one view's data.
///
/// Pages start `Idle` or `Loading`, then settle into `Success` or `Error`.
/// Render functions consume a `ViewState` and never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    /// Settles a fetch outcome. The error chain is flattened into the reason.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => ViewState::Success(data),
            Err(e) => ViewState::Error(format!("{:#}", e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Idle => ViewState::Idle,
            ViewState::Loading => ViewState::Loading,
            ViewState::Success(data) => ViewState::Success(f(data)),
            ViewState::Error(reason) => ViewState::Error(reason),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

/// `Success` serializes as the data itself; every other state as
/// `{"state": ...}` with a `reason` for errors.
impl<T: Serialize> Serialize for ViewState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ViewState::Success(data) => data.serialize(serializer),
            ViewState::Idle => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("state", "idle")?;
                map.end()
            }
            ViewState::Loading => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("state", "loading")?;
                map.end()
            }
            ViewState::Error(reason) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("state", "error")?;
                map.serialize_entry("reason", reason)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: ViewState<u32> = ViewState::default();
        assert_eq!(state, ViewState::Idle);
    }

    #[test]
    fn test_from_result_success() {
        let state = ViewState::from_result(Ok(42));
        assert_eq!(state.data(), Some(&42));
        assert!(!state.is_error());
    }

    #[test]
    fn test_from_result_error_keeps_context_chain() {
        let err = anyhow::anyhow!("status 500").context("Failed to fetch overview");
        let state: ViewState<u32> = ViewState::from_result(Err(err));
        assert!(state.is_error());
        let reason = state.error().unwrap();
        assert!(reason.contains("Failed to fetch overview"));
        assert!(reason.contains("status 500"));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_map_preserves_non_success() {
        let loading: ViewState<u32> = ViewState::Loading;
        assert!(loading.map(|n| n * 2).is_loading());

        let success = ViewState::Success(21).map(|n| n * 2);
        assert_eq!(success, ViewState::Success(42));
    }

    #[test]
    fn test_serialize_success_is_transparent() {
        let state = ViewState::Success(vec![1, 2, 3]);
        assert_eq!(serde_json::to_value(&state).unwrap(), serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_serialize_error_has_reason() {
        let state: ViewState<u32> = ViewState::Error("Failed to load".to_string());
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"state": "error", "reason": "Failed to load"})
        );
    }

    #[test]
    fn test_serialize_loading() {
        let state: ViewState<u32> = ViewState::Loading;
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"state": "loading"})
        );
    }
}
