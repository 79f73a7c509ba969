use std::fmt::Display;

/// State of a value that is loaded exactly once per component lifetime.
///
/// There is no error state: a failed load leaves the slot in `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Applies the outcome of the load.
    ///
    /// Returns the state to store, or `None` when the slot must stay as it
    /// is: the owner went away (`aborted`), the value was already assigned,
    /// or the load failed. This is the only place a failed load is logged.
    pub fn settle<E: Display>(&self, outcome: Result<T, E>, aborted: bool) -> Option<LoadState<T>> {
        if aborted {
            match outcome {
                Ok(_) => log::debug!("Load finished after abort, discarding result"),
                Err(err) => log::debug!("Load aborted: {}", err),
            }
            return None;
        }

        if self.is_loaded() {
            log::warn!("Ignoring load result, value already assigned");
            return None;
        }

        match outcome {
            Ok(data) => Some(Self::Loaded(data)),
            Err(err) => {
                log::error!("Load failed, staying in loading state: {}", err);
                None
            }
        }
    }
}

/// Guarded initializer: grants the launch of a load exactly once.
#[derive(Debug, Default)]
pub struct LaunchGuard {
    launched: bool,
}

impl LaunchGuard {
    /// Returns `true` on the first call only.
    pub fn try_launch(&mut self) -> bool {
        !std::mem::replace(&mut self.launched, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<Vec<i32>> = LoadState::default();
        assert_eq!(state, LoadState::Loading);
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_success_transitions_to_loaded() {
        let state: LoadState<Vec<i32>> = LoadState::Loading;
        let next = state.settle::<String>(Ok(vec![1, 2, 3]), false).unwrap();
        assert_eq!(next, LoadState::Loaded(vec![1, 2, 3]));
    }

    #[test]
    fn test_empty_success_is_still_loaded() {
        let state: LoadState<Vec<i32>> = LoadState::Loading;
        let next = state.settle::<String>(Ok(vec![]), false).unwrap();
        assert_eq!(next, LoadState::Loaded(vec![]));
    }

    #[test]
    fn test_failure_keeps_loading() {
        let state: LoadState<Vec<i32>> = LoadState::Loading;
        assert_eq!(state.settle(Err("HTTP error: 500"), false), None);
        assert_eq!(state, LoadState::Loading);
    }

    #[test]
    fn test_value_is_assigned_only_once() {
        let state = LoadState::Loaded(vec![1]);
        assert_eq!(state.settle::<String>(Ok(vec![2]), false), None);
        assert_eq!(state, LoadState::Loaded(vec![1]));
    }

    #[test]
    fn test_aborted_success_is_discarded() {
        let state: LoadState<Vec<i32>> = LoadState::Loading;
        assert_eq!(state.settle::<String>(Ok(vec![1]), true), None);
    }

    #[test]
    fn test_aborted_failure_is_discarded() {
        let state: LoadState<Vec<i32>> = LoadState::Loading;
        assert_eq!(state.settle(Err("The user aborted a request."), true), None);
    }

    #[test]
    fn test_launch_guard_grants_once() {
        let mut guard = LaunchGuard::default();
        assert!(guard.try_launch());
        assert!(!guard.try_launch());
        assert!(!guard.try_launch());
    }
}
