//! Load lifecycle for the dashboard.
//!
//! Two states, one forward transition: Loading until the one-shot CSV
//! fetch resolves, Ready forever after. Filter changes while Ready rerun
//! the pipeline, never the load, so there is no way back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    /// Derives the phase from the one-shot load state. Only a successful
    /// fetch counts as Ready, since only success carries records to render.
    pub fn of<T, E>(state: &Option<Result<T, E>>) -> Self {
        match state {
            Some(Ok(_)) => Self::Ready,
            _ => Self::Loading,
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_loading() {
        let state: Option<Result<(), ()>> = None;
        assert!(!LoadPhase::of(&state).is_ready());
    }

    #[test]
    fn failure_never_reaches_ready() {
        let state: Option<Result<(), &str>> = Some(Err("offline"));
        assert_eq!(LoadPhase::of(&state), LoadPhase::Loading);
    }

    #[test]
    fn success_is_ready() {
        let state: Option<Result<u32, ()>> = Some(Ok(3));
        assert!(LoadPhase::of(&state).is_ready());
    }
}
