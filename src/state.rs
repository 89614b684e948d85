use std::fmt;

use log::info;

use crate::data::model::Dataset;
use crate::error::{ExplorerError, Result};
use crate::inspect::Namespace;
use crate::render::Figure;

// ---------------------------------------------------------------------------
// Stage – Start → Loaded → Rendered → Inspecting → Terminated
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Loaded,
    Rendered,
    Inspecting,
    Terminated,
}

impl Stage {
    /// Each stage only moves to its successor, and any stage may terminate.
    pub fn can_advance_to(self, next: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, next),
            (Start, Loaded) | (Loaded, Rendered) | (Rendered, Inspecting)
        ) || (next == Terminated && self != Terminated)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Loaded => "loaded",
            Stage::Rendered => "rendered",
            Stage::Inspecting => "inspecting",
            Stage::Terminated => "terminated",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// RunState
// ---------------------------------------------------------------------------

/// Everything one run owns, independent of any display.
#[derive(Debug)]
pub struct RunState {
    stage: Stage,
    /// Loaded table (None until the load step succeeds).
    pub dataset: Option<Dataset>,
    /// Built figure (None until the render step succeeds).
    pub figure: Option<Figure>,
    /// Values exposed to the inspector.
    pub namespace: Namespace,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            stage: Stage::Start,
            dataset: None,
            figure: None,
            namespace: Namespace::new(),
        }
    }
}

impl RunState {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Move to `next`, refusing anything but a forward step or termination.
    pub fn advance(&mut self, next: Stage) -> Result<()> {
        if !self.stage.can_advance_to(next) {
            return Err(ExplorerError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        info!("Stage {} → {}", self.stage, next);
        self.stage = next;
        Ok(())
    }

    /// Ingest the loaded dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<()> {
        self.advance(Stage::Loaded)?;
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Ingest the built figure and the bindings derived alongside it.
    pub fn set_figure(&mut self, figure: Figure, namespace: Namespace) -> Result<()> {
        self.advance(Stage::Rendered)?;
        self.figure = Some(figure);
        self.namespace = namespace;
        Ok(())
    }

    pub fn terminate(&mut self) {
        if self.stage != Stage::Terminated {
            info!("Stage {} → {}", self.stage, Stage::Terminated);
            self.stage = Stage::Terminated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let mut state = RunState::default();
        for next in [Stage::Loaded, Stage::Rendered, Stage::Inspecting, Stage::Terminated] {
            state.advance(next).unwrap();
        }
        assert_eq!(state.stage(), Stage::Terminated);
    }

    #[test]
    fn test_no_reentry() {
        let mut state = RunState::default();
        state.advance(Stage::Loaded).unwrap();
        assert!(state.advance(Stage::Loaded).is_err());
        state.advance(Stage::Rendered).unwrap();
        assert!(state.advance(Stage::Loaded).is_err());
    }

    #[test]
    fn test_no_skipping() {
        let mut state = RunState::default();
        assert!(matches!(
            state.advance(Stage::Rendered),
            Err(ExplorerError::InvalidTransition { from: Stage::Start, to: Stage::Rendered })
        ));
    }

    #[test]
    fn test_failure_terminates_from_any_stage() {
        let mut state = RunState::default();
        state.advance(Stage::Loaded).unwrap();
        state.advance(Stage::Terminated).unwrap();
        assert!(state.advance(Stage::Terminated).is_err());
        assert!(state.advance(Stage::Rendered).is_err());
    }
}
