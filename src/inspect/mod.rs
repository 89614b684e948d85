/// Inspection: expose the run's values as named bindings after the plot.
///
/// Three modes, chosen by [`InspectMode`]:
/// * `interactive` – a blocking command session on the attached terminal
/// * `dump`        – every binding written to a JSON file
/// * `none`        – nothing
pub mod namespace;
pub mod repl;

use std::io::{BufRead, IsTerminal, Write};

use log::info;

pub use namespace::{Binding, Namespace};

use crate::config::{InspectConfig, InspectMode};
use crate::error::{ExplorerError, Result};

/// Blocking session on stdin/stdout. Fails when stdin is not a terminal.
pub fn interactive(namespace: &Namespace) -> Result<()> {
    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    interactive_with(namespace, is_terminal, stdin.lock(), std::io::stdout().lock())
}

/// Session over arbitrary streams, gated on `is_terminal`.
pub fn interactive_with<R: BufRead, W: Write>(
    namespace: &Namespace,
    is_terminal: bool,
    input: R,
    output: W,
) -> Result<()> {
    if !is_terminal {
        return Err(ExplorerError::EnvironmentUnavailable(
            "stdin is not a terminal; use the dump inspect mode instead".to_string(),
        ));
    }
    info!("Starting interactive session with {} bindings", namespace.len());
    repl::run_session(namespace, input, output, true)
}

/// Run the inspection step the configuration asks for.
pub fn inspect(namespace: &Namespace, config: &InspectConfig) -> Result<()> {
    match config.mode {
        InspectMode::Interactive => interactive(namespace),
        InspectMode::Dump => {
            namespace.dump(&config.dump_path)?;
            info!(
                "Dumped {} bindings to {}",
                namespace.len(),
                config.dump_path.display()
            );
            Ok(())
        }
        InspectMode::None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DerivedVector;

    fn namespace() -> Namespace {
        let mut ns = Namespace::new();
        ns.bind("X", Binding::Vector(DerivedVector::new("X", vec![1.0, 3.0])));
        ns
    }

    #[test]
    fn test_no_terminal_is_environment_unavailable() {
        let mut out = Vec::new();
        let err = interactive_with(&namespace(), false, &b"exit\n"[..], &mut out).unwrap_err();
        assert!(matches!(err, ExplorerError::EnvironmentUnavailable(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_terminal_runs_session() {
        let mut out = Vec::new();
        interactive_with(&namespace(), true, &b"shape X\nexit\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(2,)"), "{text}");
    }

    #[test]
    fn test_none_mode_does_nothing() {
        let config = InspectConfig {
            mode: InspectMode::None,
            ..Default::default()
        };
        inspect(&namespace(), &config).unwrap();
    }
}
