use std::io::{BufRead, Write};
use std::path::Path;

use log::{info, warn};

use super::namespace::{Binding, Namespace};
use crate::data::model::stats;
use crate::error::{ExplorerError, Result};

const HELP: &str = "\
commands:
  vars | who              list bindings
  <name> | show <name>    print a binding
  shape <name>            dimensions
  len <name>              leading dimension
  mean|std|min|max|sum <name>
  col <name> <j>          column j of a matrix
  head <name> [n]         first n rows (default 5)
  dump <path>             write all bindings as JSON
  help                    this text
  exit | quit             leave the session";

/// What the loop does after one command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Run the command loop until `exit`/`quit` or end of input.
///
/// With `prompt` set a `>>> ` prompt is written before every read.
pub fn run_session<R: BufRead, W: Write>(
    namespace: &Namespace,
    mut input: R,
    mut out: W,
    prompt: bool,
) -> Result<()> {
    banner(namespace, &mut out).map_err(terminal_error)?;

    let mut line = String::new();
    loop {
        if prompt {
            write!(out, ">>> ").map_err(terminal_error)?;
            out.flush().map_err(terminal_error)?;
        }
        line.clear();
        let n = input.read_line(&mut line).map_err(terminal_error)?;
        if n == 0 {
            if prompt {
                writeln!(out).map_err(terminal_error)?;
            }
            break;
        }
        let flow = execute(namespace, line.trim(), &mut out).map_err(terminal_error)?;
        if flow == Flow::Exit {
            break;
        }
    }
    info!("Inspection session closed");
    Ok(())
}

fn terminal_error(e: std::io::Error) -> ExplorerError {
    ExplorerError::EnvironmentUnavailable(format!("terminal i/o failed: {e}"))
}

fn banner<W: Write>(namespace: &Namespace, out: &mut W) -> std::io::Result<()> {
    let names: Vec<&str> = namespace.names().collect();
    writeln!(out, "Bindings: {}", names.join(", "))?;
    writeln!(out, "Type 'help' for commands, 'exit' to quit.")
}

/// Execute one command line.
fn execute<W: Write>(namespace: &Namespace, line: &str, out: &mut W) -> std::io::Result<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    match (cmd, args) {
        ("exit" | "quit", _) => return Ok(Flow::Exit),
        ("help", _) => writeln!(out, "{HELP}")?,
        ("vars" | "who", _) => {
            for (name, b) in namespace.iter() {
                writeln!(out, "{name:<6} {:<7} {}", b.kind(), b.shape())?;
            }
        }
        ("show", [name]) => with_binding(namespace, name, out, |b, out| writeln!(out, "{b}"))?,
        ("shape", [name]) => {
            with_binding(namespace, name, out, |b, out| writeln!(out, "{}", b.shape()))?
        }
        ("len", [name]) => with_binding(namespace, name, out, |b, out| writeln!(out, "{}", b.len()))?,
        ("mean" | "std" | "min" | "max" | "sum", [name]) => {
            with_binding(namespace, name, out, |b, out| {
                let v = b.flat_values();
                let r = match cmd {
                    "mean" => stats::mean(&v),
                    "std" => stats::std(&v),
                    "min" => stats::min(&v),
                    "max" => stats::max(&v),
                    _ => stats::sum(&v),
                };
                writeln!(out, "{r}")
            })?
        }
        ("col", [name, j]) => with_binding(namespace, name, out, |b, out| match (b, j.parse::<usize>()) {
            (Binding::Matrix(ds), Ok(j)) => match ds.column(j, &format!("{name}[:, {j}]")) {
                Ok(col) => writeln!(out, "{col}"),
                Err(e) => writeln!(out, "error: {e}"),
            },
            (Binding::Matrix(_), Err(_)) => writeln!(out, "error: '{j}' is not a column index"),
            _ => writeln!(out, "error: '{name}' is not a matrix"),
        })?,
        ("head", [name]) => with_binding(namespace, name, out, |b, out| writeln!(out, "{}", b.head(5)))?,
        ("head", [name, n]) => match n.parse::<usize>() {
            Ok(n) => with_binding(namespace, name, out, |b, out| writeln!(out, "{}", b.head(n)))?,
            Err(_) => writeln!(out, "error: '{n}' is not a row count")?,
        },
        ("dump", [path]) => match namespace.dump(Path::new(path)) {
            Ok(()) => writeln!(out, "wrote {} bindings to {path}", namespace.len())?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        (name, []) if namespace.get(name).is_some() => {
            with_binding(namespace, name, out, |b, out| writeln!(out, "{b}"))?
        }
        _ => {
            warn!("Unrecognised inspector input: {line}");
            writeln!(out, "unknown command '{line}' (try 'help')")?
        }
    }
    Ok(Flow::Continue)
}

fn with_binding<W: Write>(
    namespace: &Namespace,
    name: &str,
    out: &mut W,
    f: impl FnOnce(&Binding, &mut W) -> std::io::Result<()>,
) -> std::io::Result<()> {
    match namespace.get(name) {
        Some(b) => f(b, out),
        None => writeln!(out, "error: no binding named '{name}'"),
    }
}
