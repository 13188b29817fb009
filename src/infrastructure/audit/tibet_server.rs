use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle to an installed `mcp-server-tibet`, the TIBET audit-layer server.
///
/// Holding a handle does not start anything. Callers that want the server
/// running build a [`Command`] with [`TibetServer::command`] and own the
/// child process themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TibetServer {
    program: PathBuf,
}

impl TibetServer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolved path of the server executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// A command that launches the server over stdio, the way MCP clients
    /// spawn it.
    pub fn command(&self) -> Command {
        Command::new(&self.program)
    }
}
