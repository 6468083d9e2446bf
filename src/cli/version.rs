//! Version and usage text.

/// The current version of ragchat, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage shown by `--help`.
pub const USAGE: &str = "\
Usage: ragchat [--url URL] [QUERY...]

Ask a question and stream the answer with the documents it was based on.
Without a query, questions are read from standard input one line at a time.

Options:
  --url URL      Answer service address (env RAGCHAT_URL, default http://localhost:5000)
  -V, --version  Print version
  -h, --help     Print this help

Interactive commands:
  :expand N      Show document N in full
  :collapse N    Shorten document N again
  exit, quit     Leave

Environment:
  RAGCHAT_ASK_PATH       Endpoint path (default /ask)
  RAGCHAT_PREVIEW_CHARS  Document preview length (default 500)
  RAGCHAT_LOG            Log filter written to stderr (default warn)";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("ragchat {}", VERSION)
}
