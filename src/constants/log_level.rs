// Filter applied when RUST_LOG is unset. Kept above `info` so that a
// successful `set` writes nothing to the terminal.
pub const DEFAULT_LOG_FILTER: &str = "warn";
