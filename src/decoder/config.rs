use std::sync::OnceLock;

/// Compiled-in default for the segment-matching attempt bound
pub const MAX_PARSE_LOOPS: usize = 10;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MAX_PARSE_LOOPS_OVERRIDE: OnceLock<usize> = OnceLock::new();

pub(crate) fn max_parse_loops() -> usize {
    *MAX_PARSE_LOOPS_OVERRIDE
        .get_or_init(|| parse_env_usize("EAN128_MAX_PARSE_LOOPS", MAX_PARSE_LOOPS).max(1))
}
