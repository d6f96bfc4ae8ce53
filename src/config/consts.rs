/// Concurrency used by the level executor when neither the config nor the
/// platform reports a value
pub const FALLBACK_MAX_CONCURRENCY: usize = 4;
