use std::time::Duration;

mod arena_team;
mod character;
mod guild;
mod realm;
mod world;

/// Timeout used by repository tests; generous for in-memory SQLite.
const TIMEOUT: Duration = Duration::from_secs(5);
