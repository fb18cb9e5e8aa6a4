/// Storage key holding the whole serialized store.
pub const EVENTS_KEY: &str = "events";

/// Canonical text form of a `DateKey`.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
