use chrono::Local;

/// Current local time as ISO-8601 with microsecond precision and no offset,
/// e.g. `2025-06-01T14:03:22.418207`.
pub fn local_iso8601() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
