//! Implements a struct that holds the state of the server.

/// The state of the server.
///
/// The app keeps no data between requests, so the state is configuration
/// only.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to compute "today" for the default date range and the date
    /// picker bounds.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland".
    pub fn new(local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
        }
    }
}
