//! Domain error types.

use super::City;

/// Why a route fails its connection or window constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A flight does not leave from where the previous one landed
    #[error("flight {index} departs from {departs_from} but the previous flight arrived at {arrived_at}")]
    Disconnected {
        index: usize,
        arrived_at: City,
        departs_from: City,
    },

    /// A flight departs before the previous one arrives
    #[error("flight {index} departs before the previous flight arrives")]
    NotChronological { index: usize },

    /// Connection time below the minimum layover
    #[error("layover before flight {index} is {layover}, minimum is {minimum}")]
    LayoverTooShort {
        index: usize,
        layover: i64,
        minimum: i64,
    },

    /// First departure is earlier than the window allows
    #[error("route departs at {departure}, before the window opens at {earliest}")]
    DepartsBeforeWindow { departure: i64, earliest: i64 },

    /// A flight lands after the window closes
    #[error("flight {index} arrives at {arrival}, after the window closes at {latest}")]
    ArrivesAfterWindow {
        index: usize,
        arrival: i64,
        latest: i64,
    },
}
