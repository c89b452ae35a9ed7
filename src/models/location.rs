use std::time::Duration;

/// How a fetch identifies its location. Exactly one variant per fetch; city
/// and coordinates are never combined.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Bounds on a single position query.
#[derive(Debug, Clone, Copy)]
pub struct LocationRequest {
    pub timeout: Duration,
    /// A previously obtained fix younger than this may be reused.
    pub max_age: Duration,
}

impl From<Position> for LocationQuery {
    fn from(p: Position) -> Self {
        LocationQuery::Coordinates {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}
