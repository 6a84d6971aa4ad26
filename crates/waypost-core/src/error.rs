use std::fmt;

/// Which kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A point of interest in the registry.
    Point,
    /// A vertex of the road graph.
    Vertex,
    /// A directed road (graph edge).
    Road,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point of interest",
            Self::Vertex => "network vertex",
            Self::Road => "road",
        };
        f.write_str(name)
    }
}

/// The specific constraint a proposed mutation violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("road endpoints must differ (got {0} twice)")]
    SameEndpoints(String),
    #[error("distance must be positive, got {0} km")]
    NonPositiveDistance(f64),
    #[error("distance {distance_km} km is shorter than the great-circle distance {great_circle_km:.3} km")]
    ShorterThanGreatCircle {
        distance_km: f64,
        great_circle_km: f64,
    },
    #[error("minimum speed must be zero or positive, got {0} km/h")]
    NegativeMinSpeed(f64),
    #[error("maximum speed must be positive, got {0} km/h")]
    NonPositiveMaxSpeed(f64),
    #[error("maximum speed {max_kmh} km/h must exceed minimum speed {min_kmh} km/h")]
    MaxNotAboveMin { min_kmh: f64, max_kmh: f64 },
    #[error("rating must be between 1 and 4, got {0}")]
    RatingOutOfRange(u8),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("coordinates ({latitude}, {longitude}) are outside latitude -90..=90 or longitude -180..=180")]
    CoordinatesOutOfRange { latitude: f64, longitude: f64 },
    #[error("walking speed must be a finite positive number, got {0} km/h")]
    NonPositiveWalkingSpeed(f64),
}

/// Errors from graph mutation, ingestion and routing queries.
///
/// All variants are expected, recoverable outcomes. The presentation layer
/// decides how to surface them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A referenced point, vertex or road does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A proposed entity violates a distance, speed or value constraint.
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationFailure),

    /// An entity with the same identity already exists.
    #[error("{kind} already exists: {id}")]
    Duplicate { kind: EntityKind, id: String },

    /// No simple path connects the requested endpoints.
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// A disruption request named no roads to close.
    #[error("no roads given to close")]
    NoClosures,
}

impl NetworkError {
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn duplicate(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            id: id.into(),
        }
    }

    /// Render a road identity the way errors report it.
    #[must_use]
    pub fn road_id(from: &str, to: &str) -> String {
        format!("{from} -> {to}")
    }

    /// Machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { kind, .. } => match kind {
                EntityKind::Point => ErrorCode::PointNotFound,
                EntityKind::Vertex => ErrorCode::VertexNotFound,
                EntityKind::Road => ErrorCode::RoadNotFound,
            },
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
            Self::Duplicate { .. } => ErrorCode::DuplicateEntity,
            Self::NoRoute { .. } => ErrorCode::NoRoute,
            Self::NoClosures => ErrorCode::NoClosures,
        }
    }
}

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    SnapshotUnreadable,
    PointNotFound,
    VertexNotFound,
    RoadNotFound,
    ValidationFailed,
    DuplicateEntity,
    NoRoute,
    NoClosures,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::SnapshotUnreadable => "E1002",
            Self::PointNotFound => "E2001",
            Self::VertexNotFound => "E2002",
            Self::RoadNotFound => "E2003",
            Self::ValidationFailed => "E3001",
            Self::DuplicateEntity => "E3002",
            Self::NoRoute => "E4001",
            Self::NoClosures => "E4002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::SnapshotUnreadable => "Network snapshot could not be read",
            Self::PointNotFound => "Point of interest not found",
            Self::VertexNotFound => "Point is not part of the road network",
            Self::RoadNotFound => "Road not found",
            Self::ValidationFailed => "Road or point failed validation",
            Self::DuplicateEntity => "Entity already exists",
            Self::NoRoute => "No route between the points",
            Self::NoClosures => "No roads to close",
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix the syntax or values in waypost.toml and retry."),
            Self::SnapshotUnreadable => Some("Check the --network path and that the file is valid JSON."),
            Self::PointNotFound | Self::RoadNotFound => None,
            Self::VertexNotFound => Some("Add the point to the network before routing through it."),
            Self::ValidationFailed => {
                Some("Distance must cover the straight-line gap; max speed must exceed min speed.")
            }
            Self::DuplicateEntity => Some("Roads are two-way: remove the existing one first."),
            Self::NoRoute => Some("Check for closed roads or disconnected points."),
            Self::NoClosures => Some("Pass at least one --close FROM:TO."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
