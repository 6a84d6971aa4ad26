//! The validated road network: point registry, stored roads and graph.
//!
//! # Overview
//!
//! [`RoadNetwork`] is the only way roads enter the graph from outside the
//! crate. Every road is checked against the points it joins before an edge
//! is created, and each accepted road keeps its walking and driving times
//! from the moment it was created.
//!
//! ## Road checks
//!
//! In order, a road is rejected when:
//!
//! 1. its two endpoints are the same point;
//! 2. either endpoint is not a known point of interest;
//! 3. either endpoint has not been added to the network;
//! 4. a road already joins the two points, in either direction;
//! 5. the distance is not positive;
//! 6. the distance is shorter than the great-circle distance between the
//!    two points;
//! 7. the minimum speed is negative;
//! 8. the maximum speed is not positive, or not above the minimum speed.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{EntityKind, NetworkError, ValidationFailure};
use crate::geo::Coordinates;
use crate::graph::RoadGraph;
use crate::model::{Category, PointOfInterest, Rating, Road, RoadRecord};
use crate::sort::{sort_by_name_ascending, sort_descending};

/// Default walking pace used to derive road walking times.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

type RoadKey = (String, String);

/// Points of interest plus the road graph built over them.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    points: BTreeMap<String, PointOfInterest>,
    roads: BTreeMap<RoadKey, Road>,
    graph: RoadGraph,
    walking_speed_kmh: f64,
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
            roads: BTreeMap::new(),
            graph: RoadGraph::new(),
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }

    /// An empty network whose roads are walked at `walking_speed_kmh`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::ValidationFailed`] unless the speed is finite
    /// and positive.
    pub fn with_walking_speed(walking_speed_kmh: f64) -> Result<Self, NetworkError> {
        if !walking_speed_kmh.is_finite() || walking_speed_kmh <= 0.0 {
            return Err(ValidationFailure::NonPositiveWalkingSpeed(walking_speed_kmh).into());
        }
        Ok(Self {
            walking_speed_kmh,
            ..Self::new()
        })
    }

    #[must_use]
    pub const fn walking_speed_kmh(&self) -> f64 {
        self.walking_speed_kmh
    }

    #[must_use]
    pub const fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    // -----------------------------------------------------------------------
    // Points of interest
    // -----------------------------------------------------------------------

    /// Register a point of interest.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::Duplicate`] if a point with the same name exists.
    /// - [`NetworkError::ValidationFailed`] if the coordinates are not a
    ///   real latitude and longitude.
    pub fn add_point(&mut self, point: PointOfInterest) -> Result<(), NetworkError> {
        if self.points.contains_key(&point.name) {
            return Err(NetworkError::duplicate(EntityKind::Point, &point.name));
        }
        if !point.coordinates.in_range() {
            let Coordinates { latitude, longitude } = point.coordinates;
            return Err(ValidationFailure::CoordinatesOutOfRange { latitude, longitude }.into());
        }
        debug!(point = %point.name, category = %point.category, "registered point");
        self.points.insert(point.name.clone(), point);
        Ok(())
    }

    #[must_use]
    pub fn point(&self, name: &str) -> Option<&PointOfInterest> {
        self.points.get(name)
    }

    /// All points, ordered by name.
    pub fn points(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.values()
    }

    /// Change a point's category and accessibility notes.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotFound`] if no point has this name.
    pub fn update_point(
        &mut self,
        name: &str,
        category: Category,
        accessibility: &str,
    ) -> Result<(), NetworkError> {
        let point = self.point_mut(name)?;
        point.category = category;
        accessibility.clone_into(&mut point.accessibility);
        Ok(())
    }

    /// Record a visit with a 1-4 rating.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::NotFound`] if no point has this name.
    /// - [`NetworkError::ValidationFailed`] if the rating is out of range.
    pub fn record_visit(&mut self, name: &str, rating: u8) -> Result<(), NetworkError> {
        let rating = Rating::try_from(rating)?;
        self.point_mut(name)?.record_visit(rating);
        Ok(())
    }

    /// Points in `category`, alphabetically by name (case-insensitive).
    #[must_use]
    pub fn points_in_category(&self, category: Category) -> Vec<&PointOfInterest> {
        let mut matches: Vec<(String, &PointOfInterest)> = self
            .points
            .values()
            .filter(|p| p.category == category)
            .map(|p| (p.name.clone(), p))
            .collect();
        sort_by_name_ascending(&mut matches);
        matches.into_iter().map(|(_, p)| p).collect()
    }

    /// Points within `radius_m` meters of `location`, most visited first.
    #[must_use]
    pub fn suggest_nearby(&self, location: Coordinates, radius_m: f64) -> Vec<&PointOfInterest> {
        let nearby: Vec<(u32, &PointOfInterest)> = self
            .points
            .values()
            .filter(|p| location.distance_m(&p.coordinates) <= radius_m)
            .map(|p| (p.visits, p))
            .collect();
        sort_descending(nearby).into_iter().map(|(_, p)| p).collect()
    }

    fn point_mut(&mut self, name: &str) -> Result<&mut PointOfInterest, NetworkError> {
        self.points
            .get_mut(name)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Point, name))
    }

    // -----------------------------------------------------------------------
    // Network vertices
    // -----------------------------------------------------------------------

    /// Put an existing point on the road network.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::NotFound`] if no point has this name.
    /// - [`NetworkError::Duplicate`] if the point is already on the network.
    pub fn add_vertex(&mut self, name: &str) -> Result<(), NetworkError> {
        if !self.points.contains_key(name) {
            return Err(NetworkError::not_found(EntityKind::Point, name));
        }
        if !self.graph.add_vertex(name) {
            return Err(NetworkError::duplicate(EntityKind::Vertex, name));
        }
        Ok(())
    }

    /// Take a point off the network, closing every road that touches it.
    ///
    /// The point stays registered.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotFound`] if the point is not on the network.
    pub fn remove_vertex(&mut self, name: &str) -> Result<(), NetworkError> {
        self.graph.remove_vertex(name)?;
        let before = self.roads.len();
        self.roads.retain(|(start, end), _| start != name && end != name);
        info!(vertex = name, roads_removed = before - self.roads.len(), "removed vertex");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Roads
    // -----------------------------------------------------------------------

    /// Validate and add a road. See the module docs for the checks.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as [`NetworkError::ValidationFailed`],
    /// [`NetworkError::NotFound`] or [`NetworkError::Duplicate`]. A rejected
    /// road leaves the network unchanged.
    pub fn add_road(&mut self, record: RoadRecord) -> Result<&Road, NetworkError> {
        let (start, end) = (record.start.as_str(), record.end.as_str());
        if start == end {
            return Err(ValidationFailure::SameEndpoints(start.to_string()).into());
        }

        let from = self
            .points
            .get(start)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Point, start))?;
        let to = self
            .points
            .get(end)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Point, end))?;

        for label in [start, end] {
            if !self.graph.contains_vertex(label) {
                return Err(NetworkError::not_found(EntityKind::Vertex, label));
            }
        }
        if self.graph.connects(start, end) {
            return Err(NetworkError::duplicate(
                EntityKind::Road,
                NetworkError::road_id(start, end),
            ));
        }

        validate_record(&record, from.coordinates.distance_km(&to.coordinates))?;

        self.graph.add_edge(start, end, record.distance_km)?;
        let key = (record.start.clone(), record.end.clone());
        let road = Road::new(record, self.walking_speed_kmh);
        debug!(
            start = %key.0,
            end = %key.1,
            distance_km = road.distance_km(),
            "added road"
        );
        Ok(self.roads.entry(key).or_insert(road))
    }

    /// Remove the road `from → to`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotFound`] if there is no such road.
    pub fn remove_road(&mut self, from: &str, to: &str) -> Result<Road, NetworkError> {
        let key = (from.to_string(), to.to_string());
        if !self.roads.contains_key(&key) {
            return Err(NetworkError::not_found(
                EntityKind::Road,
                NetworkError::road_id(from, to),
            ));
        }
        self.graph.remove_edge(from, to)?;
        let road = self
            .roads
            .remove(&key)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Road, NetworkError::road_id(from, to)))?;
        debug!(from, to, "removed road");
        Ok(road)
    }

    /// The road stored for `from → to`.
    #[must_use]
    pub fn road(&self, from: &str, to: &str) -> Option<&Road> {
        self.roads.get(&(from.to_string(), to.to_string()))
    }

    /// All roads, ordered by `(start, end)`.
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }
}

/// Check a road's distance and speeds.
///
/// `great_circle_km` is the straight-line distance between its endpoints.
///
/// # Errors
///
/// Returns the first violated constraint.
pub fn validate_record(record: &RoadRecord, great_circle_km: f64) -> Result<(), ValidationFailure> {
    let RoadRecord {
        distance_km,
        min_speed_kmh,
        max_speed_kmh,
        ..
    } = *record;

    if distance_km.is_nan() || distance_km <= 0.0 {
        return Err(ValidationFailure::NonPositiveDistance(distance_km));
    }
    if distance_km < great_circle_km {
        return Err(ValidationFailure::ShorterThanGreatCircle {
            distance_km,
            great_circle_km,
        });
    }
    if min_speed_kmh.is_nan() || min_speed_kmh < 0.0 {
        return Err(ValidationFailure::NegativeMinSpeed(min_speed_kmh));
    }
    if max_speed_kmh.is_nan() || max_speed_kmh <= 0.0 {
        return Err(ValidationFailure::NonPositiveMaxSpeed(max_speed_kmh));
    }
    if max_speed_kmh <= min_speed_kmh {
        return Err(ValidationFailure::MaxNotAboveMin {
            min_kmh: min_speed_kmh,
            max_kmh: max_speed_kmh,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SE: Coordinates = Coordinates::new(38.6558, -27.2186);
    const MONTE_BRASIL: Coordinates = Coordinates::new(38.6420, -27.2300);
    const ALGAR: Coordinates = Coordinates::new(38.7278, -27.2136);

    fn road(start: &str, end: &str, distance_km: f64) -> RoadRecord {
        RoadRecord {
            start: start.into(),
            end: end.into(),
            distance_km,
            min_speed_kmh: 30.0,
            max_speed_kmh: 50.0,
        }
    }

    fn angra() -> RoadNetwork {
        let mut net = RoadNetwork::new();
        net.add_point(PointOfInterest::new("Sé", SE, Category::Culture)).unwrap();
        net.add_point(PointOfInterest::new("Monte Brasil", MONTE_BRASIL, Category::Nature))
            .unwrap();
        net.add_point(PointOfInterest::new("Algar do Carvão", ALGAR, Category::Nature))
            .unwrap();
        for name in ["Sé", "Monte Brasil", "Algar do Carvão"] {
            net.add_vertex(name).unwrap();
        }
        net
    }

    #[test]
    fn duplicate_point_rejected() {
        let mut net = angra();
        let err = net
            .add_point(PointOfInterest::new("Sé", SE, Category::Culture))
            .unwrap_err();
        assert_eq!(err, NetworkError::duplicate(EntityKind::Point, "Sé"));
    }

    #[test]
    fn point_outside_the_globe_rejected() {
        let mut net = angra();
        let err = net
            .add_point(PointOfInterest::new("Atlantis", Coordinates::new(1000.0, -27.0), Category::Nature))
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::ValidationFailed(ValidationFailure::CoordinatesOutOfRange {
                latitude: 1000.0,
                longitude: -27.0,
            })
        );
        assert!(net.point("Atlantis").is_none());
    }

    #[test]
    fn walking_speed_must_be_positive() {
        for speed in [0.0, -5.0, f64::INFINITY] {
            let err = RoadNetwork::with_walking_speed(speed).unwrap_err();
            assert!(
                matches!(
                    err,
                    NetworkError::ValidationFailed(ValidationFailure::NonPositiveWalkingSpeed(_))
                ),
                "{speed} accepted"
            );
        }
        assert!(RoadNetwork::with_walking_speed(f64::NAN).is_err());

        let mut net = RoadNetwork::with_walking_speed(4.0).unwrap();
        net.add_point(PointOfInterest::new("Sé", SE, Category::Culture)).unwrap();
        net.add_point(PointOfInterest::new("Monte Brasil", MONTE_BRASIL, Category::Nature))
            .unwrap();
        net.add_vertex("Sé").unwrap();
        net.add_vertex("Monte Brasil").unwrap();
        let road = net.add_road(road("Sé", "Monte Brasil", 3.0)).unwrap();
        assert!((road.walk_time_hours - 0.75).abs() < 1e-12);
    }

    #[test]
    fn vertex_needs_a_point() {
        let mut net = angra();
        assert_eq!(
            net.add_vertex("Biscoitos").unwrap_err(),
            NetworkError::not_found(EntityKind::Point, "Biscoitos")
        );
        assert_eq!(
            net.add_vertex("Sé").unwrap_err(),
            NetworkError::duplicate(EntityKind::Vertex, "Sé")
        );
    }

    #[test]
    fn road_gets_timings() {
        let mut net = angra();
        let road = net.add_road(road("Sé", "Monte Brasil", 3.0)).unwrap();
        assert!((road.walk_time_hours - 0.6).abs() < 1e-12);
        assert!((road.drive_time_hours - 3.0 / 40.0).abs() < 1e-12);
        assert_eq!(net.graph().weight("Sé", "Monte Brasil"), Some(3.0));
    }

    #[test]
    fn each_violation_has_its_own_reason() {
        let mut net = angra();
        let cases: Vec<(RoadRecord, ValidationFailure)> = vec![
            (
                road("Sé", "Sé", 3.0),
                ValidationFailure::SameEndpoints("Sé".into()),
            ),
            (
                road("Sé", "Monte Brasil", 0.0),
                ValidationFailure::NonPositiveDistance(0.0),
            ),
            (
                RoadRecord {
                    min_speed_kmh: -1.0,
                    ..road("Sé", "Monte Brasil", 3.0)
                },
                ValidationFailure::NegativeMinSpeed(-1.0),
            ),
            (
                RoadRecord {
                    min_speed_kmh: 0.0,
                    max_speed_kmh: 0.0,
                    ..road("Sé", "Monte Brasil", 3.0)
                },
                ValidationFailure::NonPositiveMaxSpeed(0.0),
            ),
            (
                RoadRecord {
                    min_speed_kmh: 50.0,
                    max_speed_kmh: 50.0,
                    ..road("Sé", "Monte Brasil", 3.0)
                },
                ValidationFailure::MaxNotAboveMin {
                    min_kmh: 50.0,
                    max_kmh: 50.0,
                },
            ),
        ];

        for (record, expected) in cases {
            let err = net.add_road(record).unwrap_err();
            assert_eq!(err, NetworkError::ValidationFailed(expected));
        }
        assert_eq!(net.graph().edge_count(), 0);
        assert_eq!(net.roads().count(), 0);
    }

    #[test]
    fn road_shorter_than_straight_line_rejected() {
        let mut net = angra();
        let err = net.add_road(road("Sé", "Algar do Carvão", 2.0)).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ValidationFailed(ValidationFailure::ShorterThanGreatCircle { .. })
        ));
    }

    #[test]
    fn road_needs_known_points_on_the_network() {
        let mut net = angra();
        net.add_point(PointOfInterest::new("Biscoitos", Coordinates::new(38.7981, -27.2583), Category::Nature))
            .unwrap();

        assert_eq!(
            net.add_road(road("Sé", "Praia", 30.0)).unwrap_err(),
            NetworkError::not_found(EntityKind::Point, "Praia")
        );
        assert_eq!(
            net.add_road(road("Sé", "Biscoitos", 30.0)).unwrap_err(),
            NetworkError::not_found(EntityKind::Vertex, "Biscoitos")
        );
    }

    #[test]
    fn reverse_road_is_duplicate() {
        let mut net = angra();
        net.add_road(road("Sé", "Monte Brasil", 3.0)).unwrap();
        let err = net.add_road(road("Monte Brasil", "Sé", 3.0)).unwrap_err();
        assert!(matches!(err, NetworkError::Duplicate { kind: EntityKind::Road, .. }));
    }

    #[test]
    fn remove_vertex_drops_its_roads() {
        let mut net = angra();
        net.add_road(road("Sé", "Monte Brasil", 3.0)).unwrap();
        net.add_road(road("Algar do Carvão", "Sé", 12.0)).unwrap();
        net.add_road(road("Monte Brasil", "Algar do Carvão", 12.0)).unwrap();

        net.remove_vertex("Sé").unwrap();

        assert!(!net.graph().contains_vertex("Sé"));
        assert!(net.point("Sé").is_some());
        let left: Vec<(&str, &str)> = net.roads().map(|r| (r.start(), r.end())).collect();
        assert_eq!(left, vec![("Monte Brasil", "Algar do Carvão")]);
        assert_eq!(net.graph().edge_count(), 1);
    }

    #[test]
    fn remove_road_is_directional() {
        let mut net = angra();
        net.add_road(road("Sé", "Monte Brasil", 3.0)).unwrap();
        assert!(net.remove_road("Monte Brasil", "Sé").is_err());
        let removed = net.remove_road("Sé", "Monte Brasil").unwrap();
        assert_eq!(removed.distance_km(), 3.0);
        assert!(net.road("Sé", "Monte Brasil").is_none());
        assert_eq!(net.graph().edge_count(), 0);
    }

    #[test]
    fn category_listing_is_alphabetical() {
        let mut net = angra();
        net.add_point(PointOfInterest::new("biscoitos", Coordinates::new(38.7981, -27.2583), Category::Nature))
            .unwrap();
        let names: Vec<&str> = net
            .points_in_category(Category::Nature)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Algar do Carvão", "biscoitos", "Monte Brasil"]);
        assert!(net.points_in_category(Category::Gastronomy).is_empty());
    }

    #[test]
    fn visits_and_updates() {
        let mut net = angra();
        net.record_visit("Sé", 3).unwrap();
        assert_eq!(
            net.record_visit("Sé", 7).unwrap_err(),
            NetworkError::ValidationFailed(ValidationFailure::RatingOutOfRange(7))
        );
        net.update_point("Sé", Category::Gastronomy, "step-free").unwrap();
        let se = net.point("Sé").unwrap();
        assert_eq!(se.visits, 1);
        assert_eq!(se.category, Category::Gastronomy);
        assert_eq!(se.accessibility, "step-free");
        assert!(net.update_point("Nowhere", Category::Nature, "").is_err());
    }

    #[test]
    fn nearby_points_by_visits() {
        let mut net = angra();
        net.record_visit("Monte Brasil", 4).unwrap();
        net.record_visit("Monte Brasil", 4).unwrap();
        net.record_visit("Sé", 2).unwrap();

        let near: Vec<&str> = net
            .suggest_nearby(SE, 5000.0)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        // Algar do Carvão is ~8 km away.
        assert_eq!(near, vec!["Monte Brasil", "Sé"]);
    }
}
