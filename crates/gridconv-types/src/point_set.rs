//! Point sets and the point-set registry
//!
//! A `PointSet` groups conversion points that share an in-memory
//! representation; the sets are the nodes of the conversion graph. The
//! registry resolves a probe point to its owning set with a linear scan in
//! registration order, first match wins. An unmatched probe resolves to the
//! UNKNOWN sentinel set.

use crate::point::points;
use crate::{ConversionPoint, ReprKind};
use std::fmt;

/// Index of a point set inside its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointSetId(pub usize);

impl fmt::Display for PointSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Group of conversion points sharing one representation kind
#[derive(Debug, Clone)]
pub struct PointSet {
    pub name: &'static str,
    pub repr: ReprKind,
    members: Vec<ConversionPoint>,
}

impl PointSet {
    /// Create a set from its members.
    ///
    /// Members must share the set's representation kind (widening allowed:
    /// a `Number` set may hold `Int` members).
    pub fn new(name: &'static str, repr: ReprKind, members: Vec<ConversionPoint>) -> Self {
        debug_assert!(
            members.iter().all(|m| repr.is_assignable_from(m.repr)),
            "point set {name} has a member with a foreign representation"
        );
        Self {
            name,
            repr,
            members,
        }
    }

    /// The member points of this set
    pub fn types(&self) -> &[ConversionPoint] {
        &self.members
    }

    /// Does this set claim the probe point?
    ///
    /// A member matches when its logical type and name equal the probe's and
    /// its representation is assignable *from* the probe's: a set declared
    /// with the general `Number` kind claims a probe declared with `Int`.
    pub fn contains(&self, probe: &ConversionPoint) -> bool {
        self.members.iter().any(|m| {
            m.logical_type == probe.logical_type
                && m.name == probe.name
                && m.repr.is_assignable_from(probe.repr)
        })
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.repr)
    }
}

/// Explicit registry of point sets, built once and injected into the graph.
///
/// The last registered set is always the UNKNOWN sentinel; `resolve` falls
/// back to it when no set claims a probe.
#[derive(Debug, Clone)]
pub struct PointSetRegistry {
    sets: Vec<PointSet>,
    unknown: PointSetId,
}

impl PointSetRegistry {
    /// Build a registry from an ordered list of sets.
    ///
    /// Registration order is significant: `resolve` scans linearly and the
    /// first containing set wins.
    pub fn new(sets: Vec<PointSet>) -> Self {
        let mut sets = sets;
        sets.push(PointSet::new("unknown", ReprKind::Object, Vec::new()));
        let unknown = PointSetId(sets.len() - 1);
        Self { sets, unknown }
    }

    /// The standard catalog, partitioned by shared representation
    pub fn standard() -> Self {
        Self::new(vec![
            PointSet::new(
                "texts",
                ReprKind::Text,
                vec![
                    points::TEXT,
                    points::CHAR,
                    points::VARCHAR,
                    points::NCHAR,
                    points::NVARCHAR,
                    points::CLOB,
                    points::NCLOB,
                ],
            ),
            PointSet::new("binary texts", ReprKind::Text, vec![points::BIT_TEXT]),
            PointSet::new(
                "numbers",
                ReprKind::Number,
                vec![
                    points::TINYINT,
                    points::SMALLINT,
                    points::INTEGER,
                    points::BIGINT,
                    points::REAL,
                    points::FLOAT,
                    points::DOUBLE,
                    points::DECIMAL,
                    points::NUMERIC,
                ],
            ),
            PointSet::new(
                "booleans",
                ReprKind::Boolean,
                vec![points::BOOLEAN, points::BIT_BOOLEAN],
            ),
            PointSet::new("dates", ReprKind::Date, vec![points::DATE]),
            PointSet::new(
                "times",
                ReprKind::Time,
                vec![points::TIME, points::TIME_TZ],
            ),
            PointSet::new("timestamps", ReprKind::Timestamp, vec![points::TIMESTAMP]),
            PointSet::new(
                "zoned timestamps",
                ReprKind::TimestampTz,
                vec![points::TIMESTAMP_TZ],
            ),
            PointSet::new(
                "temporal accessors",
                ReprKind::Temporal,
                vec![
                    points::DATE_ACCESSOR,
                    points::TIME_ACCESSOR,
                    points::TIMESTAMP_ACCESSOR,
                    points::TIMESTAMP_TZ_ACCESSOR,
                ],
            ),
            PointSet::new("uuids", ReprKind::Uuid, vec![points::UUID]),
            PointSet::new("uuid texts", ReprKind::Text, vec![points::UUID_TEXT]),
            PointSet::new(
                "bytes",
                ReprKind::Bytes,
                vec![points::BINARY, points::BLOB],
            ),
            PointSet::new(
                "objects",
                ReprKind::Object,
                vec![points::OBJECT, points::ARRAY, points::JSON],
            ),
            PointSet::new(
                "document texts",
                ReprKind::Text,
                vec![points::JSON_TEXT, points::XML_TEXT],
            ),
        ])
    }

    /// Set owning the probe point, or the UNKNOWN sentinel
    pub fn resolve(&self, probe: &ConversionPoint) -> PointSetId {
        self.sets
            .iter()
            .position(|set| set.contains(probe))
            .map(PointSetId)
            .unwrap_or(self.unknown)
    }

    /// Set by id
    pub fn get(&self, id: PointSetId) -> &PointSet {
        &self.sets[id.0]
    }

    /// Id of the UNKNOWN sentinel set
    pub fn unknown_id(&self) -> PointSetId {
        self.unknown
    }

    /// All sets in registration order, sentinel included
    pub fn iter(&self) -> impl Iterator<Item = (PointSetId, &PointSet)> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| (PointSetId(i), set))
    }
}

impl Default for PointSetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogicalType;

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = PointSetRegistry::standard();
        let a = registry.resolve(&points::VARCHAR);
        let b = registry.resolve(&points::VARCHAR);
        assert_eq!(a, b);
        assert_eq!(registry.get(a).name, "texts");
    }

    #[test]
    fn test_resolve_unmatched_falls_back_to_unknown() {
        let registry = PointSetRegistry::standard();
        let alien = ConversionPoint::new("rowid", LogicalType::Unknown, ReprKind::Text);
        assert_eq!(registry.resolve(&alien), registry.unknown_id());
        assert_eq!(registry.get(registry.unknown_id()).name, "unknown");
    }

    #[test]
    fn test_number_set_claims_narrow_probe() {
        let registry = PointSetRegistry::standard();
        let narrow = points::INTEGER.with_repr(ReprKind::Int);
        assert_eq!(
            registry.resolve(&narrow),
            registry.resolve(&points::INTEGER)
        );
    }

    #[test]
    fn test_standard_catalog_has_no_ambiguous_points() {
        // First-match-wins only matters if a point could live in two sets.
        // Keep the standard catalog unambiguous so registration order never
        // silently decides ownership.
        let registry = PointSetRegistry::standard();
        for point in points::ALL {
            let owners: Vec<&str> = registry
                .iter()
                .filter(|(_, set)| set.contains(point))
                .map(|(_, set)| set.name)
                .collect();
            assert_eq!(owners.len(), 1, "{point} owned by {owners:?}");
        }
    }

    #[test]
    fn test_every_catalog_point_is_owned() {
        let registry = PointSetRegistry::standard();
        for point in points::ALL {
            assert_ne!(
                registry.resolve(point),
                registry.unknown_id(),
                "{point} resolved to the sentinel"
            );
        }
    }
}
