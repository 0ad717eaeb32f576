//! The conversion graph
//!
//! Nodes are point sets, edges are registered converters plus identity
//! self-edges, and `get_converter` answers "give me a function converting
//! point A to point B" with a breadth-first shortest-path search followed by
//! left-fold composition of the per-edge functions. Edges are plain data: a
//! target set id, a converter id into the converter registry and a direction
//! flag, so the graph itself holds no closures.
//!
//! The structure is built once at session start and never mutated
//! afterwards; `get_converter` allocates only transient per-call state and
//! is safe for unsynchronized concurrent use.

use crate::{ConvertResult, DataConverter};
use gridconv_types::{ConversionPoint, GridValue, PointSetId, PointSetRegistry};
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

/// Index of a converter inside the graph's converter registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConverterId(pub usize);

/// Which of a converter's two functions an edge applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    /// Self-edge, value passes through unchanged
    Identity,
}

/// One directed edge of the point-set graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Point set this edge leads to
    pub target: PointSetId,
    /// Converter applied along the edge, `None` for identity self-edges
    pub converter: Option<ConverterId>,
    pub direction: Direction,
}

/// Owns the registered converters, addressed by id
#[derive(Default)]
pub struct ConverterRegistry {
    converters: Vec<Box<dyn DataConverter>>,
}

impl ConverterRegistry {
    fn add(&mut self, converter: Box<dyn DataConverter>) -> ConverterId {
        self.converters.push(converter);
        ConverterId(self.converters.len() - 1)
    }

    /// Converter by id
    pub fn get(&self, id: ConverterId) -> &dyn DataConverter {
        self.converters[id.0].as_ref()
    }

    /// All converters in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ConverterId, &dyn DataConverter)> {
        self.converters
            .iter()
            .enumerate()
            .map(|(i, c)| (ConverterId(i), c.as_ref()))
    }

    /// Number of registered converters
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

/// A composed conversion path, the "function" returned by `get_converter`.
///
/// The chain is plain data; applying it walks the steps left to right,
/// looking each converter up in the graph. A null intermediate value
/// short-circuits the rest of the chain to null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterChain {
    steps: Vec<(ConverterId, Direction)>,
}

impl ConverterChain {
    /// The converter steps, in application order
    pub fn steps(&self) -> &[(ConverterId, Direction)] {
        &self.steps
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A chain is never empty; an empty path yields no chain at all
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run the composed conversion over one value
    pub fn apply(&self, graph: &ConversionGraph, value: &GridValue) -> ConvertResult<GridValue> {
        let mut current = value.clone();
        for (id, direction) in &self.steps {
            if current.is_null() {
                return Ok(GridValue::Null);
            }
            let converter = graph.converters().get(*id);
            current = match direction {
                Direction::Forward => converter.convert(&current)?,
                Direction::Backward => converter.convert_reverse(&current)?,
                Direction::Identity => current,
            };
        }
        Ok(current)
    }
}

/// Conversion graph over a point-set registry
pub struct ConversionGraph {
    points: PointSetRegistry,
    converters: ConverterRegistry,
    adjacency: IndexMap<PointSetId, IndexSet<Edge>>,
}

impl ConversionGraph {
    /// Empty graph over the given point-set registry
    pub fn new(points: PointSetRegistry) -> Self {
        Self {
            points,
            converters: ConverterRegistry::default(),
            adjacency: IndexMap::new(),
        }
    }

    /// The point-set registry this graph resolves endpoints against
    pub fn points(&self) -> &PointSetRegistry {
        &self.points
    }

    /// The registered converters
    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// Register a converter between its two point sets.
    ///
    /// Adds four edges: start to end forward, end to start backward, and an
    /// identity self-edge on each endpoint so every set that appears in any
    /// converter has at least a trivial path to itself. Registration order
    /// is significant: it fixes edge iteration order and therefore BFS
    /// tie-breaking for ambiguous paths.
    pub fn register(&mut self, converter: Box<dyn DataConverter>) {
        let start = converter.start();
        let end = converter.end();
        let id = self.converters.add(converter);
        self.adjacency.entry(start).or_default().insert(Edge {
            target: end,
            converter: Some(id),
            direction: Direction::Forward,
        });
        self.adjacency.entry(end).or_default().insert(Edge {
            target: start,
            converter: Some(id),
            direction: Direction::Backward,
        });
        self.adjacency.entry(start).or_default().insert(Edge {
            target: start,
            converter: None,
            direction: Direction::Identity,
        });
        self.adjacency.entry(end).or_default().insert(Edge {
            target: end,
            converter: None,
            direction: Direction::Identity,
        });
    }

    /// Composed converter from `start` to `end`, or `None` when the two
    /// points' sets are not connected.
    ///
    /// "No path" is a normal outcome, not an error: downstream editors treat
    /// it as "this type pair is not interchangeable". Note that two points
    /// of the same set also yield `None`: the path short-circuits at
    /// end == start before any edge, identity self-edges included, is taken.
    pub fn get_converter(
        &self,
        start: &ConversionPoint,
        end: &ConversionPoint,
    ) -> Option<ConverterChain> {
        let start_set = self.points.resolve(start);
        let end_set = self.points.resolve(end);
        let parents = self.search(start_set);
        self.reconstruct(&parents, start_set, end_set)
    }

    /// Breadth-first traversal from every edge adjacent to `start_set`,
    /// recording each newly discovered set's parent. Self-loop discoveries
    /// are skipped when recording parents so the path map never contains
    /// degenerate zero-length back-edges.
    fn search(&self, start_set: PointSetId) -> IndexMap<PointSetId, PointSetId> {
        let mut parents: IndexMap<PointSetId, PointSetId> = IndexMap::new();
        let mut visited: IndexSet<PointSetId> = IndexSet::new();
        let mut queue: VecDeque<(PointSetId, Edge)> = self
            .adjacency
            .get(&start_set)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|e| (start_set, *e)))
            .collect();
        while let Some((from, edge)) = queue.pop_front() {
            if !visited.insert(edge.target) {
                continue;
            }
            if edge.target != from {
                parents.insert(edge.target, from);
            }
            if let Some(next) = self.adjacency.get(&edge.target) {
                queue.extend(next.iter().map(|e| (edge.target, *e)));
            }
        }
        parents
    }

    /// Walk the parent chain backward from `end_set`, resolving each hop to
    /// the first adjacency edge connecting parent to child. A missing hop
    /// edge invalidates the whole path and an empty path produces no chain.
    fn reconstruct(
        &self,
        parents: &IndexMap<PointSetId, PointSetId>,
        start_set: PointSetId,
        end_set: PointSetId,
    ) -> Option<ConverterChain> {
        let mut steps: Vec<(ConverterId, Direction)> = Vec::new();
        let mut current = end_set;
        while current != start_set {
            let previous = *parents.get(&current)?;
            let edge = self
                .adjacency
                .get(&previous)?
                .iter()
                .find(|e| e.target == current)?;
            steps.push((edge.converter?, edge.direction));
            current = previous;
        }
        if steps.is_empty() {
            return None;
        }
        steps.reverse();
        Some(ConverterChain { steps })
    }
}
