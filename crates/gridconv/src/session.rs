//! Session-scoped keyed context data
//!
//! A grid session carries shared, read-mostly objects (the conversion graph
//! among them) in a keyed store. Keys are types: one value per type per
//! session, fetched back by reference.

use crate::ConversionGraph;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Keyed store for session-scoped shared data
#[derive(Default)]
pub struct SessionData {
    entries: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl SessionData {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a value under its type key, replacing any previous one
    pub fn set<T: Any + Send + Sync>(&self, value: Arc<T>) {
        self.entries.write().insert(TypeId::of::<T>(), value);
    }

    /// Value previously attached under `T`, if any
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.entries
            .read()
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|entry| entry.downcast::<T>().ok())
    }
}

impl ConversionGraph {
    /// Attach a graph to a session
    pub fn attach(session: &SessionData, graph: Arc<ConversionGraph>) {
        session.set(graph);
    }

    /// Graph previously attached to the session
    pub fn of(session: &SessionData) -> Option<Arc<ConversionGraph>> {
        session.get::<ConversionGraph>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridconv_types::PointSetRegistry;

    #[test]
    fn test_attach_and_look_up_graph() {
        let session = SessionData::new();
        assert!(ConversionGraph::of(&session).is_none());
        let graph = Arc::new(ConversionGraph::new(PointSetRegistry::standard()));
        ConversionGraph::attach(&session, Arc::clone(&graph));
        let found = ConversionGraph::of(&session).expect("graph attached");
        assert!(Arc::ptr_eq(&graph, &found));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let session = SessionData::new();
        session.set(Arc::new(1u32));
        session.set(Arc::new(2u32));
        assert_eq!(*session.get::<u32>().unwrap(), 2);
    }
}
