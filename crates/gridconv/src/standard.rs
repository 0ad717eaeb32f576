//! The canonical graph wiring
//!
//! Registration order below is part of the contract: it fixes BFS
//! tie-breaking for ambiguous paths and must stay stable across releases.

use crate::converters::{
    BinaryTextToText, BooleanToNumber, BooleanToText, BytesToBinaryText, BytesToText, DateToText,
    DateToTimestamp, NumberToText, ObjectToJsonText, ObjectToText, StringUuidToText, TimeToText,
    TimeToTimestamp, TimestampToNumber, TimestampToTemporal, TimestampToText,
    TimestampToTimestampTz, TimestampTzToText, UuidToText,
};
use crate::ConversionGraph;
use gridconv_format::{FormatterCreator, ObjectFormatter};
use gridconv_types::{points, PointSetRegistry};
use std::sync::Arc;

impl ConversionGraph {
    /// Build the standard graph over the standard point-set catalog.
    ///
    /// The formatter creator and object formatter are the session
    /// collaborators; every formatter-backed converter builds its formatter
    /// here, once, not per converted value.
    pub fn standard(
        creator: &FormatterCreator,
        object_formatter: Arc<dyn ObjectFormatter>,
    ) -> ConversionGraph {
        let registry = PointSetRegistry::standard();

        let texts = registry.resolve(&points::TEXT);
        let binary_texts = registry.resolve(&points::BIT_TEXT);
        let numbers = registry.resolve(&points::INTEGER);
        let booleans = registry.resolve(&points::BOOLEAN);
        let dates = registry.resolve(&points::DATE);
        let times = registry.resolve(&points::TIME);
        let timestamps = registry.resolve(&points::TIMESTAMP);
        let zoned = registry.resolve(&points::TIMESTAMP_TZ);
        let accessors = registry.resolve(&points::TIMESTAMP_ACCESSOR);
        let uuids = registry.resolve(&points::UUID);
        let uuid_texts = registry.resolve(&points::UUID_TEXT);
        let bytes = registry.resolve(&points::BINARY);
        let objects = registry.resolve(&points::OBJECT);
        let document_texts = registry.resolve(&points::JSON_TEXT);

        let mut graph = ConversionGraph::new(registry);
        graph.register(Box::new(BooleanToText::new(booleans, texts)));
        graph.register(Box::new(BooleanToNumber::new(booleans, numbers)));
        graph.register(Box::new(NumberToText::new(numbers, texts, creator)));
        graph.register(Box::new(BinaryTextToText::new(binary_texts, texts)));
        graph.register(Box::new(BytesToBinaryText::new(bytes, binary_texts)));
        graph.register(Box::new(BytesToText::new(bytes, texts)));
        // Structural temporal converters register before the text renderers
        // so BFS tie-breaking prefers lossless temporal hops over a detour
        // through rendered text.
        graph.register(Box::new(DateToTimestamp::new(dates, timestamps)));
        graph.register(Box::new(TimeToTimestamp::new(times, timestamps, creator)));
        graph.register(Box::new(TimestampToTimestampTz::new(
            timestamps, zoned, creator,
        )));
        graph.register(Box::new(TimestampToNumber::new(timestamps, numbers)));
        graph.register(Box::new(TimestampToTemporal::new(timestamps, accessors)));
        graph.register(Box::new(DateToText::new(dates, texts, creator)));
        graph.register(Box::new(TimeToText::new(times, texts, creator)));
        graph.register(Box::new(TimestampToText::new(timestamps, texts, creator)));
        graph.register(Box::new(TimestampTzToText::new(zoned, texts, creator)));
        graph.register(Box::new(UuidToText::new(uuids, texts)));
        graph.register(Box::new(StringUuidToText::new(uuid_texts, texts)));
        graph.register(Box::new(ObjectToText::new(
            objects,
            texts,
            Arc::clone(&object_formatter),
        )));
        graph.register(Box::new(ObjectToJsonText::new(
            objects,
            document_texts,
            object_formatter,
        )));
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridconv_format::JsonObjectFormatter;

    #[test]
    fn test_standard_graph_registers_the_full_family() {
        let graph = ConversionGraph::standard(
            &FormatterCreator::with_defaults(),
            Arc::new(JsonObjectFormatter),
        );
        assert_eq!(graph.converters().len(), 19);
    }
}
