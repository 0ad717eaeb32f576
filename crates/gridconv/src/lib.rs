//! gridconv - graph-based conversion of tabular values between types
//!
//! The grid needs to move a cell value from one (logical type,
//! representation) pairing to another: a timestamp column edited as text, a
//! boolean stored as a number. This crate answers those requests with a
//! conversion graph:
//!
//! - point sets (from `gridconv-types`) are the nodes
//! - each registered [`DataConverter`] contributes a forward and a backward
//!   edge plus identity self-edges on its endpoints
//! - [`ConversionGraph::get_converter`] runs a breadth-first shortest-path
//!   search and composes the per-edge functions into one [`ConverterChain`]
//!
//! Absence of a path is a normal outcome (`None`), parse failures on
//! concrete values degrade to null, and the whole structure is immutable
//! after construction and safe for concurrent reads.
//!
//! # Example
//!
//! ```
//! use gridconv::ConversionGraph;
//! use gridconv_format::{FormatterCreator, JsonObjectFormatter};
//! use gridconv_types::{points, GridValue};
//! use std::sync::Arc;
//!
//! let graph = ConversionGraph::standard(
//!     &FormatterCreator::with_defaults(),
//!     Arc::new(JsonObjectFormatter),
//! );
//! let chain = graph
//!     .get_converter(&points::BOOLEAN, &points::TEXT)
//!     .expect("booleans and texts are connected");
//! let out = chain.apply(&graph, &GridValue::Boolean(true)).unwrap();
//! assert_eq!(out, GridValue::Text("true".into()));
//! ```

pub mod converter;
pub mod converters;
pub mod error;
pub mod graph;
pub mod session;
pub mod standard;

pub use converter::DataConverter;
pub use error::{ConvertError, ConvertResult};
pub use graph::{ConversionGraph, ConverterChain, ConverterId, ConverterRegistry, Direction, Edge};
pub use session::SessionData;
