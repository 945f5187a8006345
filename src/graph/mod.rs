//! Adjacency graphs and shortest-path queries

mod build;
mod path;

pub use build::{EdgeStrategy, Graph, IsAEdges, LinkEdges};
pub use path::{EntityNotFound, PathQuery, PathResult};
