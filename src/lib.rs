//! Waygraph Core Library
//!
//! Graph data structures and path-finding algorithms:
//! - `graph`: node/edge value types plus dense (matrix) and sparse (list)
//!   adjacency storage
//! - `search`: BFS, DFS, and Dijkstra path finding over the sparse storage
//! - `bisect`: standalone binary search over sorted slices

pub mod bisect;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;
