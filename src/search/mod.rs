//! Path-finding over an adjacency-list graph
//!
//! Three independent algorithms with distinct contracts:
//! - `bfs`: fewest-edges path, weights ignored
//! - `dfs`: some path, not necessarily shortest
//! - `dijkstra`: minimum total-weight path, non-negative weights only
//!
//! All three are pure queries: they take `(graph, start, end)`, never
//! mutate the graph, and report unreachability as a normal
//! `PathResult { found: false, .. }` rather than an error.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod shared;
pub mod types;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::shortest_path;
pub use types::PathResult;
