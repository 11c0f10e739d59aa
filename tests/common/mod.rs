pub mod synthetic_graph;
