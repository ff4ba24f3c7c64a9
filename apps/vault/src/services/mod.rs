pub mod turn_flow;
