pub mod assembler;
pub mod connectivity;
pub mod lodging;
pub mod planner;
pub mod route;
pub mod spend;
pub mod tree_reconstruction;
pub mod zones;
