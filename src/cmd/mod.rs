pub mod rank;
pub mod render;
pub mod search;
