pub mod game;
pub mod hit_test;
pub mod overlay;
pub mod region;
pub mod session;
