pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demos;
pub mod game;
pub mod lighting;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod types;
