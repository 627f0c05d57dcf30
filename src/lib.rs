//! Interpreter for a line-oriented scene description language.
//!
//! A scene file is folded line by line into a [`Scene`]: camera parameters,
//! lights, and spheres placed under nested `group`/`groupend` scopes that
//! carry their own transform and material.

extern crate nalgebra as na;

pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod scene;
pub mod stacks;


pub use error::{Result, SceneError};
pub use interpreter::{parse_scene_file, parse_scene_str, Interpreter, ParseOptions};
pub use scene::{Light, Material, Scene, SceneObject, Sphere};
