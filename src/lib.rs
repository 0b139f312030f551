// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod math;
pub mod sections;

pub use crate::core::options::{MaterialPolicy, ParseOptions, RotationIndexing};
pub use crate::core::scene::{CameraData, LightData, MaterialProperties, ObjectData, SceneData, Transformation};
pub use crate::core::scene_loader::{load_scene, load_scene_with_options, parse_scene, try_load_scene,
                                    SceneLoadError, SceneLoadResult};
