// Copyright @yucwang 2021

pub mod diagnostics;
pub mod options;
pub mod scene;
pub mod scene_loader;
pub mod section;
