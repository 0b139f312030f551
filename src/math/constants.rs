/* Copyright 2020 @Yuchen Wong */

pub type Float = f32;

pub type Vector3f = nalgebra::Vector3<Float>;
pub type Matrix4f = nalgebra::Matrix4<Float>;

pub const PI: Float = 3.14159265359;
pub const DEG_TO_RAD: Float = PI / 180.0;
