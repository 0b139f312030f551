// Copyright 2020 TwoCookingMice

use scenefile::core::diagnostics::Severity;
use scenefile::math::constants::Vector3f;
use scenefile::math::transform::Transform;
use scenefile::{load_scene_with_options, MaterialPolicy, ParseOptions, RotationIndexing};

use console::style;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scene.txt> [--per-section-materials] [--legacy-rotation] [--quiet]", args[0]);
        std::process::exit(1);
    }

    let mut options = ParseOptions::default();
    let mut default_filter = "info";
    for arg in &args[2..] {
        match arg.as_str() {
            "--per-section-materials" => options = options.with_material_policy(MaterialPolicy::PerSection),
            "--legacy-rotation" => options = options.with_rotation_indexing(RotationIndexing::SecondToken),
            "--quiet" => default_filter = "error",
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let result = load_scene_with_options(&args[1], &options);
    let scene = &result.scene;

    println!("{}", style("Image").bold().cyan());
    println!("  size:       {}x{}", scene.image_width, scene.image_height);
    println!("  background: {}", scene.background_color);

    println!("{} ({})", style("Transformations").bold().cyan(), scene.transformations.len());
    for (idx, object) in scene.objects().iter().enumerate() {
        let t = &object.transformation;
        let origin = Transform::from_transformation(t).apply_point(Vector3f::zeros());
        println!("  [{}] T({}, {}, {}) R({}, {}, {}) S({}, {}, {}) -> origin at ({:.3}, {:.3}, {:.3}), material {}",
                 idx,
                 t.translation.x, t.translation.y, t.translation.z,
                 t.rotation.x, t.rotation.y, t.rotation.z,
                 t.scale.x, t.scale.y, t.scale.z,
                 origin.x, origin.y, origin.z,
                 object.material.color);
    }

    println!("{} ({})", style("Materials").bold().cyan(), scene.materials.len());
    for (idx, material) in scene.materials.iter().enumerate() {
        println!("  [{}] color {} shininess {} metallic {}", idx, material.color, material.shininess, material.metallic);
    }

    println!("{}", style("Camera").bold().cyan());
    match &scene.camera {
        Some(camera) => println!("  focal length {} fov {} aspect {}", camera.focal_length, camera.fov, camera.aspect_ratio),
        None => println!("  {}", style("none").dim()),
    }

    println!("{} ({})", style("Lights").bold().cyan(), scene.lights.len());
    for (idx, light) in scene.lights.iter().enumerate() {
        println!("  [{}] intensity {} color {}", idx, light.intensity, light.color);
    }

    if !result.diagnostics.is_empty() {
        println!("{} ({})", style("Diagnostics").bold().yellow(), result.diagnostics.len());
        for diagnostic in &result.diagnostics {
            let line = match diagnostic.severity {
                Severity::Warning => style(diagnostic.to_string()).yellow(),
                Severity::Error => style(diagnostic.to_string()).red(),
            };
            println!("  {}", line);
        }
    }
}
