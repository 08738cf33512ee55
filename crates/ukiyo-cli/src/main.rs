use std::path::PathBuf;
use std::process;

use ukiyo_gen::{build_scene, Catalog, SceneDefinition};

mod stats;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut scene_id: Option<String> = None;
    let mut seed: Option<u32> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut manifest_path: Option<PathBuf> = None;
    let mut list = false;
    let mut all = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" => {
                i += 1;
                scene_id = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse().expect("invalid --seed value"));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(&args[i]));
            }
            "--manifest" => {
                i += 1;
                manifest_path = Some(PathBuf::from(&args[i]));
            }
            "--list" => list = true,
            "--all" => all = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let catalog = match Catalog::stock() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Scene catalog is broken: {}", e);
            process::exit(1);
        }
    };

    if list {
        print_catalog(&catalog);
        return;
    }

    let selected: Vec<&SceneDefinition> = if all {
        catalog.definitions().iter().collect()
    } else if let Some(ref id) = scene_id {
        match catalog.by_id(id) {
            Ok(def) => vec![def],
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    } else {
        print_usage();
        process::exit(1);
    };

    if output_path.is_some() && selected.len() != 1 {
        eprintln!("--output requires exactly one scene (use --scene)");
        process::exit(1);
    }

    let mut results = Vec::new();
    for def in &selected {
        let scene_seed = seed.unwrap_or(def.default_seed);
        log::info!("building {} (seed {})", def.id, scene_seed);
        let model = build_scene(def.kind, scene_seed);
        log::info!("{}: {} voxels", def.id, model.len());

        if let Some(ref path) = output_path {
            let bytes = ukiyo_persist::save(&model, scene_seed);
            if let Err(e) = std::fs::write(path, &bytes) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                process::exit(1);
            }
            log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        }

        results.push(stats::ModelStats::from_model(&def.id, scene_seed, &model));
    }

    println!("\n## Generated Models\n");
    println!("{}", stats::format_markdown(&results));

    if let Some(ref path) = manifest_path {
        stats::save_manifest(path, &results).expect("failed to save manifest");
        log::info!("saved manifest to {}", path.display());
    }
}

fn print_catalog(catalog: &Catalog) {
    println!("Available scenes:");
    for def in catalog.definitions() {
        println!(
            "  {:<16} {:?} tier={:?} seed={} \"{}\"",
            def.id, def.kind, def.tier, def.default_seed, def.title
        );
    }
}

fn print_usage() {
    eprintln!("Usage: ukiyo [OPTIONS]");
    eprintln!("  --scene <id>       Generate one scene from the catalog");
    eprintln!("  --all              Generate every cataloged scene");
    eprintln!("  --seed <n>         Override the scene's default seed");
    eprintln!("  --output <path>    Write the model as a .uvx binary (single scene)");
    eprintln!("  --manifest <path>  Write generation stats as JSON");
    eprintln!("  --list             List cataloged scenes");
}
