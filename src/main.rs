use std::path::PathBuf;

use clap::Parser;
use log::error;
use scene_interpreter::{parse_scene_file, ParseOptions};

#[derive(Parser, Debug)]
#[command(name = "scene-interpreter")]
#[command(about = "Parses a scene description file and reports the resulting scene")]
struct Args {
    /// Scene description file
    scene: PathBuf,

    /// Fail when a group is still open at end of file
    #[arg(long)]
    strict_groups: bool,

    /// Print the parsed scene
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let options = ParseOptions {
        strict_groups: args.strict_groups,
    };

    let scene = match parse_scene_file(&args.scene, options) {
        Ok(scene) => scene,
        Err(err) => {
            error!("{}", err);
            eprintln!("Bad scene file, exiting!");
            std::process::exit(1);
        }
    };

    println!(
        "scene: {}x{}, corner distance {}, {} light(s), {} object(s)",
        scene.width(),
        scene.height(),
        scene.corner_dist,
        scene.lights.len(),
        scene.objects.len()
    );
    if args.dump {
        println!("{:#?}", scene);
    }
}
