use bevy::prelude::*;
use clap::Parser;

use sample_game::core::config::{present_layers, BASE_CONFIG, LOCAL_OVERLAY};
use sample_game::{create_engine_config, GameConfig, SceneKey};

#[derive(Parser, Debug)]
#[command(about = "Title screen and first level of the sample game", version)]
struct Args {
    /// RON config layers, merged in order. Missing files are reported and skipped,
    /// except the local overlay which is optional.
    #[arg(long = "config", default_values = [BASE_CONFIG, LOCAL_OVERLAY])]
    configs: Vec<String>,
    /// DOM id of the element the canvas mounts into.
    #[arg(long, default_value = "app")]
    parent: String,
    /// Draw Rapier colliders.
    #[arg(long)]
    physics_debug: bool,
}

fn main() -> AppExit {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let (cfg, used, errors) = GameConfig::load_layered(present_layers(&args.configs, LOCAL_OVERLAY));

    let mut engine = create_engine_config([SceneKey::Title, SceneKey::Level], args.parent);
    engine.physics.debug = args.physics_debug;

    // LogPlugin installs the subscriber while the app is built; report config issues after.
    let mut app = engine.build_app(&cfg);
    info!("config layers: {}", if used.is_empty() { "<defaults>".to_owned() } else { used.join(", ") });
    for e in &errors {
        warn!("{e}");
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    app.run()
}
