//! Logs in against a running backend with the same store the game uses and
//! prints the resulting auth state.
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Exercise the login flow against a backend", version)]
struct Args {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// Overrides `auth.base_url` from the config.
    #[arg(long)]
    base_url: Option<String>,
    /// Only `auth.base_url` is read from it.
    #[arg(long, default_value = sample_game::core::config::BASE_CONFIG)]
    config: String,
    /// Log out again after a successful login and print the cleared state.
    #[arg(long)]
    logout: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    use bevy::log::{info, warn, LogPlugin};
    use bevy::prelude::App;
    use sample_game::{AuthState, AuthStore, GameConfig, HttpLoginTransport};

    fn print_state(label: &str, state: &AuthState) {
        let token = state.token.as_deref().map(mask).unwrap_or_else(|| "-".into());
        let user = state
            .user
            .as_ref()
            .map(|u| serde_json::Value::Object(u.clone()).to_string())
            .unwrap_or_else(|| "-".into());
        println!("{label}: authenticated={} token={token} user={user}", state.is_authenticated);
    }

    fn mask(token: &str) -> String {
        let head: String = token.chars().take(6).collect();
        format!("{head}… ({} chars)", token.chars().count())
    }

    let args = Args::parse();
    // Only the log subscriber is wanted; the app itself never runs.
    let _log = {
        let mut app = App::new();
        app.add_plugins(LogPlugin::default());
        app
    };

    let base_url = match args.base_url {
        Some(url) => url,
        None => {
            let (cfg, err) = GameConfig::load_or_default(&args.config);
            if let Some(e) = err {
                warn!(target: "auth", "{}: {e}; using default base url", args.config);
            }
            cfg.auth.base_url
        }
    };

    let transport = HttpLoginTransport::new(&base_url)?;
    info!(target: "auth", "posting credentials to {}", transport.endpoint());
    let mut store = AuthStore::new(transport);

    store.login(&args.email, &args.password).await?;
    print_state("login", &store.state());

    if args.logout {
        store.logout();
        print_state("logout", &store.state());
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() -> Result<()> {
    anyhow::bail!("auth_probe is a native tool")
}
