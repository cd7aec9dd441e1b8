// Exits the app after `window.autoClose` seconds when that is > 0.
// Used for unattended smoke runs of the demo.

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_autoclose)
            .add_systems(Update, check_autoclose.run_if(resource_exists::<AutoCloseTimer>));
    }
}

fn arm_autoclose(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let secs = cfg.map(|c| c.window.auto_close).unwrap_or(0.0);
    if secs > 0.0 {
        info!(seconds = secs, "auto-close armed");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!("auto-close timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_plugins(AutoClosePlugin);
        app.update();
        assert!(app.world().get_resource::<AutoCloseTimer>().is_none());
    }

    #[test]
    fn positive_value_arms_timer() {
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = 5.0;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .add_plugins(AutoClosePlugin);
        app.update();
        assert!(app.world().get_resource::<AutoCloseTimer>().is_some());
    }
}
