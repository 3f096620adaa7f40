use avian3d::prelude::*;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use skyship::cli::{Args, CliError, load_and_apply_config};
use skyship::config::GameConfig;
use skyship::plugins::{CameraPlugin, FlightPlugin, LightingPlugin, PilotInputPlugin, ScenePlugin};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.print_config || args.save_config {
        return match handle_config_flags(&args, &config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Skyship".to_string(),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: log_level,
                ..default()
            }),
    );

    log_config(&config);

    app.insert_resource(Time::<Fixed>::from_hz(config.body.fixed_hz));
    app.insert_resource(config);

    app.add_plugins((
        PhysicsPlugins::default(),
        FlightPlugin,
        CameraPlugin,
        LightingPlugin,
        PilotInputPlugin,
        ScenePlugin,
    ));

    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}

fn handle_config_flags(args: &Args, config: &GameConfig) -> Result<(), CliError> {
    if args.print_config {
        println!("{}", config.to_toml_string()?);
    }

    if args.save_config {
        let path = config.save_to_user_config()?;
        println!("Configuration saved to: {}", path.display());
    }

    Ok(())
}

fn log_config(config: &GameConfig) {
    match config.to_toml_string() {
        Ok(toml_string) => {
            info!("=== Current Configuration (TOML) ===\n{}", toml_string);
            info!("=== End Configuration ===");
        }
        Err(e) => {
            error!("Failed to serialize configuration to TOML: {}", e);
        }
    }
}
