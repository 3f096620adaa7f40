//! Flight plugin - Self-contained plugin pattern
//!
//! Runs the flight control law once per physics tick. The steps are chained
//! so thrust always sees the rotation produced by steering in the same tick,
//! and the whole set finishes before avian3d integrates the bodies.

use crate::physics::flight::{ModelMount, clamp_altitude, regulate_velocity};
use crate::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightSet {
    Mount,
    Steer,
    Thrust,
    Bounds,
    Tilt,
}

pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Mount,
                FlightSet::Steer,
                FlightSet::Thrust,
                FlightSet::Bounds,
                FlightSet::Tilt,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                mount_ship_models.in_set(FlightSet::Mount),
                steer_ships.in_set(FlightSet::Steer),
                apply_thrust.in_set(FlightSet::Thrust),
                enforce_altitude_bounds.in_set(FlightSet::Bounds),
                tilt_ship_models.in_set(FlightSet::Tilt),
            ),
        );

        app.add_systems(Update, log_new_ships);
    }
}

/// Finds each ship's visual model and captures its rest orientation.
pub fn mount_ship_models(
    mut commands: Commands,
    ships: Query<(Entity, &FlightController, Option<&Children>), Without<MountedModel>>,
    mut models: Query<(&mut Transform, Option<&Name>), Without<FlightController>>,
) {
    for (ship, controller, children) in &ships {
        let Some(model) = controller
            .model
            .or_else(|| children.and_then(|children| children.first().copied()))
        else {
            continue;
        };

        let Ok((mut transform, name)) = models.get_mut(model) else {
            continue;
        };

        match name {
            Some(name) => info!("Ship model found: {name}"),
            None => info!("Ship model found: {model}"),
        }

        let mount = ModelMount::capture(transform.rotation, controller.tuning.model_correction());
        info!(
            "Ship model base rotation (degrees): {:?}",
            euler_degrees(mount.base)
        );

        transform.rotation = mount.rest();
        commands.entity(model).insert(mount);
        commands.entity(ship).insert(MountedModel(model));
    }
}

pub fn steer_ships(
    time: Res<Time>,
    mut ships: Query<(&FlightController, &FlightInput, &mut FlightState, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (controller, input, mut state, mut transform) in &mut ships {
        let next = state.steer(input, &controller.tuning, dt);

        if input.is_looking(controller.tuning.deadzone) {
            transform.rotation = next.rotation();
        }

        *state = next;
    }
}

pub fn apply_thrust(
    time: Res<Time>,
    mut ships: Query<(
        &FlightController,
        &FlightInput,
        &FlightState,
        &Transform,
        &mut LinearVelocity,
        &mut ExternalForce,
    )>,
) {
    let dt = time.delta_secs();

    for (controller, input, state, transform, mut velocity, mut force) in &mut ships {
        let thrust = state.thrust(input, &controller.tuning, transform.rotation);

        if thrust.length() > controller.tuning.deadzone {
            force.apply_force(thrust);
        }

        velocity.0 = regulate_velocity(velocity.0, thrust, &controller.tuning, dt);
    }
}

pub fn enforce_altitude_bounds(
    mut ships: Query<(&FlightController, &mut Transform, &mut LinearVelocity)>,
) {
    for (controller, mut transform, mut velocity) in &mut ships {
        let (position, clamped) =
            clamp_altitude(transform.translation, velocity.0, &controller.tuning);

        // Avoid flagging unchanged transforms so avian3d does not resync them.
        if position != transform.translation {
            transform.translation = position;
        }
        if clamped != velocity.0 {
            velocity.0 = clamped;
        }
    }
}

pub fn tilt_ship_models(
    time: Res<Time>,
    ships: Query<(&FlightController, &FlightState, &MountedModel)>,
    mut models: Query<(&ModelMount, &mut Transform), Without<FlightController>>,
) {
    let dt = time.delta_secs();

    for (controller, state, mounted) in &ships {
        let Ok((mount, mut transform)) = models.get_mut(mounted.0) else {
            continue;
        };

        transform.rotation = mount.tilt(
            transform.rotation,
            state.visual_bank,
            controller.tuning.tilt_rate,
            dt,
        );
    }
}

fn log_new_ships(ships: Query<(Entity, &Transform, &FlightState), Added<FlightController>>) {
    for (ship, transform, state) in &ships {
        info!(
            "Ship {ship} initial rotation (degrees): {:?}, yaw {:.1}, pitch {:.1}",
            euler_degrees(transform.rotation),
            state.yaw,
            state.pitch
        );
    }
}

fn euler_degrees(rotation: Quat) -> Vec3 {
    let (y, x, z) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}
