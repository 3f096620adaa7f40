use crate::config::GameConfig;
use crate::physics::flight::{FlightInput, FlightState, FlightTuning};
use avian3d::prelude::*;
use bevy::prelude::*;

/// Marks a ship driven by the flight control law.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FlightController {
    pub tuning: FlightTuning,
    /// Visual model to tilt. When unset the ship's first child is used.
    pub model: Option<Entity>,
}

/// Set on a ship once its visual model has been mounted.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountedModel(pub Entity);

/// The directional light driven by the lighting presets.
#[derive(Component, Default)]
pub struct Sun;

/// Bundle containing everything a ship needs to fly.
///
/// Orientation state is derived from the spawn rotation, so the first tick
/// continues from the pose the ship was placed in.
#[derive(Bundle)]
pub struct ShipBundle {
    pub name: Name,
    pub controller: FlightController,
    pub state: FlightState,
    pub input: FlightInput,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub mass: Mass,
    pub no_auto_mass: NoAutoMass,
    pub gravity_scale: GravityScale,
    pub linear_damping: LinearDamping,
    pub angular_damping: AngularDamping,
    pub locked_axes: LockedAxes,
    pub linear_velocity: LinearVelocity,
    pub external_force: ExternalForce,
}

impl ShipBundle {
    pub fn new(transform: Transform, config: &GameConfig) -> Self {
        Self {
            name: Name::new("Ship"),
            controller: FlightController {
                tuning: config.flight.clone(),
                model: None,
            },
            state: FlightState::from_rotation(transform.rotation),
            input: FlightInput::default(),
            transform,
            rigid_body: RigidBody::Dynamic,
            collider: Collider::capsule(0.6, 2.0),
            mass: Mass(config.body.mass),
            no_auto_mass: NoAutoMass,
            gravity_scale: GravityScale(0.0),
            linear_damping: LinearDamping(config.body.linear_damping),
            angular_damping: AngularDamping(config.body.angular_damping),
            locked_axes: LockedAxes::new().lock_rotation_x().lock_rotation_z(),
            linear_velocity: LinearVelocity::ZERO,
            external_force: ExternalForce::new(Vec3::ZERO).with_persistence(false),
        }
    }

    pub fn with_model(mut self, model: Entity) -> Self {
        self.controller.model = Some(model);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_bundle_physics_configuration() {
        let config = GameConfig::default();
        let bundle = ShipBundle::new(Transform::from_xyz(0.0, 20.0, 0.0), &config);

        assert_eq!(bundle.gravity_scale.0, 0.0);
        assert_eq!(bundle.linear_damping.0, 0.5);
        assert_eq!(bundle.angular_damping.0, 2.0);
        assert_eq!(bundle.mass.0, 1.0);
        assert!(!bundle.external_force.persistent);
        assert_eq!(bundle.controller.model, None);
    }

    #[test]
    fn test_ship_bundle_takes_attitude_from_spawn_rotation() {
        let config = GameConfig::default();
        let rotation = FlightState {
            yaw: 45.0,
            pitch: 10.0,
            visual_bank: 0.0,
        }
        .rotation();

        let bundle = ShipBundle::new(Transform::from_rotation(rotation), &config);

        assert!((bundle.state.yaw - 45.0).abs() < 1e-3);
        assert!((bundle.state.pitch - 10.0).abs() < 1e-3);
    }
}
