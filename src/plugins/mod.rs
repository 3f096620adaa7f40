pub mod camera;
pub mod flight;
pub mod input;
pub mod lighting;
pub mod scene;

pub use camera::CameraPlugin;
pub use flight::FlightPlugin;
pub use input::PilotInputPlugin;
pub use lighting::LightingPlugin;
pub use scene::ScenePlugin;
