pub mod kinematic_body;

pub use kinematic_body::KinematicBody;
