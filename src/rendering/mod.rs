pub mod camera;
pub mod particles;
