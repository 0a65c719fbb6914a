pub mod rotation_matrix;
pub mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
