pub mod mat4;
pub mod ray;
pub mod transform;
pub mod vec3;
pub mod vec4;

pub use mat4::*;
pub use ray::*;
pub use transform::*;
pub use vec3::*;
pub use vec4::*;
