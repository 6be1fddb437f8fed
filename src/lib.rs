pub mod mat22;
pub mod utils;
pub mod vec2;

pub use mat22::Mat22;
pub use utils::is_valid_f64;
pub use vec2::Vec2;
