//! Shell ballistics: atmosphere, penetration and the trajectory sweep.

pub mod angles;
pub mod atmosphere;
pub mod penetration;
pub mod trajectory;

pub use angles::AngleTable;
pub use penetration::{penetration_mm, shell_penetration};
pub use trajectory::simulate;
