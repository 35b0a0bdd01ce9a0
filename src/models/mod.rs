pub mod advice;
pub mod edition;
pub mod plant;
pub mod season;

pub use advice::*;
pub use edition::*;
pub use plant::*;
pub use season::*;
