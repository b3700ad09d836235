pub mod lookup;
pub mod register;
pub mod unregister;
pub mod update;

pub use lookup::*;
pub use register::*;
pub use unregister::*;
pub use update::*;
