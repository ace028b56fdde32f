pub mod singleton;
pub mod truthy;

pub use self::singleton::singleton;
pub use self::truthy::Truthy;
