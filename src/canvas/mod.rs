pub mod element;
pub mod playground;

pub use playground::Playground;
