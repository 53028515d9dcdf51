pub mod body;
pub mod elements;

pub use body::Body;
pub use elements::KeplerianElements;
