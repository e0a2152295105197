pub mod cameras;
pub mod layouts;
pub mod wall;
