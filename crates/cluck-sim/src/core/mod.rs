pub mod clock;
pub mod physics;
pub mod scene;
