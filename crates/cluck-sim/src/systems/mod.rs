pub mod animation;
pub mod boss;
pub mod combat;
pub mod movement;
