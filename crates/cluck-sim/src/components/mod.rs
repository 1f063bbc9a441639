pub mod animation;
pub mod body;
pub mod boss;
pub mod entity;
pub mod health;
pub mod hitbox;
pub mod layer;
