//! Simulation module
//!
//! Everything the game does per frame lives here. No platform or DOM access:
//! the host injects the viewport, forwards input events and supplies a
//! `Surface` plus the frame delta to `GameEngine::render`.

pub mod camera;
pub mod column;
pub mod engine;
pub mod events;
pub mod hitbox;
pub mod input;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod timer;

pub use camera::Camera;
pub use column::{Column, ColumnShape};
pub use engine::{EngineSnapshot, GameEngine, ShotSpawner};
pub use events::{EventsEngine, Handler, NamedEvent, Subscriber};
pub use hitbox::CircleHitBox;
pub use input::{InputEvent, Key};
pub use player::{KeyState, Player, PlayerEvent, Shot};
pub use pool::{Pool, Poolable, SlotState};
pub use projectile::Projectile;
pub use timer::Timer;
