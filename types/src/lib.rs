//! Pure state and animation types for Sprintgate.
//!
//! No IO, no async, no ratatui dependency. Used by both the engine
//! (state ownership) and the tui (rendering/input).

mod animation;
mod barrier;
mod checklist;
mod credentials;
mod modal;
mod motion;
mod view;

pub use animation::{AnimPhase, EffectTimer, normalized_progress};
pub use barrier::LoadBarrier;
pub use checklist::{Checklist, ChecklistItem};
pub use credentials::{CredentialDraft, LoginField};
pub use modal::{ModalEffect, ModalEffectKind};
pub use motion::{ButtonBob, MotionLoop};
pub use view::UiOptions;
