//! Core engine for Sprintgate - gate state machine and orchestration.
//!
//! This crate contains the `App` state machine without TUI dependencies.
//! The flow it drives: cinematic loader -> reveal -> idle motion ->
//! guidelines modal -> login modal -> external redirect.

mod app;
mod auth;
mod banner;
mod redirect;
mod sequencer;


pub use app::{App, AppParts, GatePhase, GuidelinesControl, INVALID_NOTICE, PendingModal};
pub use auth::validate;
pub use banner::{BannerArt, spawn_banner_load};
pub use redirect::{BrowserRedirect, RedirectSink};
pub use sequencer::{
    BACKGROUND_REVEAL, GUIDELINES_DELAY, LOADER_FADE, LOGIN_DELAY, MIN_LOADER, MOTION_LEG,
    PROCEED_BOB_PERIOD, REVEAL_OVERLAP, RevealTimeline, SHAKE_DURATION, SUBMIT_BOB_PERIOD,
    Sequencer,
};

// Re-export the state types the TUI needs alongside the engine API.
pub use sprintgate_config::{Allowlist, GateConfig};
pub use sprintgate_types::{
    ButtonBob, Checklist, ChecklistItem, CredentialDraft, LoadBarrier, LoginField, ModalEffect,
    ModalEffectKind, MotionLoop, UiOptions,
};
