//! The gate application state machine.
//!
//! Single-writer model: all state lives here and is mutated only from the
//! frame loop via input handlers and [`App::tick`]. Timers are deadline
//! fields advanced by frame deltas rather than spawned sleeps, so dropping
//! the `App` cancels everything at once and nothing can fire against a
//! torn-down instance.

use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use sprintgate_config::{Allowlist, GateConfig};
use sprintgate_types::{
    ButtonBob, Checklist, CredentialDraft, EffectTimer, LoadBarrier, ModalEffect, MotionLoop,
    UiOptions,
};

use crate::auth;
use crate::banner::BannerArt;
use crate::redirect::RedirectSink;
use crate::sequencer::{
    GUIDELINES_DELAY, LOGIN_DELAY, MIN_LOADER, MOTION_LEG, PROCEED_BOB_PERIOD, RevealTimeline,
    SHAKE_DURATION, SUBMIT_BOB_PERIOD, Sequencer,
};

/// The single user-visible error of the gate.
pub const INVALID_NOTICE: &str = "Invalid Username or Passcode";

const MODAL_POP: Duration = Duration::from_millis(250);

/// Which screen layer currently owns the foreground.
///
/// At most one modal is visible at a time; the short scheduled gaps between
/// modals pass through `Background`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Cinematic loader, until the reveal settles.
    Loading,
    /// Bare background with idle motion; no modal.
    Background,
    Guidelines,
    Login,
}

/// A modal scheduled to appear after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingModal {
    Guidelines,
    Login,
}

/// What the guidelines cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidelinesControl {
    Item(usize),
    Cancel,
    Proceed,
}

/// Constructor parts for [`App`]; tests substitute a recording redirect.
pub struct AppParts {
    pub allowlist: Allowlist,
    pub contest_url: String,
    pub ui_options: UiOptions,
    pub redirect: Box<dyn RedirectSink>,
}

pub struct App {
    allowlist: Allowlist,
    contest_url: String,
    ui_options: UiOptions,
    redirect: Box<dyn RedirectSink>,

    // Load gating
    barrier: LoadBarrier,
    min_loader: Option<EffectTimer>,
    banner_rx: Option<oneshot::Receiver<BannerArt>>,
    banner: Option<BannerArt>,

    // Animation sequencing
    sequencer: Sequencer,
    pending_modal: Option<(PendingModal, EffectTimer)>,

    // Modal flow
    phase: GatePhase,
    checklist: Checklist,
    guidelines_cursor: usize,
    draft: CredentialDraft,
    notice: Option<&'static str>,

    // Effect handles; every transition clears the handles it supersedes.
    modal_effect: Option<ModalEffect>,
    proceed_shake: Option<ModalEffect>,
    submit_shake: Option<ModalEffect>,
    proceed_bob: Option<ButtonBob>,
    submit_bob: Option<ButtonBob>,

    redirect_fired: bool,
    ui_elapsed: Duration,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(config: &GateConfig, redirect: Box<dyn RedirectSink>) -> Self {
        Self::from_parts(AppParts {
            allowlist: config.allowlist(),
            contest_url: config.contest_url(),
            ui_options: config.ui_options(),
            redirect,
        })
    }

    #[must_use]
    pub fn from_parts(parts: AppParts) -> Self {
        Self {
            allowlist: parts.allowlist,
            contest_url: parts.contest_url,
            ui_options: parts.ui_options,
            redirect: parts.redirect,
            barrier: LoadBarrier::new(),
            min_loader: Some(EffectTimer::new(MIN_LOADER)),
            banner_rx: None,
            banner: None,
            sequencer: Sequencer::Idle,
            pending_modal: None,
            phase: GatePhase::Loading,
            checklist: Checklist::new(),
            guidelines_cursor: 0,
            draft: CredentialDraft::new(),
            notice: None,
            modal_effect: None,
            proceed_shake: None,
            submit_shake: None,
            proceed_bob: None,
            submit_bob: None,
            redirect_fired: false,
            ui_elapsed: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    /// Start loading the background banner off the frame loop.
    pub fn load_banner(&mut self, raw: &'static str) {
        self.banner_rx = Some(crate::banner::spawn_banner_load(raw));
    }

    /// Per-frame update: poll the asset channel, then advance all clocks by
    /// the real frame delta.
    pub fn tick(&mut self) {
        self.poll_banner();
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    fn poll_banner(&mut self) {
        let Some(rx) = &mut self.banner_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(art) => {
                self.banner_rx = None;
                self.on_banner_loaded(art);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.banner_rx = None;
                warn!("banner load channel closed before delivery");
            }
        }
    }

    /// Asset-ready signal. Idempotent: later deliveries are ignored.
    pub fn on_banner_loaded(&mut self, art: BannerArt) {
        if self.banner.is_some() {
            return;
        }
        info!(
            width = art.width(),
            height = art.height(),
            "background banner loaded"
        );
        self.banner = Some(art);
        self.barrier.set_asset_ready();
        self.evaluate_barrier();
    }

    /// Advance every running clock by `delta`. Exposed for deterministic
    /// tests; `tick()` feeds it real frame deltas.
    pub fn advance(&mut self, delta: Duration) {
        self.ui_elapsed = self.ui_elapsed.saturating_add(delta);

        // Scheduled modal shows run first so a timer armed later in this
        // pass is not consumed by the same delta that armed it.
        let pending_fired = match &mut self.pending_modal {
            Some((_, timer)) => {
                timer.advance(delta);
                timer.is_finished()
            }
            None => false,
        };
        if pending_fired
            && let Some((target, _)) = self.pending_modal.take()
        {
            match target {
                PendingModal::Guidelines => self.show_guidelines(),
                PendingModal::Login => self.show_login(),
            }
        }

        let reveal_done = if let Sequencer::Revealing(timeline) = &mut self.sequencer {
            timeline.advance(delta);
            timeline.is_finished()
        } else {
            false
        };
        if reveal_done {
            self.finish_reveal();
        } else if let Sequencer::IdleMotion(motion) = &mut self.sequencer
            && !self.ui_options.reduced_motion
        {
            motion.advance(delta);
        }

        // The minimum-loader timer runs last: a reveal it triggers starts
        // animating on the next frame.
        if let Some(timer) = &mut self.min_loader {
            timer.advance(delta);
            if timer.is_finished() {
                self.min_loader = None;
                debug!("minimum loader duration elapsed");
                self.barrier.set_min_elapsed();
                self.evaluate_barrier();
            }
        }

        Self::advance_effect(&mut self.modal_effect, delta);
        Self::advance_effect(&mut self.proceed_shake, delta);
        Self::advance_effect(&mut self.submit_shake, delta);
        if let Some(bob) = &mut self.proceed_bob {
            bob.advance(delta);
        }
        if let Some(bob) = &mut self.submit_bob {
            bob.advance(delta);
        }
    }

    fn advance_effect(slot: &mut Option<ModalEffect>, delta: Duration) {
        if let Some(effect) = slot {
            effect.advance(delta);
            if effect.is_finished() {
                *slot = None;
            }
        }
    }

    /// Evaluate the two-flag join. Called on each flag update, never from
    /// the render path; both flags are monotonic so this fires the reveal
    /// at most once per instance.
    fn evaluate_barrier(&mut self) {
        if !self.barrier.is_open() || self.phase != GatePhase::Loading {
            return;
        }
        self.begin_reveal();
    }

    fn begin_reveal(&mut self) {
        // Re-entry guard: cancel any timeline a previous trigger started.
        self.sequencer = Sequencer::Idle;
        self.pending_modal = None;

        if self.ui_options.reduced_motion {
            info!("reveal skipped (reduced motion)");
            self.finish_reveal();
            return;
        }
        info!("reveal started");
        self.sequencer = Sequencer::Revealing(RevealTimeline::new());
    }

    fn finish_reveal(&mut self) {
        debug!("reveal settled");
        self.phase = GatePhase::Background;
        self.sequencer = Sequencer::IdleMotion(MotionLoop::new(MOTION_LEG));
        self.pending_modal = Some((
            PendingModal::Guidelines,
            EffectTimer::new(GUIDELINES_DELAY),
        ));
    }

    fn show_guidelines(&mut self) {
        self.phase = GatePhase::Guidelines;
        self.guidelines_cursor = 0;
        if self.ui_options.reduced_motion {
            self.modal_effect = None;
        } else {
            self.modal_effect = Some(ModalEffect::pop_scale(MODAL_POP));
            self.proceed_bob = Some(ButtonBob::new(PROCEED_BOB_PERIOD));
        }
    }

    fn show_login(&mut self) {
        self.phase = GatePhase::Login;
        if self.ui_options.reduced_motion {
            self.modal_effect = None;
        } else {
            self.modal_effect = Some(ModalEffect::pop_scale(MODAL_POP));
            self.submit_bob = Some(ButtonBob::new(SUBMIT_BOB_PERIOD));
        }
    }

    // === Guidelines modal ===

    /// Number of cursor positions: the five items, then Cancel, then Proceed.
    const GUIDELINES_POSITIONS: usize = 7;

    #[must_use]
    pub fn guidelines_control(&self) -> GuidelinesControl {
        match self.guidelines_cursor {
            i if i < self.checklist.len() => GuidelinesControl::Item(i),
            5 => GuidelinesControl::Cancel,
            _ => GuidelinesControl::Proceed,
        }
    }

    pub fn guidelines_cursor_up(&mut self) {
        self.guidelines_cursor = self.guidelines_cursor.saturating_sub(1);
    }

    pub fn guidelines_cursor_down(&mut self) {
        self.guidelines_cursor = (self.guidelines_cursor + 1).min(Self::GUIDELINES_POSITIONS - 1);
    }

    /// Space: toggle the focused checklist item (no-op on the controls).
    pub fn toggle_guidelines_item(&mut self) {
        if let GuidelinesControl::Item(index) = self.guidelines_control() {
            self.checklist.toggle(index);
        }
    }

    /// Enter: toggle an item, cancel, or attempt to proceed.
    pub fn activate_guidelines(&mut self) {
        match self.guidelines_control() {
            GuidelinesControl::Item(index) => self.checklist.toggle(index),
            GuidelinesControl::Cancel => self.cancel_guidelines(),
            GuidelinesControl::Proceed => self.proceed_to_login(),
        }
    }

    /// Proceed is enabled only once all five items are checked. While
    /// disabled, activation produces the rejection shake and no transition.
    pub fn proceed_to_login(&mut self) {
        if !self.checklist.all_checked() {
            debug!("proceed rejected: checklist incomplete");
            if !self.ui_options.reduced_motion {
                self.proceed_shake = Some(ModalEffect::shake(SHAKE_DURATION));
            }
            return;
        }
        self.hide_guidelines();
        self.pending_modal = Some((PendingModal::Login, EffectTimer::new(LOGIN_DELAY)));
    }

    /// Cancel: hide guidelines, flow rests at the background view.
    pub fn cancel_guidelines(&mut self) {
        self.hide_guidelines();
        self.pending_modal = None;
    }

    fn hide_guidelines(&mut self) {
        self.phase = GatePhase::Background;
        self.proceed_bob = None;
        self.proceed_shake = None;
        self.modal_effect = None;
    }

    // === Login modal ===

    pub fn login_insert(&mut self, ch: char) {
        self.draft.insert_char(ch);
    }

    pub fn login_delete(&mut self) {
        self.draft.delete_char();
    }

    pub fn login_switch_field(&mut self) {
        self.draft.switch_focus();
    }

    /// Live validity indicator, recomputed on every keystroke. A
    /// convenience signal only; submission revalidates.
    #[must_use]
    pub fn credentials_valid(&self) -> bool {
        auth::validate(
            &self.allowlist,
            self.draft.identifier(),
            self.draft.passcode(),
        )
    }

    /// Submit: revalidate, then redirect or reject. Rejection keeps the
    /// modal open with inputs preserved for correction.
    pub fn submit_login(&mut self) {
        if auth::validate(
            &self.allowlist,
            self.draft.identifier(),
            self.draft.passcode(),
        ) {
            self.redirect_fired = true;
            info!("credentials accepted, opening contest page");
            if let Err(err) = self.redirect.open(&self.contest_url) {
                warn!("failed to open contest page: {err}");
            }
        } else {
            debug!("submission rejected: invalid credentials");
            if !self.ui_options.reduced_motion {
                self.submit_shake = Some(ModalEffect::shake(SHAKE_DURATION));
            }
            self.notice = Some(INVALID_NOTICE);
        }
    }

    /// Close: hide login and clear both fields; no partial state persists.
    pub fn close_login(&mut self) {
        self.phase = GatePhase::Background;
        self.draft.clear();
        self.notice = None;
        self.submit_bob = None;
        self.submit_shake = None;
        self.modal_effect = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == GatePhase::Loading
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn barrier(&self) -> LoadBarrier {
        self.barrier
    }

    #[must_use]
    pub fn banner(&self) -> Option<&BannerArt> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    #[must_use]
    pub fn guidelines_cursor(&self) -> usize {
        self.guidelines_cursor
    }

    #[must_use]
    pub fn draft(&self) -> &CredentialDraft {
        &self.draft
    }

    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.modal_effect.as_ref()
    }

    #[must_use]
    pub fn proceed_shake(&self) -> Option<&ModalEffect> {
        self.proceed_shake.as_ref()
    }

    #[must_use]
    pub fn submit_shake(&self) -> Option<&ModalEffect> {
        self.submit_shake.as_ref()
    }

    #[must_use]
    pub fn proceed_bob(&self) -> Option<&ButtonBob> {
        self.proceed_bob.as_ref()
    }

    #[must_use]
    pub fn submit_bob(&self) -> Option<&ButtonBob> {
        self.submit_bob.as_ref()
    }

    #[must_use]
    pub fn pending_modal(&self) -> Option<PendingModal> {
        self.pending_modal.as_ref().map(|(target, _)| *target)
    }

    #[must_use]
    pub fn redirect_fired(&self) -> bool {
        self.redirect_fired
    }

    #[must_use]
    pub fn contest_url(&self) -> &str {
        &self.contest_url
    }

    /// Spinner cadence: ~10 Hz, independent of render FPS.
    #[must_use]
    pub fn spinner_tick(&self) -> usize {
        (self.ui_elapsed.as_millis() / 100) as usize
    }
}
