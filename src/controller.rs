//! The carousel controller: owns the index state, the working track, the modal
//! and pause bookkeeping, and drives an injected [`Surface`].

use tracing::{debug, info, warn};

use crate::breakpoints::Breakpoints;
use crate::error::Error;
use crate::events::{Input, Key, Motion, Target};
use crate::item::ItemSequence;
use crate::modal::{ModalPresenter, ModalState};
use crate::nav::{Navigator, Phase};
use crate::pause::{PausePolicy, PauseSet, PauseSource};
use crate::position::PositionUpdater;
use crate::surface::{Role, Surface};
use crate::track::WorkingTrack;

#[derive(Debug, Clone)]
pub struct CarouselOptions {
    pub breakpoints: Breakpoints,
    pub pause_policy: PausePolicy,
    /// Viewport width at construction time.
    pub viewport_width: u32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            pause_policy: PausePolicy::default(),
            viewport_width: 1280,
        }
    }
}

/// Point-in-time view of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub current: i64,
    pub visible: usize,
    pub real_index: usize,
    pub phase: Phase,
    pub modal: ModalState,
    pub paused: bool,
    pub enabled: bool,
}

pub struct Carousel<S: Surface> {
    surface: S,
    items: ItemSequence,
    breakpoints: Breakpoints,
    track: WorkingTrack,
    nav: Navigator,
    position: PositionUpdater,
    modal: ModalPresenter,
    pause: PauseSet,
}

impl<S: Surface> Carousel<S> {
    /// Bind a carousel to `surface`.
    ///
    /// An empty `items` sequence yields a disabled carousel that ignores every
    /// input.
    ///
    /// # Errors
    /// Returns [`Error::MissingElement`] if the surface lacks any required role.
    pub fn new(surface: S, items: ItemSequence, options: CarouselOptions) -> Result<Self, Error> {
        if let Some(role) = Role::ALL.iter().find(|role| !surface.provides(**role)) {
            return Err(Error::MissingElement(*role));
        }

        let visible = options.breakpoints.visible_for(options.viewport_width);
        let count = items.len();
        let mut carousel = Self {
            surface,
            track: WorkingTrack::new(count, visible),
            nav: Navigator::new(count, visible),
            items,
            breakpoints: options.breakpoints,
            position: PositionUpdater::default(),
            modal: ModalPresenter::default(),
            pause: PauseSet::new(options.pause_policy),
        };

        if count == 0 {
            warn!("no items; carousel disabled");
            return Ok(carousel);
        }

        carousel.render_track();
        carousel.move_track(false);
        info!(
            items = count,
            visible,
            width = options.viewport_width,
            "carousel ready"
        );
        Ok(carousel)
    }

    /// Apply one input. Returns the kind of track motion it started, so the
    /// caller knows whether a transition-end event will follow.
    pub fn handle(&mut self, input: Input) -> Motion {
        if !self.is_enabled() {
            return Motion::None;
        }
        match input {
            Input::Click(target) => self.click(target),
            Input::PointerEnter => {
                self.pause.hold(PauseSource::Hover);
                Motion::None
            }
            Input::PointerLeave => {
                self.pause.release(PauseSource::Hover);
                self.pause.release(PauseSource::ManualNav);
                Motion::None
            }
            Input::Key(key) => self.key(key),
            Input::TransitionEnd => self.transition_end(),
            Input::Resize(width) => self.resize(width),
            Input::Tick => self.tick(),
        }
    }

    fn click(&mut self, target: Target) -> Motion {
        match target {
            Target::InlinePrev => {
                let motion = self.prev();
                self.pause.hold(PauseSource::ManualNav);
                motion
            }
            Target::InlineNext => {
                let motion = self.next();
                self.pause.hold(PauseSource::ManualNav);
                motion
            }
            Target::ModalPrev => self.prev(),
            Target::ModalNext => self.next(),
            Target::CloseControl | Target::Backdrop => {
                self.close_modal();
                Motion::None
            }
            Target::ModalContent => Motion::None,
            Target::Item(display_index) => self.open_modal(display_index),
        }
    }

    fn key(&mut self, key: Key) -> Motion {
        if !self.modal.state().is_open() {
            return Motion::None;
        }
        match key {
            Key::Escape => {
                self.close_modal();
                Motion::None
            }
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => Motion::None,
        }
    }

    pub fn next(&mut self) -> Motion {
        self.step(1)
    }

    pub fn prev(&mut self) -> Motion {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> Motion {
        if !self.is_enabled() {
            return Motion::None;
        }
        self.nav.step(delta);
        self.move_track(true);
        self.refresh_modal();
        Motion::Animated
    }

    /// Show the overlay for the item with `display_index` and bring it to the
    /// leading edge of the track.
    pub fn open_modal(&mut self, display_index: usize) -> Motion {
        if display_index >= self.items.len() {
            warn!(
                display_index,
                items = self.items.len(),
                "ignoring click on unknown item"
            );
            return Motion::None;
        }
        let previous = self.nav.real_index();
        self.nav.seek(display_index);
        self.move_track(true);

        let real_index = self.nav.real_index();
        self.modal.show(&mut self.surface, &self.items, real_index);
        self.pause.hold(PauseSource::Modal);
        info!(previous, real_index, "modal opened");
        Motion::Animated
    }

    pub fn close_modal(&mut self) {
        if !self.modal.state().is_open() {
            return;
        }
        self.modal.hide(&mut self.surface);
        self.pause.release(PauseSource::Modal);
        info!(paused = self.pause.is_paused(), "modal closed");
    }

    fn refresh_modal(&mut self) {
        let real_index = self.nav.real_index();
        self.modal.refresh(&mut self.surface, &self.items, real_index);
    }

    fn transition_end(&mut self) -> Motion {
        match self.nav.transition_end() {
            Some(_) => {
                self.move_track(false);
                Motion::Instant
            }
            None => Motion::None,
        }
    }

    fn resize(&mut self, width: u32) -> Motion {
        let visible = self.breakpoints.visible_for(width);
        if visible == self.nav.visible() {
            return Motion::None;
        }
        let old = self.nav.visible();
        self.nav.rebase(visible);
        self.track.rebuild(self.items.len(), visible);
        self.render_track();
        self.move_track(false);
        info!(width, old, visible, real_index = self.nav.real_index(), "breakpoint changed");
        Motion::Instant
    }

    fn tick(&mut self) -> Motion {
        if self.pause.is_paused() {
            debug!("auto-advance paused");
            return Motion::None;
        }
        self.next()
    }

    /// Work deferred to the tick after an instant move: re-enable the
    /// transition effect and finish any index correction.
    pub fn run_deferred(&mut self) {
        if self.position.restore(&mut self.surface) {
            self.nav.settle();
        }
    }

    #[must_use]
    pub fn has_deferred(&self) -> bool {
        self.position.restore_pending()
    }

    fn render_track(&mut self) {
        let width = self.track.slot_width_pct();
        self.surface.render_track(self.track.slots(), width);
        self.surface.attach_item_handlers(self.track.slots());
    }

    fn move_track(&mut self, animate: bool) {
        let (current, visible) = (self.nav.current(), self.nav.visible());
        self.position.apply(&mut self.surface, current, visible, animate);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.nav.current(),
            visible: self.nav.visible(),
            real_index: self.nav.real_index(),
            phase: self.nav.phase(),
            modal: self.modal.state(),
            paused: self.pause.is_paused(),
            enabled: self.is_enabled(),
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[must_use]
    pub fn track(&self) -> &WorkingTrack {
        &self.track
    }

    #[must_use]
    pub fn items(&self) -> &ItemSequence {
        &self.items
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
