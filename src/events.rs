/// Something the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    InlinePrev,
    InlineNext,
    ModalPrev,
    ModalNext,
    CloseControl,
    /// The overlay backdrop itself, outside the modal content.
    Backdrop,
    /// Anything inside the modal content.
    ModalContent,
    /// A rendered track slot, identified by the display index it carries.
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Inputs delivered to the carousel, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(Target),
    PointerEnter,
    PointerLeave,
    Key(Key),
    /// The animated slide finished.
    TransitionEnd,
    /// Viewport resized to this width.
    Resize(u32),
    /// Auto-advance timer fired.
    Tick,
}

/// Whether handling an input started a track animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    None,
    Animated,
    Instant,
}
