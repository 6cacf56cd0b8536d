/// Handle to a loaded (or placeholder) image in the `ImageRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

impl ImageHandle {
    /// Handle of the shared solid-colour placeholder. Always registered first.
    pub const PLACEHOLDER: ImageHandle = ImageHandle(0);

    pub fn is_placeholder(self) -> bool {
        self == Self::PLACEHOLDER
    }
}

/// Handle to a loaded sound in the `AssetLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// A named audio trigger emitted by scene logic.
/// `id` is what crosses the wasm boundary; `name` keys the asset manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundCue {
    pub id: u32,
    pub name: &'static str,
}

impl SoundCue {
    pub const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// Result of advancing a script by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// The script reached its terminal state; the driver should stop.
    Finished,
}

impl TickOutcome {
    pub fn is_finished(self) -> bool {
        self == TickOutcome::Finished
    }
}
