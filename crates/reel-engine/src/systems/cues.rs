//! Sound cue gate: each named cue plays at most once per scene run.
//!
//! Scripts call `CueGate::request` directly. Objects that need to trigger
//! cues get a `CueRequester` at construction; its requests queue on a
//! channel until the owning script calls `CueGate::collect` during the
//! same tick.

use std::collections::HashSet;

use crate::api::types::SoundCue;

/// The only capability an object gets for triggering audio.
pub trait CueSink {
    fn request(&mut self, cue: SoundCue);
}

/// Cloneable handle that forwards requests to its `CueGate`.
#[derive(Debug, Clone)]
pub struct CueRequester {
    tx: flume::Sender<SoundCue>,
}

impl CueSink for CueRequester {
    fn request(&mut self, cue: SoundCue) {
        // A dropped gate means the scene is gone; nothing left to play.
        let _ = self.tx.send(cue);
    }
}

/// Per-run registry of fired cues.
#[derive(Debug)]
pub struct CueGate {
    fired: HashSet<SoundCue>,
    /// Cues fired since the last `drain_played`.
    played: Vec<SoundCue>,
    tx: flume::Sender<SoundCue>,
    rx: flume::Receiver<SoundCue>,
}

impl CueGate {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            fired: HashSet::new(),
            played: Vec::new(),
            tx,
            rx,
        }
    }

    /// Handle for objects that request cues on their own.
    pub fn requester(&self) -> CueRequester {
        CueRequester { tx: self.tx.clone() }
    }

    /// Fire `cue` unless it already fired this run. Returns true if it fired.
    pub fn request(&mut self, cue: SoundCue) -> bool {
        if !self.fired.insert(cue) {
            return false;
        }
        log::debug!("cue '{}' fired", cue.name);
        self.played.push(cue);
        true
    }

    /// Pull queued requester messages through the gate.
    /// Returns how many of them actually fired.
    pub fn collect(&mut self) -> usize {
        let queued: Vec<SoundCue> = self.rx.try_iter().collect();
        queued.into_iter().filter(|&cue| self.request(cue)).count()
    }

    /// Cues that fired since the previous drain, in firing order.
    pub fn drain_played(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.played.drain(..)
    }

    pub fn has_fired(&self, cue: SoundCue) -> bool {
        self.fired.contains(&cue)
    }
}

impl Default for CueGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CueSink for CueGate {
    fn request(&mut self, cue: SoundCue) {
        CueGate::request(self, cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUMP: SoundCue = SoundCue::new(0, "jump");
    const START: SoundCue = SoundCue::new(1, "start");

    #[test]
    fn second_request_is_ignored() {
        let mut gate = CueGate::new();
        assert!(gate.request(JUMP));
        assert!(!gate.request(JUMP));
        let played: Vec<_> = gate.drain_played().collect();
        assert_eq!(played, vec![JUMP]);
    }

    #[test]
    fn distinct_cues_fire_independently() {
        let mut gate = CueGate::new();
        gate.request(JUMP);
        gate.request(START);
        assert!(gate.has_fired(JUMP));
        assert!(gate.has_fired(START));
        assert_eq!(gate.drain_played().count(), 2);
    }

    #[test]
    fn requester_goes_through_the_gate() {
        let mut gate = CueGate::new();
        let mut requester = gate.requester();
        requester.request(JUMP);
        requester.request(JUMP);
        assert_eq!(gate.collect(), 1);

        gate.request(JUMP);
        let played: Vec<_> = gate.drain_played().collect();
        assert_eq!(played, vec![JUMP]);
    }

    #[test]
    fn fired_state_survives_drain() {
        let mut gate = CueGate::new();
        gate.request(START);
        gate.drain_played().for_each(drop);
        assert!(!gate.request(START));
        assert_eq!(gate.drain_played().count(), 0);
    }

    #[test]
    fn fresh_gate_forgets_previous_run() {
        let mut first = CueGate::new();
        first.request(JUMP);
        let mut second = CueGate::new();
        assert!(second.request(JUMP));
    }
}
