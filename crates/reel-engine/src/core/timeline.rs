//! Fixed-frame script timeline.
//!
//! A scene clock plus an ordered list of phases, each starting at a literal
//! tick. `step()` reports which phase the current tick belongs to and
//! whether that phase was entered on this very tick, then advances the
//! clock. On-enter actions keyed off `entered` therefore fire exactly once.
//! The last phase is terminal and open-ended.

use thiserror::Error;

/// Why a phase list was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("timeline has no phases")]
    Empty,
    #[error("first phase starts at tick {0}, not 0")]
    LateStart(u32),
    #[error("phase starting at tick {next} does not come after tick {prev}")]
    OutOfOrder { prev: u32, next: u32 },
}

/// Monotonic tick counter with a fixed nominal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneClock {
    frame: u32,
    total: u32,
}

impl SceneClock {
    pub fn new(total: u32) -> Self {
        Self { frame: 0, total }
    }

    /// Current tick.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Nominal scene length in ticks.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    /// Whether the clock reached the nominal length.
    pub fn is_elapsed(&self) -> bool {
        self.frame >= self.total
    }
}

/// One tick of timeline output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep<P> {
    /// Tick this step describes.
    pub frame: u32,
    /// Phase containing `frame`.
    pub phase: P,
    /// True only on the first tick of `phase`.
    pub entered: bool,
    /// True when `phase` is the terminal phase.
    pub terminal: bool,
}

#[derive(Debug, Clone)]
pub struct Timeline<P> {
    /// (start tick, phase), strictly increasing starts, first start is 0.
    phases: Vec<(u32, P)>,
    clock: SceneClock,
    current: Option<usize>,
}

impl<P: Copy + PartialEq> Timeline<P> {
    /// Build a timeline. `phases` must be non-empty, start at tick 0, and
    /// have strictly increasing start ticks.
    pub fn new(phases: Vec<(u32, P)>, total: u32) -> Result<Self, TimelineError> {
        let first = phases.first().ok_or(TimelineError::Empty)?;
        if first.0 != 0 {
            return Err(TimelineError::LateStart(first.0));
        }
        if let Some(w) = phases.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err(TimelineError::OutOfOrder {
                prev: w[0].0,
                next: w[1].0,
            });
        }
        Ok(Self {
            phases,
            clock: SceneClock::new(total),
            current: None,
        })
    }

    /// Describe the current tick, then advance the clock by one.
    pub fn step(&mut self) -> PhaseStep<P> {
        let frame = self.clock.frame();
        let index = self.index_at(frame);
        let entered = self.current != Some(index);
        self.current = Some(index);
        self.clock.advance();

        PhaseStep {
            frame,
            phase: self.phases[index].1,
            entered,
            terminal: index == self.phases.len() - 1,
        }
    }

    fn index_at(&self, frame: u32) -> usize {
        // Starts are sorted and the first is 0, so this is never 0 - 1.
        self.phases.partition_point(|&(start, _)| start <= frame) - 1
    }

    /// Phase containing `frame`, without touching the clock.
    pub fn phase_at(&self, frame: u32) -> P {
        self.phases[self.index_at(frame)].1
    }

    /// Start tick of `phase`, if it is part of this timeline.
    pub fn start_of(&self, phase: P) -> Option<u32> {
        self.phases.iter().find(|(_, p)| *p == phase).map(|&(s, _)| s)
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    /// The next tick `step()` will describe.
    pub fn frame(&self) -> u32 {
        self.clock.frame()
    }

    /// Phase of the last stepped tick.
    pub fn current(&self) -> Option<P> {
        self.current.map(|i| self.phases[i].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Open,
        Middle,
        Close,
        End,
    }

    fn timeline() -> Timeline<Act> {
        Timeline::new(
            vec![(0, Act::Open), (10, Act::Middle), (20, Act::Close), (30, Act::End)],
            30,
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_layouts() {
        assert_eq!(Timeline::<Act>::new(vec![], 10).unwrap_err(), TimelineError::Empty);
        assert_eq!(
            Timeline::new(vec![(5, Act::Open)], 10).unwrap_err(),
            TimelineError::LateStart(5)
        );
        assert!(Timeline::new(vec![(0, Act::Open), (0, Act::End)], 10).is_err());
        assert_eq!(
            Timeline::new(vec![(0, Act::Open), (9, Act::Middle), (3, Act::End)], 10).unwrap_err(),
            TimelineError::OutOfOrder { prev: 9, next: 3 }
        );
    }

    #[test]
    fn entries_are_edge_triggered() {
        let mut tl = timeline();
        let mut entries = Vec::new();
        for _ in 0..40 {
            let step = tl.step();
            if step.entered {
                entries.push((step.frame, step.phase));
            }
        }
        assert_eq!(
            entries,
            vec![(0, Act::Open), (10, Act::Middle), (20, Act::Close), (30, Act::End)]
        );
    }

    #[test]
    fn boundaries_are_half_open() {
        let tl = timeline();
        assert_eq!(tl.phase_at(9), Act::Open);
        assert_eq!(tl.phase_at(10), Act::Middle);
        assert_eq!(tl.phase_at(29), Act::Close);
        assert_eq!(tl.phase_at(30), Act::End);
        assert_eq!(tl.phase_at(10_000), Act::End);
    }

    #[test]
    fn terminal_phase_is_flagged() {
        let mut tl = timeline();
        for _ in 0..30 {
            assert!(!tl.step().terminal);
        }
        let step = tl.step();
        assert!(step.terminal);
        assert_eq!(step.phase, Act::End);
        assert!(tl.clock().is_elapsed());
    }

    #[test]
    fn clock_advances_once_per_step() {
        let mut tl = timeline();
        assert_eq!(tl.frame(), 0);
        assert_eq!(tl.current(), None);
        tl.step();
        tl.step();
        assert_eq!(tl.frame(), 2);
        assert_eq!(tl.current(), Some(Act::Open));
        assert_eq!(tl.start_of(Act::Close), Some(20));
    }
}
