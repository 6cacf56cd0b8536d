//! Native playback loop.
//!
//! One iteration per tick: poll input, stop if asked, advance the script,
//! forward its sound cues, draw, present, then wait out the rest of the
//! tick. Stop requests are only looked at between ticks.

use crate::api::game::{Script, StageConfig, StageContext};
use crate::api::types::TickOutcome;
use crate::core::time::FramePacer;
use crate::input::queue::{InputQueue, InputSource};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{AudioSink, Renderer};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The script reached its terminal phase.
    Finished,
    /// Quit or Escape arrived.
    Requested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks the script was advanced.
    pub ticks: u32,
    pub reason: StopReason,
}

pub struct Driver<S: Script> {
    script: S,
    ctx: StageContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: StageConfig,
}

impl<S: Script> Driver<S> {
    pub fn new(script: S) -> Self {
        let config = script.config();
        Self {
            script,
            ctx: StageContext::new(),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            config,
        }
    }

    /// Run one tick: update, play cues, draw, present.
    pub fn step(&mut self, renderer: &mut dyn Renderer, audio: &mut dyn AudioSink) -> TickOutcome {
        self.ctx.clear_frame_data();
        let outcome = self.script.update(&mut self.ctx);

        for cue in self.ctx.sounds.iter().take(self.config.max_sounds) {
            audio.play(*cue);
        }

        self.render_buffer.clear();
        self.script.render(&mut self.render_buffer);
        renderer.draw(&self.render_buffer);
        renderer.present();

        outcome
    }

    /// Play to the end at the configured tick rate.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioSink,
    ) -> RunSummary {
        let mut pacer = FramePacer::new(self.config.tick_rate);
        self.run_with(input, renderer, audio, || pacer.wait())
    }

    /// Play to the end, calling `wait` between ticks.
    pub fn run_with(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioSink,
        mut wait: impl FnMut(),
    ) -> RunSummary {
        log::info!(
            "playback started: {}x{} at {} ticks/s",
            self.config.world_width,
            self.config.world_height,
            self.config.tick_rate
        );
        let mut ticks = 0;
        loop {
            input.poll(&mut self.input);
            let stop = self.input.stop_requested();
            self.input.drain();
            if stop {
                log::info!("playback stopped by request after {} ticks", ticks);
                return RunSummary {
                    ticks,
                    reason: StopReason::Requested,
                };
            }

            let outcome = self.step(renderer, audio);
            ticks += 1;
            if outcome.is_finished() {
                log::info!("playback finished after {} ticks", ticks);
                return RunSummary {
                    ticks,
                    reason: StopReason::Finished,
                };
            }
            wait();
        }
    }

    pub fn script(&self) -> &S {
        &self.script
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }
}
