use reel_engine::{
    AssetLoader, FixedTimestep, ImageHandle, ImageKind, InputEvent, InputQueue, ProtocolLayout,
    RenderBuffer, Script, SetupError, StageConfig, StageContext,
};
use reel_engine::bridge::protocol::NO_OVERLAY;

/// Generic scene runner for the browser.
///
/// Each concrete scene creates a `thread_local!` SceneRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly. The page calls `tick` once per
/// animation frame; at most one scene tick runs per call, so a slow page
/// plays the scene slower instead of skipping ahead.
pub struct SceneRunner<S: Script> {
    script: S,
    /// Kept so the page can resolve image handles to paths.
    assets: AssetLoader,
    ctx: StageContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: StageConfig,
    layout: ProtocolLayout,
    /// Flat buffer of sound cue ids for this tick.
    sound_buffer: Vec<u8>,
    ticks: u32,
    finished: bool,
}

impl<S: Script> SceneRunner<S> {
    /// Load the script from `assets` and wrap it in a runner.
    pub fn load(mut assets: AssetLoader) -> Result<Self, SetupError> {
        let script = S::load(&mut assets)?;
        let config = script.config();
        let timestep = FixedTimestep::new(config.fixed_dt());
        let layout = ProtocolLayout::from_config(&config);

        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Ok(Self {
            script,
            assets,
            ctx: StageContext::new(),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            sound_buffer,
            ticks: 0,
            finished: false,
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one page frame. Returns whether a scene tick happened.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        if self.input.stop_requested() {
            log::info!("scene stopped by request after {} ticks", self.ticks);
            self.input.drain();
            self.finish();
            return false;
        }
        self.input.drain();

        if self.timestep.accumulate(dt) == 0 {
            return false;
        }

        self.ctx.clear_frame_data();
        let outcome = self.script.update(&mut self.ctx);
        self.ticks += 1;

        self.render_buffer.clear();
        self.script.render(&mut self.render_buffer);

        self.layout.pack_sounds(
            self.ctx.sounds.iter().map(|cue| cue.id),
            &mut self.sound_buffer,
        );

        if outcome.is_finished() {
            log::info!("scene finished after {} ticks", self.ticks);
            self.finished = true;
        }
        true
    }

    /// Stop without drawing again. The page stops calling `tick`.
    fn finish(&mut self) {
        self.finished = true;
        self.render_buffer.clear();
        self.sound_buffer.clear();
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    /// Overlay alpha in 0..=255, or `NO_OVERLAY`.
    pub fn overlay_alpha(&self) -> f32 {
        self.render_buffer
            .overlay_alpha
            .map_or(NO_OVERLAY, |alpha| alpha as f32)
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    /// Path of a loaded image, or None for the placeholder and unknown handles.
    pub fn image_path(&self, handle: u32) -> Option<String> {
        let info = self.assets.image(ImageHandle(handle))?;
        match info.kind {
            ImageKind::File => Some(info.name.clone()),
            ImageKind::Placeholder { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn tick_rate(&self) -> u32 {
        self.config.tick_rate
    }

    // ---- Capacity accessors (read by the page via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn script(&self) -> &S {
        &self.script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_engine::{EmptySource, RenderInstance, SoundCue, TickOutcome, KEY_ESCAPE};

    const DT: f32 = 1.0 / 60.0;
    const CHIME: SoundCue = SoundCue::new(5, "chime");

    struct Blink {
        ticks: u32,
    }

    impl Script for Blink {
        fn load(_assets: &mut AssetLoader) -> Result<Self, SetupError> {
            Ok(Self { ticks: 0 })
        }

        fn update(&mut self, ctx: &mut StageContext) -> TickOutcome {
            self.ticks += 1;
            if self.ticks == 1 {
                ctx.emit_sound(CHIME);
            }
            if self.ticks == 3 {
                TickOutcome::Finished
            } else {
                TickOutcome::Continue
            }
        }

        fn render(&self, buffer: &mut RenderBuffer) {
            buffer.push(RenderInstance::default());
            buffer.set_overlay(Some(200));
        }
    }

    fn runner() -> SceneRunner<Blink> {
        SceneRunner::load(AssetLoader::new(EmptySource)).unwrap()
    }

    #[test]
    fn one_tick_per_frame_even_after_a_stall() {
        let mut r = runner();
        assert!(r.tick(DT * 5.0));
        assert_eq!(r.ticks(), 1);
        assert!(r.tick(DT));
        assert_eq!(r.ticks(), 2);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut r = runner();
        assert!(!r.tick(DT * 0.5));
        assert!(r.tick(DT * 0.6));
        assert_eq!(r.ticks(), 1);
    }

    #[test]
    fn exposes_draw_list_and_sounds() {
        let mut r = runner();
        r.tick(DT);
        assert_eq!(r.instance_count(), 1);
        assert_eq!(r.overlay_alpha(), 200.0);
        assert_eq!(r.sound_events_len(), 1);
        let ids = unsafe { std::slice::from_raw_parts(r.sound_events_ptr(), 1) };
        assert_eq!(ids, [CHIME.id as u8]);
        r.tick(DT);
        assert_eq!(r.sound_events_len(), 0);
    }

    #[test]
    fn stops_after_finish() {
        let mut r = runner();
        for _ in 0..3 {
            assert!(r.tick(DT));
        }
        assert!(r.is_finished());
        assert!(!r.tick(DT));
        assert_eq!(r.script().ticks, 3);
    }

    #[test]
    fn placeholder_has_no_path() {
        let r = runner();
        assert_eq!(r.image_path(0), None);
        assert_eq!(r.image_path(99), None);
    }

    #[test]
    fn escape_stops_before_the_next_tick() {
        let mut r = runner();
        r.tick(DT);
        r.push_input(InputEvent::KeyDown {
            key_code: KEY_ESCAPE,
        });
        assert!(!r.tick(DT));
        assert!(r.is_finished());
        assert_eq!(r.instance_count(), 0);
        assert_eq!(r.script().ticks, 1);
    }
}
