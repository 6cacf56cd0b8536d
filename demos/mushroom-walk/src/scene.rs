use glam::Vec2;
use reel_engine::*;

use crate::config::{Placement, SceneConfig};

pub const JUMP: SoundCue = SoundCue::new(0, "jump");
pub const START: SoundCue = SoundCue::new(1, "start");

const BACKDROPS: [&str; 2] = ["sky_background.png", "mountain.png"];
const JUMP_FRAME: &str = "dani_jump01.png";
const CUE_SOUNDS: [(SoundCue, &str); 2] = [
    (JUMP, "player_jump_groan01.ogg"),
    (START, "game_start.ogg"),
];

/// `prefix01suffix`, `prefix02suffix`, ... up to `count`.
fn numbered(prefix: &str, count: u32, suffix: &str) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i:02}{suffix}")).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeIn,
    CharacterEntry,
    MushroomGrowth,
    MushroomBurst,
    SatelliteActivation,
    Conclusion,
    FadeOut,
    End,
}

/// A walker crosses the hills, hops once, a mushroom sprouts and bursts,
/// a satellite dish lights up, and everything fades to black.
pub struct Cutscene {
    config: SceneConfig,
    timeline: Timeline<Phase>,
    fade: FadeTransition,
    cues: CueGate,
    /// Cues that have a playable sound.
    sounds: Vec<(SoundCue, SoundHandle)>,
    backdrops: Vec<ImageHandle>,
    character: Character,
    mushroom: AnimatedSprite,
    explosion: AnimatedSprite,
    satellite: AnimatedSprite,
    clouds: Vec<ParallaxCloud>,
}

impl Cutscene {
    pub fn with_config(assets: &mut AssetLoader, config: SceneConfig) -> Result<Self, SetupError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(config.world_width) && positive(config.world_height)) {
            return Err(SetupError::Config(format!(
                "world size {}x{} is not finite and positive",
                config.world_width, config.world_height
            )));
        }
        if !(0.0..=1.0).contains(&config.character.jump_trigger_fraction) {
            return Err(SetupError::Config(format!(
                "jump_trigger_fraction {} is outside [0, 1]",
                config.character.jump_trigger_fraction
            )));
        }
        if config.fade_out_ticks == 0 || config.fade_out_ticks > config.total_ticks {
            return Err(SetupError::Config(format!(
                "fade_out_ticks {} must be in 1..={}",
                config.fade_out_ticks, config.total_ticks
            )));
        }

        let p = config.phases;
        let timeline = Timeline::new(
            vec![
                (0, Phase::FadeIn),
                (p.character_entry, Phase::CharacterEntry),
                (p.mushroom_growth, Phase::MushroomGrowth),
                (p.mushroom_burst, Phase::MushroomBurst),
                (p.satellite_activation, Phase::SatelliteActivation),
                (p.conclusion, Phase::Conclusion),
                (config.fade_out_start(), Phase::FadeOut),
                (config.total_ticks, Phase::End),
            ],
            config.total_ticks,
        )?;

        let backdrops = assets.load_images(BACKDROPS);
        let sounds = CUE_SOUNDS
            .iter()
            .filter_map(|&(cue, name)| assets.load_sound(name).map(|handle| (cue, handle)))
            .collect();

        let cues = CueGate::new();
        let c = &config.character;
        let character = Character::new(CharacterConfig {
            walk_frames: assets.load_images(numbered("dani_walk", 5, ".png")),
            jump_frame: assets.load_image(JUMP_FRAME),
            frame_delay: c.frame_delay,
            size: Vec2::from(c.size),
            motion: MotionParams {
                start_x: c.start_x,
                target_x: config.target_x(),
                base_y: c.base_y,
                walk_ticks: c.walk_ticks,
                jump_trigger_x: config.jump_trigger_x(),
                jump_ticks: c.jump_ticks,
                jump_height: c.jump_height,
            },
            jump_cue: JUMP,
            cues: Box::new(cues.requester()),
        });

        let mut sprite = |place: Placement, prefix: &str, count| {
            AnimatedSprite::new(
                Vec2::from(place.pos),
                Vec2::from(place.size),
                assets.load_images(numbered(prefix, count, ".png")),
                config.sprite_frame_delay,
                config.sprite_fade_ticks,
            )
        };
        let mushroom = sprite(config.mushroom, "mushroom_growing", 8);
        let explosion = sprite(config.explosion, "mushroom_bursting", 13);
        let satellite = sprite(config.satellite, "satellite_dish_signal_activating", 3);

        let cloud_frames = assets.load_images(numbered("cloud", 20, "_idle.png"));
        let clouds = config
            .clouds
            .iter()
            .map(|cloud| {
                ParallaxCloud::new(
                    Vec2::new(cloud.x, cloud.y),
                    Vec2::from(config.cloud_size),
                    cloud.speed,
                    cloud.layer,
                    config.world_width,
                    cloud_frames.clone(),
                    config.cloud_frame_delay,
                )
            })
            .collect();

        Ok(Self {
            fade: FadeTransition::new(config.fade_in_ticks, config.fade_out_ticks),
            config,
            timeline,
            cues,
            sounds,
            backdrops,
            character,
            mushroom,
            explosion,
            satellite,
            clouds,
        })
    }

    /// One-shot action for the first tick of `phase`.
    fn enter(&mut self, phase: Phase, frame: u32) {
        log::info!("tick {}: {:?}", frame, phase);
        match phase {
            Phase::FadeIn => {}
            Phase::CharacterEntry => self.character.enter(),
            Phase::MushroomGrowth => self.mushroom.show(),
            Phase::MushroomBurst => {
                self.mushroom.hide();
                self.explosion.show();
                self.cues.request(JUMP);
            }
            Phase::SatelliteActivation => self.satellite.show(),
            Phase::Conclusion => {
                self.cues.request(START);
            }
            Phase::FadeOut => self.fade.begin_exit(),
            Phase::End => log::info!("scene complete"),
        }
    }

    /// Sound loaded for `cue`, if any.
    pub fn sound_for(&self, cue: SoundCue) -> Option<SoundHandle> {
        self.sounds.iter().find(|(c, _)| *c == cue).map(|&(_, h)| h)
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn mushroom(&self) -> &AnimatedSprite {
        &self.mushroom
    }

    pub fn explosion(&self) -> &AnimatedSprite {
        &self.explosion
    }

    pub fn satellite(&self) -> &AnimatedSprite {
        &self.satellite
    }

    pub fn clouds(&self) -> &[ParallaxCloud] {
        &self.clouds
    }

    pub fn fade(&self) -> &FadeTransition {
        &self.fade
    }

    pub fn cues(&self) -> &CueGate {
        &self.cues
    }

    pub fn phase(&self) -> Option<Phase> {
        self.timeline.current()
    }
}

impl Script for Cutscene {
    fn load(assets: &mut AssetLoader) -> Result<Self, SetupError> {
        Self::with_config(assets, SceneConfig::default())
    }

    fn config(&self) -> StageConfig {
        StageConfig {
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            ..StageConfig::default()
        }
    }

    fn update(&mut self, ctx: &mut StageContext) -> TickOutcome {
        let step = self.timeline.step();
        if step.entered {
            self.enter(step.phase, step.frame);
        }

        self.fade.update_entry(step.frame);
        self.fade.update_exit(step.frame, self.config.total_ticks);

        let mut objects: Vec<&mut dyn SceneObject> = vec![
            &mut self.character as &mut dyn SceneObject,
            &mut self.mushroom as &mut dyn SceneObject,
            &mut self.explosion as &mut dyn SceneObject,
            &mut self.satellite as &mut dyn SceneObject,
        ];
        objects.extend(self.clouds.iter_mut().map(|c| c as &mut dyn SceneObject));
        advance_objects(&mut objects);

        self.cues.collect();
        let sounds = &self.sounds;
        for cue in self.cues.drain_played() {
            if sounds.iter().any(|(c, _)| *c == cue) {
                ctx.emit_sound(cue);
            } else {
                log::debug!("cue '{}' has no sound", cue.name);
            }
        }

        if step.terminal {
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        let objects = self
            .clouds
            .iter()
            .map(|c| (RenderLayer::Parallax, c as &dyn SceneObject))
            .chain([
                (RenderLayer::Objects, &self.character as &dyn SceneObject),
                (RenderLayer::Objects, &self.mushroom as &dyn SceneObject),
                (RenderLayer::Objects, &self.explosion as &dyn SceneObject),
                (RenderLayer::Objects, &self.satellite as &dyn SceneObject),
            ]);
        build_render_buffer(
            &self.backdrops,
            Vec2::new(self.config.world_width, self.config.world_height),
            objects,
            self.fade.overlay_alpha(),
            buffer,
        );
    }
}
