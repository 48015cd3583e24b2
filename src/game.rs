//! "Catch the falling object" rules, independent of rendering.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Interval;
use crate::math::AABB;

/// Tuning for [`CatchGame`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchSettings {
    /// Platform units per second
    pub platform_speed: f32,
    /// Added to every platform step regardless of frame time
    pub platform_step_bonus: f32,
    pub bounds_x: f32,
    pub bounds_z: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub spawn_height: f32,
    /// Spawn x/z drawn uniformly from `[-spawn_range, spawn_range]`
    pub spawn_range: f32,
    pub fall_speed: f32,
    /// Half the side of the square catch area
    pub catch_half_width: f32,
    pub max_misses: u32,
}

impl Default for CatchSettings {
    fn default() -> Self {
        Self {
            platform_speed: 5.0,
            platform_step_bonus: 0.05,
            bounds_x: 14.6,
            bounds_z: 10.4,
            spawn_interval: 4.0,
            spawn_height: 20.0,
            spawn_range: 8.0,
            fall_speed: 4.0,
            catch_half_width: 2.5,
            max_misses: 5,
        }
    }
}

/// Directions currently held by the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformInput {
    /// Toward negative Z
    pub forward: bool,
    pub backward: bool,
    /// Toward negative X
    pub left: bool,
    pub right: bool,
}

/// What happened to an object that reached the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Caught,
    Missed,
}

#[derive(Debug, Clone)]
pub struct CatchGame {
    settings: CatchSettings,
    platform: Vec3,
    falling: Vec<Vec3>,
    spawn_timer: Interval,
    score: u32,
    misses: u32,
    game_over: bool,
}

impl CatchGame {
    pub fn new(settings: CatchSettings) -> Self {
        Self {
            spawn_timer: Interval::new(settings.spawn_interval),
            settings,
            platform: Vec3::ZERO,
            falling: Vec::new(),
            score: 0,
            misses: 0,
            game_over: false,
        }
    }

    pub fn settings(&self) -> &CatchSettings {
        &self.settings
    }

    pub fn platform_position(&self) -> Vec3 {
        self.platform
    }

    pub fn falling_objects(&self) -> &[Vec3] {
        &self.falling
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Catch area on the ground plane around the platform
    pub fn catch_area(&self) -> AABB {
        let h = self.settings.catch_half_width;
        AABB::from_center(self.platform, Vec3::new(h, 0.0, h))
    }

    /// Advance one tick. Returns the landings resolved during it.
    pub fn update(&mut self, dt: f32, input: PlatformInput, rng: &mut impl Rng) -> Vec<Landing> {
        if self.game_over {
            return Vec::new();
        }

        self.move_platform(dt, input);

        if self.spawn_timer.tick(dt) {
            self.spawn(rng);
        }

        self.drop_objects(dt)
    }

    /// Clear score, misses and falling objects and resume play
    pub fn restart(&mut self) {
        self.falling.clear();
        self.spawn_timer.reset();
        self.score = 0;
        self.misses = 0;
        self.game_over = false;
        log::info!("catch game restarted");
    }

    /// Bounds are checked before stepping, so the platform may overshoot
    /// them by at most one step.
    fn move_platform(&mut self, dt: f32, input: PlatformInput) {
        let s = &self.settings;
        let step = s.platform_speed * dt + s.platform_step_bonus;

        if input.left && self.platform.x >= -s.bounds_x {
            self.platform.x -= step;
        }
        if input.right && self.platform.x <= s.bounds_x {
            self.platform.x += step;
        }
        if input.forward && self.platform.z >= -s.bounds_z {
            self.platform.z -= step;
        }
        if input.backward && self.platform.z <= s.bounds_z {
            self.platform.z += step;
        }
    }

    fn spawn(&mut self, rng: &mut impl Rng) {
        // Inclusive so a zero range still samples
        let range = self.settings.spawn_range.max(0.0);
        let position = Vec3::new(
            rng.random_range(-range..=range),
            self.settings.spawn_height,
            rng.random_range(-range..=range),
        );
        log::debug!("spawned falling object at {position}");
        self.falling.push(position);
    }

    fn drop_objects(&mut self, dt: f32) -> Vec<Landing> {
        let fall = self.settings.fall_speed * dt;
        let area = self.catch_area();
        let mut landings = Vec::new();

        self.falling.retain_mut(|position| {
            position.y -= fall;
            if position.y > 0.0 {
                return true;
            }
            landings.push(if area.contains_xz(*position) {
                Landing::Caught
            } else {
                Landing::Missed
            });
            false
        });

        for landing in &landings {
            match landing {
                Landing::Caught => self.score += 1,
                Landing::Missed => {
                    self.misses += 1;
                    if self.misses >= self.settings.max_misses {
                        self.game_over = true;
                    }
                }
            }
        }

        if self.game_over {
            log::info!("game over: score {}, misses {}", self.score, self.misses);
        }
        landings
    }

    /// Add a falling object at an explicit position
    pub fn drop_object(&mut self, position: Vec3) {
        if !self.game_over {
            self.falling.push(position);
        }
    }
}

impl Default for CatchGame {
    fn default() -> Self {
        Self::new(CatchSettings::default())
    }
}
