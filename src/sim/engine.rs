//! Game engine: owns the pools, wires events, runs the frame
//!
//! Input flows host → `dispatch` → window bus → players. Players publish
//! `PlayerEvent::Shot` on their own bus, where a `ShotSpawner` holding the
//! shared projectile pool turns each shot into a launched projectile.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::camera::Camera;
use super::column::Column;
use super::events::{EventsEngine, Handler, NamedEvent, Subscriber};
use super::input::{InputEvent, Key};
use super::player::{Player, PlayerEvent};
use super::pool::Pool;
use super::projectile::Projectile;
use super::timer::Timer;
use crate::consts::*;
use crate::error::{ConfigError, EventError};
use crate::renderer::{ImageHandle, Surface, colors};
use crate::settings::GameSettings;
use crate::vector::VectorExt;
use crate::{Viewport, heading_to_direction};

/// Launches a pooled projectile for every shot it hears about
pub struct ShotSpawner {
    projectiles: Rc<RefCell<Pool<Projectile>>>,
    /// Speed along the aim direction
    speed: f32,
}

impl ShotSpawner {
    pub fn new(projectiles: Rc<RefCell<Pool<Projectile>>>, speed: f32) -> Self {
        Self { projectiles, speed }
    }

    /// Start position and velocity for a shot fired from `origin` facing `heading`
    pub fn launch_params(&self, origin: Vec2, heading: f32, radius: f32) -> (Vec2, Vec2) {
        let facing = heading_to_direction(heading);
        // Shots leave opposite the facing vector
        let travel = -facing.div_or_zero(facing.length());
        (origin + travel * radius, travel * self.speed)
    }
}

impl Subscriber<PlayerEvent> for ShotSpawner {
    fn on_event(&mut self, event: &PlayerEvent) -> Result<(), EventError> {
        let PlayerEvent::Shot(shot) = *event;
        let mut pool = self
            .projectiles
            .try_borrow_mut()
            .map_err(|_| EventError::Busy { event: event.name() })?;

        let Some(projectile) = pool.first_free_mut() else {
            log::debug!("Projectile pool exhausted, dropping shot from player {}", shot.player);
            return Ok(());
        };
        let (pos, vel) = self.launch_params(shot.origin, shot.heading, projectile.radius);
        projectile.start(pos, vel);
        Ok(())
    }
}

/// Serializable summary of the engine, for debug logging
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub frame: u64,
    pub players: Vec<(Vec2, f32)>,
    pub projectiles_active: usize,
    pub projectiles_free: usize,
    pub columns_active: usize,
    pub columns_free: usize,
    pub column_timer: f32,
    pub background_x: f32,
}

pub struct GameEngine {
    settings: GameSettings,
    viewport: Viewport,
    window_events: EventsEngine<InputEvent>,
    players: Vec<Rc<RefCell<Player>>>,
    projectiles: Rc<RefCell<Pool<Projectile>>>,
    columns: Pool<Column>,
    column_timer: Timer,
    camera: Camera,
    rng: Pcg32,
    frame: u64,
}

impl GameEngine {
    /// Build the pools and wire every player into the event graph
    pub fn new(settings: GameSettings, viewport: Viewport) -> Result<Self, ConfigError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or(0);
        let mut rng = Pcg32::seed_from_u64(seed);

        let proj = &settings.projectiles;
        let projectiles = Rc::new(RefCell::new(Pool::new(proj.max, |_| {
            Projectile::new(proj.radius, viewport)
        })));

        let cols = &settings.columns;
        let spawn = Vec2::new(viewport.width, 0.0);
        let columns = Pool::new(cols.max, |_| {
            Column::new(spawn, cols.width, viewport.height, cols.scroll_speed, &mut rng)
        });

        let mut window_events: EventsEngine<InputEvent> = EventsEngine::new();
        let spawner: Handler<PlayerEvent> = Rc::new(RefCell::new(ShotSpawner::new(
            projectiles.clone(),
            MUZZLE_SPEED * proj.speed,
        )));

        let start = Vec2::new(viewport.width / 10.0, viewport.height / 2.0);
        let players: Vec<_> = (0..settings.player.count)
            .map(|id| {
                let mut player =
                    Player::new(id, start, &settings.player, Some(ImageHandle::Player));
                player.subscribe(spawner.clone());
                let player = Rc::new(RefCell::new(player));
                window_events.subscribe(player.clone());
                player
            })
            .collect();

        log::info!(
            "Engine ready: {} player(s), {} projectiles, {} columns, seed {}",
            players.len(),
            proj.max,
            cols.max,
            seed
        );

        let column_timer = Timer::new(cols.spawn_interval_ms);
        Ok(Self {
            settings,
            viewport,
            window_events,
            players,
            projectiles,
            columns,
            column_timer,
            camera: Camera::default(),
            rng,
            frame: 0,
        })
    }

    /// Deliver an input event to every subscriber of the window bus
    pub fn dispatch(&mut self, event: &InputEvent) {
        self.window_events.emit(event);
        match event {
            InputEvent::KeyDown(Key::Debug) => self.log_snapshot(),
            InputEvent::PointerDown(at) => log::debug!("Pointer down at {:?}", at),
            _ => {}
        }
    }

    /// Parse and dispatch a host keyboard event; unknown events are ignored
    pub fn handle_key_event(&mut self, name: &str, key: &str) {
        match InputEvent::from_key_event(name, key) {
            Some(event) => self.dispatch(&event),
            None => log::trace!("Ignoring {} {:?}", name, key),
        }
    }

    /// Parse and dispatch a host pointer event; unknown events are ignored
    pub fn handle_pointer_event(&mut self, name: &str, x: f32, y: f32) {
        match InputEvent::from_pointer_event(name, x, y) {
            Some(event) => self.dispatch(&event),
            None => log::trace!("Ignoring {}", name),
        }
    }

    /// Advance and draw one frame; `delta_time` is in milliseconds
    pub fn render(&mut self, surface: &mut dyn Surface, delta_time: f32) {
        self.frame += 1;
        self.camera.draw_background(surface, &self.viewport);

        // Players
        for player in &self.players {
            let mut player = player.borrow_mut();
            player.update();
            player.clamp_to(&self.viewport);
            player.draw(surface);
        }

        // Camera box tracks the first player
        if let Some(player) = self.players.first() {
            let target = player.borrow().pos;
            self.camera.follow(target, &self.viewport);
            self.camera.draw_box(surface);
        }

        // Projectiles
        {
            let mut projectiles = self.projectiles.borrow_mut();
            for projectile in projectiles.iter_active_mut() {
                projectile.update();
                projectile.draw(surface);
            }
        }

        // Columns
        for column in self.columns.iter_active_mut() {
            column.update(&mut self.rng);
            column.draw(surface);
        }
        self.step_column_spawner(delta_time);

        self.draw_projectile_bar(surface);
    }

    /// Periodically start a free column
    fn step_column_spawner(&mut self, delta_time: f32) {
        if !self.column_timer.ready() {
            self.column_timer.add(delta_time);
            return;
        }
        // With no free column the timer stays ready until one frees up
        let Some(column) = self.columns.first_free_mut() else {
            return;
        };
        if self.rng.random::<f32>() < self.settings.columns.spawn_chance {
            column.start();
            log::debug!("Column started (spawn #{})", column.spawns);
        }
        self.column_timer.reset();
    }

    /// Free projectile count plus one gold dot per free projectile
    fn draw_projectile_bar(&self, surface: &mut dyn Surface) {
        let free = self.projectiles.borrow().free_count();
        let width = self.viewport.width;
        let row = free as f32 * HUD_DOT_SPACING;
        surface.fill_text(
            &free.to_string(),
            Vec2::new(width - HUD_TEXT_MARGIN - row, HUD_ROW_Y),
            colors::WHITE,
        );
        for i in 0..free {
            let x = width - row + HUD_DOT_SPACING * i as f32;
            surface.fill_circle(Vec2::new(x, HUD_ROW_Y), HUD_DOT_RADIUS, colors::GOLD);
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let projectiles = self.projectiles.borrow();
        EngineSnapshot {
            frame: self.frame,
            players: self
                .players
                .iter()
                .map(|p| {
                    let p = p.borrow();
                    (p.pos, p.rot)
                })
                .collect(),
            projectiles_active: projectiles.active_count(),
            projectiles_free: projectiles.free_count(),
            columns_active: self.columns.active_count(),
            columns_free: self.columns.free_count(),
            column_timer: self.column_timer.counter(),
            background_x: self.camera.background_x,
        }
    }

    fn log_snapshot(&self) {
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => log::info!("Engine state: {}", json),
            Err(e) => log::warn!("Failed to serialize engine state: {}", e),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn projectiles(&self) -> Ref<'_, Pool<Projectile>> {
        self.projectiles.borrow()
    }

    pub fn columns(&self) -> &Pool<Column> {
        &self.columns
    }

    pub fn column_timer(&self) -> &Timer {
        &self.column_timer
    }

    pub fn player(&self, id: usize) -> Option<Ref<'_, Player>> {
        self.players.get(id).map(|p| p.borrow())
    }

    /// Direct access for hosts that move the player themselves (and tests)
    pub fn with_player_mut<T>(&self, id: usize, f: impl FnOnce(&mut Player) -> T) -> Option<T> {
        self.players.get(id).map(|p| f(&mut p.borrow_mut()))
    }
}
