use basileus_core::{Arena, ConfigError, Intent, KeyState, MatchConfig, MatchOutcome, RandomPolicy};
use macroquad::miniquad;
use macroquad::prelude::*;

use crate::fighter::{FighterDrawConfig, draw_fighter, draw_health};
use crate::hud::HudFont;

mod fighter;
mod hud;

pub const WINDOW_TITLE: &str = "Basileus";
pub const WINDOW_WIDTH: i32 = 700;
pub const WINDOW_HEIGHT: i32 = 500;
// A long hitch replays at most this many steps; the rest is dropped.
const MAX_STEPS_PER_FRAME: u32 = 4;

pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Turns variable frame times into a whole number of fixed simulation steps.
#[derive(Debug, Clone)]
struct FixedStepper {
    step_seconds: f32,
    accumulator: f32,
}

impl FixedStepper {
    fn new(step_seconds: f32) -> Self {
        Self {
            step_seconds,
            accumulator: 0.0,
        }
    }

    fn advance(&mut self, frame_seconds: f32) -> u32 {
        self.accumulator += frame_seconds.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step_seconds {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        if steps > MAX_STEPS_PER_FRAME {
            steps = MAX_STEPS_PER_FRAME;
        }
        steps
    }
}

fn read_keys() -> KeyState {
    KeyState {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        punch: is_key_down(KeyCode::Z),
        kick: is_key_down(KeyCode::C),
        block: is_key_down(KeyCode::X),
    }
}

/// Seconds since the Unix epoch; the AI decides on even ones.
fn wall_clock_seconds() -> f64 {
    miniquad::date::now()
}

struct GameState {
    arena: Arena,
    policy: RandomPolicy,
    stepper: FixedStepper,
    font: HudFont,
    draw_config: FighterDrawConfig,
}

impl GameState {
    fn new(config: MatchConfig, font: HudFont) -> Result<Self, ConfigError> {
        let policy = RandomPolicy::from_seed(config.ai_seed);
        let stepper = FixedStepper::new(config.step_seconds());
        let arena = Arena::new(config)?;
        Ok(Self {
            arena,
            policy,
            stepper,
            font,
            draw_config: FighterDrawConfig::default(),
        })
    }

    fn fixed_update(&mut self, keys: &KeyState) -> Option<MatchOutcome> {
        let ai_intent = self.policy.next_intent(wall_clock_seconds());
        let human_intent = Intent::from_keys(keys);
        self.arena.step(human_intent, ai_intent)
    }

    fn render(&self) {
        clear_background(WHITE);
        let config = self.arena.config();

        let ai = self.arena.ai();
        draw_fighter(ai, &self.font, &self.draw_config);
        draw_health(ai, config.ai_spawn.x as f32, &self.font, &self.draw_config);

        let human = self.arena.human();
        draw_fighter(human, &self.font, &self.draw_config);
        draw_health(human, config.human_spawn.x as f32, &self.font, &self.draw_config);
    }

    async fn end_screen(&self, message: &str) {
        let seconds = self.arena.config().end_screen_seconds;
        let start = get_time();
        while get_time() - start < seconds {
            if is_quit_requested() {
                break;
            }
            clear_background(WHITE);
            self.font
                .draw_centered(message, screen_width() * 0.5, screen_height() * 0.5);
            next_frame().await;
        }
    }
}

pub async fn run() -> Result<(), ConfigError> {
    run_with_config(MatchConfig::default()).await
}

pub async fn run_with_config(config: MatchConfig) -> Result<(), ConfigError> {
    install_panic_hook();
    prevent_quit();

    log_event(&format!("match start: {}", config.to_json()));
    let mut game = GameState::new(config, HudFont::default())?;

    loop {
        if is_quit_requested() {
            log_event("quit requested");
            return Ok(());
        }

        let keys = read_keys();
        let steps = game.stepper.advance(get_frame_time());
        for _ in 0..steps {
            if let Some(outcome) = game.fixed_update(&keys) {
                log_event(&format!("match end: {}", outcome.to_json()));
                game.end_screen(outcome.message()).await;
                return Ok(());
            }
        }

        game.render();

        next_frame().await;
    }
}

fn log_event(label: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", label);
}

pub fn log_error(label: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::error!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", label);
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
