use basileus_core::FighterState;
use basileus_core::fighter::{BODY_HEIGHT, BODY_WIDTH, MAX_HEALTH};
use macroquad::prelude::*;

use crate::hud::HudFont;

#[derive(Debug, Clone)]
pub struct FighterDrawConfig {
    pub card_width: f32,
    pub card_height: f32,
    pub border: f32,             // outline thickness inside the card
    pub border_color: Color,
    pub fill_color: Color,
    pub health_bar_y: f32,
    pub health_bar_width: f32,   // width at full health
    pub health_bar_height: f32,
    pub health_background: Color,
    pub health_fill: Color,
}

impl Default for FighterDrawConfig {
    fn default() -> Self {
        Self {
            card_width: BODY_WIDTH as f32,
            card_height: BODY_HEIGHT as f32,
            border: 2.0,
            border_color: BLACK,
            fill_color: WHITE,
            health_bar_y: 10.0,
            health_bar_width: 100.0,
            health_bar_height: 20.0,
            health_background: WHITE,
            health_fill: BLACK,
        }
    }
}

pub fn health_fill_width(health: i32, config: &FighterDrawConfig) -> f32 {
    let fraction = health.clamp(0, MAX_HEALTH) as f32 / MAX_HEALTH as f32;
    fraction * config.health_bar_width
}

pub fn draw_fighter(fighter: &FighterState, font: &HudFont, config: &FighterDrawConfig) {
    let x = fighter.position.x as f32;
    let y = fighter.position.y as f32;

    draw_rectangle(x, y, config.card_width, config.card_height, config.border_color);
    draw_rectangle(
        x + config.border,
        y + config.border,
        config.card_width - config.border * 2.0,
        config.card_height - config.border * 2.0,
        config.fill_color,
    );
    font.draw_centered(
        fighter.character.name(),
        x + config.card_width * 0.5,
        y + config.card_height * 0.5,
    );
}

/// Health bar and state label, anchored at the fighter's spawn column.
pub fn draw_health(fighter: &FighterState, anchor_x: f32, font: &HudFont, config: &FighterDrawConfig) {
    let y = config.health_bar_y;
    draw_rectangle(
        anchor_x,
        y,
        config.health_bar_width,
        config.health_bar_height,
        config.health_background,
    );
    draw_rectangle(
        anchor_x,
        y,
        health_fill_width(fighter.health, config),
        config.health_bar_height,
        config.health_fill,
    );
    font.draw(
        &fighter.state.to_string(),
        anchor_x,
        y + config.health_bar_height,
    );
}
