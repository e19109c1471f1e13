//! End-to-end checks of the rain renderer against a test backend.
//!
//! One terminal cell is one glyph slot, so a 12x6 cell backend presents a
//! 192x96 pixel surface at the default font size.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use sonagi_core::{RainParams, RandomSource, resolve_matrix_color};
use sonagi_rain::{ALPHABET, Rain};

/// Always picks the same glyph and never passes the reset gate.
struct Fixed(usize);

impl RandomSource for Fixed {
    fn unit(&mut self) -> f64 {
        0.0
    }

    fn index(&mut self, bound: usize) -> usize {
        self.0 % bound
    }
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(12, 6)).expect("test backend")
}

#[test]
fn first_frame_paints_the_top_row() {
    let mut terminal = terminal();
    let mut rain = Rain::new(RainParams::default(), 12 * 16, 6 * 16);
    let mut rng = Fixed(0);

    let color = resolve_matrix_color(Some("#123456"), None);
    rain.tick(&mut rng, color);
    terminal.draw(|frame| rain.render(frame)).expect("draw");

    let buffer = terminal.backend().buffer();
    for x in 0..12u16 {
        let cell = buffer.cell((x, 0)).expect("cell");
        assert_eq!(cell.symbol(), ALPHABET[0].to_string());
        assert_eq!(cell.fg, Color::Rgb(0x12, 0x34, 0x56));
    }
    // Nothing below the heads yet.
    for x in 0..12u16 {
        assert_eq!(buffer.cell((x, 1)).expect("cell").symbol(), " ");
    }
}

#[test]
fn trail_dims_behind_the_advancing_heads() {
    let mut terminal = terminal();
    let mut rain = Rain::new(RainParams::default(), 12 * 16, 6 * 16);
    let mut rng = Fixed(60);

    let green = resolve_matrix_color(None, None);
    rain.tick(&mut rng, green);
    rain.tick(&mut rng, green);
    terminal.draw(|frame| rain.render(frame)).expect("draw");

    let buffer = terminal.backend().buffer();
    // Head row at full green, the row above dimmed by one fade step:
    // (0, 255, 65) scaled by 0.95 quantizes to (0, 242, 61).
    assert_eq!(buffer.cell((0, 1)).expect("cell").fg, Color::Rgb(0, 255, 65));
    assert_eq!(buffer.cell((0, 0)).expect("cell").fg, Color::Rgb(0, 242, 61));
}

#[test]
fn resize_blanks_the_screen_until_the_next_tick() {
    let mut terminal = terminal();
    let mut rain = Rain::new(RainParams::default(), 12 * 16, 6 * 16);
    let mut rng = Fixed(7);

    rain.tick(&mut rng, resolve_matrix_color(None, None));
    rain.resize(8 * 16, 6 * 16);
    terminal.draw(|frame| rain.render(frame)).expect("draw");

    let buffer = terminal.backend().buffer();
    for y in 0..6u16 {
        for x in 0..12u16 {
            assert_eq!(buffer.cell((x, y)).expect("cell").symbol(), " ");
        }
    }
}
