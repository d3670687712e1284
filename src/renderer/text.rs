//! Headless ASCII renderer
//!
//! Rasterises frames into a character grid. Used when no window backend is
//! available so a run can still be watched (or diffed) from a terminal.

use std::io::Write;

use super::shapes::{Frame, PLAYER_COLOR};
use super::RenderSink;
use crate::error::RenderError;

const EMPTY: char = '.';
const SOLID: char = '#';
const PLAYER: char = '@';

/// Render sink that writes every `interval`-th frame as text
pub struct TextSink<W: Write> {
    out: W,
    cell: i32,
    cols: i32,
    rows: i32,
    interval: u64,
    frames: u64,
}

impl<W: Write> TextSink<W> {
    /// `cell` is the side of the pixel square one character stands for
    pub fn new(out: W, width: f32, height: f32, cell: i32, interval: u64) -> Self {
        let cell = cell.max(1);
        Self {
            out,
            cell,
            cols: (width as i32 + cell - 1) / cell,
            rows: (height as i32 + cell - 1) / cell,
            interval: interval.max(1),
            frames: 0,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// One line per row; a cell shows whatever covers its top-left pixel last
    pub fn rasterize(&self, frame: &Frame) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let (px, py) = (col * self.cell, row * self.cell);
                        match frame.rects.iter().rev().find(|r| r.contains(px, py)) {
                            Some(r) if r.color == PLAYER_COLOR => PLAYER,
                            Some(_) => SOLID,
                            None => EMPTY,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        if let Some(p) = frame.player_rect() {
            log::debug!("frame {}: player at ({}, {})", self.frames, p.x, p.y);
        }

        if self.frames % self.interval == 0 {
            let lines = self.rasterize(frame);
            for line in &lines {
                log::trace!("{}", line);
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out)?;
            self.out.flush()?;
        }

        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::build_frame;
    use crate::sim::{Level, Player, Tile};
    use glam::Vec2;

    #[test]
    fn test_rasterize_tiles_and_player() {
        let level = Level::new(BLOCK_SIZE, [Tile::new(0, 40)]);
        let player = Player::new(Vec2::new(40.0, 20.0));
        let frame = build_frame(&level, &player, PLAYER_SIZE);

        let sink = TextSink::new(Vec::new(), 80.0, 80.0, 20, 1);
        let grid = sink.rasterize(&frame);
        assert_eq!(grid, vec!["....", "..@.", "##..", "##.."]);
    }

    #[test]
    fn test_present_writes_every_interval() {
        let level = Level::new(BLOCK_SIZE, []);
        let player = Player::new(Vec2::ZERO);
        let frame = build_frame(&level, &player, PLAYER_SIZE);

        let mut sink = TextSink::new(Vec::new(), 40.0, 20.0, 20, 3);
        for _ in 0..4 {
            sink.present(&frame).unwrap();
        }
        assert_eq!(sink.frames_presented(), 4);

        // Frames 0 and 3 are written: two rows of "@." plus a blank separator
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "@.\n\n@.\n\n");
    }
}
