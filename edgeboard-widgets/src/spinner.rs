//! Loading indicators: a bouncing-bar spinner and skeleton placeholder rows.
//!
//! The spinner is a snake that sweeps across a short track, bright at the
//! head and dimming toward the tail, pausing briefly at each end. Frames are
//! indexed by a caller-driven tick counter so the widget itself stays
//! stateless.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

const TRACK_CHAR: &str = "⬝";
const SNAKE_CHAR: &str = "■";
const SKELETON_CHAR: char = '▒';

/// Configuration for the bouncing-bar spinner.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the snake/bar.
    snake_len: u16,
    /// Pause frames at the right end.
    right_pause: usize,
    /// Pause frames at the left end.
    left_pause: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            track_width: 8,
            snake_len: 6,
            right_pause: 1,
            left_pause: 8,
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    pub fn snake_len(mut self, len: u16) -> Self {
        self.snake_len = len;
        self
    }

    /// Total number of distinct frames in one full bounce cycle.
    pub fn frame_count(&self) -> usize {
        let sweep = (self.track_width + self.snake_len - 1) as usize;
        sweep * 2 + self.right_pause + self.left_pause
    }

    /// Build the frame for the given tick.
    pub fn line(&self, tick: usize, theme: &Theme) -> Line<'static> {
        let sweep = (self.track_width + self.snake_len - 1) as usize;
        let frame = tick % self.frame_count();

        if frame < sweep {
            // Right pass: snake enters from the left, exits right.
            self.snake_line(frame as i32, true, theme)
        } else if frame < sweep + self.right_pause {
            self.empty_line(theme)
        } else if frame < sweep * 2 + self.right_pause {
            // Left pass, head position runs back down.
            let pos = sweep - 1 - (frame - sweep - self.right_pause);
            self.snake_line(pos as i32, false, theme)
        } else {
            self.empty_line(theme)
        }
    }

    fn empty_line(&self, theme: &Theme) -> Line<'static> {
        let track = Style::default().fg(theme.muted);
        Line::from(vec![Span::styled(
            TRACK_CHAR.repeat(self.track_width as usize),
            track,
        )])
    }

    fn snake_line(&self, head_pos: i32, moving_right: bool, theme: &Theme) -> Line<'static> {
        let track_width = self.track_width as i32;
        let snake_len = self.snake_len as i32;
        let snake_start = head_pos - snake_len + 1;

        let mut spans = Vec::with_capacity(track_width as usize);
        for i in 0..track_width {
            let span = if i >= snake_start && i <= head_pos {
                let snake_idx = i - snake_start;
                let toward_head = if moving_right {
                    snake_idx as f32 / (snake_len - 1).max(1) as f32
                } else {
                    1.0 - snake_idx as f32 / (snake_len - 1).max(1) as f32
                };

                // Head is bright, tail fades out.
                let style = if toward_head > 0.66 {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else if toward_head > 0.33 {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.accent).add_modifier(Modifier::DIM)
                };
                Span::styled(SNAKE_CHAR, style)
            } else {
                Span::styled(TRACK_CHAR, Style::default().fg(theme.muted))
            };
            spans.push(span);
        }

        Line::from(spans)
    }
}

/// A dim placeholder row standing in for data that is still loading.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    width: u16,
}

impl Skeleton {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn line(&self, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            String::from_iter(std::iter::repeat(SKELETON_CHAR).take(self.width as usize)),
            Style::default().fg(theme.muted),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_covers_both_passes_and_pauses() {
        let spinner = Spinner::new().track_width(4).snake_len(2);
        // sweep = 5 each way, plus default pauses 1 + 8
        assert_eq!(spinner.frame_count(), 19);
    }

    #[test]
    fn line_wraps_around_the_cycle() {
        let spinner = Spinner::new();
        let theme = Theme::default();
        let a = spinner.line(0, &theme);
        let b = spinner.line(spinner.frame_count(), &theme);
        assert_eq!(a, b);
    }

    #[test]
    fn every_frame_fills_the_track() {
        let spinner = Spinner::new().track_width(6).snake_len(3);
        let theme = Theme::default();
        for tick in 0..spinner.frame_count() {
            let line = spinner.line(tick, &theme);
            assert_eq!(line.width(), 6, "frame {tick} should span the track");
        }
    }
}
