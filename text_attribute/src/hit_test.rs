// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping a point in rendered text back to a character.
//!
//! Layout itself is left to a [`TextLayoutEngine`]; this module only accounts for the view
//! geometry around the laid out text (content insets and alignment) and clamps taps past
//! the end of a line to that line's last character.

use peniko::kurbo::{Insets, Point, Rect, Size};

use crate::RichText;
use crate::values::{LineBreakMode, TextAlignment};

/// The area text is laid out into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextContainer {
    /// Size available to the text.
    pub size: Size,
    /// How lines that do not fit are wrapped or truncated.
    pub line_break_mode: LineBreakMode,
    /// Maximum number of lines; `0` for no limit.
    pub max_lines: usize,
}

/// Text laid out by a [`TextLayoutEngine`].
pub trait GlyphLayout {
    /// The bounding box of the laid out glyphs, in container coordinates.
    fn used_rect(&self) -> Rect;

    /// The character nearest to `point`, in container coordinates.
    ///
    /// Returns `None` if the layout has no glyphs.
    fn character_index(&self, point: Point) -> Option<usize>;
}

/// Lays out rich text into a container.
pub trait TextLayoutEngine {
    /// The layout produced.
    type Layout: GlyphLayout;

    /// Lays out `text` into `container`.
    fn layout(&mut self, text: &RichText, container: &TextContainer) -> Self::Layout;
}

/// The geometry of the view that displays the text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitTestConfig {
    /// Size of the view.
    pub bounds: Size,
    /// Space between the view edges and the text container.
    pub content_insets: Insets,
    /// Alignment the view applies to the laid out text as a whole.
    pub alignment: TextAlignment,
    /// Line break mode of the view.
    pub line_break_mode: LineBreakMode,
    /// Maximum number of lines; `0` for no limit.
    pub max_lines: usize,
    /// Line height of the view's font.
    pub line_height: f64,
}

impl HitTestConfig {
    /// The container the text is laid out into: the bounds less the content insets.
    pub fn container(&self) -> TextContainer {
        let insets = self.content_insets;
        TextContainer {
            size: Size::new(
                (self.bounds.width - insets.x_value()).max(0.0),
                (self.bounds.height - insets.y_value()).max(0.0),
            ),
            line_break_mode: self.line_break_mode,
            max_lines: self.max_lines,
        }
    }
}

/// Returns the character at `point`, given in view coordinates.
///
/// The result is clamped to the last character of the tapped line, so a tap in the empty
/// space to the right of a short line selects that line's last character rather than the
/// first character of the next. Returns `None` if the layout has no glyphs.
///
/// Line spacing is taken from the paragraph style at the start of the text.
pub fn character_index<E: TextLayoutEngine>(
    engine: &mut E,
    text: &RichText,
    config: &HitTestConfig,
    point: Point,
) -> Option<usize> {
    let container = config.container();
    let layout = engine.layout(text, &container);

    let used = layout.used_rect();
    let align = config.alignment.offset();
    let x_offset = (container.size.width - used.width()) * align - used.x0;
    let y_offset = (container.size.height - used.height()) * align - used.y0;
    let local = Point::new(
        point.x - config.content_insets.x0 - x_offset,
        point.y - config.content_insets.y0 - y_offset,
    );

    let index = layout.character_index(local)?;

    let pitch = config.line_height + f64::from(text.paragraph_style(0).line_spacing);
    let last = if pitch > 0.0 {
        let mut line = ((local.y / pitch).ceil() - 1.0).max(0.0);
        if config.max_lines > 0 {
            line = line.min((config.max_lines - 1) as f64);
        }
        layout
            .character_index(Point::new(container.size.width, pitch * line))
            .unwrap_or(index)
    } else {
        index
    };

    let found = index.min(last).min(text.len());
    log::trace!("hit test at {point:?} found character {found}");
    Some(found)
}

#[cfg(test)]
mod tests {
    use peniko::kurbo::{Insets, Point, Rect, Size};

    use super::{GlyphLayout, HitTestConfig, TextContainer, TextLayoutEngine, character_index};
    use crate::values::TextAlignment;
    use crate::{Attribute, RichText};

    /// Lays text out in fixed-size cells, wrapping at the container width.
    struct Monospace {
        advance: f64,
        line_height: f64,
    }

    struct Grid {
        len: usize,
        per_line: usize,
        advance: f64,
        line_height: f64,
    }

    impl TextLayoutEngine for Monospace {
        type Layout = Grid;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Test container widths are small and positive."
        )]
        fn layout(&mut self, text: &RichText, container: &TextContainer) -> Grid {
            Grid {
                len: text.len(),
                per_line: ((container.size.width / self.advance) as usize).max(1),
                advance: self.advance,
                line_height: self.line_height,
            }
        }
    }

    impl Grid {
        fn lines(&self) -> usize {
            self.len.div_ceil(self.per_line)
        }
    }

    impl GlyphLayout for Grid {
        fn used_rect(&self) -> Rect {
            let columns = self.len.min(self.per_line);
            Rect::new(
                0.0,
                0.0,
                columns as f64 * self.advance,
                self.lines() as f64 * self.line_height,
            )
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Coordinates are clamped to be non-negative first."
        )]
        fn character_index(&self, point: Point) -> Option<usize> {
            if self.len == 0 {
                return None;
            }
            let line = ((point.y.max(0.0) / self.line_height) as usize).min(self.lines() - 1);
            let first = line * self.per_line;
            let on_line = (self.len - first).min(self.per_line);
            let column = ((point.x.max(0.0) / self.advance) as usize).min(on_line - 1);
            Some(first + column)
        }
    }

    fn engine() -> Monospace {
        Monospace {
            advance: 10.0,
            line_height: 20.0,
        }
    }

    #[test]
    fn taps_map_to_characters() {
        let text = RichText::from("hello world");
        let config = HitTestConfig {
            bounds: Size::new(60.0, 100.0),
            line_height: 20.0,
            ..HitTestConfig::default()
        };
        let tap = |x, y| character_index(&mut engine(), &text, &config, Point::new(x, y));
        // "hello " on the first line, "world" on the second.
        assert_eq!(tap(15.0, 5.0), Some(1));
        assert_eq!(tap(25.0, 30.0), Some(8));
        // Past the end of the second line.
        assert_eq!(tap(58.0, 30.0), Some(10));
    }

    #[test]
    fn alignment_and_insets_shift_the_text() {
        let text = RichText::from("abc");
        let config = HitTestConfig {
            bounds: Size::new(120.0, 40.0),
            content_insets: Insets::new(10.0, 0.0, 10.0, 0.0),
            alignment: TextAlignment::Center,
            line_height: 20.0,
            ..HitTestConfig::default()
        };
        let tap = |x, y| character_index(&mut engine(), &text, &config, Point::new(x, y));
        // The container is 100 wide and the text 30, so it starts at 10 + 35.
        assert_eq!(tap(46.0, 10.0), Some(0));
        assert_eq!(tap(66.0, 10.0), Some(2));
    }

    #[test]
    fn line_spacing_comes_from_the_text() {
        let mut text = RichText::from("abcdef");
        text.add_attribute(Attribute::LineSpacing(20.0), None).unwrap();
        let config = HitTestConfig {
            bounds: Size::new(30.0, 100.0),
            line_height: 20.0,
            ..HitTestConfig::default()
        };
        // With a 40 point pitch, y = 30 still belongs to the first line, so the tap is
        // clamped to that line's last character even though the grid puts it on the second.
        let found = character_index(&mut engine(), &text, &config, Point::new(25.0, 30.0));
        assert_eq!(found, Some(2));
    }

    #[test]
    fn taps_below_the_line_limit_stay_on_the_last_line() {
        let text = RichText::from("abcdef");
        let config = HitTestConfig {
            bounds: Size::new(30.0, 100.0),
            max_lines: 1,
            line_height: 20.0,
            ..HitTestConfig::default()
        };
        // The grid wraps "def" onto a second line, but only one line is shown.
        let found = character_index(&mut engine(), &text, &config, Point::new(5.0, 30.0));
        assert_eq!(found, Some(2));
        assert_eq!(config.container().max_lines, 1);
    }

    #[test]
    fn empty_text_has_no_character() {
        let config = HitTestConfig {
            bounds: Size::new(100.0, 100.0),
            line_height: 20.0,
            ..HitTestConfig::default()
        };
        assert_eq!(
            character_index(&mut engine(), &RichText::default(), &config, Point::new(1.0, 1.0)),
            None
        );
    }
}
