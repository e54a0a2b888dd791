//! Scrollbar drawing.

use log::trace;
use tuiwin::{LineSpan, LineStyle, Pen, WindowId};

use super::Inner;
use crate::extent::{Axis, Extent, ScrollbarGeometry};
use crate::host::Host;

impl<H: Host + 'static> Inner<H> {
    /// Draw the visible scrollbars and the corner cell. Reads the extents,
    /// never changes them.
    pub(super) fn render(&self) {
        let (window, visible) = {
            let state = self.state.borrow();
            (state.window, state.visible)
        };
        let Some(window) = window else {
            trace!("render skipped, no window");
            return;
        };
        let Some((lines, cols)) = self.window_size(window) else {
            return;
        };

        let bars = [(Axis::Vertical, cols - 1), (Axis::Horizontal, lines - 1)];
        for (axis, across) in bars {
            if !visible.get(axis) {
                continue;
            }
            let Some(extent) = self.extent(axis) else {
                continue;
            };
            let geometry = self.bar_geometry(axis);
            self.with_host(|host| {
                let bar = Bar {
                    host,
                    window,
                    axis,
                    across,
                };
                match geometry {
                    Some(geometry) => bar.draw(extent, geometry, self),
                    None => bar.blank(lines, cols, self),
                }
            });
        }

        if visible.vertical && visible.horizontal {
            let gutter = self.style.gutter;
            self.with_host(|host| host.fill_cells(window, lines - 1, cols - 1, 1, &gutter));
        }
    }
}

/// One scrollbar being drawn: the row or column `across` of `window`.
struct Bar<'a, H: Host> {
    host: &'a mut H,
    window: WindowId,
    axis: Axis,
    across: i32,
}

impl<H: Host + 'static> Bar<'_, H> {
    fn draw(mut self, extent: &Extent, geometry: ScrollbarGeometry, inner: &Inner<H>) {
        let style = &inner.style;

        self.arrow(
            geometry.track_start - 1,
            style.arrow_glyph(self.axis, true),
            extent.start() > 0,
            &style.arrow,
            &style.gutter,
        );

        let (thumb_start, thumb_end) = geometry.visible_thumb();
        if thumb_start > geometry.track_start {
            self.track(geometry.track_start, thumb_start - 1, &style.gutter);
        }

        for pos in thumb_start..thumb_end {
            self.cell(pos, &style.thumb);
        }

        if thumb_end < geometry.track_end {
            self.track(thumb_end, geometry.track_end - 1, &style.gutter);
        }

        self.arrow(
            geometry.track_end,
            style.arrow_glyph(self.axis, false),
            extent.start() < extent.limit(),
            &style.arrow,
            &style.gutter,
        );
    }

    /// Blank the whole gutter when there is no room for a track.
    fn blank(mut self, lines: i32, cols: i32, inner: &Inner<H>) {
        let length = match self.axis {
            Axis::Vertical => lines,
            Axis::Horizontal => cols,
        };
        for pos in 0..length {
            self.cell(pos, &inner.style.gutter);
        }
    }

    fn arrow(&mut self, pos: i32, glyph: char, movable: bool, arrow: &Pen, gutter: &Pen) {
        if movable {
            let (line, col) = self.at(pos);
            let mut buf = [0u8; 4];
            self.host
                .draw_text(self.window, line, col, glyph.encode_utf8(&mut buf), arrow);
        } else {
            self.cell(pos, gutter);
        }
    }

    fn track(&mut self, start: i32, end: i32, pen: &Pen) {
        let span = match self.axis {
            Axis::Vertical => LineSpan::Vertical {
                col: self.across,
                start,
                end,
            },
            Axis::Horizontal => LineSpan::Horizontal {
                line: self.across,
                start,
                end,
            },
        };
        self.host.draw_line(self.window, span, pen, LineStyle::Double);
    }

    fn cell(&mut self, pos: i32, pen: &Pen) {
        let (line, col) = self.at(pos);
        self.host.fill_cells(self.window, line, col, 1, pen);
    }

    /// `(line, col)` of a position along the bar.
    fn at(&self, pos: i32) -> (i32, i32) {
        match self.axis {
            Axis::Vertical => (pos, self.across),
            Axis::Horizontal => (self.across, pos),
        }
    }
}
