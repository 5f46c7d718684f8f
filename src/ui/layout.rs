use crate::ui::counter::Control;
use ratatui::layout::{Position, Rect};

const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;
const RESET_WIDTH: u16 = 11;
const MIN_VALUE_WIDTH: u16 = 9;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Centres a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Geometry of the counter card. Drives both drawing and mouse hit-testing.
///
/// ```text
/// ┌───────────────────────┐
/// │┌─────┐         ┌─────┐│
/// ││  −  │    3    │  +  ││
/// │└─────┘         └─────┘│
/// │     ┌─────────┐       │
/// │     │  Reset  │       │
/// │     └─────────┘       │
/// └───────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub card: Rect,
    pub decrement: Rect,
    pub value: Rect,
    pub increment: Rect,
    pub reset: Rect,
}

impl CounterLayout {
    /// The value slot widens with the text so the number is never cut.
    pub fn compute(body: Rect, display: &str) -> Self {
        let text_width = u16::try_from(display.chars().count()).unwrap_or(u16::MAX);
        let value_width = text_width.saturating_add(2).max(MIN_VALUE_WIDTH);
        let row_width = value_width.saturating_add(2 * BUTTON_WIDTH);
        let card = centered_rect_by_size(
            row_width.saturating_add(2),
            2 * BUTTON_HEIGHT + 2,
            body,
        );

        let x = card.x.saturating_add(1);
        let y = card.y.saturating_add(1);
        let slot = |dx: u16, dy: u16, width: u16| {
            Rect {
                x: x.saturating_add(dx),
                y: y.saturating_add(dy),
                width,
                height: BUTTON_HEIGHT,
            }
            .intersection(card)
        };

        Self {
            card,
            decrement: slot(0, 0, BUTTON_WIDTH),
            value: slot(BUTTON_WIDTH, 0, value_width),
            increment: slot(BUTTON_WIDTH.saturating_add(value_width), 0, BUTTON_WIDTH),
            reset: slot(
                row_width.saturating_sub(RESET_WIDTH) / 2,
                BUTTON_HEIGHT,
                RESET_WIDTH,
            ),
        }
    }

    pub fn rect(&self, control: Control) -> Rect {
        match control {
            Control::Decrement => self.decrement,
            Control::Increment => self.increment,
            Control::Reset => self.reset,
        }
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::ALL
            .into_iter()
            .find(|control| self.rect(*control).contains(position))
    }
}
