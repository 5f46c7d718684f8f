use crate::ui::app::App;
use crate::ui::counter::{Control, CounterState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, CounterLayout};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, GLOBAL_BORDER, VALUE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(Clear, body);
    draw_counter(frame, body, app.counter());
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_counter(frame: &mut Frame<'_>, body: Rect, counter: &CounterState) {
    let display = counter.display();
    let layout = CounterLayout::compute(body, &display);
    if layout.card.is_empty() {
        return;
    }

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        layout.card,
    );

    for control in Control::ALL {
        let focused = counter.focus() == control;
        frame.render_widget(button(control, focused), layout.rect(control));
    }

    let value = Paragraph::new(Line::from(Span::styled(
        display,
        Style::default().fg(VALUE_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(value, middle_row(layout.value));
}

fn button(control: Control, focused: bool) -> Paragraph<'static> {
    let (border, label) = if focused {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(BUTTON_BORDER), Style::default())
    };

    Paragraph::new(Line::from(Span::styled(control.label(), label)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

fn middle_row(rect: Rect) -> Rect {
    if rect.height == 0 {
        return rect;
    }
    Rect {
        y: rect.y + rect.height / 2,
        height: 1,
        ..rect
    }
}
