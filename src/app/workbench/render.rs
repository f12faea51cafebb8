use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::Workbench;
use crate::kernel::state::{FocusTarget, QuantityField, RatioField, TextField};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 46;
const GEAR_LABEL: &str = "[*] Settings";
const OVERLAY_HEIGHT: u16 = 10;

impl Workbench {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_form(frame, chunks[1]);
        self.render_status(frame, chunks[2]);
        self.render_settings_overlay(frame, area);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Span::styled(
            " bhumi - area converter",
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, area);

        let gear_width = GEAR_LABEL.len() as u16;
        if area.width <= gear_width + 1 {
            self.last_gear_area = None;
            return;
        }
        let gear_area = Rect::new(
            area.x + area.width - gear_width - 1,
            area.y,
            gear_width,
            1,
        );
        let gear = Paragraph::new(Span::styled(
            GEAR_LABEL,
            Style::default().fg(self.theme.accent_fg),
        ));
        frame.render_widget(gear, gear_area);
        self.last_gear_area = Some(gear_area);
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        let width = FORM_WIDTH.min(area.width.saturating_sub(2));
        if width < 10 || area.height < 3 * FIELD_HEIGHT {
            self.last_quantity_areas = [None; 3];
            return;
        }
        let form = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + 1.min(area.height.saturating_sub(3 * FIELD_HEIGHT)),
            width,
            3 * FIELD_HEIGHT,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
            ])
            .split(form);

        let overlay_open = self.store.state().ui.settings.visible;
        for (i, field) in QuantityField::ALL.iter().enumerate() {
            let focused = !overlay_open
                && self.store.state().ui.focus == FocusTarget::Quantity(*field);
            let text_field = self.store.state().converter.field(*field).clone();
            self.render_text_field(frame, rows[i], field.label(), &text_field, focused);
            self.last_quantity_areas[i] = Some(rows[i]);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.store.state().ui.settings.visible {
            "Enter save | Ctrl+R reset | Esc close"
        } else {
            "Tab next field | Ctrl+S settings | Ctrl+Q quit"
        };
        let status = Paragraph::new(Span::styled(
            hints,
            Style::default().fg(self.theme.muted_fg),
        ));
        frame.render_widget(status, area);
    }

    fn render_settings_overlay(&mut self, frame: &mut Frame, area: Rect) {
        if !self.store.state().ui.settings.visible {
            self.last_settings_area = None;
            self.last_ratio_areas = [None; 2];
            self.last_save_button_area = None;
            self.last_reset_button_area = None;
            return;
        }

        let width = FORM_WIDTH.min(area.width.saturating_sub(4));
        let height = OVERLAY_HEIGHT.min(area.height.saturating_sub(2));
        if width < 20 || height < OVERLAY_HEIGHT {
            self.last_settings_area = None;
            self.last_ratio_areas = [None; 2];
            self.last_save_button_area = None;
            self.last_reset_button_area = None;
            return;
        }

        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.overlay_border))
            .title(Span::styled(
                " Settings ",
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let settings = self.store.state().ui.settings.clone();
        let focus = self.store.state().ui.focus;
        for (i, field) in [RatioField::HectareToBigha, RatioField::BighaToBiswa]
            .iter()
            .enumerate()
        {
            let focused = focus == FocusTarget::Settings(*field);
            self.render_text_field(
                frame,
                rows[i],
                field.label(),
                settings.field(*field),
                focused,
            );
            self.last_ratio_areas[i] = Some(rows[i]);
        }

        let buttons_area = rows[2];
        let save_label = "[ Save ]";
        let reset_label = "[ Reset ]";
        let save_area = Rect::new(
            buttons_area.x + 1,
            buttons_area.y,
            save_label.len() as u16,
            1,
        );
        let reset_area = Rect::new(
            save_area.x + save_area.width + 2,
            buttons_area.y,
            reset_label.len() as u16,
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                save_label,
                Style::default()
                    .fg(self.theme.button_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            save_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                reset_label,
                Style::default().fg(self.theme.accent_fg),
            )),
            reset_area,
        );

        self.last_settings_area = Some(popup);
        self.last_save_button_area = Some(save_area);
        self.last_reset_button_area = Some(reset_area);
    }

    fn render_text_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        field: &TextField,
        focused: bool,
    ) {
        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(label, Style::default().fg(self.theme.label_fg)));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(field.value.as_str())),
            inner,
        );

        if focused && inner.width > 0 {
            let offset = field.value[..field.cursor].width() as u16;
            let x = inner.x + offset.min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}
