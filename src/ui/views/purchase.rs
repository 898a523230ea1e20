//! The purchase form: date, line items, totals and the save flow.

use std::{cell::RefCell, collections::HashMap, time::Instant};

use color_eyre::eyre::Result;
use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    currency,
    purchase::{
        catalog::{PHONE_BRANDS, PHONE_COLORS, PHONE_SPECS},
        date::{self, DATE_LEN},
        row::{PurchaseRow, RowId, RowUpdate, parse_quantity},
    },
    store::{Dispatcher, action::Action, state::State},
    ui::components::{
        cycle_select::{CycleSelect, cycle},
        header::Header,
        input::{Input, InputState},
        popover::{base::Popover, message::MessagePopover},
        searchable_select::{SearchableSelect, SelectState},
        toast::Toast,
    },
};

use super::traits::{
    CustomEventContext, CustomStatefulWidget, CustomWidget, CustomWidgetContext,
    CustomWidgetRef, EventHandler, View,
};

const TITLE: &str = "Phone Purchase";
const FORM_LEGEND: &str = "(tab) next field | (↑/↓) change row | (←/→) cycle option | (enter) open brand | (ctrl+a) add row | (ctrl+d) remove row | (ctrl+s) save | (ctrl+c) quit";
const ERROR_LEGEND: &str = "(enter) dismiss";

/// Editable fields of a purchase row, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Column {
    Brand,
    #[strum(to_string = "Spec (RAM/ROM)")]
    Spec,
    Color,
    #[strum(to_string = "Unit Price")]
    Price,
    Qty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Date,
    Row { index: usize, column: Column },
}

impl Focus {
    fn next(self, row_count: usize) -> Self {
        let columns = Column::iter().collect_vec();
        match self {
            Focus::Date => Focus::Row {
                index: 0,
                column: Column::Brand,
            },
            Focus::Row { index, column } => {
                match columns.iter().position(|c| *c == column) {
                    Some(pos) if pos + 1 < columns.len() => Focus::Row {
                        index,
                        column: columns[pos + 1],
                    },
                    _ if index + 1 < row_count => Focus::Row {
                        index: index + 1,
                        column: Column::Brand,
                    },
                    _ => Focus::Date,
                }
            }
        }
    }

    fn previous(self, row_count: usize) -> Self {
        let columns = Column::iter().collect_vec();
        match self {
            Focus::Date => Focus::Row {
                index: row_count.saturating_sub(1),
                column: Column::Qty,
            },
            Focus::Row { index, column } => {
                match columns.iter().position(|c| *c == column) {
                    Some(pos) if pos > 0 => Focus::Row {
                        index,
                        column: columns[pos - 1],
                    },
                    _ if index > 0 => Focus::Row {
                        index: index - 1,
                        column: Column::Qty,
                    },
                    _ => Focus::Date,
                }
            }
        }
    }

    /// Keeps a row focus pointing at an existing row.
    fn clamp(self, row_count: usize) -> Self {
        match self {
            Focus::Row { index, column } if index >= row_count => Focus::Row {
                index: row_count.saturating_sub(1),
                column,
            },
            other => other,
        }
    }
}

/// Appends a typed digit to a price, ignoring keystrokes that would overflow.
fn push_price_digit(price: u64, c: char) -> Option<u64> {
    let next = currency::parse(&format!("{}{c}", currency::format(price)));
    (next != 0 || price == 0).then_some(next)
}

/// Drops the last digit of a price.
fn pop_price_digit(price: u64) -> u64 {
    let mut display = currency::format(price);
    display.pop();
    currency::parse(&display)
}

fn push_qty_digit(qty: u64, c: char) -> Option<u64> {
    let next = parse_quantity(&format!("{qty}{c}"));
    (next != 0 || qty == 0).then_some(next)
}

fn pop_qty_digit(qty: u64) -> u64 {
    let mut display = qty.to_string();
    display.pop();
    parse_quantity(&display)
}

/// Splits a row line into its cells: number, the editable columns and the
/// subtotal.
fn row_cells(area: Rect) -> [Rect; 7] {
    Layout::horizontal([
        Constraint::Length(3),  // #
        Constraint::Fill(1),    // brand
        Constraint::Length(16), // spec
        Constraint::Length(20), // color
        Constraint::Length(16), // price
        Constraint::Length(5),  // qty
        Constraint::Length(18), // subtotal
    ])
    .spacing(1)
    .areas(area)
}

/// Form for recording the line items of one phone purchase.
pub struct PurchaseView {
    focus: RefCell<Focus>,
    selects: RefCell<HashMap<RowId, SelectState>>,
    scroll_offset: RefCell<usize>,
    /// Date text being typed. Only complete calendar dates reach the form.
    date_draft: RefCell<Option<String>>,
}

impl Default for PurchaseView {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseView {
    pub fn new() -> Self {
        Self {
            focus: RefCell::new(Focus::Row {
                index: 0,
                column: Column::Brand,
            }),
            selects: RefCell::new(HashMap::new()),
            scroll_offset: RefCell::new(0),
            date_draft: RefCell::new(None),
        }
    }

    pub fn focus(&self) -> Focus {
        *self.focus.borrow()
    }

    fn set_focus(&self, focus: Focus) {
        if focus != self.focus() {
            self.close_selects();
            // an unfinished date falls back to the last valid one
            self.date_draft.borrow_mut().take();
        }
        *self.focus.borrow_mut() = focus;
    }

    fn close_selects(&self) {
        self.selects
            .borrow_mut()
            .values_mut()
            .for_each(SelectState::close);
    }

    /// Drops select state belonging to rows that no longer exist, releasing
    /// any outside click listener they still hold.
    fn prune_selects(&self, state: &State) {
        self.selects
            .borrow_mut()
            .retain(|id, _| state.form.row(*id).is_some());
    }

    fn focused_row<'s>(&self, state: &'s State) -> Option<(&'s PurchaseRow, Column)> {
        match self.focus().clamp(state.form.rows().len()) {
            Focus::Row { index, column } => {
                state.form.rows().get(index).map(|row| (row, column))
            }
            Focus::Date => None,
        }
    }

    fn update_row(&self, dispatcher: &dyn Dispatcher, id: RowId, update: RowUpdate) {
        dispatcher.dispatch(Action::UpdateRow(id, update));
    }

    fn add_row(&self, ctx: &CustomEventContext) {
        let new_index = ctx.state.form.rows().len();
        ctx.dispatcher.dispatch(Action::AddRow);
        self.set_focus(Focus::Row {
            index: new_index,
            column: Column::Brand,
        });
    }

    fn remove_focused_row(&self, ctx: &CustomEventContext) {
        let Some((row, column)) = self.focused_row(ctx.state) else {
            return;
        };

        let row_count = ctx.state.form.rows().len();
        let focus = self.focus().clamp(row_count);

        self.selects.borrow_mut().remove(&row.id);
        ctx.dispatcher.dispatch(Action::RemoveRow(row.id));

        let remaining = row_count.saturating_sub(1).max(1);
        if let Focus::Row { index, .. } = focus {
            self.set_focus(Focus::Row {
                index: index.min(remaining - 1),
                column,
            });
        }
    }

    /// Date shown in the input: the draft while one is being typed,
    /// otherwise the form's date.
    fn date_text(&self, state: &State) -> String {
        self.date_draft
            .borrow()
            .clone()
            .unwrap_or_else(|| state.form.date().to_string())
    }

    fn handle_date_key(&self, key: &KeyEvent, ctx: &CustomEventContext) -> bool {
        let current = self.date_text(ctx.state);
        let next = match key.code {
            KeyCode::Char(c)
                if date::is_date_char(c) && current.len() < DATE_LEN =>
            {
                format!("{current}{c}")
            }
            KeyCode::Backspace => {
                let mut value = current;
                value.pop();
                value
            }
            KeyCode::Left | KeyCode::Right => {
                let days = if key.code == KeyCode::Right { 1 } else { -1 };
                match date::shift(&current, days) {
                    Some(shifted) => shifted,
                    None => return true,
                }
            }
            _ => return false,
        };

        if date::is_iso_date(&next) {
            self.date_draft.borrow_mut().take();
            ctx.dispatcher.dispatch(Action::SetDate(next));
        } else {
            *self.date_draft.borrow_mut() = Some(next);
        }

        true
    }

    fn handle_row_key(
        &self,
        key: &KeyEvent,
        row: &PurchaseRow,
        column: Column,
        ctx: &CustomEventContext,
    ) -> bool {
        let dispatcher = ctx.dispatcher.as_ref();

        match (column, key.code) {
            (Column::Spec, KeyCode::Left | KeyCode::Right) => {
                if let Some(spec) =
                    cycle(&PHONE_SPECS, &row.spec, key.code == KeyCode::Right)
                {
                    self.update_row(dispatcher, row.id, RowUpdate::Spec(spec.into()));
                }
                true
            }
            (Column::Color, KeyCode::Left | KeyCode::Right) => {
                if let Some(color) =
                    cycle(&PHONE_COLORS, &row.color, key.code == KeyCode::Right)
                {
                    self.update_row(
                        dispatcher,
                        row.id,
                        RowUpdate::Color(color.into()),
                    );
                }
                true
            }
            (Column::Price, KeyCode::Char(c)) if c.is_ascii_digit() => {
                if let Some(price) = push_price_digit(row.price, c) {
                    self.update_row(dispatcher, row.id, RowUpdate::Price(price));
                }
                true
            }
            (Column::Price, KeyCode::Backspace) => {
                self.update_row(
                    dispatcher,
                    row.id,
                    RowUpdate::Price(pop_price_digit(row.price)),
                );
                true
            }
            (Column::Qty, KeyCode::Char(c)) if c.is_ascii_digit() => {
                if let Some(qty) = push_qty_digit(row.qty, c) {
                    self.update_row(dispatcher, row.id, RowUpdate::Qty(qty));
                }
                true
            }
            (Column::Qty, KeyCode::Backspace) => {
                self.update_row(
                    dispatcher,
                    row.id,
                    RowUpdate::Qty(pop_qty_digit(row.qty)),
                );
                true
            }
            _ => false,
        }
    }

    /// Offers the event to the focused row's brand select.
    fn forward_to_focused_select(&self, evt: &Event, ctx: &CustomEventContext) -> bool {
        let Some((row, Column::Brand)) = self.focused_row(ctx.state) else {
            return false;
        };

        let mut selects = self.selects.borrow_mut();
        let select_state = selects.entry(row.id).or_default();
        let dispatcher = ctx.dispatcher.as_ref();
        let id = row.id;

        SearchableSelect::new(&PHONE_BRANDS, &row.brand)
            .focused(true)
            .on_change(move |brand| {
                dispatcher.dispatch(Action::UpdateRow(id, RowUpdate::Brand(brand)))
            })
            .handle_event(evt, select_state)
    }

    /// Offers a mouse event to the rows' brand selects, stopping at the
    /// first one that consumes it. An open select goes first since its
    /// dropdown overlays the rows beneath it. Presses outside an open select
    /// close it and move on to the closed controls; a consumed press focuses
    /// the consuming row.
    fn forward_mouse(&self, evt: &Event, ctx: &CustomEventContext) -> bool {
        let dispatcher = ctx.dispatcher.as_ref();
        let mut selects = self.selects.borrow_mut();

        let (open, closed): (Vec<_>, Vec<_>) = ctx
            .state
            .form
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| selects.contains_key(&row.id))
            .partition(|(_, row)| selects[&row.id].is_open());

        let consumed_by = open.into_iter().chain(closed).find(|(_, row)| {
            let Some(select_state) = selects.get_mut(&row.id) else {
                return false;
            };
            let id = row.id;
            SearchableSelect::new(&PHONE_BRANDS, &row.brand)
                .on_change(move |brand| {
                    dispatcher.dispatch(Action::UpdateRow(id, RowUpdate::Brand(brand)))
                })
                .handle_event(evt, select_state)
        });

        let Some((index, _)) = consumed_by else {
            return false;
        };

        *self.focus.borrow_mut() = Focus::Row {
            index,
            column: Column::Brand,
        };

        true
    }

    fn handle_key(&self, key: &KeyEvent, ctx: &CustomEventContext) -> bool {
        let row_count = ctx.state.form.rows().len();
        let focus = self.focus().clamp(row_count);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.add_row(ctx),
                KeyCode::Char('d') => self.remove_focused_row(ctx),
                KeyCode::Char('s') => {
                    self.close_selects();
                    ctx.dispatcher.dispatch(Action::Save { at: Instant::now() });
                }
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(focus.next(row_count));
                return true;
            }
            KeyCode::BackTab => {
                self.set_focus(focus.previous(row_count));
                return true;
            }
            KeyCode::Up => {
                let next = match focus {
                    Focus::Row { index: 0, .. } | Focus::Date => Focus::Date,
                    Focus::Row { index, column } => Focus::Row {
                        index: index - 1,
                        column,
                    },
                };
                self.set_focus(next);
                return true;
            }
            KeyCode::Down => {
                let next = match focus {
                    Focus::Date => Focus::Row {
                        index: 0,
                        column: Column::Brand,
                    },
                    Focus::Row { index, column } => Focus::Row {
                        index: (index + 1).min(row_count.saturating_sub(1)),
                        column,
                    },
                };
                self.set_focus(next);
                return true;
            }
            _ => {}
        }

        match self.focused_row(ctx.state) {
            Some((row, column)) => self.handle_row_key(key, row, column, ctx),
            None => self.handle_date_key(key, ctx),
        }
    }

    fn render_banner(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let total = format!(
            "Grand Total: {}",
            currency::rupiah(ctx.state.form.grand_total())
        );

        Header::new(TITLE).aside(total).render(area, buf, ctx);
    }

    fn render_date(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut input_state = InputState {
            focused: self.focus() == Focus::Date,
            value: self.date_text(ctx.state),
        };

        Input::labeled("Purchase Date")
            .placeholder("YYYY-MM-DD")
            .render(area, buf, &mut input_state, ctx);
    }

    fn render_column_header(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let style = Style::default()
            .fg(ctx.state.colors.header_text)
            .bg(ctx.state.colors.row_header_bg)
            .add_modifier(Modifier::BOLD);

        buf.set_style(area, style);

        let titles = std::iter::once("#".to_string())
            .chain(Column::iter().map(|c| c.to_string()))
            .chain(std::iter::once("Subtotal".to_string()));

        for (cell, title) in row_cells(area).into_iter().zip(titles) {
            let alignment = if title == "Subtotal" {
                Alignment::Right
            } else {
                Alignment::Left
            };
            Paragraph::new(title)
                .style(style)
                .alignment(alignment)
                .render(cell, buf);
        }
    }

    fn render_row(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        position: usize,
        row: &PurchaseRow,
        select_state: &mut SelectState,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let focus = self.focus().clamp(ctx.state.form.rows().len());
        let focused_column = match focus {
            Focus::Row { index, column } if index == position => Some(column),
            _ => None,
        };
        let is_focused = |column: Column| focused_column == Some(column);

        let [num, brand, spec, color, price, qty, subtotal] = row_cells(area);

        let num_style = if focused_column.is_some() {
            Style::default()
                .fg(colors.selected_row_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.placeholder)
        };
        Paragraph::new(format!("{}", position + 1))
            .style(num_style)
            .render(num, buf);

        SearchableSelect::new(&PHONE_BRANDS, &row.brand)
            .placeholder("Select brand")
            .focused(is_focused(Column::Brand))
            .render(brand, buf, select_state, ctx);

        CycleSelect::new(&row.spec, "Select spec")
            .focused(is_focused(Column::Spec))
            .render(spec, buf, ctx);

        CycleSelect::new(&row.color, "Select color")
            .focused(is_focused(Column::Color))
            .render(color, buf, ctx);

        let mut price_state = InputState {
            focused: is_focused(Column::Price),
            value: currency::format(row.price),
        };
        Input::new()
            .prefix(currency::CURRENCY_SYMBOL)
            .placeholder("0")
            .render(price, buf, &mut price_state, ctx);

        let mut qty_state = InputState {
            focused: is_focused(Column::Qty),
            value: row.qty.to_string(),
        };
        Input::new()
            .alignment(Alignment::Right)
            .render(qty, buf, &mut qty_state, ctx);

        Paragraph::new(currency::rupiah(row.subtotal()))
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Right)
            .render(subtotal, buf);
    }

    /// Adjusts the scroll offset so the focused row stays within a window of
    /// `visible` rows. Returns the offset.
    fn scroll_to_focus(&self, visible: usize, row_count: usize) -> usize {
        let mut offset = self.scroll_offset.borrow_mut();

        if let Focus::Row { index, .. } = self.focus().clamp(row_count) {
            if index < *offset {
                *offset = index;
            } else if visible > 0 && index >= *offset + visible {
                *offset = index + 1 - visible;
            }
        }

        *offset = (*offset).min(row_count.saturating_sub(visible.max(1)));
        *offset
    }

    fn render_rows(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let rows = ctx.state.form.rows();
        let visible = usize::from(area.height);
        let offset = self.scroll_to_focus(visible, rows.len());

        let mut selects = self.selects.borrow_mut();

        // rows scrolled out of view cannot keep a dropdown open
        for (position, row) in rows.iter().enumerate() {
            if (position < offset || position >= offset + visible)
                && let Some(select_state) = selects.get_mut(&row.id)
            {
                select_state.close();
            }
        }

        let shown = rows.iter().enumerate().skip(offset).take(visible);

        for ((position, row), line) in shown.clone().zip(area.rows()) {
            let select_state = selects.entry(row.id).or_default();
            self.render_row(line, buf, position, row, select_state, ctx);
        }

        // dropdowns go last so they overlay the rows beneath them
        for (_, row) in shown {
            if let Some(select_state) = selects.get_mut(&row.id)
                && select_state.is_open()
            {
                SearchableSelect::new(&PHONE_BRANDS, &row.brand)
                    .render_dropdown(buf, select_state, ctx);
            }
        }
    }

    fn render_overlays(
        &self,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        if ctx.state.ack_visible() {
            Toast::new("Saved!", "Purchase data secured.").render(
                ctx.app_area,
                buf,
                ctx,
            );
        }

        if let Some(error) = ctx.state.error.as_ref() {
            let message =
                MessagePopover::new(error.as_str()).hint("Press enter to dismiss");
            Popover::new(&message)
                .title("Cannot save")
                .border_color(ctx.state.colors.error)
                .render_ref(ctx.app_area, buf, ctx)?;
        }

        Ok(())
    }
}

impl View for PurchaseView {
    fn legend(&self, state: &State) -> &str {
        if state.error.is_some() {
            ERROR_LEGEND
        } else {
            FORM_LEGEND
        }
    }
}

impl CustomWidgetRef for PurchaseView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        self.prune_selects(ctx.state);

        let [banner, _, date_area, _, header, rows] = Layout::vertical([
            Constraint::Length(1), // title + grand total
            Constraint::Length(1), // spacer
            Constraint::Length(1), // date
            Constraint::Length(1), // spacer
            Constraint::Length(1), // column header
            Constraint::Fill(1),   // rows
        ])
        .areas(area);

        self.render_banner(banner, buf, ctx);
        self.render_date(date_area, buf, ctx);
        self.render_column_header(header, buf, ctx);
        self.render_rows(rows, buf, ctx);
        self.render_overlays(buf, ctx)
    }
}

impl EventHandler for PurchaseView {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        self.prune_selects(ctx.state);

        if ctx.state.error.is_some() {
            if let Event::Key(key) = evt
                && key.kind == KeyEventKind::Press
                && key.code == KeyCode::Enter
            {
                ctx.dispatcher.dispatch(Action::SetError(None));
            }
            // the popover blocks everything else while shown
            return Ok(true);
        }

        match evt {
            Event::Mouse(_) => Ok(self.forward_mouse(evt, ctx)),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.forward_to_focused_select(evt, ctx) {
                    return Ok(true);
                }
                Ok(self.handle_key(key, ctx))
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "./purchase_tests.rs"]
mod tests;
