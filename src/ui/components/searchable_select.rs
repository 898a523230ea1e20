//! Dropdown select with an inline search filter.
//!
//! The widget is controlled: the parent passes in the current value and a
//! change callback every frame. [`SelectState`] only remembers whether the
//! dropdown is open, the filter typed so far, the highlighted option and
//! where the control was last drawn.

use ratatui::{
    crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Clear, List, ListItem, ListState, Paragraph,
        StatefulWidget, Widget,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

const MAX_VISIBLE_OPTIONS: usize = 8;
const MIN_DROPDOWN_WIDTH: u16 = 28;
const NO_RESULTS: &str = "No results";

/// Returns the options containing `filter`, ignoring case. An empty filter
/// matches everything. The input order is preserved.
pub fn filter_options<'o>(options: &[&'o str], filter: &str) -> Vec<&'o str> {
    let needle = filter.to_lowercase();
    options
        .iter()
        .filter(|o| o.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Truncates `text` to fit in `width` terminal cells, ending with an
/// ellipsis when anything was cut.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Watches for mouse presses outside an open select. Exists only while its
/// select is open.
#[derive(Debug)]
pub struct OutsideClickListener {
    bounds: Rect,
}

impl OutsideClickListener {
    fn new(bounds: Rect) -> Self {
        log::debug!("outside click listener attached at {bounds:?}");
        Self { bounds }
    }

    /// Whether the given cell lies outside the watched bounds.
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        !self.bounds.contains(Position::new(column, row))
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        log::debug!("outside click listener released");
    }
}

#[derive(Debug)]
struct OpenSelect {
    filter: String,
    highlighted: usize,
    listener: OutsideClickListener,
    list_area: Rect,
    list_offset: usize,
}

/// Open/closed state of a single select instance.
#[derive(Debug, Default)]
pub struct SelectState {
    control_area: Rect,
    open: Option<OpenSelect>,
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Current filter text, None while closed.
    pub fn filter(&self) -> Option<&str> {
        self.open.as_ref().map(|o| o.filter.as_str())
    }

    /// Index of the highlighted entry within the filtered options.
    pub fn highlighted(&self) -> Option<usize> {
        self.open.as_ref().map(|o| o.highlighted)
    }

    fn open(&mut self, highlighted: usize) {
        self.open = Some(OpenSelect {
            filter: String::new(),
            highlighted,
            listener: OutsideClickListener::new(self.control_area),
            list_area: Rect::default(),
            list_offset: 0,
        });
    }

    /// Closes the dropdown, discarding the filter and releasing the outside
    /// click listener.
    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Brand-style select: closed it shows the value, open it shows a search
/// line and the matching options underneath.
pub struct SearchableSelect<'a> {
    options: &'a [&'a str],
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    on_change: Option<Box<dyn FnOnce(String) + 'a>>,
}

impl<'a> SearchableSelect<'a> {
    pub fn new(options: &'a [&'a str], value: &'a str) -> Self {
        Self {
            options,
            value,
            placeholder: "",
            focused: false,
            on_change: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Callback invoked with the chosen option when a selection is committed.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnOnce(String) + 'a,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    fn visible(&self, state: &SelectState) -> Vec<&'a str> {
        filter_options(self.options, state.filter().unwrap_or_default())
    }

    fn open(&self, state: &mut SelectState) {
        let highlighted = self
            .options
            .iter()
            .position(|o| *o == self.value)
            .unwrap_or_default();
        state.open(highlighted);
    }

    fn commit(self, state: &mut SelectState) {
        let visible = self.visible(state);
        let Some(choice) = state
            .highlighted()
            .and_then(|idx| visible.get(idx).copied())
        else {
            return;
        };

        log::debug!("select committed {choice}");

        if let Some(on_change) = self.on_change {
            on_change(choice.to_string());
        }

        state.close();
    }

    /// Processes an input event. Returns true if the event was consumed.
    ///
    /// Mouse presses outside the open select close it without being consumed
    /// so the parent can still act on them.
    pub fn handle_event(self, evt: &Event, state: &mut SelectState) -> bool {
        match evt {
            Event::Mouse(mouse) => self.handle_mouse(mouse, state),
            Event::Key(key) => self.handle_key(key, state),
            _ => false,
        }
    }

    fn handle_mouse(self, mouse: &MouseEvent, state: &mut SelectState) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let pos = Position::new(mouse.column, mouse.row);

        let Some(open) = state.open.as_mut() else {
            if state.control_area.contains(pos) {
                self.open(state);
                return true;
            }
            return false;
        };

        if open.listener.is_outside(mouse.column, mouse.row) {
            state.close();
            return false;
        }

        if open.list_area.contains(pos) {
            let idx = open.list_offset + usize::from(mouse.row - open.list_area.y);
            if idx < self.visible(state).len() {
                if let Some(open) = state.open.as_mut() {
                    open.highlighted = idx;
                }
                self.commit(state);
            }
            return true;
        }

        if state.control_area.contains(pos) {
            state.close();
        }

        true
    }

    fn handle_key(self, key: &KeyEvent, state: &mut SelectState) -> bool {
        if !state.is_open() {
            if !self.focused {
                return false;
            }
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open(state);
                    true
                }
                _ => false,
            };
        }

        let visible_count = self.visible(state).len();

        match key.code {
            KeyCode::Esc => {
                state.close();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                state.close();
                false
            }
            KeyCode::Enter => {
                self.commit(state);
                true
            }
            KeyCode::Up => {
                if let Some(open) = state.open.as_mut() {
                    open.highlighted = open.highlighted.saturating_sub(1);
                }
                true
            }
            KeyCode::Down => {
                if let Some(open) = state.open.as_mut() {
                    open.highlighted =
                        (open.highlighted + 1).min(visible_count.saturating_sub(1));
                }
                true
            }
            KeyCode::Backspace => {
                if let Some(open) = state.open.as_mut() {
                    open.filter.pop();
                    open.highlighted = 0;
                }
                true
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                if let Some(open) = state.open.as_mut() {
                    open.filter.push(c);
                    open.highlighted = 0;
                }
                true
            }
            _ => true,
        }
    }

    /// Area the dropdown list occupies when drawn beneath `control`, flipping
    /// above it when there is no room below.
    fn dropdown_area(&self, control: Rect, app_area: Rect, rows: usize) -> Rect {
        let height = (rows.clamp(1, MAX_VISIBLE_OPTIONS) + 2) as u16;
        let width = control
            .width
            .max(MIN_DROPDOWN_WIDTH)
            .min(app_area.right().saturating_sub(control.x));

        let below = control.bottom();
        let y = if below.saturating_add(height) <= app_area.bottom() {
            below
        } else {
            control.y.saturating_sub(height).max(app_area.y)
        };

        Rect::new(control.x, y, width, height).intersection(app_area)
    }

    /// Draws the open dropdown on top of everything rendered so far. Call
    /// after the surrounding rows so the list is not overdrawn.
    pub fn render_dropdown(
        &self,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut SelectState,
        ctx: &CustomWidgetContext,
    ) {
        let visible = self.visible(state);
        let control_area = state.control_area;
        let Some(open) = state.open.as_mut() else {
            return;
        };

        let colors = &ctx.state.colors;
        let area = self.dropdown_area(control_area, ctx.app_area, visible.len());

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border_color))
            .style(Style::default().bg(colors.buffer_bg));

        let inner = block.inner(area);
        open.listener.bounds = control_area.union(area);
        open.list_area = inner;

        Clear.render(area, buf);
        block.render(area, buf);

        if visible.is_empty() {
            open.list_offset = 0;
            Paragraph::new(Line::from(NO_RESULTS))
                .style(
                    Style::default()
                        .fg(colors.placeholder)
                        .add_modifier(Modifier::ITALIC),
                )
                .render(inner, buf);
            return;
        }

        let item_width = usize::from(inner.width.saturating_sub(2));
        let items = visible.iter().map(|o| {
            let style = if *o == self.value {
                Style::default().fg(colors.selected_row_fg)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(fit_width(o, item_width)).style(style)
        });

        let list = List::new(items)
            .highlight_symbol("› ")
            .highlight_style(
                Style::default()
                    .bg(colors.row_header_bg)
                    .add_modifier(Modifier::BOLD),
            );

        let mut list_state = ListState::default()
            .with_offset(open.list_offset)
            .with_selected(Some(open.highlighted));

        StatefulWidget::render(list, inner, buf, &mut list_state);
        open.list_offset = list_state.offset();
    }
}

impl CustomStatefulWidget for SearchableSelect<'_> {
    type State = SelectState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        state.control_area = area;

        let colors = &ctx.state.colors;
        let text_width = usize::from(area.width.saturating_sub(2));

        let line = match state.filter() {
            Some(filter) => {
                let text = if filter.is_empty() {
                    Span::from(fit_width("Search...", text_width))
                        .style(Style::default().fg(colors.placeholder))
                } else {
                    Span::from(fit_width(filter, text_width)).style(
                        Style::default()
                            .fg(colors.input_editing)
                            .add_modifier(Modifier::BOLD),
                    )
                };
                Line::from(vec![
                    Span::from("⌕ ").style(Style::default().fg(colors.input_editing)),
                    text,
                ])
            }
            None => {
                let (text, mut style) = if self.value.is_empty() {
                    (self.placeholder, Style::default().fg(colors.placeholder))
                } else {
                    (self.value, Style::default().fg(colors.text))
                };

                let marker_style = if self.focused {
                    style = style.add_modifier(Modifier::BOLD);
                    if !self.value.is_empty() {
                        style = style.fg(colors.input_editing);
                    }
                    Style::default().fg(colors.input_editing)
                } else {
                    Style::default().fg(colors.gray)
                };

                Line::from(vec![
                    Span::from("▾ ").style(marker_style),
                    Span::from(fit_width(text, text_width)).style(style),
                ])
            }
        };

        Paragraph::new(line).render(area, buf)
    }
}

#[cfg(test)]
#[path = "./searchable_select_tests.rs"]
mod tests;
