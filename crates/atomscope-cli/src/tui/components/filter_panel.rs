use crossterm::event::{KeyCode, KeyEvent};
use atomscope_types::{FilterBound, FilterSpec};

/// Rows of the filter panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    SortBy,
    Order,
    Bound(FilterBound),
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::SortBy,
        FilterField::Order,
        FilterField::Bound(FilterBound::MinMarketCap),
        FilterField::Bound(FilterBound::MaxMarketCap),
        FilterField::Bound(FilterBound::MinSharePrice),
        FilterField::Bound(FilterBound::MaxSharePrice),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Filters changed; the visible list must be reprojected
    Changed,
    Closed,
    Unchanged,
}

/// Editor for a [`FilterSpec`]. Edits apply immediately.
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    selected: usize,
}

impl FilterPanel {
    pub fn selected(&self) -> FilterField {
        FilterField::ALL[self.selected.min(FilterField::ALL.len() - 1)]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn handle_key(&mut self, key: KeyEvent, spec: &mut FilterSpec) -> PanelEvent {
        match key.code {
            KeyCode::Esc | KeyCode::Char('f') => PanelEvent::Closed,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                PanelEvent::Unchanged
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(FilterField::ALL.len() - 1);
                PanelEvent::Unchanged
            }
            KeyCode::Char('x') => {
                spec.reset();
                PanelEvent::Changed
            }
            KeyCode::Left | KeyCode::Right => match self.selected() {
                FilterField::SortBy => {
                    spec.sort_by = spec.sort_by.next();
                    PanelEvent::Changed
                }
                FilterField::Order => {
                    spec.sort_order = spec.sort_order.toggled();
                    PanelEvent::Changed
                }
                FilterField::Bound(_) => PanelEvent::Unchanged,
            },
            KeyCode::Backspace => match self.selected() {
                FilterField::Bound(bound) => {
                    spec.bound_mut(bound).pop();
                    PanelEvent::Changed
                }
                _ => PanelEvent::Unchanged,
            },
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => match self.selected() {
                FilterField::Bound(bound) => {
                    spec.bound_mut(bound).push(c);
                    PanelEvent::Changed
                }
                _ => PanelEvent::Unchanged,
            },
            _ => PanelEvent::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_types::{SortKey, SortOrder};
    use crossterm::event::KeyModifiers;

    fn press(panel: &mut FilterPanel, spec: &mut FilterSpec, code: KeyCode) -> PanelEvent {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE), spec)
    }

    #[test]
    fn test_cycle_sort_and_order() {
        let mut panel = FilterPanel::default();
        let mut spec = FilterSpec::new();

        assert_eq!(press(&mut panel, &mut spec, KeyCode::Right), PanelEvent::Changed);
        assert_eq!(spec.sort_by, SortKey::MarketCap.next());

        press(&mut panel, &mut spec, KeyCode::Down);
        press(&mut panel, &mut spec, KeyCode::Right);
        assert_eq!(spec.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_edit_bound_text() {
        let mut panel = FilterPanel::default();
        let mut spec = FilterSpec::new();
        press(&mut panel, &mut spec, KeyCode::Down);
        press(&mut panel, &mut spec, KeyCode::Down);
        assert_eq!(panel.selected(), FilterField::Bound(FilterBound::MinMarketCap));

        for c in "12.5".chars() {
            press(&mut panel, &mut spec, KeyCode::Char(c));
        }
        press(&mut panel, &mut spec, KeyCode::Char('z'));
        assert_eq!(spec.min_market_cap, "12.5");

        press(&mut panel, &mut spec, KeyCode::Backspace);
        assert_eq!(spec.min_market_cap, "12.");

        assert_eq!(press(&mut panel, &mut spec, KeyCode::Char('x')), PanelEvent::Changed);
        assert_eq!(spec, FilterSpec::default());
        assert_eq!(press(&mut panel, &mut spec, KeyCode::Esc), PanelEvent::Closed);
    }
}
