use crate::rail::{LaunchSignal, RailState, Selection};

/// Logical inputs from a keyboard or remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AdvancePositive,
    AdvanceNegative,
    Confirm,
    Cancel,
    MenuToggle,
}

/// Things a pointer can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Item(usize),
    CloseControl,
    Backdrop,
}

/// Result of routing one input.
/// A handled input suppresses platform default handling and triggers a re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub handled: bool,
    pub launch: Option<LaunchSignal>,
}

impl Dispatch {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            handled: true,
            launch: None,
        }
    }

    fn from_selection(selection: Selection) -> Self {
        match selection {
            Selection::Launch(signal) => Self {
                handled: true,
                launch: Some(signal),
            },
            Selection::OpenedPanel => Self::handled(),
            Selection::Ignored => Self::ignored(),
        }
    }
}

/// Maps an action onto the rail, branching on whether the panel is open.
///
/// The close control is the only focusable control in the panel, so a
/// confirm while the panel is open always lands on it.
pub fn route(state: &mut RailState, action: Action) -> Dispatch {
    if state.panel_open() {
        return match action {
            Action::Cancel | Action::Confirm => {
                state.close_panel();
                Dispatch::handled()
            }
            Action::AdvancePositive | Action::AdvanceNegative | Action::MenuToggle => {
                Dispatch::ignored()
            }
        };
    }

    match action {
        Action::MenuToggle => {
            state.open_panel();
            Dispatch::handled()
        }
        Action::Cancel => Dispatch::ignored(),
        Action::AdvancePositive | Action::AdvanceNegative | Action::Confirm
            if state.is_empty() =>
        {
            Dispatch::ignored()
        }
        Action::AdvancePositive => {
            state.move_right();
            Dispatch::handled()
        }
        Action::AdvanceNegative => {
            state.move_left();
            Dispatch::handled()
        }
        Action::Confirm => Dispatch::from_selection(state.select()),
    }
}

/// Pointer activations: an item click focuses then selects it,
/// the close control and the backdrop close the panel.
pub fn route_pointer(state: &mut RailState, target: PointerTarget) -> Dispatch {
    match (state.panel_open(), target) {
        (true, PointerTarget::CloseControl | PointerTarget::Backdrop) => {
            state.close_panel();
            Dispatch::handled()
        }
        (false, PointerTarget::Item(index)) => {
            if state.focus_on(index) {
                let mut dispatch = Dispatch::from_selection(state.select());
                dispatch.handled = true;
                dispatch
            } else {
                Dispatch::ignored()
            }
        }
        (true, PointerTarget::Item(_))
        | (false, PointerTarget::CloseControl | PointerTarget::Backdrop) => Dispatch::ignored(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LaunchItem, LoadedLayout};

    fn rail() -> RailState {
        RailState::new(LoadedLayout::builtin().items, 0)
    }

    #[test]
    fn test_browsing_navigation() {
        let mut state = rail();
        assert!(route(&mut state, Action::AdvancePositive).handled);
        assert_eq!(state.focus_index(), Some(1));
        assert!(route(&mut state, Action::AdvanceNegative).handled);
        assert!(route(&mut state, Action::AdvanceNegative).handled);
        assert_eq!(state.focus_index(), Some(5));
    }

    #[test]
    fn test_confirm_launches_focused_item() {
        let mut state = rail();
        let dispatch = route(&mut state, Action::Confirm);
        assert!(dispatch.handled);
        assert_eq!(
            dispatch.launch,
            Some(LaunchSignal {
                item_id: "netflix".to_string()
            })
        );
    }

    #[test]
    fn test_confirm_on_settings_opens_panel() {
        let mut state = rail();
        route(&mut state, Action::AdvanceNegative);
        let dispatch = route(&mut state, Action::Confirm);
        assert!(dispatch.handled);
        assert!(dispatch.launch.is_none());
        assert!(state.panel_open());
        assert_eq!(state.focus_index(), Some(5));
    }

    #[test]
    fn test_menu_toggle_opens_panel() {
        let mut state = rail();
        assert!(route(&mut state, Action::MenuToggle).handled);
        assert!(state.panel_open());
    }

    #[test]
    fn test_cancel_ignored_while_browsing() {
        let mut state = rail();
        assert_eq!(route(&mut state, Action::Cancel), Dispatch::default());
        assert!(!state.panel_open());
    }

    #[test]
    fn test_panel_swallows_navigation() {
        let mut state = rail();
        route(&mut state, Action::MenuToggle);
        assert!(!route(&mut state, Action::AdvancePositive).handled);
        assert!(!route(&mut state, Action::AdvanceNegative).handled);
        assert!(!route(&mut state, Action::MenuToggle).handled);
        assert_eq!(state.focus_index(), Some(0));
        assert!(state.panel_open());
    }

    #[test]
    fn test_panel_closes_on_cancel_or_confirm() {
        let mut state = rail();
        route(&mut state, Action::MenuToggle);
        assert!(route(&mut state, Action::Cancel).handled);
        assert!(!state.panel_open());

        route(&mut state, Action::MenuToggle);
        let dispatch = route(&mut state, Action::Confirm);
        assert!(dispatch.handled);
        assert!(dispatch.launch.is_none());
        assert!(!state.panel_open());
    }

    #[test]
    fn test_empty_rail_only_handles_menu() {
        let mut state = RailState::new(Vec::new(), 0);
        assert!(!route(&mut state, Action::AdvancePositive).handled);
        assert!(!route(&mut state, Action::AdvanceNegative).handled);
        assert!(!route(&mut state, Action::Confirm).handled);
        assert!(route(&mut state, Action::MenuToggle).handled);
        assert!(state.panel_open());
    }

    #[test]
    fn test_pointer_item_focuses_then_selects() {
        let mut state = rail();
        let dispatch = route_pointer(&mut state, PointerTarget::Item(3));
        assert!(dispatch.handled);
        assert_eq!(state.focus_index(), Some(3));
        assert_eq!(
            dispatch.launch,
            Some(LaunchSignal {
                item_id: "disney".to_string()
            })
        );
    }

    #[test]
    fn test_pointer_out_of_range_item_is_ignored() {
        let mut state = rail();
        assert_eq!(route_pointer(&mut state, PointerTarget::Item(9)), Dispatch::default());
        assert_eq!(state.focus_index(), Some(0));
    }

    #[test]
    fn test_pointer_backdrop_and_close_control() {
        let mut state = rail();
        assert!(!route_pointer(&mut state, PointerTarget::Backdrop).handled);

        route(&mut state, Action::MenuToggle);
        assert!(!route_pointer(&mut state, PointerTarget::Item(2)).handled);
        assert_eq!(state.focus_index(), Some(0));
        assert!(route_pointer(&mut state, PointerTarget::Backdrop).handled);
        assert!(!state.panel_open());

        route(&mut state, Action::MenuToggle);
        assert!(route_pointer(&mut state, PointerTarget::CloseControl).handled);
        assert!(!state.panel_open());
    }

    #[test]
    fn test_pointer_settings_item_opens_panel() {
        let mut state = RailState::new(
            vec![
                LaunchItem::new("hulu", "Hulu", "h.svg"),
                LaunchItem::new("prefs", "Prefs", "p.svg").with_action("open-settings"),
            ],
            0,
        );
        let dispatch = route_pointer(&mut state, PointerTarget::Item(1));
        assert!(dispatch.handled);
        assert!(dispatch.launch.is_none());
        assert!(state.panel_open());
    }
}
