//! Keyboard focus containment for the project modal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Anchor,
    Input,
    Select,
    Textarea,
    Other,
}

/// A descendant of the modal, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalElement {
    pub id: String,
    pub kind: ElementKind,
    pub has_href: bool,
    pub tabindex: Option<i32>,
    pub disabled: bool,
}

impl ModalElement {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        ModalElement {
            id: id.into(),
            kind,
            has_href: kind == ElementKind::Anchor,
            tabindex: None,
            disabled: false,
        }
    }

    pub fn with_tabindex(mut self, tabindex: i32) -> Self {
        self.tabindex = Some(tabindex);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// `button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])`
    pub fn is_focusable(&self) -> bool {
        if self.disabled {
            return false;
        }
        match self.kind {
            ElementKind::Button | ElementKind::Input | ElementKind::Select | ElementKind::Textarea => true,
            _ if self.has_href => true,
            _ => matches!(self.tabindex, Some(t) if t != -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    ShiftTab,
    Escape,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapEvent {
    /// Focus moved to the element with this id.
    Focus(String),
    /// The modal closed; focus returns to `restore` and the scroll lock is released.
    Closed { restore: Option<String> },
    Ignored,
}

#[derive(Debug, Clone)]
struct OpenModal {
    container: String,
    focusables: Vec<String>,
    focused: String,
    previous: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FocusTrap {
    open: Option<OpenModal>,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal, remembering `previously_focused`, and returns the id
    /// that receives focus: the first focusable descendant or the container.
    pub fn open(
        &mut self,
        container_id: impl Into<String>,
        elements: &[ModalElement],
        previously_focused: Option<String>,
    ) -> String {
        let container = container_id.into();
        let focusables: Vec<String> = elements
            .iter()
            .filter(|e| e.is_focusable())
            .map(|e| e.id.clone())
            .collect();
        let focused = focusables.first().cloned().unwrap_or_else(|| container.clone());

        // Re-opening keeps the element focused before the first open.
        let previous = match self.open.take() {
            Some(prev) => prev.previous,
            None => previously_focused,
        };

        self.open = Some(OpenModal { container, focusables, focused: focused.clone(), previous });
        focused
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Body scroll stays locked exactly while the modal is open.
    pub fn is_scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn focused(&self) -> Option<&str> {
        self.open.as_ref().map(|m| m.focused.as_str())
    }

    /// Pointer focus. Ids outside the modal are refused while it is open.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.open.as_mut() {
            Some(modal) if modal.focusables.iter().any(|f| f == id) || modal.container == id => {
                modal.focused = id.to_string();
                true
            }
            Some(_) => false,
            None => true,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> TrapEvent {
        if !self.is_open() {
            return TrapEvent::Ignored;
        }
        if key == Key::Escape {
            return TrapEvent::Closed { restore: self.close() };
        }
        let Some(modal) = self.open.as_mut() else {
            return TrapEvent::Ignored;
        };

        match key {
            Key::Tab | Key::ShiftTab => {
                let n = modal.focusables.len();
                if n == 0 {
                    modal.focused = modal.container.clone();
                    return TrapEvent::Focus(modal.focused.clone());
                }
                let current = modal.focusables.iter().position(|f| *f == modal.focused);
                let next = match (key, current) {
                    (Key::Tab, Some(i)) => (i + 1) % n,
                    (Key::Tab, None) => 0,
                    (_, Some(0)) | (_, None) => n - 1,
                    (_, Some(i)) => i - 1,
                };
                modal.focused = modal.focusables[next].clone();
                TrapEvent::Focus(modal.focused.clone())
            }
            Key::Escape | Key::Other => TrapEvent::Ignored,
        }
    }

    /// Closes the modal and returns the element to restore focus to.
    pub fn close(&mut self) -> Option<String> {
        self.open.take().and_then(|m| m.previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> Vec<ModalElement> {
        vec![
            ModalElement::new("close", ElementKind::Button),
            ModalElement::new("heading", ElementKind::Other),
            ModalElement::new("demo", ElementKind::Anchor),
            ModalElement::new("skip", ElementKind::Other).with_tabindex(-1),
            ModalElement::new("card", ElementKind::Other).with_tabindex(0),
            ModalElement::new("submit", ElementKind::Button).disabled(),
        ]
    }

    #[test]
    fn focus_moves_to_first_focusable() {
        let mut trap = FocusTrap::new();
        assert_eq!(trap.open("modal", &modal(), Some("open-btn".into())), "close");
        assert!(trap.is_scroll_locked());
    }

    #[test]
    fn falls_back_to_container() {
        let mut trap = FocusTrap::new();
        let elements = vec![ModalElement::new("text", ElementKind::Other)];
        assert_eq!(trap.open("modal", &elements, None), "modal");
        assert_eq!(trap.handle_key(Key::Tab), TrapEvent::Focus("modal".into()));
    }

    #[test]
    fn tab_cycles_only_within_modal() {
        let mut trap = FocusTrap::new();
        let elements = modal();
        trap.open("modal", &elements, Some("open-btn".into()));
        let inside = ["close", "demo", "card"];

        let mut seen = Vec::new();
        for _ in 0..7 {
            match trap.handle_key(Key::Tab) {
                TrapEvent::Focus(id) => {
                    assert!(inside.contains(&id.as_str()));
                    seen.push(id);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(seen, vec!["demo", "card", "close", "demo", "card", "close", "demo"]);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        let mut trap = FocusTrap::new();
        trap.open("modal", &modal(), None);
        assert_eq!(trap.handle_key(Key::ShiftTab), TrapEvent::Focus("card".into()));
        assert_eq!(trap.handle_key(Key::ShiftTab), TrapEvent::Focus("demo".into()));
    }

    #[test]
    fn outside_focus_is_refused() {
        let mut trap = FocusTrap::new();
        trap.open("modal", &modal(), None);
        assert!(!trap.focus("page-link"));
        assert!(trap.focus("card"));
        assert_eq!(trap.handle_key(Key::Tab), TrapEvent::Focus("close".into()));
    }

    #[test]
    fn escape_closes_and_restores_focus() {
        let mut trap = FocusTrap::new();
        trap.open("modal", &modal(), Some("open-btn".into()));
        trap.handle_key(Key::Tab);

        assert_eq!(
            trap.handle_key(Key::Escape),
            TrapEvent::Closed { restore: Some("open-btn".into()) }
        );
        assert!(!trap.is_open());
        assert!(!trap.is_scroll_locked());
        assert_eq!(trap.handle_key(Key::Tab), TrapEvent::Ignored);
    }
}
