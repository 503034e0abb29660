/// Circular focus navigation over a list-like component.
/// Both directions wrap; there is no end-of-list stop.
pub trait Navigable {
    /// Returns the total number of items in the list
    fn item_count(&self) -> usize;

    /// Returns the currently focused index
    fn focused_index(&self) -> usize;

    /// Sets the focused index
    fn set_focused_index(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn focus_next(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.focused_index() % count + 1) % count;
            self.set_focused_index(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn focus_previous(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let current = self.focused_index() % count;
            let prev = if current == 0 { count - 1 } else { current - 1 };
            self.set_focused_index(prev);
        }
    }
}
