//! Navigator cursor and command buffer
//!
//! The navigator's whole state is a current-cycle cursor and an accumulating
//! jump buffer, mutated only by decoded key events. Event handling is pure:
//! it returns the action the session loop should take, and never touches the
//! terminal itself.

use crate::nav::keys::Key;

/// What the session loop should do after a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Redraw the display for the given cycle
    Redraw(u64),
    /// End the session
    Quit,
    /// Nothing to do; the last valid display stays up
    Ignore,
}

/// Interactive navigator state: current cycle cursor plus jump buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    cursor: u64,
    buffer: String,
}

impl Navigator {
    /// Create a navigator positioned at the given initial cycle.
    #[must_use]
    pub const fn new(initial_cycle: u64) -> Self {
        Self {
            cursor: initial_cycle,
            buffer: String::new(),
        }
    }

    /// The current cycle cursor.
    #[must_use]
    pub const fn cursor(&self) -> u64 {
        self.cursor
    }

    /// The pending jump buffer contents.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Apply one decoded key to the state and return the resulting action.
    ///
    /// A jump buffer that fails to parse as an integer is a silent no-op:
    /// the cursor and display stay unchanged. The buffer is cleared after
    /// every committed command, recognized or not.
    pub fn handle_key(&mut self, key: Key) -> Action {
        match key {
            Key::Digit(c) | Key::Other(c) => {
                self.buffer.push(c);
                Action::Ignore
            }
            Key::Enter => {
                let action = match self.buffer.parse::<u64>() {
                    Ok(target) => {
                        self.cursor = target;
                        Action::Redraw(target)
                    }
                    Err(_) => Action::Ignore,
                };
                self.buffer.clear();
                action
            }
            Key::Right => {
                self.buffer.clear();
                self.cursor += 1;
                Action::Redraw(self.cursor)
            }
            Key::Left => {
                self.buffer.clear();
                if self.cursor > 1 {
                    self.cursor -= 1;
                    Action::Redraw(self.cursor)
                } else {
                    Action::Ignore
                }
            }
            Key::Quit => Action::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_initial_cycle_with_empty_buffer() {
        let nav = Navigator::new(5);
        assert_eq!(nav.cursor(), 5);
        assert_eq!(nav.buffer(), "");
    }

    #[test]
    fn test_digits_accumulate_without_moving_cursor() {
        let mut nav = Navigator::new(1);
        assert_eq!(nav.handle_key(Key::Digit('4')), Action::Ignore);
        assert_eq!(nav.handle_key(Key::Digit('2')), Action::Ignore);
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.buffer(), "42");
    }

    #[test]
    fn test_enter_commits_jump_and_clears_buffer() {
        let mut nav = Navigator::new(1);
        let _ = nav.handle_key(Key::Digit('4'));
        let _ = nav.handle_key(Key::Digit('2'));
        assert_eq!(nav.handle_key(Key::Enter), Action::Redraw(42));
        assert_eq!(nav.cursor(), 42);
        assert_eq!(nav.buffer(), "");
    }

    #[test]
    fn test_enter_with_empty_buffer_is_noop() {
        let mut nav = Navigator::new(7);
        assert_eq!(nav.handle_key(Key::Enter), Action::Ignore);
        assert_eq!(nav.cursor(), 7);
    }

    #[test]
    fn test_enter_with_non_numeric_buffer_is_noop_and_clears() {
        let mut nav = Navigator::new(7);
        let _ = nav.handle_key(Key::Other('x'));
        let _ = nav.handle_key(Key::Digit('3'));
        assert_eq!(nav.handle_key(Key::Enter), Action::Ignore);
        assert_eq!(nav.cursor(), 7);
        assert_eq!(nav.buffer(), "");
    }

    #[test]
    fn test_right_advances_cursor_unconditionally() {
        let mut nav = Navigator::new(2);
        assert_eq!(nav.handle_key(Key::Right), Action::Redraw(3));
        // Advances even where no lines exist at the new cycle.
        assert_eq!(nav.handle_key(Key::Right), Action::Redraw(4));
        assert_eq!(nav.cursor(), 4);
    }

    #[test]
    fn test_left_retreats_cursor() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.handle_key(Key::Left), Action::Redraw(2));
        assert_eq!(nav.cursor(), 2);
    }

    #[test]
    fn test_left_floors_at_one() {
        let mut nav = Navigator::new(1);
        assert_eq!(nav.handle_key(Key::Left), Action::Ignore);
        assert_eq!(nav.cursor(), 1);
    }

    #[test]
    fn test_left_from_zero_stays_put() {
        // A log can legitimately start at cycle 0; the floor still holds.
        let mut nav = Navigator::new(0);
        assert_eq!(nav.handle_key(Key::Left), Action::Ignore);
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_arrows_clear_pending_buffer() {
        let mut nav = Navigator::new(1);
        let _ = nav.handle_key(Key::Digit('9'));
        let _ = nav.handle_key(Key::Right);
        assert_eq!(nav.buffer(), "");
        // A subsequent Enter must not jump to the stale 9.
        assert_eq!(nav.handle_key(Key::Enter), Action::Ignore);
        assert_eq!(nav.cursor(), 2);
    }

    #[test]
    fn test_quit_requests_termination() {
        let mut nav = Navigator::new(1);
        assert_eq!(nav.handle_key(Key::Quit), Action::Quit);
    }

    #[test]
    fn test_jump_then_step_sequence() {
        let mut nav = Navigator::new(1);
        let _ = nav.handle_key(Key::Digit('1'));
        let _ = nav.handle_key(Key::Digit('0'));
        assert_eq!(nav.handle_key(Key::Enter), Action::Redraw(10));
        assert_eq!(nav.handle_key(Key::Right), Action::Redraw(11));
        assert_eq!(nav.handle_key(Key::Left), Action::Redraw(10));
    }
}
