/// Single-line text input state for the draft task.
/// The cursor is a character index into the value, never a byte index.
#[derive(Debug, Clone, Default)]
pub struct Input {
    value: String,
    cursor: usize,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.value.remove(at);
    }

    /// Remove the character under the cursor, if any.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> Input {
        let mut input = Input::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let input = typed("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("hllo");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = typed("hey");
        input.backspace();
        assert_eq!(input.value(), "he");
        input.move_home();
        input.backspace(); // no-op at start of line
        assert_eq!(input.value(), "he");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = typed("día");
        assert_eq!(input.cursor(), 3);
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "d");
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut input = typed("something");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
