pub const CODE_LENGTH: usize = 6;

/// A fixed row of single-digit entry slots with a moving focus, the way
/// the reset dialog renders its code field.
///
/// Typing a digit fills the focused slot and advances the focus; pressing
/// backspace on an empty slot steps the focus back instead. Anything that
/// is not an ASCII digit is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeInput {
    slots: [Option<char>; CODE_LENGTH],
    focus: usize,
}

impl CodeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the slot currently holding focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn type_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        self.slots[self.focus] = Some(c);
        if self.focus < CODE_LENGTH - 1 {
            self.focus += 1;
        }
    }

    /// Clears the focused slot. When it is already empty, steps back onto
    /// the previous slot and clears that one instead, so holding backspace
    /// erases the code right to left.
    pub fn backspace(&mut self) {
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
            self.slots[self.focus] = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// The digits typed so far, in slot order.
    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
