//! Ephemeral login form input.

/// Which login field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Identifier,
    Passcode,
}

impl LoginField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            LoginField::Identifier => LoginField::Passcode,
            LoginField::Passcode => LoginField::Identifier,
        }
    }
}

/// Draft state of the login form. Cleared when the modal closes; no
/// partial input survives a close.
#[derive(Debug, Clone, Default)]
pub struct CredentialDraft {
    identifier: String,
    passcode: String,
    focus: LoginField,
}

impl CredentialDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn passcode(&self) -> &str {
        &self.passcode
    }

    #[must_use]
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            LoginField::Identifier => self.identifier.push(ch),
            LoginField::Passcode => self.passcode.push(ch),
        }
    }

    pub fn delete_char(&mut self) {
        match self.focus {
            LoginField::Identifier => {
                self.identifier.pop();
            }
            LoginField::Passcode => {
                self.passcode.pop();
            }
        }
    }

    pub fn clear(&mut self) {
        self.identifier.clear();
        self.passcode.clear();
        self.focus = LoginField::Identifier;
    }
}
