use zeroize::{Zeroize, ZeroizeOnDrop};

pub use crate::error::{Error, Result};

use crate::charset::{self, ClassSelection};
use crate::generator;
use crate::validator;

/// The state behind the password form: the raw length text, the class
/// toggles and the last generated password.  A frontend owns one mutable
/// instance and pushes user edits into it, everything else in the library is
/// a pure function over it.  The password is zeroized when the state is
/// dropped or reset.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormState {
    pub length_input: String,
    pub classes: ClassSelection,
    pub password: String,
    pub generated: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length_input: String::new(),
            classes: ClassSelection::default(),
            password: String::new(),
            generated: false,
        }
    }
}

impl FormState {
    /// Restores the screen mount defaults: empty length text, lowercase as
    /// the only enabled class, no password.  Calling it twice in a row gives
    /// the same state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Runs the whole submit flow against `state`: validate the length text,
/// assemble the alphabet from the class toggles, generate.  On success the
/// password is stored in the state and `generated` is set; on any error the
/// state is left untouched so the frontend can surface the messages next to
/// the field.
pub fn submit(state: &mut FormState) -> Result<()> {
    let length = validator::validate_length(&state.length_input)?;
    let alphabet = charset::build_alphabet(&state.classes);
    let password = generator::generate(&alphabet, length)?;

    state.password.zeroize();
    state.password = password;
    state.generated = true;

    Ok(())
}

#[cfg(test)]
#[path = "tests/form.rs"]
mod form;
