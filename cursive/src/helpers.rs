/*  Passmith - a password generator with selectable character classes
    Copyright (C) 2024  The Passmith Developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::sync::Arc;

use cursive::event::Key;
use cursive::views::{Checkbox, Dialog, EditView, OnEventView, TextView};
use cursive::Cursive;

use passmith::form;

pub fn errorbox(ui: &mut Cursive, err: &form::Error) {
    let d = Dialog::around(TextView::new(format!("{err}")))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<Arc<String>> {
    let mut content = None;
    s.call_on_name(input_name, |e: &mut EditView| {
        content = Some(e.get_content());
    });
    content
}

pub fn is_checkbox_checked(ui: &mut Cursive, name: &str) -> bool {
    let mut checked = false;
    ui.call_on_name(name, |e: &mut Checkbox| {
        checked = e.is_checked();
    });
    checked
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers;
