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

use std::sync::{Arc, Mutex};
use std::{thread, time};

use cursive::direction::Orientation;
use cursive::event::{Event, Key};
use cursive::traits::*;
use cursive::views::{Checkbox, Dialog, EditView, LinearLayout, OnEventView, TextView};
use cursive::Cursive;

use passmith::charset::ClassSelection;
use passmith::form::{self, FormState};

mod helpers;
mod settings;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref SETTINGS: settings::Settings = settings::read(settings::settings_file_location());
}

type FormStateType = Arc<Mutex<FormState>>;

/// Pulls the current widget values into the shared form state.
fn sync_form(ui: &mut Cursive, form: &FormStateType) {
    let length = helpers::get_value_from_input(ui, "length_input").unwrap();

    let mut form = form.lock().unwrap();
    form.length_input = (*length).clone();
    form.classes = ClassSelection {
        lowercase: helpers::is_checkbox_checked(ui, "lowercase"),
        uppercase: helpers::is_checkbox_checked(ui, "uppercase"),
        digits: helpers::is_checkbox_checked(ui, "digits"),
        symbols: helpers::is_checkbox_checked(ui, "symbols"),
    };
}

fn generate(ui: &mut Cursive, form: &FormStateType) {
    sync_form(ui, form);

    let mut form = form.lock().unwrap();
    match form::submit(&mut form) {
        Ok(()) => {
            ui.call_on_name("length_errors", |l: &mut TextView| {
                l.set_content("");
            });
            ui.call_on_name("result", |l: &mut TextView| {
                l.set_content(form.password.clone());
            });
            ui.call_on_name("status_bar", |l: &mut TextView| {
                l.set_content("Generated new password, ctrl-y copies it");
            });
        }
        Err(form::Error::InvalidLength(errors)) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message()).collect();
            ui.call_on_name("length_errors", |l: &mut TextView| {
                l.set_content(messages.join("\n"));
            });
        }
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn reset(ui: &mut Cursive, form: &FormStateType) {
    let mut form = form.lock().unwrap();
    form.reset();

    let classes = form.classes;
    ui.call_on_name("length_input", |e: &mut EditView| {
        e.set_content(form.length_input.clone());
    });
    ui.call_on_name("lowercase", |c: &mut Checkbox| {
        c.set_checked(classes.lowercase);
    });
    ui.call_on_name("uppercase", |c: &mut Checkbox| {
        c.set_checked(classes.uppercase);
    });
    ui.call_on_name("digits", |c: &mut Checkbox| {
        c.set_checked(classes.digits);
    });
    ui.call_on_name("symbols", |c: &mut Checkbox| {
        c.set_checked(classes.symbols);
    });
    ui.call_on_name("length_errors", |l: &mut TextView| {
        l.set_content("");
    });
    ui.call_on_name("result", |l: &mut TextView| {
        l.set_content("");
    });
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content("Form reset to defaults");
    });
}

fn copy(ui: &mut Cursive, form: &FormStateType) {
    let form = form.lock().unwrap();
    if !form.generated {
        return;
    }

    let mut ctx = match arboard::Clipboard::new() {
        Ok(ctx) => ctx,
        Err(_) => {
            helpers::errorbox(ui, &form::Error::Generic("failed to open the clipboard"));
            return;
        }
    };
    if ctx.set_text(form.password.clone()).is_err() {
        helpers::errorbox(ui, &form::Error::Generic("failed to copy to the clipboard"));
        return;
    }

    let delay = SETTINGS.clipboard_clear_seconds;
    thread::spawn(move || {
        thread::sleep(time::Duration::from_secs(delay));
        if let Ok(mut ctx) = arboard::Clipboard::new() {
            let _ = ctx.set_text(String::new());
        }
    });

    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(format!(
            "Copied password to copy buffer for {delay} seconds"
        ));
    });
}

fn class_row(label: &str, name: &str, checked: bool) -> LinearLayout {
    let mut checkbox = Checkbox::new();
    checkbox.set_checked(checked);

    let mut row = LinearLayout::horizontal();
    row.add_child(TextView::new(label).fixed_size((24, 1)));
    row.add_child(checkbox.with_name(name));
    row
}

fn help() {
    println!("A password generator with selectable character classes. Pick a length between 6 and 16, toggle the classes to include and press Generate. Settings are read from $HOME/.config/passmith/settings.toml, override the location with the PASSMITH_CONFIG environment variable.");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                std::process::exit(0);
            } else {
                eprintln!("Unknown argument, usage: passmith-cursive [-h|--help]");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown argument, usage: passmith-cursive [-h|--help]");
            std::process::exit(1);
        }
    }

    log::debug!(
        "clipboard clear delay: {} seconds",
        SETTINGS.clipboard_clear_seconds
    );

    let form: FormStateType = Arc::new(Mutex::new(FormState::default()));
    let defaults = FormState::default();

    let mut ui = cursive::default();

    ui.load_toml(include_str!("../res/style.toml")).unwrap();

    ui.add_global_callback(Event::CtrlChar('g'), {
        let form = form.clone();
        move |ui: &mut Cursive| generate(ui, &form)
    });
    ui.add_global_callback(Event::CtrlChar('r'), {
        let form = form.clone();
        move |ui: &mut Cursive| reset(ui, &form)
    });
    ui.add_global_callback(Event::CtrlChar('y'), {
        let form = form.clone();
        move |ui: &mut Cursive| copy(ui, &form)
    });
    ui.add_global_callback(Key::Esc, |s| s.quit());

    let mut length_fields = LinearLayout::horizontal();
    length_fields.add_child(TextView::new("Password Length (Ex. 8): ").fixed_size((24, 1)));
    length_fields.add_child(
        OnEventView::new(
            EditView::new()
                .content(defaults.length_input.clone())
                .with_name("length_input")
                .fixed_size((20, 1)),
        )
        .on_event(Key::Enter, {
            let form = form.clone();
            move |ui: &mut Cursive| generate(ui, &form)
        }),
    );

    let mut fields = LinearLayout::vertical();
    fields.add_child(length_fields);
    fields.add_child(TextView::new("").with_name("length_errors"));
    fields.add_child(class_row(
        "Include Lowercase: ",
        "lowercase",
        defaults.classes.lowercase,
    ));
    fields.add_child(class_row(
        "Include Uppercase: ",
        "uppercase",
        defaults.classes.uppercase,
    ));
    fields.add_child(class_row(
        "Include Digits: ",
        "digits",
        defaults.classes.digits,
    ));
    fields.add_child(class_row(
        "Include Symbols: ",
        "symbols",
        defaults.classes.symbols,
    ));
    fields.add_child(TextView::new(""));
    fields.add_child(TextView::new("Result: "));
    fields.add_child(TextView::new("").with_name("result"));

    let form2 = form.clone();
    let form3 = form.clone();

    let d = Dialog::around(fields)
        .title("Password Generator")
        .button("Generate", move |ui: &mut Cursive| generate(ui, &form2))
        .button("Reset", move |ui: &mut Cursive| reset(ui, &form3))
        .button("Quit", |s| s.quit());

    ui.add_layer(
        LinearLayout::new(Orientation::Vertical).child(d).child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new(
                    "ctrl-g: Generate | ctrl-r: Reset | ctrl-y: Copy | esc: Quit ",
                ))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        ),
    );

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
