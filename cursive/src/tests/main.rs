use super::*;

fn add_form_widgets(siv: &mut Cursive) {
    let mut fields = LinearLayout::vertical();
    fields.add_child(EditView::new().with_name("length_input"));
    fields.add_child(TextView::new("").with_name("length_errors"));

    let mut lowercase = Checkbox::new();
    lowercase.set_checked(true);
    fields.add_child(lowercase.with_name("lowercase"));
    fields.add_child(Checkbox::new().with_name("uppercase"));
    fields.add_child(Checkbox::new().with_name("digits"));
    fields.add_child(Checkbox::new().with_name("symbols"));

    fields.add_child(TextView::new("").with_name("result"));
    fields.add_child(TextView::new("").with_name("status_bar"));

    siv.add_layer(fields);
}

fn set_edit_content(siv: &mut Cursive, name: &str, content: &str) {
    let content = content.to_string();
    siv.call_on_name(name, |e: &mut EditView| {
        e.set_content(content);
    });
}

fn text_content(siv: &mut Cursive, name: &str) -> String {
    siv.call_on_name(name, |l: &mut TextView| l.get_content().source().to_string())
        .unwrap()
}

#[test]
fn sync_form_reads_the_widgets() {
    let mut siv = cursive::default();
    add_form_widgets(&mut siv);

    set_edit_content(&mut siv, "length_input", "12");
    siv.call_on_name("lowercase", |c: &mut Checkbox| {
        c.set_checked(false);
    });
    siv.call_on_name("digits", |c: &mut Checkbox| {
        c.set_checked(true);
    });

    let form: FormStateType = Arc::new(Mutex::new(FormState::default()));
    sync_form(&mut siv, &form);

    let form = form.lock().unwrap();
    assert_eq!("12", form.length_input);
    assert!(!form.classes.lowercase);
    assert!(!form.classes.uppercase);
    assert!(form.classes.digits);
    assert!(!form.classes.symbols);
}

#[test]
fn generate_fills_the_result_view() {
    let mut siv = cursive::default();
    add_form_widgets(&mut siv);
    set_edit_content(&mut siv, "length_input", "8");

    let form: FormStateType = Arc::new(Mutex::new(FormState::default()));
    generate(&mut siv, &form);

    let form_password = form.lock().unwrap().password.clone();
    assert_eq!(8, form_password.chars().count());
    assert_eq!(form_password, text_content(&mut siv, "result"));
    assert_eq!("", text_content(&mut siv, "length_errors"));
}

#[test]
fn generate_shows_the_violated_rules_next_to_the_field() {
    let mut siv = cursive::default();
    add_form_widgets(&mut siv);
    set_edit_content(&mut siv, "length_input", "3");

    let form: FormStateType = Arc::new(Mutex::new(FormState::default()));
    generate(&mut siv, &form);

    assert_eq!(
        "Should have at least 6 characters",
        text_content(&mut siv, "length_errors")
    );
    assert!(!form.lock().unwrap().generated);
}

#[test]
fn reset_restores_the_widget_defaults() {
    let mut siv = cursive::default();
    add_form_widgets(&mut siv);

    set_edit_content(&mut siv, "length_input", "10");
    siv.call_on_name("symbols", |c: &mut Checkbox| {
        c.set_checked(true);
    });

    let form: FormStateType = Arc::new(Mutex::new(FormState::default()));
    generate(&mut siv, &form);
    assert!(form.lock().unwrap().generated);

    reset(&mut siv, &form);

    assert_eq!(FormState::default(), *form.lock().unwrap());
    assert_eq!(
        Some(Arc::new(String::new())),
        helpers::get_value_from_input(&mut siv, "length_input")
    );
    assert!(helpers::is_checkbox_checked(&mut siv, "lowercase"));
    assert!(!helpers::is_checkbox_checked(&mut siv, "symbols"));
    assert_eq!("", text_content(&mut siv, "result"));
}
