//! Shared test utilities and fixtures

#![allow(dead_code)]

use labsim_engine::{Action, App, FieldId};

/// App sitting on the phenol prepare page.
pub fn phenol_app() -> App {
    let mut app = App::default();
    app.activate(Action::OpenPhenol).unwrap();
    app.activate(Action::StartPhenol).unwrap();
    app
}

/// App sitting on the titration standardization page.
pub fn titration_app() -> App {
    let mut app = App::default();
    app.activate(Action::OpenTitration).unwrap();
    app.activate(Action::StartTitration).unwrap();
    app
}

/// Replace the text of the focused field, as a user would with backspace.
pub fn type_value(app: &mut App, text: &str) {
    for _ in 0..16 {
        app.delete_char();
    }
    for c in text.chars() {
        app.enter_char(c);
    }
}

/// Move focus onto `id`, cycling through the form.
pub fn focus_field(app: &mut App, id: FieldId) {
    for _ in 0..8 {
        if app.form().focused_field_id() == Some(id) {
            return;
        }
        app.focus_next();
    }
    panic!("{id:?} is not on this page");
}

/// Heat and record one mixture with the given volumes.
pub fn record_mixture(app: &mut App, water_ml: &str, phenol_ml: &str) {
    focus_field(app, FieldId::Water);
    type_value(app, water_ml);
    focus_field(app, FieldId::Phenol);
    type_value(app, phenol_ml);
    app.activate(Action::HeatMixture).unwrap();
    app.activate(Action::RecordTemperatures).unwrap();
}
