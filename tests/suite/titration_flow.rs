//! Conductometric titration walkthroughs through the public `App` surface.

use labsim_engine::{Action, App, FieldId, Page, TitrationPage, titration};

use crate::common::{focus_field, titration_app, type_value};

fn record_volume(app: &mut App, volume: &str) {
    focus_field(app, FieldId::NaohAdded);
    type_value(app, volume);
    app.activate(Action::RecordMeasurement).unwrap();
}

#[test]
fn typed_standardization_volume_sets_normality() {
    let mut app = titration_app();
    type_value(&mut app, "25");
    app.activate(Action::CalculateNormality).unwrap();
    assert_eq!(app.session().titration.normality(), Some(0.05));
}

#[test]
fn standardization_volume_is_clamped_above_zero() {
    let mut app = titration_app();
    type_value(&mut app, "0");
    app.activate(Action::CalculateNormality).unwrap();
    let normality = app.session().titration.normality().unwrap();
    assert!((normality - 12.5).abs() < 1e-9);
}

#[test]
fn readings_are_sorted_by_volume() {
    let mut app = titration_app();
    app.activate(Action::ProceedToTitration).unwrap();
    for volume in ["4", "2", "6", "2"] {
        record_volume(&mut app, volume);
    }

    let rows = app.session().titration.sorted_rows();
    let volumes: Vec<f64> = rows.iter().map(|r| r.naoh_ml).collect();
    assert_eq!(volumes, [2.0, 4.0, 6.0]);
    let expected = [0.6, 0.4, 0.9];
    for (row, want) in rows.iter().zip(expected) {
        assert!((row.conductance_ms - want).abs() < 1e-9);
    }
    assert_eq!(app.session().titration.current_naoh_ml(), 2.0);
}

#[test]
fn volume_past_burette_is_clamped_to_eight() {
    let mut app = titration_app();
    app.activate(Action::ProceedToTitration).unwrap();
    record_volume(&mut app, "9");

    let rows = app.session().titration.sorted_rows();
    assert_eq!(rows[0].naoh_ml, 8.0);
    assert!((rows[0].conductance_ms - 1.2).abs() < 1e-9);
}

#[test]
fn normality_survives_a_second_run() {
    let mut app = titration_app();
    type_value(&mut app, "25");
    app.activate(Action::CalculateNormality).unwrap();
    app.activate(Action::ProceedToTitration).unwrap();
    record_volume(&mut app, "1");
    app.activate(Action::PlotTitration).unwrap();
    app.activate(Action::ReturnHome).unwrap();

    app.activate(Action::OpenTitration).unwrap();
    app.activate(Action::StartTitration).unwrap();
    assert_eq!(app.page(), Page::Titration(TitrationPage::Standardize));
    assert_eq!(app.session().titration.normality(), Some(0.05));
    assert!(app.session().titration.table().is_empty());
    assert_eq!(app.session().titration.current_naoh_ml(), 0.0);
}

#[test]
fn graph_break_point_follows_recorded_minimum() {
    let mut app = titration_app();
    app.activate(Action::ProceedToTitration).unwrap();
    for volume in ["0", "3", "5"] {
        record_volume(&mut app, volume);
    }
    app.activate(Action::PlotTitration).unwrap();

    let point = titration::break_point(&app.session().titration).unwrap();
    assert_eq!(point.naoh_ml, 3.0);
    assert!((point.conductance_ms - 0.5).abs() < 1e-9);
}

#[test]
fn titrate_form_starts_at_last_volume() {
    let mut app = titration_app();
    app.activate(Action::ProceedToTitration).unwrap();
    record_volume(&mut app, "3.4");
    app.navigate(Page::Titration(TitrationPage::Standardize));
    app.activate(Action::ProceedToTitration).unwrap();
    assert_eq!(app.form().fields()[0].draft().text(), "3.4");
}
