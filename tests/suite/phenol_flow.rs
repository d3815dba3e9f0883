//! Phenol-water walkthroughs through the public `App` surface.

use labsim_engine::{
    Action, App, Block, Event, FieldId, Page, PhenolEvent, PhenolPage, StatusKind, phenol,
};

use crate::common::{focus_field, phenol_app, record_mixture, type_value};

fn rows_by_percent(app: &App) -> Vec<f64> {
    app.session()
        .phenol
        .sorted_rows()
        .iter()
        .map(|r| r.percent_phenol)
        .collect()
}

#[test]
fn mixtures_are_read_back_in_phenol_order() {
    let mut app = phenol_app();
    record_mixture(&mut app, "20", "5");
    app.activate(Action::AddWater).unwrap();
    record_mixture(&mut app, "3", "10");
    app.activate(Action::AddWater).unwrap();
    record_mixture(&mut app, "5", "5");

    assert_eq!(app.session().phenol.table().len(), 3);
    let percents = rows_by_percent(&app);
    assert_eq!(percents.len(), 3);
    assert_eq!(percents[0], 20.0);
    assert_eq!(percents[1], 50.0);
    assert!((percents[2] - 1000.0 / 13.0).abs() < 1e-9);

    let cst = phenol::cst(&app.session().phenol).unwrap();
    assert_eq!(cst.cst_conc, 20.0);
    assert!((cst.cst_temp - 66.0).abs() < 1e-9);
}

#[test]
fn record_page_table_matches_sorted_rows() {
    let mut app = phenol_app();
    record_mixture(&mut app, "20", "5");
    app.activate(Action::AddWater).unwrap();
    record_mixture(&mut app, "5", "5");

    let screen = app.screen().unwrap();
    let Some(Block::Table(table)) = screen.blocks.first() else {
        panic!("record page should start with the table");
    };
    let percents: Vec<&str> = table.rows.iter().map(|r| r[2].as_str()).collect();
    assert_eq!(percents, ["20.00", "50.00"]);
}

#[test]
fn add_water_caps_and_switches_to_plot() {
    let mut app = phenol_app();
    record_mixture(&mut app, "35", "5");
    assert_eq!(app.form().buttons(), [Action::AddWater]);

    app.activate(Action::AddWater).unwrap();
    assert_eq!(app.page(), Page::Phenol(PhenolPage::Prepare));
    focus_field(&mut app, FieldId::Water);
    assert_eq!(app.form().fields()[0].draft().text(), "36.0");

    app.activate(Action::HeatMixture).unwrap();
    app.activate(Action::RecordTemperatures).unwrap();
    assert_eq!(app.form().buttons(), [Action::PlotPhaseDiagram]);
    assert_eq!(app.session().phenol.table().len(), 2);

    app.activate(Action::PlotPhaseDiagram).unwrap();
    assert_eq!(app.page(), Page::Phenol(PhenolPage::Graph));
}

#[test]
fn restart_clears_previous_run() {
    let mut app = phenol_app();
    record_mixture(&mut app, "9", "6");
    app.navigate(Page::Phenol(PhenolPage::Graph));
    app.activate(Action::ReturnHome).unwrap();

    app.activate(Action::OpenPhenol).unwrap();
    assert_eq!(app.session().phenol.table().len(), 1);
    app.activate(Action::StartPhenol).unwrap();
    assert!(app.session().phenol.table().is_empty());
    assert_eq!(app.session().phenol.water_ml(), 3.0);
    assert_eq!(app.session().phenol.phenol_ml(), None);
}

#[test]
fn rerecording_same_volumes_is_skipped() {
    let mut app = phenol_app();
    record_mixture(&mut app, "11", "5");
    app.navigate(Page::Phenol(PhenolPage::Prepare));
    record_mixture(&mut app, "11", "5");

    assert_eq!(app.session().phenol.table().len(), 1);
    let status = app.status().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
}

#[test]
fn phenol_field_clamps_to_its_range() {
    let mut app = phenol_app();
    focus_field(&mut app, FieldId::Phenol);
    type_value(&mut app, "2");
    app.activate(Action::HeatMixture).unwrap();
    assert_eq!(app.session().phenol.phenol_ml(), Some(5.0));
}

#[test]
fn plot_from_prepare_is_a_logic_error() {
    let mut app = phenol_app();
    let err = app.dispatch(Event::Phenol(PhenolEvent::Plot)).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(app.page(), Page::Phenol(PhenolPage::Prepare));
}
