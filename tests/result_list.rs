//! End-to-end tests over the XML fixtures in `tests/fixtures`.

use std::path::{Path, PathBuf};

use anyhow::Context;

use ofresults::{
    DirectorySource, Filter, PublicBoard, ResultList, ResultsBoard, ResultsError, StatusCode,
    rank_category,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn fixtures_source() -> DirectorySource {
    DirectorySource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"))
}

#[tokio::test]
async fn sprint_fixture_extracts_every_runner() -> anyhow::Result<()> {
    let list = ResultList::open(fixture("sprint_iof3.xml")).await?;

    let event = list.event.as_ref().context("sprint fixture has an Event")?;
    assert_eq!(event.id, "J1");
    assert_eq!(event.start_time, "2024-05-11T14:00:00+02:00");
    assert_eq!(event.title(), "2024-05-11 · J1");

    assert_eq!(list.categories.len(), 3);
    assert_eq!(list.clubs(), vec!["ASO", "COLE", "VHS"]);

    let h21 = &list.categories[0];
    assert_eq!(h21.label(), "H21E (12)");
    let mispunch = &h21.runners[2];
    assert_eq!(mispunch.status, StatusCode::MisPunch);
    let legs: Vec<u64> = mispunch.legs.iter().map(|l| l.leg_seconds).collect();
    assert_eq!(legs, vec![65, 0, 220]);
    assert!(mispunch.legs[1].is_missing);
    assert_eq!(mispunch.time_seconds, 285);

    let dns = &h21.runners[3];
    assert_eq!(dns.full_name, "Hugo Roux");
    assert!(dns.legs.is_empty());
    assert_eq!(dns.time_seconds, 0);
    Ok(())
}

#[tokio::test]
async fn sprint_fixture_ranks_and_best_legs() -> anyhow::Result<()> {
    let list = ResultList::open(fixture("sprint_iof3.xml")).await?;

    let h21 = rank_category(&list.categories[0]);
    let order: Vec<(&str, Option<u32>)> =
        h21.display().into_iter().map(|r| (r.bib.as_str(), r.overall_rank)).collect();
    assert_eq!(order, vec![("104", Some(1)), ("101", Some(2)), ("102", None), ("103", None)]);
    // The mispunched runner still holds the fastest first leg.
    assert_eq!(h21.best_leg_times.as_slice(), &[Some(65), Some(115), Some(35)]);

    let d16 = rank_category(&list.categories[1]);
    let order: Vec<(&str, Option<u32>)> =
        d16.display().into_iter().map(|r| (r.bib.as_str(), r.overall_rank)).collect();
    assert_eq!(order, vec![("201", Some(1)), ("202", Some(2))]);
    assert_eq!(d16.best_leg_times.as_slice(), &[None, Some(180)]);
    Ok(())
}

#[tokio::test]
async fn plain_start_time_fixture_uses_defaults() -> anyhow::Result<()> {
    let list = ResultList::open(fixture("plain_start_time.xml")).await?;

    let event = list.event.as_ref().expect("event");
    assert_eq!(event.id, "");
    assert_eq!(event.date, "2024-11-02");
    assert_eq!(event.title(), "2024-11-02");

    let category = &list.categories[0];
    assert_eq!(category.name, "Catégorie");
    assert_eq!(category.key(), "Catégorie");

    let runner = &category.runners[0];
    assert_eq!(runner.full_name, "Anne");
    assert_eq!(runner.club, "");
    assert_eq!(runner.status, StatusCode::Unknown);
    assert_eq!(runner.legs[0].control_code, "?");
    let legs: Vec<u64> = runner.legs.iter().map(|l| l.leg_seconds).collect();
    assert_eq!(legs, vec![42, 0, 0]);
    assert_eq!(runner.time_seconds, 42);
    Ok(())
}

#[tokio::test]
async fn malformed_fixture_is_an_xml_error() {
    let err = ResultList::open(fixture("not_xml.xml")).await.unwrap_err();
    assert!(matches!(err, ResultsError::Xml { .. }));
}

#[tokio::test]
async fn organiser_board_over_fixture_directory() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let mut board = ResultsBoard::default();
    board
        .import_from(
            &fixtures_source(),
            &["sprint_iof3.xml", "plain_start_time.xml", "not_xml.xml", "absent.xml"],
        )
        .await?;

    let labels: Vec<String> = board.events().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["J1 – Sprint urbain", "(sans ID) – Nocturne"]);
    assert!(board.selected_event().is_none());

    assert!(board.select_event("J1"));
    assert_eq!(board.public_url().as_deref(), Some("/public.html?file=sprint_iof3.xml"));

    let all = board.render();
    assert_eq!(all.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(), vec!["H21E", "D16"]);

    board.set_club_filter(Filter::only("COLE"));
    let cole = board.render();
    assert_eq!(cole.len(), 1);
    let rows: Vec<(&str, &str)> = cole[0].rows.iter().map(|r| (r.bib.as_str(), r.rank.as_str())).collect();
    assert_eq!(rows, vec![("104", "1"), ("102", "")]);

    let mispunch = &cole[0].rows[1];
    assert_eq!(mispunch.status_label, "PM");
    assert!(mispunch.legs[0].is_best);
    assert!(mispunch.legs[1].is_missing);
    assert_eq!(mispunch.legs[1].leg_time, "");
    Ok(())
}

#[tokio::test]
async fn public_board_over_fixture_directory() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let board = PublicBoard::load(&fixtures_source(), "sprint_iof3.xml").await?;

    assert_eq!(board.event_title().as_deref(), Some("2024-05-11 · J1"));
    let options: Vec<String> = board.category_options().iter().map(|o| o.display()).collect();
    assert_eq!(options, vec!["H21E (12)", "D16 (20)"]);

    let views = board.render();
    let d16 = &views[1];
    assert_eq!(d16.rows[1].name, "Julie Blanc");
    assert_eq!(d16.rows[1].time, "");
    assert_eq!(d16.rows[0].legs[1].cumulative_time, "3:00");

    let missing = PublicBoard::load(&fixtures_source(), "absent.xml").await.unwrap_err();
    assert!(matches!(missing, ResultsError::File { .. }));
    Ok(())
}
