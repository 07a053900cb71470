//! Result extraction from an IOF XML tree
//!
//! Every optional element is read leniently: a missing element becomes an
//! empty string, a missing or non-numeric time becomes `0`. Extraction never
//! fails once the document is well-formed.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::types::{
    ClassResult, DEFAULT_CATEGORY_NAME, EventInfo, Leg, RunnerResult, StatusCode, UNKNOWN_CONTROL,
    full_name,
};
use crate::xml_utils::{
    child, child_text, children, descendants, nested_text, parse_leading_int, text_content,
};

/// Split status value marking a control that was not punched.
pub const MISSING_PUNCH_STATUS: &str = "Missing";

/// Raw punch read from a `SplitTime` element, before leg derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPunch {
    pub control_code: String,
    pub cumulative_seconds: i64,
    pub is_missing: bool,
}

/// Derive leg times from punches in course order.
///
/// A leg lasts `cumulative - last` when the cumulative time increased and `0`
/// otherwise; `last` always moves to the current punch, even when the leg was
/// zeroed, so `[120, 90, 300]` yields `[120, 0, 210]`.
pub fn derive_legs<I>(punches: I) -> Vec<Leg>
where
    I: IntoIterator<Item = SplitPunch>,
{
    let mut last = 0i64;
    punches
        .into_iter()
        .map(|punch| {
            let cumulative = punch.cumulative_seconds;
            let leg_seconds = if cumulative > last { cumulative.abs_diff(last) } else { 0 };
            last = cumulative;
            Leg {
                control_code: punch.control_code,
                cumulative_seconds: cumulative,
                leg_seconds,
                is_missing: punch.is_missing,
            }
        })
        .collect()
}

/// Read the first `Event` element, if the document has one.
pub fn extract_event(doc: &Document<'_>) -> Option<EventInfo> {
    let event = descendants(doc.root(), "Event").next()?;

    let (start_time, date) = match child(event, "StartTime") {
        Some(start) if child(start, "Date").is_some() => {
            let date = child_text(start, "Date");
            let time = child_text(start, "Time");
            let start_time = if time.is_empty() { date.clone() } else { format!("{}T{}", date, time) };
            (start_time, date)
        }
        Some(start) => {
            let start_time = text_content(start);
            let date = start_time.split('T').next().unwrap_or_default().to_string();
            (start_time, date)
        }
        None => (String::new(), String::new()),
    };

    Some(EventInfo { id: child_text(event, "Id"), name: child_text(event, "Name"), start_time, date })
}

/// Extract every `ClassResult` of the document, in document order.
pub fn extract_categories(doc: &Document<'_>) -> Vec<ClassResult> {
    let categories: Vec<ClassResult> =
        descendants(doc.root(), "ClassResult").map(extract_category).collect();

    debug!(
        categories = categories.len(),
        runners = categories.iter().map(|c| c.runners.len()).sum::<usize>(),
        "Extracted result list"
    );

    categories
}

/// Extract one category and its runners.
pub fn extract_category(class_result: Node<'_, '_>) -> ClassResult {
    let (name, id) = match child(class_result, "Class") {
        Some(class) => (child_text(class, "Name"), child_text(class, "Id")),
        None => (DEFAULT_CATEGORY_NAME.to_string(), String::new()),
    };

    let runners = descendants(class_result, "PersonResult").map(extract_runner).collect();

    ClassResult { name, id, runners }
}

/// Extract one `PersonResult` into a runner record.
pub fn extract_runner(person_result: Node<'_, '_>) -> RunnerResult {
    let (given, family) = match child(person_result, "Person") {
        Some(person) => {
            (nested_text(person, &["Name", "Given"]), nested_text(person, &["Name", "Family"]))
        }
        None => (String::new(), String::new()),
    };

    let club = child(person_result, "Organisation")
        .map(|org| child_text(org, "Name"))
        .unwrap_or_default();

    let result = child(person_result, "Result");
    let field = |name: &str| result.map(|r| child_text(r, name)).unwrap_or_default();

    let punches = result
        .into_iter()
        .flat_map(|r| children(r, "SplitTime"))
        .map(extract_punch);

    RunnerResult::new(
        full_name(&given, &family),
        club,
        field("BibNumber"),
        StatusCode::from_iof(&field("Status")),
        derive_legs(punches),
    )
    .with_start_time(field("StartTime"))
}

/// The punch status is read from a `Status` child, or from the IOF 3.0 `status` attribute.
fn extract_punch(split: Node<'_, '_>) -> SplitPunch {
    let code = child_text(split, "ControlCode");
    let status = match child(split, "Status") {
        Some(node) => text_content(node),
        None => split.attribute("status").unwrap_or_default().trim().to_string(),
    };
    SplitPunch {
        control_code: if code.is_empty() { UNKNOWN_CONTROL.to_string() } else { code },
        cumulative_seconds: parse_leading_int(&child_text(split, "Time")),
        is_missing: status == MISSING_PUNCH_STATUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punch(cumulative: i64) -> SplitPunch {
        SplitPunch { control_code: "31".into(), cumulative_seconds: cumulative, is_missing: false }
    }

    fn leg_seconds(legs: &[Leg]) -> Vec<u64> {
        legs.iter().map(|l| l.leg_seconds).collect()
    }

    #[test]
    fn non_monotonic_punch_yields_zero_leg() {
        let legs = derive_legs([120, 90, 300].map(punch));
        assert_eq!(leg_seconds(&legs), vec![120, 0, 210]);
        assert_eq!(legs[1].cumulative_seconds, 90);
    }

    #[test]
    fn zero_and_duplicate_times_yield_zero_legs() {
        let legs = derive_legs([0, 60, 60, 0, 100].map(punch));
        assert_eq!(leg_seconds(&legs), vec![0, 60, 0, 0, 100]);
    }

    #[test]
    fn negative_times_never_produce_negative_legs() {
        let legs = derive_legs([-50, 10].map(punch));
        assert_eq!(leg_seconds(&legs), vec![0, 60]);
    }

    #[test]
    fn missing_flag_does_not_change_leg_time() {
        let mut punches = [100, 250].map(punch);
        punches[1].is_missing = true;
        let legs = derive_legs(punches);
        assert_eq!(leg_seconds(&legs), vec![100, 150]);
        assert!(legs[1].is_missing);
    }

    #[test]
    fn runner_fields_default_when_absent() {
        let doc = Document::parse("<PersonResult/>").unwrap();
        let runner = extract_runner(doc.root_element());

        assert_eq!(runner.full_name, crate::types::UNNAMED_RUNNER);
        assert_eq!(runner.club, "");
        assert_eq!(runner.bib, "");
        assert_eq!(runner.start_time, "");
        assert_eq!(runner.status, StatusCode::Unknown);
        assert!(runner.legs.is_empty());
        assert_eq!(runner.time_seconds, 0);
        assert_eq!(runner.overall_rank, None);
    }

    #[test]
    fn split_fields_default_when_absent() {
        let xml = r#"<PersonResult>
            <Result>
              <Status>OK</Status>
              <SplitTime><Time>abc</Time></SplitTime>
              <SplitTime><ControlCode>45</ControlCode><Status>Missing</Status></SplitTime>
            </Result>
          </PersonResult>"#;
        let doc = Document::parse(xml).unwrap();
        let runner = extract_runner(doc.root_element());

        assert_eq!(runner.status, StatusCode::Ok);
        assert_eq!(runner.legs.len(), 2);
        assert_eq!(runner.legs[0].control_code, UNKNOWN_CONTROL);
        assert_eq!(runner.legs[0].cumulative_seconds, 0);
        assert_eq!(runner.legs[1].control_code, "45");
        assert!(runner.legs[1].is_missing);
        assert_eq!(runner.time_seconds, 0);
    }

    #[test]
    fn missing_status_attribute_is_recognised() {
        let xml = r#"<PersonResult><Result>
            <SplitTime status="Missing"><ControlCode>31</ControlCode></SplitTime>
            <SplitTime><ControlCode>32</ControlCode><Time>200</Time></SplitTime>
          </Result></PersonResult>"#;
        let doc = Document::parse(xml).unwrap();
        let runner = extract_runner(doc.root_element());

        assert!(runner.legs[0].is_missing);
        assert!(!runner.legs[1].is_missing);
        assert_eq!(runner.time_seconds, 200);
    }

    #[test]
    fn huge_split_times_saturate_the_total() {
        let huge = "99999999999999999999";
        let splits: String = [huge, "0", huge, "0", huge]
            .iter()
            .map(|t| format!("<SplitTime><ControlCode>31</ControlCode><Time>{t}</Time></SplitTime>"))
            .collect();
        let xml = format!(
            "<ResultList><ClassResult><PersonResult><Result><Status>OK</Status>{splits}</Result></PersonResult></ClassResult></ResultList>"
        );
        let doc = Document::parse(&xml).unwrap();
        let categories = extract_categories(&doc);
        let runner = &categories[0].runners[0];

        assert_eq!(runner.legs[0].cumulative_seconds, i64::MAX);
        assert_eq!(leg_seconds(&runner.legs), vec![i64::MAX as u64, 0, i64::MAX as u64, 0, i64::MAX as u64]);
        assert_eq!(runner.time_seconds, u64::MAX);
    }

    #[test]
    fn club_is_first_organisation() {
        let xml = r#"<PersonResult>
            <Organisation><Name>COLE</Name></Organisation>
            <Organisation><Name>ASO</Name></Organisation>
          </PersonResult>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(extract_runner(doc.root_element()).club, "COLE");
    }

    #[test]
    fn category_without_class_gets_default_name() {
        let doc = Document::parse("<ClassResult><PersonResult/></ClassResult>").unwrap();
        let category = extract_category(doc.root_element());
        assert_eq!(category.name, DEFAULT_CATEGORY_NAME);
        assert_eq!(category.id, "");
        assert_eq!(category.runners.len(), 1);
    }

    #[test]
    fn event_start_time_accepts_date_and_time_children() {
        let xml = r#"<ResultList><Event>
            <Id>CN-42</Id><Name>Régionale</Name>
            <StartTime><Date>2025-05-18</Date><Time>09:00:00+02:00</Time></StartTime>
          </Event></ResultList>"#;
        let doc = Document::parse(xml).unwrap();
        let event = extract_event(&doc).unwrap();

        assert_eq!(event.id, "CN-42");
        assert_eq!(event.name, "Régionale");
        assert_eq!(event.date, "2025-05-18");
        assert_eq!(event.start_time, "2025-05-18T09:00:00+02:00");
    }

    #[test]
    fn event_start_time_accepts_plain_timestamp() {
        let xml = "<ResultList><Event><StartTime>2025-05-18T09:00:00</StartTime></Event></ResultList>";
        let doc = Document::parse(xml).unwrap();
        let event = extract_event(&doc).unwrap();

        assert_eq!(event.date, "2025-05-18");
        assert_eq!(event.start_time, "2025-05-18T09:00:00");
        assert_eq!(event.name, "");
    }

    #[test]
    fn missing_event_is_none() {
        let doc = Document::parse("<ResultList/>").unwrap();
        assert!(extract_event(&doc).is_none());
        assert!(extract_categories(&doc).is_empty());
    }
}
