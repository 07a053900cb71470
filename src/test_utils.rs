//! Test utilities for building result-list documents
//!
//! The builder emits IOF 3.0 `ResultList` XML so tests and benchmarks can
//! describe a race in a few lines instead of carrying large XML literals.

#![cfg(any(test, feature = "benchmark"))]

use std::fmt::Write as _;

/// One runner to emit as a `PersonResult`.
#[derive(Debug, Clone)]
pub struct RunnerSpec {
    pub bib: String,
    pub given: String,
    pub family: String,
    pub club: String,
    pub status: String,
    /// Cumulative split times in seconds, one per control
    pub splits: Vec<i64>,
    /// Split positions emitted with a `Missing` status
    pub missing: Vec<usize>,
    pub start_time: Option<String>,
}

impl RunnerSpec {
    /// An `OK` runner with the given cumulative split times.
    pub fn ok(bib: &str, club: &str, splits: &[i64]) -> Self {
        Self {
            bib: bib.to_string(),
            given: "Runner".to_string(),
            family: bib.to_string(),
            club: club.to_string(),
            status: "OK".to_string(),
            splits: splits.to_vec(),
            missing: Vec::new(),
            start_time: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn named(mut self, given: &str, family: &str) -> Self {
        self.given = given.to_string();
        self.family = family.to_string();
        self
    }

    pub fn missing_at(mut self, position: usize) -> Self {
        self.missing.push(position);
        self
    }

    pub fn starting_at(mut self, start_time: &str) -> Self {
        self.start_time = Some(start_time.to_string());
        self
    }
}

#[derive(Debug, Clone)]
struct CategorySpec {
    id: String,
    name: String,
    runners: Vec<RunnerSpec>,
}

/// Builder for IOF 3.0 `ResultList` documents.
#[derive(Debug, Clone)]
pub struct ResultListBuilder {
    event_id: String,
    event_name: String,
    start_time: Option<String>,
    categories: Vec<CategorySpec>,
}

impl ResultListBuilder {
    pub fn new(event_id: &str, event_name: &str) -> Self {
        Self {
            event_id: event_id.to_string(),
            event_name: event_name.to_string(),
            start_time: None,
            categories: Vec::new(),
        }
    }

    pub fn start_time(mut self, start_time: &str) -> Self {
        self.start_time = Some(start_time.to_string());
        self
    }

    pub fn category(mut self, id: &str, name: &str, runners: Vec<RunnerSpec>) -> Self {
        self.categories.push(CategorySpec { id: id.to_string(), name: name.to_string(), runners });
        self
    }

    /// Render the document as XML text.
    pub fn build(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <ResultList xmlns=\"http://www.orienteering.org/datastandard/3.0\" iofVersion=\"3.0\">\n",
        );

        xml.push_str("  <Event>\n");
        push_element(&mut xml, 4, "Id", &self.event_id);
        push_element(&mut xml, 4, "Name", &self.event_name);
        if let Some(start) = &self.start_time {
            push_element(&mut xml, 4, "StartTime", start);
        }
        xml.push_str("  </Event>\n");

        for category in &self.categories {
            xml.push_str("  <ClassResult>\n    <Class>\n");
            push_element(&mut xml, 6, "Id", &category.id);
            push_element(&mut xml, 6, "Name", &category.name);
            xml.push_str("    </Class>\n");
            for runner in &category.runners {
                push_runner(&mut xml, runner);
            }
            xml.push_str("  </ClassResult>\n");
        }

        xml.push_str("</ResultList>\n");
        xml
    }
}

fn push_runner(xml: &mut String, runner: &RunnerSpec) {
    xml.push_str("    <PersonResult>\n      <Person>\n        <Name>\n");
    push_element(xml, 10, "Family", &runner.family);
    push_element(xml, 10, "Given", &runner.given);
    xml.push_str("        </Name>\n      </Person>\n");

    if !runner.club.is_empty() {
        xml.push_str("      <Organisation>\n");
        push_element(xml, 8, "Name", &runner.club);
        xml.push_str("      </Organisation>\n");
    }

    xml.push_str("      <Result>\n");
    push_element(xml, 8, "BibNumber", &runner.bib);
    if let Some(start) = &runner.start_time {
        push_element(xml, 8, "StartTime", start);
    }
    push_element(xml, 8, "Status", &runner.status);
    for (position, time) in runner.splits.iter().enumerate() {
        if runner.missing.contains(&position) {
            xml.push_str("        <SplitTime status=\"Missing\">\n");
        } else {
            xml.push_str("        <SplitTime>\n");
        }
        push_element(xml, 10, "ControlCode", &(31 + position).to_string());
        push_element(xml, 10, "Time", &time.to_string());
        xml.push_str("        </SplitTime>\n");
    }
    xml.push_str("      </Result>\n    </PersonResult>\n");
}

fn push_element(xml: &mut String, indent: usize, tag: &str, text: &str) {
    let _ = writeln!(xml, "{:indent$}<{tag}>{}</{tag}>", "", escape(text), indent = indent);
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// A single large category for benchmarks: `runners` runners over `controls` controls.
///
/// Times are spread deterministically, and every seventh runner mispunches.
pub fn large_category(runners: usize, controls: usize) -> String {
    let specs = (0..runners)
        .map(|i| {
            let mut cumulative = 0;
            let splits: Vec<i64> = (0..controls)
                .map(|c| {
                    cumulative += 60 + ((i * 37 + c * 13) % 120) as i64;
                    cumulative
                })
                .collect();
            let spec = RunnerSpec::ok(&format!("{}", 100 + i), &format!("Club {}", i % 12), &splits);
            if i % 7 == 6 { spec.with_status("MisPunch") } else { spec }
        })
        .collect();

    ResultListBuilder::new("BENCH", "Benchmark").category("1", "H21E", specs).build()
}
