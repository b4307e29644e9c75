use log::{info, warn};
use string_proc::{CaseError, Style, convert};

use crate::case_file::{CaseFile, DemoCase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The case had no expectation
    Unchecked,
    Passed,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub case: DemoCase,
    pub result: Result<String, CaseError>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    pub fn count(&self, verdict: Verdict) -> usize {
        self.reports.iter().filter(|r| r.verdict == verdict).count()
    }

    pub fn all_passed(&self) -> bool {
        self.count(Verdict::Failed) == 0
    }
}

impl CaseReport {
    /// One line description, `input -> output` or `input -> error`
    pub fn describe(&self) -> String {
        let outcome = match &self.result {
            Ok(output) => format!("{:?}", output),
            Err(e) => format!("error: {}", e),
        };
        let mark = match self.verdict {
            Verdict::Unchecked => "",
            Verdict::Passed => " [ok]",
            Verdict::Failed => " [MISMATCH]",
        };
        format!("{} {} -> {}{}", self.case.style, self.case.input, outcome, mark)
    }
}

pub fn run_case(case: &DemoCase) -> CaseReport {
    let result = convert(&case.input, case.style);

    let verdict = match &case.expected {
        None => Verdict::Unchecked,
        Some(expected) if expected.is_met_by(&result) => Verdict::Passed,
        Some(expected) => {
            warn!(
                "Case {} as {} expected {:?}, got {:?}",
                case.input, case.style, expected, result
            );
            Verdict::Failed
        }
    };

    CaseReport {
        case: case.clone(),
        result,
        verdict,
    }
}

pub fn run_cases(file: &CaseFile) -> RunSummary {
    let summary = RunSummary {
        reports: file.cases.iter().map(run_case).collect(),
    };

    info!(
        "Ran {} cases: {} passed, {} failed, {} unchecked",
        summary.reports.len(),
        summary.count(Verdict::Passed),
        summary.count(Verdict::Failed),
        summary.count(Verdict::Unchecked)
    );
    summary
}

/// Convert free text given on the command line, without expectations
pub fn run_inputs<S: AsRef<str>>(inputs: &[S], style: Style) -> RunSummary {
    let file = CaseFile {
        cases: inputs
            .iter()
            .map(|input| DemoCase {
                input: input.as_ref().into(),
                style,
                expected: None,
            })
            .collect(),
    };
    run_cases(&file)
}
