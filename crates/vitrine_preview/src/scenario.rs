// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scripted page sessions.
//!
//! A scenario is a page layout plus a list of steps: host events, clock
//! advances and expectations about the resulting document. Scenarios are
//! stored as RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use vitrine_behavior::{MemoryDocument, Page, PageEvent, PageLayout, PageSettings};

/// Scenario errors
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Reading the scenario file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario is not valid RON
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// An expectation did not hold
    #[error("Step {step}: expected {expected}, found {found}")]
    Expectation {
        /// Zero-based step index
        step: usize,
        /// What the step expected
        expected: String,
        /// What the document showed
        found: String,
    },
}

/// Result type for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// One scenario step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// Deliver a host event
    Event(PageEvent),
    /// Advance the clock
    Wait {
        /// Milliseconds to advance
        ms: u64,
    },
    /// Move a reveal element, as scrolling would
    MoveReveal {
        /// Reveal element
        index: usize,
        /// New viewport-relative top
        top: f64,
    },
    /// Current slide index
    ExpectSlide(usize),
    /// Whether a card's media is playing
    ExpectPlaying {
        /// Card
        slide: usize,
        /// Expected playing state
        playing: bool,
    },
    /// Progress fill in percent
    ExpectProgress(f64),
    /// Whether the mobile menu is open
    ExpectMenuOpen(bool),
    /// A reveal element carries the revealed marker
    ExpectRevealed(usize),
}

/// A scripted session against the in-memory document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Page markup
    #[serde(default)]
    pub layout: PageLayout,
    /// Steps, run in order
    pub steps: Vec<Step>,
}

/// Outcome of a passing scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Steps executed
    pub steps: usize,
    /// Clock value after the last step
    pub elapsed: Duration,
    /// Current slide after the last step
    pub final_slide: Option<usize>,
}

impl Scenario {
    /// Parse a scenario from RON text
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Load a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::from_ron_str(&content)?;
        tracing::info!("Loaded scenario {:?} from {:?}", scenario.name, path);
        Ok(scenario)
    }

    /// Run every step, stopping at the first failed expectation
    pub fn run(&self, settings: &PageSettings) -> Result<Report> {
        let document = MemoryDocument::from_layout(&self.layout);
        let mut page = Page::mount(document, settings.clone());

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = index, ?step, "Running step");
            run_step(&mut page, index, step)?;
        }

        Ok(Report {
            steps: self.steps.len(),
            elapsed: page.now(),
            final_slide: page.carousel().map(|c| c.current_index()),
        })
    }
}

fn run_step(page: &mut Page<MemoryDocument>, step: usize, action: &Step) -> Result<()> {
    match action {
        Step::Event(event) => {
            let outcome = page.dispatch(event);
            tracing::info!(step, ?event, ?outcome, "Dispatched");
        }
        Step::Wait { ms } => page.advance(Duration::from_millis(*ms)),
        Step::MoveReveal { index, top } => page.document_mut().set_reveal_top(*index, *top),
        Step::ExpectSlide(expected) => {
            let found = page.carousel().map(|c| c.current_index());
            check(step, Some(*expected), found)?;
        }
        Step::ExpectPlaying { slide, playing } => {
            let found = page.document().media(*slide).map(|m| m.playing);
            check(step, Some(*playing), found)?;
        }
        Step::ExpectProgress(expected) => {
            let found = page.document().progress();
            let matches = found.is_some_and(|p| (p - expected).abs() < 1e-6);
            if !matches {
                return Err(mismatch(step, Some(*expected), found));
            }
        }
        Step::ExpectMenuOpen(open) => check(step, *open, page.document().is_menu_open())?,
        Step::ExpectRevealed(index) => check(step, true, page.document().is_revealed(*index))?,
    }
    Ok(())
}

fn check<T: PartialEq + std::fmt::Debug>(step: usize, expected: T, found: T) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(mismatch(step, expected, found))
    }
}

fn mismatch<T: std::fmt::Debug>(step: usize, expected: T, found: T) -> ScenarioError {
    ScenarioError::Expectation {
        step,
        expected: format!("{expected:?}"),
        found: format!("{found:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../scenarios/three_slides.ron");

    #[test]
    fn test_sample_scenario_passes() {
        let scenario = Scenario::from_ron_str(SAMPLE).unwrap();
        assert!(!scenario.name.is_empty());

        let report = scenario.run(&PageSettings::default()).unwrap();
        assert_eq!(report.steps, scenario.steps.len());
        assert_eq!(report.final_slide, Some(2));
        assert_eq!(report.elapsed, Duration::from_millis(59_000));
    }

    #[test]
    fn test_failed_expectation_names_step() {
        let scenario = Scenario::from_ron_str(
            "(steps: [Event(Click(NextButton)), ExpectSlide(0)])",
        )
        .unwrap();
        match scenario.run(&PageSettings::default()) {
            Err(ScenarioError::Expectation { step, expected, found }) => {
                assert_eq!(step, 1);
                assert_eq!(expected, "Some(0)");
                assert_eq!(found, "Some(1)");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_settings_change_timing() {
        let mut settings = PageSettings::default();
        settings.carousel.auto_advance_ms = 3000;
        let scenario = Scenario::from_ron_str(
            "(layout: (slides: 4), steps: [Wait(ms: 6000), ExpectSlide(2)])",
        )
        .unwrap();
        assert!(scenario.run(&settings).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = Scenario::load(Path::new("/nonexistent/scenario.ron"));
        assert!(matches!(result, Err(ScenarioError::Io(_))));
    }
}
