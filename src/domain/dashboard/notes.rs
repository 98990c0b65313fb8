//! Static reference text shown around the calculator.

use serde::Serialize;

pub const PAGE_TITLE: &str = "The Political Dissonance Predictor";

pub const INTRODUCTION: &str = "This tool uses a predictive model from experimental research to \
estimate the level of cognitive dissonance (on a 1-10 scale) one might experience when faced \
with a political policy choice.";

pub const SLIDER_NOTE: &str = "Note on Sliders: The 'Ideology' slider is a plausible \
interpolation. The 'Alignment' and 'Valence' sliders are theoretical simulations assuming a \
perfectly linear transition between the discrete conditions tested in the experiment.";

pub const MODEL_SUMMARY: &str = "This calculator is based on a three-way interaction Linear \
Mixed-Effects Model (LMM) derived from the study's data:";

pub static SLIDER_EXPLANATIONS: [&str; 2] = [
    "The Ideology slider interpolates between the two ideological groups measured in the study, \
     which is a plausible estimation for moderates.",
    "The Alignment and Valence sliders are theoretical interpolations. They assume a perfectly \
     linear, straight-line change in dissonance between the discrete experimental conditions that \
     were actually tested (e.g., 'Aligned' vs. 'Conflicting'). This is a powerful illustration but \
     should be considered a simulation, as the original study did not measure these \
     \"in-between\" states.",
];

pub static ETHICS_POINTS: [&str; 3] = [
    "Original Research Data: The data used to build this predictive model was collected from \
     confidential participants in a research study. The study's protocol was reviewed and \
     approved by an Institutional Review Board (IRB) to ensure it met ethical standards for \
     research with human subjects.",
    "Your Privacy in this App: Your selections within this calculator are completely private. \
     They are not recorded, stored, or monitored in any way. Every calculation is performed for \
     a single request and discarded once the page is returned.",
    "Purpose: This tool is for educational and illustrative purposes only. It is a demonstration \
     of a statistical model and is not intended for psychological diagnosis or assessment.",
];

pub const SAMPLE_NOTE: &str = "Note: This model is based on a final sample of 99 participants \
(85 Liberal, 14 Conservative) from an undergraduate honors thesis. The effects involving \
'Ideology' should be interpreted with caution given the small number of conservatives in the \
data.";

/// Reference texts bundled with every dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceNotes {
    pub title: &'static str,
    pub introduction: &'static str,
    pub slider_note: &'static str,
    pub model_summary: &'static str,
    pub slider_explanations: &'static [&'static str],
    pub ethics: &'static [&'static str],
    pub sample: &'static str,
}

impl Default for ReferenceNotes {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE,
            introduction: INTRODUCTION,
            slider_note: SLIDER_NOTE,
            model_summary: MODEL_SUMMARY,
            slider_explanations: &SLIDER_EXPLANATIONS,
            ethics: &ETHICS_POINTS,
            sample: SAMPLE_NOTE,
        }
    }
}
