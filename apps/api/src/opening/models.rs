#![allow(dead_code)]

// Documented response contracts for the two operations.
//
// Handlers forward the model's JSON verbatim without validating it against
// these shapes; the types record the contract the prompts request and back
// the contract tests below.

use serde::{Deserialize, Serialize};

/// One candidate opening line plus its self-critique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSentence {
    pub text: String,
    pub evaluation: String,
    pub grade: String,
    pub grade_reasoning: String,
}

/// Response shape of the generate operation. Five sentences by convention,
/// not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub exploration: String,
    pub sentences: Vec<GeneratedSentence>,
}

/// The five rubric dimensions, each a free-text explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEvaluation {
    pub brain_stutter: String,
    pub compression: String,
    pub texture: String,
    pub names_vs_describes: String,
    pub paraphrasable: String,
}

/// Response shape of the grade operation. `revised_version` is null when
/// the model judges the sentence already A+ (model honesty assumed, not
/// enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    pub evaluation: GradeEvaluation,
    pub grade: String,
    pub grade_reasoning: String,
    pub suggestions: Vec<String>,
    pub revised_version: Option<String>,
}
