//! # Screening Dialogue
//!
//! Scripted AI screening of a candidate in `New Applications`.
//!
//! The dialogue is a pure state machine. It owns no timers: the runtime
//! decides when [`ScreeningDialogue::reveal_answer`] and
//! [`ScreeningDialogue::advance`] are called.
//!
//! ```text
//! Screening(q0) -reveal-> Screening(q0, revealed) -advance-> Screening(q1) ...
//!     ... -advance on last question-> Summary
//! Summary  --ScheduleInterview--> Closed   (Trigger::InterviewScheduled)
//! Summary  --NoAnswer-----------> FollowUp
//! FollowUp --SendFollowUp-------> Closed   (Trigger::FollowUpSent)
//! FollowUp --Back---------------> Summary
//! ```
//!
//! Reaching `Summary` reports [`DialogueStep::Completed`], which the runtime
//! maps to `Trigger::ScreeningCompleted`.

use crate::pipeline::Trigger;
use crate::types::{Candidate, CandidateId};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// SCRIPTS
// =============================================================================

/// Placeholder shown in the summary for a question without a recorded answer.
pub const NO_ANSWER_RECORDED: &str = "No answer recorded.";

/// Designation keywords that select the marketing script.
const MARKETING_KEYWORDS: [&str; 4] = ["marketing", "seo", "ppc", "brand"];

const MARKETING_QUESTIONS: [&str; 6] = [
    "How would you approach developing a digital marketing strategy from scratch?",
    "What's your experience with budget allocation across different channels like PPC, SEO, and social media?",
    "Describe a successful campaign you managed and what made it successful.",
    "How do you measure the ROI of a content marketing initiative?",
    "What are the key metrics you track for an e-commerce website?",
    "How do you stay updated with the latest trends in digital marketing?",
];

const MARKETING_ANSWERS: [&str; 6] = [
    "I'd start with a deep dive into the target audience and competitive landscape, then define clear KPIs, choose the right channels, and create a content plan. Continuous A/B testing would be key.",
    "I use a data-driven approach, analyzing historical performance and CPA to allocate budget. I usually start with a 70/20/10 model for proven, emerging, and experimental channels.",
    "I managed a lead generation campaign using LinkedIn Ads that exceeded its target by 150%. The success was due to highly targeted audience segmentation and compelling ad creatives that addressed specific pain points.",
    "I track metrics like organic traffic growth, lead quality from content, conversion rates on gated content, and attribute revenue using marketing automation tools like HubSpot.",
    "Key metrics include Conversion Rate, Average Order Value (AOV), Customer Lifetime Value (CLV), Cart Abandonment Rate, and Traffic Source Analysis.",
    "I follow industry blogs like Moz and Search Engine Land, listen to podcasts, attend webinars, and I'm an active member of several marketing communities on Slack and LinkedIn.",
];

const DEFAULT_QUESTIONS: [&str; 6] = [
    "Can you tell me about a challenging project you've worked on?",
    "How do you handle tight deadlines and pressure?",
    "How do you collaborate with team members who have different working styles?",
    "What is your greatest professional achievement?",
    "How do you approach learning a new skill or technology?",
    "Where do you see yourself in the next five years?",
];

const DEFAULT_ANSWERS: [&str; 6] = [
    "I once had to lead a project with shifting requirements. I implemented agile methodologies, held daily stand-ups to ensure alignment, and we delivered a successful product on time.",
    "I prioritize tasks using the MoSCoW method, focus on one thing at a time, and communicate proactively with stakeholders about any potential delays. Breaking down large tasks helps manage pressure.",
    "I focus on clear communication and finding common goals. I adapt my communication style and make an effort to understand their perspective to ensure we can work together effectively.",
    "I'm proud of mentoring a junior team member who was later promoted to a lead role. Seeing them grow and succeed based on my guidance was incredibly rewarding.",
    "I start with the official documentation, then build small personal projects to apply the knowledge. I also follow online tutorials and engage with communities to ask questions.",
    "I aim to take on more leadership responsibilities and deepen my expertise in this field. I'm eager to contribute to a company's long-term growth and success.",
];

/// Fixed question set with one scripted answer per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreeningScript {
    Marketing,
    General,
}

impl ScreeningScript {
    /// Pick the script by keyword match on the designation (case-insensitive).
    #[must_use]
    pub fn for_designation(designation: &str) -> Self {
        let lowered = designation.to_lowercase();
        if MARKETING_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            ScreeningScript::Marketing
        } else {
            ScreeningScript::General
        }
    }

    #[must_use]
    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            ScreeningScript::Marketing => &MARKETING_QUESTIONS,
            ScreeningScript::General => &DEFAULT_QUESTIONS,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &'static [&'static str] {
        match self {
            ScreeningScript::Marketing => &MARKETING_ANSWERS,
            ScreeningScript::General => &DEFAULT_ANSWERS,
        }
    }
}

// =============================================================================
// DIALOGUE STATE
// =============================================================================

/// Where the dialogue currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialoguePhase {
    /// Asking question `question`; the scripted answer is shown once revealed.
    Screening { question: usize, answer_revealed: bool },
    /// All questions asked; the employer decides.
    Summary,
    /// The candidate could not be reached; a follow-up message is drafted.
    FollowUp,
    /// A final action was taken. No further steps are accepted.
    Closed,
}

/// Progress reported by a timed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueStep {
    /// The scripted answer for `question` was revealed and recorded.
    AnswerRevealed { question: usize },
    /// Moved on to `question`.
    NextQuestion { question: usize },
    /// The last question was answered; the dialogue is at the summary.
    Completed,
}

/// Buttons available to the employer after screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmployerAction {
    /// "Schedule Interview" on the summary.
    ScheduleInterview,
    /// "No Answer" on the summary: draft a follow-up.
    NoAnswer,
    /// "Send Follow-Up" on the follow-up draft.
    SendFollowUp,
    /// "Back" from the follow-up draft to the summary.
    Back,
}

/// Errors raised when a step or action does not fit the current phase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogueError {
    #[error("Cannot {step} while in phase {phase:?}")]
    OutOfOrder {
        step: &'static str,
        phase: DialoguePhase,
    },

    #[error("Action {action:?} is not available in phase {phase:?}")]
    ActionUnavailable {
        action: EmployerAction,
        phase: DialoguePhase,
    },
}

/// Scripted screening of one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningDialogue {
    candidate: CandidateId,
    script: ScreeningScript,
    phase: DialoguePhase,
    recorded: Vec<&'static str>,
}

impl ScreeningDialogue {
    /// Start a dialogue at the first question.
    #[must_use]
    pub fn new(candidate: &Candidate) -> Self {
        Self {
            candidate: candidate.id,
            script: ScreeningScript::for_designation(&candidate.designation),
            phase: DialoguePhase::Screening {
                question: 0,
                answer_revealed: false,
            },
            recorded: Vec::new(),
        }
    }

    #[must_use]
    pub fn candidate(&self) -> CandidateId {
        self.candidate
    }

    #[must_use]
    pub fn script(&self) -> ScreeningScript {
        self.script
    }

    #[must_use]
    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    /// Answers recorded so far, in question order.
    #[must_use]
    pub fn recorded_answers(&self) -> &[&'static str] {
        &self.recorded
    }

    /// The question currently asked, if screening.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static str> {
        match self.phase {
            DialoguePhase::Screening { question, .. } => {
                self.script.questions().get(question).copied()
            }
            _ => None,
        }
    }

    /// Reveal and record the scripted answer to the current question.
    pub fn reveal_answer(&mut self) -> Result<DialogueStep, DialogueError> {
        match self.phase {
            DialoguePhase::Screening {
                question,
                answer_revealed: false,
            } => {
                let answer = self.script.answers().get(question).copied().ok_or(
                    DialogueError::OutOfOrder {
                        step: "reveal an answer",
                        phase: self.phase,
                    },
                )?;
                self.recorded.push(answer);
                self.phase = DialoguePhase::Screening {
                    question,
                    answer_revealed: true,
                };
                Ok(DialogueStep::AnswerRevealed { question })
            }
            phase => Err(DialogueError::OutOfOrder {
                step: "reveal an answer",
                phase,
            }),
        }
    }

    /// Move past a revealed answer: next question, or the summary after the
    /// last one.
    pub fn advance(&mut self) -> Result<DialogueStep, DialogueError> {
        match self.phase {
            DialoguePhase::Screening {
                question,
                answer_revealed: true,
            } => {
                let next = question.saturating_add(1);
                if next < self.script.questions().len() {
                    self.phase = DialoguePhase::Screening {
                        question: next,
                        answer_revealed: false,
                    };
                    Ok(DialogueStep::NextQuestion { question: next })
                } else {
                    self.phase = DialoguePhase::Summary;
                    Ok(DialogueStep::Completed)
                }
            }
            phase => Err(DialogueError::OutOfOrder {
                step: "advance",
                phase,
            }),
        }
    }

    /// Apply an employer action. Returns the pipeline trigger to fire, if
    /// the action changes the candidate's status.
    pub fn act(&mut self, action: EmployerAction) -> Result<Option<Trigger>, DialogueError> {
        let (next, trigger) = match (self.phase, action) {
            (DialoguePhase::Summary, EmployerAction::ScheduleInterview) => {
                (DialoguePhase::Closed, Some(Trigger::InterviewScheduled))
            }
            (DialoguePhase::Summary, EmployerAction::NoAnswer) => (DialoguePhase::FollowUp, None),
            (DialoguePhase::FollowUp, EmployerAction::SendFollowUp) => {
                (DialoguePhase::Closed, Some(Trigger::FollowUpSent))
            }
            (DialoguePhase::FollowUp, EmployerAction::Back) => (DialoguePhase::Summary, None),
            (phase, action) => return Err(DialogueError::ActionUnavailable { action, phase }),
        };
        self.phase = next;
        Ok(trigger)
    }

    /// Summary of the session: every question with its recorded answer.
    #[must_use]
    pub fn summary(&self) -> ScreeningSummary {
        let responses = self
            .script
            .questions()
            .iter()
            .enumerate()
            .map(|(i, question)| ScreeningResponse {
                question,
                answer: self.recorded.get(i).copied().unwrap_or(NO_ANSWER_RECORDED),
            })
            .collect();

        ScreeningSummary {
            responses,
            skills: SkillAssessment::default(),
        }
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// One question and its recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningResponse {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Soft-skill bars shown on the summary (percentages, fixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillAssessment {
    pub eq: u8,
    pub confidence: u8,
    pub social_awareness: u8,
    pub problem_solving: u8,
}

impl Default for SkillAssessment {
    fn default() -> Self {
        Self {
            eq: 85,
            confidence: 92,
            social_awareness: 78,
            problem_solving: 95,
        }
    }
}

impl SkillAssessment {
    /// Labelled bars in display order.
    #[must_use]
    pub fn bars(&self) -> [(&'static str, u8); 4] {
        [
            ("EQ", self.eq),
            ("Confidence", self.confidence),
            ("Social Awareness", self.social_awareness),
            ("Problem Solving", self.problem_solving),
        ]
    }
}

/// Content of the summary phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningSummary {
    pub responses: Vec<ScreeningResponse>,
    pub skills: SkillAssessment,
}

// =============================================================================
// FOLLOW-UP MESSAGE
// =============================================================================

/// Sign-off used on every follow-up message.
pub const HIRING_TEAM_SIGNATURE: &str = "Timeless AI Hiring Team";

/// Draft sent to a candidate who could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowUpMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl FollowUpMessage {
    /// Compose the follow-up for a candidate.
    #[must_use]
    pub fn compose(candidate: &Candidate) -> Self {
        let body = format!(
            "Hi {},\n\n\
             Thank you for your interest. We tried reaching you for a preliminary AI screening but were unable to connect.\n\n\
             Please let us know a suitable time for a brief call.\n\n\
             Best regards,\n{}",
            candidate.first_name(),
            HIRING_TEAM_SIGNATURE
        );

        Self {
            to: candidate.email.clone(),
            subject: format!(
                "Follow-up on your application for {}",
                candidate.designation
            ),
            body,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AiScore, CandidateSource, PipelineStatus};

    fn make_candidate(designation: &str) -> Candidate {
        Candidate {
            id: CandidateId(11),
            name: "Aisha Rahman".to_string(),
            designation: designation.to_string(),
            email: "aisha.rahman@example.com".to_string(),
            phone: "+971 55 123 4567".to_string(),
            source: CandidateSource::NaukriGulf,
            ai_score: AiScore::from_tenths(88).expect("score"),
            status: PipelineStatus::NewApplications,
        }
    }

    fn run_to_summary(dialogue: &mut ScreeningDialogue) {
        loop {
            dialogue.reveal_answer().expect("reveal");
            if dialogue.advance().expect("advance") == DialogueStep::Completed {
                break;
            }
        }
    }

    #[test]
    fn script_selection_by_keyword() {
        assert_eq!(
            ScreeningScript::for_designation("Digital Marketing Manager"),
            ScreeningScript::Marketing
        );
        assert_eq!(
            ScreeningScript::for_designation("SEO Specialist"),
            ScreeningScript::Marketing
        );
        assert_eq!(
            ScreeningScript::for_designation("PPC Analyst"),
            ScreeningScript::Marketing
        );
        assert_eq!(
            ScreeningScript::for_designation("Brand Strategist"),
            ScreeningScript::Marketing
        );
        assert_eq!(
            ScreeningScript::for_designation("Backend Engineer"),
            ScreeningScript::General
        );
    }

    #[test]
    fn scripts_pair_every_question_with_an_answer() {
        for script in [ScreeningScript::Marketing, ScreeningScript::General] {
            assert_eq!(script.questions().len(), script.answers().len());
            assert_eq!(script.questions().len(), 6);
        }
    }

    #[test]
    fn answer_must_be_revealed_before_advancing() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("Engineer"));
        assert!(matches!(
            dialogue.advance(),
            Err(DialogueError::OutOfOrder { step: "advance", .. })
        ));

        assert_eq!(
            dialogue.reveal_answer(),
            Ok(DialogueStep::AnswerRevealed { question: 0 })
        );
        assert!(dialogue.reveal_answer().is_err());
        assert_eq!(dialogue.advance(), Ok(DialogueStep::NextQuestion { question: 1 }));
    }

    #[test]
    fn full_run_records_every_answer() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("SEO Lead"));
        run_to_summary(&mut dialogue);

        assert_eq!(dialogue.phase(), DialoguePhase::Summary);
        assert_eq!(dialogue.recorded_answers(), MARKETING_ANSWERS.as_slice());
        assert_eq!(dialogue.current_question(), None);

        let summary = dialogue.summary();
        assert_eq!(summary.responses.len(), 6);
        assert_eq!(summary.responses[5].answer, MARKETING_ANSWERS[5]);
    }

    #[test]
    fn summary_marks_unanswered_questions() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("Engineer"));
        dialogue.reveal_answer().expect("reveal");

        let summary = dialogue.summary();
        assert_eq!(summary.responses[0].answer, DEFAULT_ANSWERS[0]);
        assert_eq!(summary.responses[1].answer, NO_ANSWER_RECORDED);
        assert_eq!(summary.skills.bars()[3], ("Problem Solving", 95));
    }

    #[test]
    fn schedule_from_summary() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("Engineer"));
        run_to_summary(&mut dialogue);

        let trigger = dialogue.act(EmployerAction::ScheduleInterview).expect("act");
        assert_eq!(trigger, Some(Trigger::InterviewScheduled));
        assert_eq!(dialogue.phase(), DialoguePhase::Closed);
        assert!(dialogue.act(EmployerAction::ScheduleInterview).is_err());
    }

    #[test]
    fn follow_up_path_with_back() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("Engineer"));
        run_to_summary(&mut dialogue);

        assert_eq!(dialogue.act(EmployerAction::NoAnswer), Ok(None));
        assert_eq!(dialogue.phase(), DialoguePhase::FollowUp);
        assert_eq!(dialogue.act(EmployerAction::Back), Ok(None));
        assert_eq!(dialogue.phase(), DialoguePhase::Summary);
        assert_eq!(dialogue.act(EmployerAction::NoAnswer), Ok(None));
        assert_eq!(
            dialogue.act(EmployerAction::SendFollowUp),
            Ok(Some(Trigger::FollowUpSent))
        );
    }

    #[test]
    fn actions_rejected_during_screening() {
        let mut dialogue = ScreeningDialogue::new(&make_candidate("Engineer"));
        let result = dialogue.act(EmployerAction::ScheduleInterview);
        assert!(matches!(
            result,
            Err(DialogueError::ActionUnavailable {
                action: EmployerAction::ScheduleInterview,
                ..
            })
        ));
    }

    #[test]
    fn follow_up_message_uses_first_name() {
        let message = FollowUpMessage::compose(&make_candidate("Brand Manager"));
        assert_eq!(message.to, "aisha.rahman@example.com");
        assert_eq!(message.subject, "Follow-up on your application for Brand Manager");
        assert!(message.body.starts_with("Hi Aisha,"));
        assert!(message.body.ends_with(HIRING_TEAM_SIGNATURE));
    }
}
