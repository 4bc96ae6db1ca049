//! # Goal Conversation
//!
//! A short clarifying chat before the final plan. The assistant greets the
//! learner, asks up to `max_questions` follow-ups through a
//! [`LanguageModel`], then produces a curriculum.
//!
//! ## Key Invariants
//!
//! - Every model failure degrades to canned text or the template
//!   curriculum; no error reaches the caller
//! - `questions_asked` counts user replies, not assistant questions

use serde::Serialize;

use crate::models::GoalRequest;
use crate::plan::{LearningPlan, PlanConstraints, fallback_curriculum, parse_date};

pub const UNAVAILABLE_REPLY: &str = "I'm sorry, the AI assistant is not available right now.";
pub const ERROR_REPLY: &str = "I'm sorry, I encountered an error. Please try again.";

/// Default number of learner replies before the final plan.
pub const DEFAULT_MAX_QUESTIONS: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Language model is not available")]
    Unavailable,
    #[error("Language model request failed: {0}")]
    Request(String),
}

/// Text-completion backend.
pub trait LanguageModel {
    fn prompt(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// Result of one learner reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub reply: String,
    /// The conversation has enough to produce the final plan.
    pub finalize: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    #[serde(flatten)]
    pub request: GoalRequest,
    pub questions_asked: u32,
    pub max_questions: u32,
    pub conversation_complete: bool,
    #[serde(skip)]
    pub messages: Vec<Message>,
}

impl ConversationState {
    /// Starts a conversation and records the opening messages.
    pub fn start(request: GoalRequest, max_questions: u32) -> Self {
        let mut state = Self {
            request,
            questions_asked: 0,
            max_questions,
            conversation_complete: false,
            messages: vec![],
        };
        for text in state.opening_messages() {
            state.push(Role::Assistant, text);
        }
        state
    }

    /// Greeting plus the first question, which depends on whether the
    /// learner gave details.
    pub fn opening_messages(&self) -> Vec<String> {
        let greeting = format!(
            "Great! I'd love to help you create a detailed plan for \"{}\". Let me ask you a few questions to make sure I give you the best possible roadmap.",
            self.request.goal
        );
        let question = match self.request.details.trim() {
            "" => "First, can you tell me more about your current experience level with this goal? What do you already know, and what challenges do you expect to face?".to_string(),
            details => format!(
                "I see you mentioned: \"{details}\". Can you tell me more about your specific learning style and what resources you prefer to use?"
            ),
        };
        vec![greeting, question]
    }

    /// Records a learner reply and asks the model for a response.
    pub fn reply(&mut self, model: Option<&dyn LanguageModel>, user_message: &str) -> Turn {
        self.push(Role::User, user_message.to_string());
        self.questions_asked += 1;

        let reply = match model {
            None => UNAVAILABLE_REPLY.to_string(),
            Some(model) => match model.prompt(&self.reply_prompt(user_message)) {
                Ok(reply) => reply,
                Err(e) => {
                    log::warn!("Reply generation failed: {e}");
                    ERROR_REPLY.to_string()
                }
            },
        };
        self.push(Role::Assistant, reply.clone());

        let lower = reply.to_lowercase();
        let finalize = self.questions_asked >= self.max_questions
            || lower.contains("plan")
            || lower.contains("step");
        Turn { reply, finalize }
    }

    /// Produces the curriculum and marks the conversation complete.
    pub fn final_plan(
        &mut self,
        model: Option<&dyn LanguageModel>,
        constraints: &PlanConstraints,
    ) -> String {
        let plan = generate_curriculum(&self.request, model, constraints);
        self.push(Role::Assistant, plan.clone());
        self.conversation_complete = true;
        plan
    }

    pub fn reply_prompt(&self, user_message: &str) -> String {
        let context = serde_json::to_string(self).unwrap_or_default();
        format!(
            "You are a helpful goal-setting assistant. You're having a conversation with a user to help them create a detailed, actionable plan for their goal.

Context: {context}

User's latest message: \"{user_message}\"

Based on the conversation so far, respond naturally and helpfully. If you need more information to create a good plan, ask specific follow-up questions. If you have enough information, provide a detailed step-by-step plan with timelines.

Keep responses conversational and under 200 words."
        )
    }

    fn push(&mut self, role: Role, text: String) {
        self.messages.push(Message { role, text });
    }
}

/// Prompt asking the model for a free-form numbered plan.
pub fn plan_prompt(request: &GoalRequest) -> String {
    format!(
        "Create a detailed, step-by-step plan for achieving this goal: \"{goal}\"

Timeline: {start} to {end}
Details: {details}
Structured learning: {structured}

Provide a comprehensive plan with:
1. 5-7 specific, actionable steps
2. Timeline for each step
3. Resources or tools needed
4. Milestones to track progress

Format as a clear, numbered list with timelines.",
        goal = request.goal,
        start = request.start_date,
        end = request.end_date,
        details = request.details,
        structured = request.structured,
    )
}

/// Curriculum markdown for `request`.
///
/// Structured requests with valid dates use the gamified plan. Anything
/// else asks the model, and the template covers a missing or failing
/// model.
pub fn generate_curriculum(
    request: &GoalRequest,
    model: Option<&dyn LanguageModel>,
    constraints: &PlanConstraints,
) -> String {
    if request.structured {
        match structured_plan(request, constraints) {
            Ok(plan) => return plan.to_markdown(),
            Err(e) => log::warn!("Structured plan failed, asking the model instead: {e}"),
        }
    }

    let reply = match model {
        Some(model) => model.prompt(&plan_prompt(request)),
        None => Err(ModelError::Unavailable),
    };
    match reply {
        Ok(plan) if !plan.trim().is_empty() => plan,
        Ok(_) => {
            log::warn!("Model returned an empty plan, using the template");
            template_for(request)
        }
        Err(e) => {
            log::info!("Using the template curriculum: {e}");
            template_for(request)
        }
    }
}

fn structured_plan(
    request: &GoalRequest,
    constraints: &PlanConstraints,
) -> Result<LearningPlan, crate::plan::PlanError> {
    let start = parse_date(&request.start_date)?;
    let end = parse_date(&request.end_date)?;
    LearningPlan::generate(&request.goal, start, end, constraints)
}

fn template_for(request: &GoalRequest) -> String {
    fallback_curriculum(&request.goal, &request.start_date, &request.end_date)
}
