use std::io::{BufRead, Write};

use anyhow::Result;
use strive_engine::{ConversationState, LanguageModel, PlanConstraints};

/// Runs the clarifying chat on `input` until the conversation finalizes or
/// the input ends, then returns the final plan.
pub fn run<R: BufRead, W: Write>(
    state: &mut ConversationState,
    model: Option<&dyn LanguageModel>,
    constraints: &PlanConstraints,
    input: R,
    out: &mut W,
) -> Result<String> {
    for message in &state.messages {
        writeln!(out, "🤖 {}", message.text)?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            log::info!("Input closed after {} replies", state.questions_asked);
            break;
        };
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let turn = state.reply(model, message);
        writeln!(out, "🤖 {}", turn.reply)?;
        if turn.finalize {
            break;
        }
    }

    writeln!(out)?;
    writeln!(out, "Your Personalized Plan")?;
    writeln!(out)?;
    Ok(state.final_plan(model, constraints))
}
