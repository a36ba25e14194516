//! Terminal prompts for the interactive wizard.

use dialoguer::{Confirm, Input, Select};
use plab_core::entities::{Question, QuestionDraft, ResearchProfile};
use plab_core::enums::{AgeRange, GenderFilter};

const GENDERS: [GenderFilter; 3] = [GenderFilter::All, GenderFilter::Male, GenderFilter::Female];

/// What the user chose to do from the question editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    Submit,
    Restart,
}

/// What the user chose to do after a terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    ExportJson,
    DownloadPdf,
    DownloadJson,
    Restart,
    Quit,
}

/// Prompt for the research profile, pre-filled with `previous` after a failed attempt.
pub fn profile(previous: Option<&ResearchProfile>) -> anyhow::Result<ResearchProfile> {
    let previous = previous.cloned().unwrap_or_default();

    let product = required_text("Product or service", &previous.product)?;
    let target_audience = required_text("Target audience", &previous.target_audience)?;

    let mut age_items = vec!["Any"];
    age_items.extend(AgeRange::ALL.iter().map(|age| age.as_str()));
    let age_default = previous
        .age_range
        .and_then(|age| AgeRange::ALL.iter().position(|a| *a == age))
        .map_or(0, |idx| idx + 1);
    let age_index = Select::new()
        .with_prompt("Age range")
        .items(&age_items)
        .default(age_default)
        .interact()?;

    let gender_items = GENDERS.map(GenderFilter::as_str);
    let gender_default = previous
        .gender
        .and_then(|gender| GENDERS.iter().position(|g| *g == gender))
        .unwrap_or(0);
    let gender_index = Select::new()
        .with_prompt("Gender")
        .items(&gender_items[..])
        .default(gender_default)
        .interact()?;

    let occupation = optional_text("Occupation or field (optional)", &previous.occupation)?;
    let additional_context =
        optional_text("Additional context (optional)", &previous.additional_context)?;

    Ok(ResearchProfile {
        product,
        target_audience,
        age_range: age_choice(age_index),
        gender: GENDERS.get(gender_index).copied(),
        occupation,
        additional_context,
    })
}

/// Edit `draft` until the user submits or starts over.
pub fn edit_questions(
    draft: &mut QuestionDraft,
    suggestions: &[String],
) -> anyhow::Result<EditorExit> {
    const ACTIONS: [&str; 6] = [
        "Edit a question",
        "Add a question",
        "Remove a question",
        "Use a suggested question",
        "Submit questions",
        "Start over",
    ];

    loop {
        println!();
        for (index, question) in draft.questions().iter().enumerate() {
            println!("  {}. {}", index + 1, question_label(question));
        }

        let action = Select::new()
            .with_prompt("Questions")
            .items(&ACTIONS[..])
            .default(if draft.submission().is_ok() { 4 } else { 0 })
            .interact()?;

        match action {
            0 => {
                let id = pick_question(draft, "Edit which question?")?;
                edit_text(draft, &id)?;
            }
            1 => {
                let id = draft.add();
                edit_text(draft, &id)?;
            }
            2 => {
                let id = pick_question(draft, "Remove which question?")?;
                if let Err(error) = draft.remove(&id) {
                    println!("  {error}");
                }
            }
            3 if suggestions.is_empty() => println!("  No suggestions available."),
            3 => {
                let pick = Select::new()
                    .with_prompt("Suggestion")
                    .items(suggestions)
                    .default(0)
                    .interact()?;
                draft.apply_suggestion(suggestions[pick].clone());
            }
            4 => return Ok(EditorExit::Submit),
            _ => {
                if confirm("Discard this research and start over?", false)? {
                    return Ok(EditorExit::Restart);
                }
            }
        }
    }
}

/// Post-insight menu. `report_ready` hides export and download when the
/// report failed to load.
pub fn finish(report_ready: bool) -> anyhow::Result<Finish> {
    let mut options = Vec::new();
    if report_ready {
        options.extend([
            ("Export results (JSON)", Finish::ExportJson),
            ("Download report (PDF)", Finish::DownloadPdf),
            ("Download report (JSON)", Finish::DownloadJson),
        ]);
    }
    options.extend([
        ("Start a new research", Finish::Restart),
        ("Quit", Finish::Quit),
    ]);

    let labels = options.iter().map(|(label, _)| *label).collect::<Vec<_>>();
    let index = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[index].1)
}

pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn required_text(prompt: &str, initial: &str) -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("this field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn optional_text(prompt: &str, initial: &str) -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn pick_question(draft: &QuestionDraft, prompt: &str) -> anyhow::Result<String> {
    let labels = draft
        .questions()
        .iter()
        .map(question_label)
        .collect::<Vec<_>>();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(draft.questions()[index].id.clone())
}

fn edit_text(draft: &mut QuestionDraft, id: &str) -> anyhow::Result<()> {
    let current = draft
        .questions()
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.text.clone())
        .unwrap_or_default();
    let text: String = Input::new()
        .with_prompt("Question")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    draft.update(id, text)?;
    Ok(())
}

fn age_choice(index: usize) -> Option<AgeRange> {
    index.checked_sub(1).and_then(|idx| AgeRange::ALL.get(idx).copied())
}

fn question_label(question: &Question) -> String {
    if question.text.trim().is_empty() {
        String::from("(empty)")
    } else {
        question.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_age_item_means_any() {
        assert_eq!(age_choice(0), None);
        assert_eq!(age_choice(1), Some(AgeRange::ALL[0]));
        assert_eq!(age_choice(AgeRange::ALL.len()), AgeRange::ALL.last().copied());
        assert_eq!(age_choice(AgeRange::ALL.len() + 1), None);
    }

    #[test]
    fn blank_questions_are_labelled() {
        let mut draft = QuestionDraft::new();
        assert_eq!(question_label(&draft.questions()[0]), "(empty)");
        draft.apply_suggestion("Why?");
        assert_eq!(question_label(&draft.questions()[0]), "Why?");
    }
}
