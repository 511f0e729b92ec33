//! Module page rendering.
//!
//! Assembles frontmatter, header badges, the three exercise blocks, and
//! the closing sections into a complete markdown page. Rendering is pure;
//! the scaffolder writes the result to disk.

use courseforge_core::{ModuleDescriptor, difficulty_stars, track_display_name};

use crate::frontmatter::generate_frontmatter;

/// Directory name for a module, zero-padded to two digits.
#[must_use]
pub fn module_dir_name(number: u8) -> String {
    format!("module-{number:02}")
}

/// Renders the complete `index.md` content for a module.
#[must_use]
pub fn render_module_page(descriptor: &ModuleDescriptor) -> String {
    let track_label = track_display_name(&descriptor.track);
    let stars = "⭐".repeat(usize::from(difficulty_stars(&descriptor.difficulty)));
    let next = u16::from(descriptor.number) + 1;

    let mut sections = Vec::new();

    sections.push(generate_frontmatter(descriptor));
    sections.push(String::new());

    // Header and badges
    sections.push(format!(
        "# Module {:02}: {}",
        descriptor.number, descriptor.title
    ));
    sections.push(String::new());
    sections.push(format!(
        "**Track:** {track_label} | **Difficulty:** {stars} | **Duration:** {} minutes",
        descriptor.duration_minutes
    ));
    sections.push(String::new());

    render_objectives(&mut sections, track_label);
    render_prerequisites(&mut sections, track_label);
    render_overview(&mut sections, descriptor);
    render_exercises(&mut sections, descriptor.duration_minutes);
    render_troubleshooting(&mut sections);
    render_assessment(&mut sections);
    render_next_steps(&mut sections);
    render_resources(&mut sections);

    // Closing cross-link to the next module
    sections.push("---".to_string());
    sections.push(String::new());
    sections.push(format!(
        "**Next:** [Module {next:02}](../module-{next:02}/)"
    ));
    sections.push(String::new());

    sections.join("\n")
}

fn render_objectives(sections: &mut Vec<String>, track_label: &str) {
    sections.push("## Learning Objectives".to_string());
    sections.push(String::new());
    sections.push("By the end of this module, you will be able to:".to_string());
    sections.push(String::new());
    sections.push(
        "- Explain the concepts this module introduces and when to reach for them".to_string(),
    );
    sections.push(format!(
        "- Apply the module workflow to a realistic project from the {track_label} track"
    ));
    sections.push(
        "- Complete all three exercises and verify your work against the validation checklists"
            .to_string(),
    );
    sections
        .push("- Recognize the failure modes covered in the troubleshooting guide".to_string());
    sections.push(String::new());
}

fn render_prerequisites(sections: &mut Vec<String>, track_label: &str) {
    sections.push("## Prerequisites".to_string());
    sections.push(String::new());
    sections.push("Before starting this module you should have:".to_string());
    sections.push(String::new());
    sections.push(format!(
        "- Completed the preceding modules of the {track_label} track"
    ));
    sections.push(
        "- A working development environment with your AI assistant configured".to_string(),
    );
    sections.push("- The workshop repository cloned and building locally".to_string());
    sections.push(String::new());
}

fn render_overview(sections: &mut Vec<String>, descriptor: &ModuleDescriptor) {
    sections.push("## Module Overview".to_string());
    sections.push(String::new());
    sections.push(descriptor.description.clone());
    sections.push(String::new());
    sections.push(
        "The module is organized as three exercises of increasing depth. Work through them \
         in order; each builds on the artifacts of the previous one."
            .to_string(),
    );
    sections.push(String::new());
}

/// Exercise durations split the module total 30% / 35% / 35%, with integer
/// remainder folded into the last exercise.
const fn exercise_durations(total: u32) -> (u32, u32, u32) {
    let first = total * 30 / 100;
    let second = total * 35 / 100;
    (first, second, total - first - second)
}

fn render_exercises(sections: &mut Vec<String>, duration_minutes: u32) {
    let (d1, d2, d3) = exercise_durations(duration_minutes);

    render_exercise(
        sections,
        1,
        "Foundation",
        d1,
        "Build the minimal working version of this module's core workflow.",
        "Your team has adopted AI-assisted development and asked you to pilot this module's \
         workflow on a small, self-contained task. Keep the scope deliberately narrow; the \
         goal is a working baseline, not completeness.",
        &[
            "Read the scenario and sketch your approach before involving the assistant.",
            "Work through the core task step by step, reviewing every suggestion before \
             accepting it.",
            "Commit your work once the basic version behaves as expected.",
        ],
        &[
            "A minimal, working implementation of the exercise task",
            "Notes on where the assistant helped and where it got in the way",
        ],
        &[
            "The implementation runs end to end without manual fixes",
            "Every accepted suggestion was reviewed and understood",
            "Work is committed with a descriptive message",
        ],
    );

    render_exercise(
        sections,
        2,
        "Application",
        d2,
        "Extend the foundation work to a realistic, production-shaped scenario.",
        "The pilot went well and the scope has grown: new requirements, an edge case reported \
         by another team, and a deadline. Apply the module workflow under realistic \
         constraints, delegating mechanical work to the assistant while you own the design.",
        &[
            "Extend your foundation solution to cover the new requirements.",
            "Use the assistant to draft tests for the edge cases, then tighten the \
             assertions yourself.",
            "Ask the assistant for a review of your diff and triage its findings.",
        ],
        &[
            "An extended implementation that handles the new requirements and edge cases",
            "A test suite that fails when the edge-case handling is removed",
        ],
        &[
            "All tests pass, including the edge cases",
            "At least one assistant review finding was accepted and one rejected, with \
             reasons",
            "The diff is small enough for a colleague to review in one sitting",
        ],
    );

    render_exercise(
        sections,
        3,
        "Mastery",
        d3,
        "Adapt the workflow to your own codebase and teach it to someone else.",
        "Pilot complete, the workflow is yours to adopt. Transfer it to a repository you \
         actually work on, note what needed adapting, and prepare a short walkthrough for \
         your team.",
        &[
            "Repeat the exercise workflow on a task from your own backlog.",
            "Record what you changed about the workflow and why.",
            "Prepare a ten-minute walkthrough of your result for the next cohort session.",
        ],
        &[
            "The workflow applied to a real task in your own repository",
            "A short written adaptation note for your team",
        ],
        &[
            "The real-world task is finished to your team's usual standard",
            "The adaptation note names at least one thing that did not transfer directly",
            "The walkthrough is ready to present",
        ],
    );
}

#[allow(clippy::too_many_arguments)]
fn render_exercise(
    sections: &mut Vec<String>,
    number: u8,
    name: &str,
    duration: u32,
    objective: &str,
    scenario: &str,
    instructions: &[&str],
    outcomes: &[&str],
    checklist: &[&str],
) {
    sections.push(format!("## Exercise {number}: {name}"));
    sections.push(String::new());
    sections.push(format!("**Duration:** {duration} minutes"));
    sections.push(format!("**Objective:** {objective}"));
    sections.push(String::new());

    sections.push("### Scenario".to_string());
    sections.push(String::new());
    sections.push(scenario.to_string());
    sections.push(String::new());

    sections.push("### Instructions".to_string());
    sections.push(String::new());
    for (i, instruction) in instructions.iter().enumerate() {
        sections.push(format!("{}. {instruction}", i + 1));
    }
    sections.push(String::new());

    sections.push("### Expected Outcomes".to_string());
    sections.push(String::new());
    for outcome in outcomes {
        sections.push(format!("- {outcome}"));
    }
    sections.push(String::new());

    sections.push("### Validation Checklist".to_string());
    sections.push(String::new());
    for item in checklist {
        sections.push(format!("- [ ] {item}"));
    }
    sections.push(String::new());
}

fn render_troubleshooting(sections: &mut Vec<String>) {
    sections.push("## Troubleshooting".to_string());
    sections.push(String::new());
    sections.push("| Problem | Likely cause | Fix |".to_string());
    sections.push("|---------|--------------|-----|".to_string());
    sections.push(
        "| The assistant produces plausible but wrong code | Missing context in the prompt | \
         Point it at the relevant files and constraints, then retry |"
            .to_string(),
    );
    sections.push(
        "| Suggestions keep drifting from the task | Conversation has accumulated stale \
         context | Start a fresh session with a tighter brief |"
            .to_string(),
    );
    sections.push(
        "| Generated tests pass but prove nothing | Assertions mirror the implementation | \
         Write the expected values by hand before generating the harness |"
            .to_string(),
    );
    sections.push(String::new());
}

fn render_assessment(sections: &mut Vec<String>) {
    sections.push("## Assessment".to_string());
    sections.push(String::new());
    sections.push("Rate yourself before moving on:".to_string());
    sections.push(String::new());
    sections.push(
        "- [ ] I can complete the foundation exercise without referring back to the \
         instructions"
            .to_string(),
    );
    sections.push(
        "- [ ] I can explain this module's workflow to a colleague in five minutes".to_string(),
    );
    sections
        .push("- [ ] I know which parts of the workflow I will adopt day to day".to_string());
    sections.push(String::new());
}

fn render_next_steps(sections: &mut Vec<String>) {
    sections.push("## Next Steps".to_string());
    sections.push(String::new());
    sections.push("- Revisit any checklist items you could not tick".to_string());
    sections.push("- Share one takeaway in your cohort channel".to_string());
    sections.push("- Continue to the next module in the track".to_string());
    sections.push(String::new());
}

fn render_resources(sections: &mut Vec<String>) {
    sections.push("## Additional Resources".to_string());
    sections.push(String::new());
    sections.push("- The workshop glossary and shared prompt library".to_string());
    sections.push("- Your track's best-practice guide".to_string());
    sections.push("- Office-hours recordings for this module".to_string());
    sections.push(String::new());
}
