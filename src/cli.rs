use crate::libquiz::engine::{Phase, QuizEngine, Summary};
use crate::Error;
use colored::Colorize;
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use text_io::try_read;

#[derive(Debug, PartialEq)]
enum Choice {
    Option(usize),
    Invalid,
    Quit,
}

impl Choice {
    /// Parses a line typed by the player. Options are shown one based.
    fn from_str(choices_count: usize, input: &str) -> Choice {
        match input.trim() {
            "q" => Choice::Quit,
            input => {
                let num: Result<usize, text_io::Error> = try_read!("{}", input.bytes());
                match num {
                    Ok(num) if (1..=choices_count).contains(&num) => Choice::Option(num - 1),
                    _ => Choice::Invalid,
                }
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Completed,
    QuitEarly,
}

/// `None` once the input is exhausted. An empty line is `Some("")`.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, text: &str) -> Result<Option<String>, Error> {
    write!(output, "{} ", text.cyan())?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("[CLI] Input closed");
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_questions(
    engine: &mut QuizEngine,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Outcome, Error> {
    loop {
        let current = engine.current_state();
        let Some(question) = current.current_question else {
            return Ok(Outcome::Completed);
        };

        let leading = format!(
            "{}/{}. ",
            current.current_index_display, current.total_questions
        );
        writeln!(
            output,
            "{}{}",
            leading.cyan(),
            question.text.as_str().black().bold().on_white()
        )?;
        let indent = " ".repeat(leading.len());
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "{}{}. {}", indent, format!("{}", i + 1).bold(), option.text)?;
        }
        let choices_count = question.options.len();

        let choice = loop {
            let Some(line) = prompt(
                input,
                output,
                &format!("Answer (1-{}, q to quit prematurely):", choices_count),
            )?
            else {
                break Choice::Quit;
            };
            match Choice::from_str(choices_count, &line) {
                Choice::Invalid => {
                    warn!("[CLI] Rejected input {:?}", line);
                    writeln!(
                        output,
                        "{}",
                        format!("Please pick an option between 1 and {}!", choices_count)
                            .bright_red()
                    )?;
                }
                choice => break choice,
            }
        };
        debug!("[CLI] choice: {:?}", choice);

        match choice {
            Choice::Option(num) => engine.answer(num)?,
            Choice::Quit | Choice::Invalid => {
                writeln!(output, "{}", "Quitting Early!".cyan())?;
                info!(
                    "[CLI] Stopped after {} of {} questions",
                    engine.state().answers_given.len(),
                    engine.total_questions()
                );
                return Ok(Outcome::QuitEarly);
            }
        }
    }
}

fn print_missed(output: &mut impl Write, summary: &Summary) -> Result<(), Error> {
    if summary.missed_questions.is_empty() {
        return Ok(());
    }
    writeln!(output, "{}", "Questions Missed:".blue())?;
    for missed in &summary.missed_questions {
        writeln!(output, "{}. {}", missed.index + 1, missed.question_text)?;
        writeln!(
            output,
            "    {}",
            format!("Your Answer: {}", missed.user_answer).red()
        )?;
        writeln!(
            output,
            "    {}",
            format!("Correct Answer: {}", missed.correct_answer).green()
        )?;
    }
    Ok(())
}

fn print_summary(output: &mut impl Write, summary: &Summary) -> Result<(), Error> {
    writeln!(output)?;
    if summary.phase == Phase::InProgress {
        // No verdict for an unfinished run.
        writeln!(output, "{}", "Quiz Stopped Early!".bright_blue().bold())?;
        writeln!(
            output,
            "You scored {} out of {} so far ({:.0}%)",
            summary.score, summary.total_questions, summary.score_percentage
        )?;
        return print_missed(output, summary);
    }

    writeln!(output, "{}", "Quiz Complete!".bright_blue().bold())?;
    writeln!(
        output,
        "You scored {} out of {} ({:.0}%)",
        summary.score, summary.total_questions, summary.score_percentage
    )?;
    if summary.passed {
        writeln!(output, "{}", "🎉 Congratulations!".bright_green().bold())?;
        return Ok(());
    }

    writeln!(output, "{}", "😢 Try Again!".bright_red().bold())?;
    print_missed(output, summary)
}

pub(crate) fn cli_loop(
    engine: &mut QuizEngine,
    input: &mut impl BufRead,
    output: &mut impl Write,
    summary_json: bool,
) -> Result<(), Error> {
    loop {
        let outcome = ask_questions(engine, input, output)?;
        let summary = engine.summary();
        print_summary(output, &summary)?;
        if summary_json {
            writeln!(output, "{}", serde_json::to_string_pretty(&summary)?)?;
        }

        if outcome == Outcome::QuitEarly {
            return Ok(());
        }
        match prompt(
            input,
            output,
            "Restart Quiz? (r to restart, anything else to quit):",
        )? {
            Some(line) if line.trim() == "r" => {
                engine.restart();
                writeln!(output)?;
            }
            _ => {
                info!("[CLI] Leaving after {} points", summary.score);
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libquiz::bank::builtin_bank;
    use crate::libquiz::settings::QuizSettings;
    use std::io::Cursor;

    // Paris, Elon Musk, Apple, 7 in display order.
    const FOUR_CORRECT: &str = "3\n2\n1\n3\n";

    fn run(keys: &str, summary_json: bool) -> (QuizEngine, String) {
        let mut engine = QuizEngine::new(builtin_bank().unwrap(), QuizSettings::default());
        let mut input = Cursor::new(keys.as_bytes().to_vec());
        let mut output = Vec::new();
        cli_loop(&mut engine, &mut input, &mut output, summary_json).unwrap();
        (engine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_options_one_based() {
        assert_eq!(Choice::from_str(4, "1"), Choice::Option(0));
        assert_eq!(Choice::from_str(4, "4\n"), Choice::Option(3));
        assert_eq!(Choice::from_str(4, " 2 "), Choice::Option(1));
    }

    #[test]
    fn rejects_out_of_range_options() {
        assert_eq!(Choice::from_str(4, "0"), Choice::Invalid);
        assert_eq!(Choice::from_str(4, "5"), Choice::Invalid);
        assert_eq!(Choice::from_str(4, "-1"), Choice::Invalid);
    }

    #[test]
    fn parses_quit_and_garbage() {
        assert_eq!(Choice::from_str(4, "q"), Choice::Quit);
        assert_eq!(Choice::from_str(4, "paris"), Choice::Invalid);
        assert_eq!(Choice::from_str(4, ""), Choice::Invalid);
        assert_eq!(Choice::from_str(4, "\n"), Choice::Invalid);
    }

    #[test]
    fn closed_input_ends_the_run() {
        let (engine, output) = run("", false);

        assert_eq!(engine.state().current_index, 0);
        assert!(output.contains("Quitting Early!"));
        assert!(output.contains("Quiz Stopped Early!"));
        assert_eq!(output.matches("Your Answer: Not Answered").count(), 5);
    }

    #[test]
    fn blank_lines_then_closed_input_ends_the_run() {
        let (engine, output) = run("\n\n", false);

        assert_eq!(engine.state().current_index, 0);
        assert_eq!(output.matches("Please pick an option between 1 and 4!").count(), 2);
        assert!(output.contains("Quitting Early!"));
    }

    #[test]
    fn early_quit_has_no_verdict() {
        let (engine, output) = run(&format!("{}q\n", FOUR_CORRECT), false);

        assert_eq!(engine.phase(), Phase::InProgress);
        assert!(output.contains("Quiz Stopped Early!"));
        assert!(output.contains("You scored 4 out of 5 so far (80%)"));
        assert!(!output.contains("Quiz Complete!"));
        assert!(!output.contains("Congratulations!"));
        assert!(!output.contains("Try Again!"));
        assert!(output.contains("5. What is the largest ocean on Earth?"));
        assert!(output.contains("Your Answer: Not Answered"));
        assert!(output.contains("Correct Answer: Pacific Ocean"));
    }

    #[test]
    fn reprompts_on_invalid_input() {
        let (engine, output) = run(&format!("x\n9\n{}1\n", FOUR_CORRECT), false);

        assert_eq!(output.matches("Please pick an option between 1 and 4!").count(), 2);
        assert_eq!(engine.state().score, 4);
        assert!(engine.is_finished());
        assert!(output.contains("You scored 4 out of 5 (80%)"));
        assert!(output.contains("Congratulations!"));
    }

    #[test]
    fn failed_run_lists_missed_questions() {
        let (_, output) = run("3\n1\n2\n2\n1\nn\n", false);

        assert!(output.contains("You scored 1 out of 5 (20%)"));
        assert!(output.contains("Try Again!"));
        assert!(output.contains("2. Who is the CEO of Tesla?"));
        assert!(output.contains("Your Answer: Jeff Bezos"));
        assert!(output.contains("Correct Answer: Elon Musk"));
        assert!(!output.contains("1. What is the capital of France?"));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let (engine, output) = run(&format!("{}4", FOUR_CORRECT), false);

        assert_eq!(engine.state().score, 5);
        assert!(output.contains("You scored 5 out of 5 (100%)"));
    }

    #[test]
    fn restart_starts_a_new_run() {
        let (engine, output) = run(&format!("{}1\nr\n3\n", FOUR_CORRECT), false);

        assert_eq!(output.matches("Quiz Complete!").count(), 1);
        assert_eq!(engine.state().current_index, 1);
        assert_eq!(engine.state().score, 1);
        assert!(output.contains("Quiz Stopped Early!"));
    }

    #[test]
    fn prints_summary_as_json() {
        let (_, output) = run(&format!("{}1\n", FOUR_CORRECT), true);

        assert!(output.contains("\"phase\": \"Finished\""));
        assert!(output.contains("\"score\": 4"));
        assert!(output.contains("\"passed\": true"));
        assert!(output.contains("\"Given\": \"Atlantic Ocean\""));
    }

    #[test]
    fn no_json_unless_asked() {
        let (_, output) = run(&format!("{}1\n", FOUR_CORRECT), false);
        assert!(!output.contains("\"score\""));
    }
}
