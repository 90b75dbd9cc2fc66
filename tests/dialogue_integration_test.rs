use anyhow::Result;
use small_greeter::core::{AgeComparison, GreetingReport, Stage};
use small_greeter::{Dialogue, DialogueSettings, FixedClock, GreeterError, LineConsole};
use std::io::Cursor;

const MATZ: &str = "Yukihiro \"Matz\" Matsumoto, the lead designer of Ruby";

fn run(
    input: impl Into<Vec<u8>>,
    year: i32,
    settings: DialogueSettings,
) -> (small_greeter::Result<GreetingReport>, String) {
    let bytes: Vec<u8> = input.into();
    let console = LineConsole::new(Cursor::new(bytes), Vec::new());
    let mut dialogue = Dialogue::new(console, FixedClock::new(year), settings);
    let result = dialogue.greet();
    let (_, output) = dialogue.into_console().into_parts();
    (result, String::from_utf8(output).expect("console output is utf-8"))
}

#[test]
fn test_end_to_end_with_rejected_inputs() -> Result<()> {
    let (result, output) = run("\nAlice\n-5\n200\n30\n", 2024, DialogueSettings::default());
    let report = result?;

    assert_eq!(report.name.as_str(), "Alice");
    assert_eq!(report.age.years(), 30);
    assert_eq!(report.difference, -30);
    assert_eq!(report.comparison, AgeComparison::Younger(30));

    let expected = format!(
        "What is your name?\n\
         I didn't get that. What is your name?\n\
         Hello Alice, how old are you?\n\
         That's not really your age. How old are you, for real?\n\
         That's not really your age. How old are you, for real?\n\
         You're 30 years younger than {}!\n",
        MATZ
    );
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_same_and_older_reports() -> Result<()> {
    let (same, output) = run("Yukihiro\n60\n", 2024, DialogueSettings::default());
    assert_eq!(same?.comparison, AgeComparison::Same);
    assert!(output.ends_with(&format!("Woah, you're the same age as {}!\n", MATZ)));

    let (older, output) = run("Grace\n90\n", 2024, DialogueSettings::default());
    assert_eq!(older?.difference, 30);
    assert!(output.ends_with(&format!("You're 30 years older than {}!\n", MATZ)));
    Ok(())
}

#[test]
fn test_windows_line_endings_and_padding() -> Result<()> {
    let (result, output) = run("Bob  \r\n  42 \r\n", 2024, DialogueSettings::default());
    let report = result?;
    assert_eq!(report.name.as_str(), "Bob");
    assert_eq!(report.age.years(), 42);
    assert!(output.contains("Hello Bob, how old are you?\n"));
    Ok(())
}

#[test]
fn test_non_numeric_age_is_reprompted() -> Result<()> {
    let (result, output) = run("Alice\nabc\n0\n120\n119\n", 2024, DialogueSettings::default());
    assert_eq!(result?.age.years(), 119);
    assert_eq!(
        output
            .matches("That's not really your age. How old are you, for real?")
            .count(),
        3
    );
    Ok(())
}

#[test]
fn test_eof_while_asking_name() {
    let (result, output) = run("", 2024, DialogueSettings::default());
    assert!(matches!(
        result,
        Err(GreeterError::InputClosed { stage: Stage::Name })
    ));
    assert_eq!(output, "What is your name?\n");
}

#[test]
fn test_max_attempts_on_name() {
    let settings = DialogueSettings {
        max_attempts: Some(1),
        ..DialogueSettings::default()
    };
    let (result, _) = run("\nAlice\n30\n", 2024, settings);
    assert!(matches!(
        result,
        Err(GreeterError::TooManyAttempts {
            stage: Stage::Name,
            attempts: 1
        })
    ));
}

#[test]
fn test_unbounded_retries_by_default() -> Result<()> {
    let mut input = String::from("Alice\n");
    for _ in 0..500 {
        input.push_str("nope\n");
    }
    input.push_str("25\n");

    let (result, _) = run(input, 2024, DialogueSettings::default());
    assert_eq!(result?.age.years(), 25);
    Ok(())
}

#[test]
fn test_invalid_utf8_age_is_reprompted() -> Result<()> {
    let (result, output) = run(
        &b"Alice\n\xff\xfe\n30\n"[..],
        2024,
        DialogueSettings::default(),
    );
    assert_eq!(result?.age.years(), 30);
    assert_eq!(
        output
            .matches("That's not really your age. How old are you, for real?")
            .count(),
        1
    );
    Ok(())
}

#[test]
fn test_invalid_utf8_name_is_accepted_lossily() -> Result<()> {
    let (result, output) = run(&b"Al\xffce\n30\n"[..], 2024, DialogueSettings::default());
    assert_eq!(result?.name.as_str(), "Al\u{FFFD}ce");
    assert!(output.contains("Hello Al\u{FFFD}ce, how old are you?\n"));
    Ok(())
}
