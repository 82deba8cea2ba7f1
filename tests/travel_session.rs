use std::io::Cursor;

use chrono::NaiveDate;
use splaydict::error::SplayDictError;
use splaydict::spelling::{SpellChecker, SplayDictionary};
use splaydict::travel::{TravelRequest, TravelSession};

fn checker() -> SpellChecker {
    SpellChecker::new(SplayDictionary::from_words([
        "paris", "pari", "parish", "london", "lisbon", "tokyo",
    ]))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 3, 1).unwrap()
}

fn run_session(checker: &mut SpellChecker, input: &str) -> (Result<TravelRequest, SplayDictError>, String) {
    let mut session = TravelSession::new(checker, Cursor::new(input.to_string()), Vec::new());
    let result = session.run(today());
    let (_, output) = session.into_prompter().into_inner();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_happy_path() {
    let mut checker = checker();
    let input = "Lisbon\n05 March 2027\n09 march 2027\n1\n2\n";

    let (result, output) = run_session(&mut checker, input);
    let request = result.unwrap();

    assert_eq!(
        request,
        TravelRequest {
            city: "lisbon".to_string(),
            from: NaiveDate::from_ymd_opt(2027, 3, 5).unwrap(),
            to: NaiveDate::from_ymd_opt(2027, 3, 9).unwrap(),
            rooms: 1,
            adults: 2,
        }
    );
    assert!(output.contains("City is spelled correctly."));
    assert_eq!(request.nights(), 4);
}

#[test]
fn test_city_correction_loop() {
    let mut checker = checker();
    let input = "parsi\nzzzzzzzz\nparis\n01 March 2027\n01 March 2027\n3\n4\n";

    let (result, output) = run_session(&mut checker, input);
    let request = result.unwrap();

    assert_eq!(request.city, "paris");
    assert_eq!(request.from, request.to);
    assert!(output.contains("City not found. Do you mean:\npari\nparis\nparish\nPlease type the city again:"));
    assert!(output.contains("City not found. No suggestions available.\nPlease type the city again:"));
}

#[test]
fn test_invalid_answers_are_reprompted() {
    let mut checker = checker();
    let input = "tokyo42\ntokyo\n\
                 1 March 2027\n28 February 2027\n31 February 2027\n02 March 2027\n\
                 01 March 2027\n03 March 2027\n\
                 0\n12\n9\n9\n";

    let (result, output) = run_session(&mut checker, input);
    let request = result.unwrap();

    assert_eq!(request.city, "tokyo");
    assert_eq!(request.from, NaiveDate::from_ymd_opt(2027, 3, 2).unwrap());
    assert_eq!(request.to, NaiveDate::from_ymd_opt(2027, 3, 3).unwrap());
    assert_eq!(request.rooms, 9);
    assert_eq!(request.adults, 9);

    assert!(output.contains("Invalid input. Please try again."));
    assert!(output.contains("Invalid input. From date should be today or a future date."));
    assert!(output.contains("Error parsing date:"));
    assert!(output.contains("Invalid input. To date should be after from date."));
}

#[test]
fn test_closed_input_aborts() {
    let mut checker = checker();

    let (result, _) = run_session(&mut checker, "londn\n");
    assert!(matches!(result, Err(SplayDictError::InputClosed)));
}

#[test]
fn test_session_lookups_leave_dictionary_intact() {
    let mut checker = checker();
    let input = "paris\n05 March 2027\n06 March 2027\n1\n1\n";

    let (result, _) = run_session(&mut checker, input);
    assert!(result.is_ok());

    let dictionary = checker.dictionary();
    assert_eq!(dictionary.word_count(), 6);
    assert_eq!(
        dictionary.words(),
        vec!["lisbon", "london", "pari", "paris", "parish", "tokyo"]
    );
}
