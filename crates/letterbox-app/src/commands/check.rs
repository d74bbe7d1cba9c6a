use std::io::Write;

use letterbox_core::Dictionary;
use letterbox_game::validate;

use crate::{AppError, cli::CheckArgs};

/// Checks one word and returns whether it was accepted.
pub fn run<W>(args: &CheckArgs, dictionary: &Dictionary, out: &mut W) -> Result<bool, AppError>
where
    W: Write,
{
    let last_letter = args.last_letter.map(|c| c.to_uppercase().next().unwrap_or(c));
    let result = validate(&args.word, &args.board, last_letter, dictionary);

    if args.json {
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result.message)?;
        if let Some(letter) = result.last_letter {
            writeln!(out, "next word starts with '{letter}'")?;
        }
    }
    Ok(result.valid)
}

#[cfg(test)]
mod tests {
    use letterbox_core::Alphabet;

    use super::*;

    fn args(word: &str, last_letter: Option<char>, json: bool) -> CheckArgs {
        CheckArgs {
            word: word.to_owned(),
            board: "CRO/WNI/GHT/TCR".parse().expect("valid board"),
            last_letter,
            json,
        }
    }

    fn check(args: &CheckArgs) -> (bool, String) {
        let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
        let mut out = Vec::new();
        let valid = run(args, &dictionary, &mut out).expect("writes");
        (valid, String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn test_accepted_text() {
        let (valid, text) = check(&args("crown", None, false));
        assert!(valid);
        assert_eq!(text, "word accepted\nnext word starts with 'N'\n");
    }

    #[test]
    fn test_lowercase_last_letter() {
        let (valid, _) = check(&args("night", Some('n'), false));
        assert!(valid);
    }

    #[test]
    fn test_rejected_json() {
        let (valid, text) = check(&args("night", Some('K'), true));
        assert!(!valid);
        assert_eq!(
            text.trim_end(),
            r#"{"valid":false,"message":"word must start with 'K'"}"#
        );
    }
}
