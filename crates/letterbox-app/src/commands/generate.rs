use std::io::Write;

use letterbox_core::{Board, Dictionary, WordChain};
use letterbox_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use serde::Serialize;

use crate::{AppError, cli::GenerateArgs};

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    board: &'a Board,
    seed: PuzzleSeed,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<&'a WordChain>,
}

pub fn run<W>(
    args: &GenerateArgs,
    dictionary: &Dictionary,
    config: GeneratorConfig,
    out: &mut W,
) -> Result<(), AppError>
where
    W: Write,
{
    let generator = PuzzleGenerator::new(dictionary).with_config(config);
    let puzzle = generator.generate_with_seed(args.seed.seed())?;

    if args.json {
        let output = GenerateOutput {
            board: &puzzle.board,
            seed: puzzle.seed,
            chain: args.show_chain.then_some(&puzzle.chain),
        };
        serde_json::to_writer(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        print_puzzle(&puzzle, args.show_chain, out)?;
    }
    Ok(())
}

pub(crate) fn print_board<W>(board: &Board, out: &mut W) -> Result<(), AppError>
where
    W: Write,
{
    for side in board.sides() {
        let side: String = side.iter().collect();
        writeln!(out, "  {side}")?;
    }
    Ok(())
}

fn print_puzzle<W>(puzzle: &GeneratedPuzzle, show_chain: bool, out: &mut W) -> Result<(), AppError>
where
    W: Write,
{
    writeln!(out, "Board:")?;
    print_board(&puzzle.board, out)?;
    writeln!(out, "Seed:")?;
    writeln!(out, "  {}", puzzle.seed)?;
    if show_chain {
        writeln!(out, "Solution:")?;
        writeln!(out, "  {}", puzzle.chain)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use letterbox_core::Alphabet;

    use super::*;
    use crate::cli::SeedArgs;

    fn args(show_chain: bool, json: bool) -> GenerateArgs {
        GenerateArgs {
            seed: SeedArgs {
                seed: None,
                phrase: Some("test".to_owned()),
            },
            show_chain,
            json,
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crown", "night"], &Alphabet::default())
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        run(&args(true, false), &dictionary(), GeneratorConfig::default(), &mut out)
            .expect("generates");
        let text = String::from_utf8(out).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Board:");
        assert_eq!(lines[5], "Seed:");
        assert_eq!(lines[6].trim(), PuzzleSeed::from_phrase("test").to_string());
        assert_eq!(lines[8].trim(), "CROWN → NIGHT");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        run(&args(false, true), &dictionary(), GeneratorConfig::default(), &mut out)
            .expect("generates");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(json["board"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["seed"], PuzzleSeed::from_phrase("test").to_string());
        assert!(json.get("chain").is_none());

        let mut out = Vec::new();
        run(&args(true, true), &dictionary(), GeneratorConfig::default(), &mut out)
            .expect("generates");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(json["chain"], serde_json::json!(["CROWN", "NIGHT"]));
    }

    #[test]
    fn test_exhausted_is_reported() {
        let dictionary = Dictionary::from_words(["cat"], &Alphabet::default());
        let config = GeneratorConfig {
            max_attempts: 1,
            max_rounds: 1,
            time_limit: None,
        };
        let err = run(&args(false, false), &dictionary, config, &mut Vec::new())
            .expect_err("no chain");
        assert!(matches!(err, AppError::Generate(_)));
    }
}
