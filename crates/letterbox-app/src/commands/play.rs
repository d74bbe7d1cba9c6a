use std::io::{BufRead, Write};

use letterbox_core::Dictionary;
use letterbox_game::{SessionId, SessionStore};
use letterbox_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

use super::generate::print_board;
use crate::{AppError, cli::SeedArgs};

const HELP: &str = "enter a word, or :shuffle, :words, :new, :quit";

/// Runs an interactive game, reading one word or command per line.
pub fn run<R, W>(
    args: &SeedArgs,
    dictionary: &Dictionary,
    config: GeneratorConfig,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let generator = PuzzleGenerator::new(dictionary).with_config(config);
    let store = SessionStore::new();
    let mut id = start(&store, &generator, args.seed(), out)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            ":quit" => break,
            ":shuffle" => {
                let board = store.with_game(id, |game| {
                    game.shuffle(&mut PuzzleSeed::random().rng());
                    *game.board()
                })?;
                print_board(&board, out)?;
            }
            ":words" => {
                let progress = store.progress(id)?;
                if progress.words.is_empty() {
                    writeln!(out, "no words yet")?;
                } else {
                    writeln!(out, "{}", progress.words.join(" → "))?;
                }
            }
            ":new" => {
                store.remove(id)?;
                id = start(&store, &generator, PuzzleSeed::random(), out)?;
            }
            command if command.starts_with(':') => writeln!(out, "{HELP}")?,
            word => {
                let result = store.submit(id, word, dictionary)?;
                writeln!(out, "{}", result.message)?;
                if !result.valid {
                    continue;
                }
                let progress = store.progress(id)?;
                if progress.solved {
                    let chain = store.chain(id)?;
                    writeln!(out, "solved in {} words!", progress.words.len())?;
                    writeln!(out, "generated from: {chain}")?;
                } else if let Some(letter) = progress.last_letter {
                    writeln!(
                        out,
                        "letters left: {}; next word starts with '{letter}'",
                        progress.remaining_letters
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn start<W>(
    store: &SessionStore,
    generator: &PuzzleGenerator<'_>,
    seed: PuzzleSeed,
    out: &mut W,
) -> Result<SessionId, AppError>
where
    W: Write,
{
    let puzzle = generator.generate_with_seed(seed)?;
    writeln!(out, "Board:")?;
    print_board(&puzzle.board, out)?;
    writeln!(out, "{HELP}")?;
    Ok(store.create(puzzle))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use letterbox_core::Alphabet;

    use super::*;

    fn play(input: &str) -> String {
        let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
        let args = SeedArgs {
            seed: None,
            phrase: Some("play".to_owned()),
        };
        let mut out = Vec::new();
        run(
            &args,
            &dictionary,
            GeneratorConfig::default(),
            Cursor::new(input),
            &mut out,
        )
        .expect("plays");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn test_solve() {
        let text = play("crown\n:words\nnight\n:quit\ncrown\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Board:");
        assert_eq!(lines[5], HELP);
        assert_eq!(lines[6], "word accepted");
        assert_eq!(lines[7], "letters left: GHIT; next word starts with 'N'");
        assert_eq!(lines[8], "CROWN");
        assert_eq!(lines[9], "word accepted");
        assert_eq!(lines[10], "solved in 2 words!");
        assert_eq!(lines[11], "generated from: CROWN → NIGHT");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_rejections_and_commands() {
        let text = play("ox\n\n:words\n:bogus\n:shuffle\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "word must contain at least 3 letters");
        assert_eq!(lines[7], "no words yet");
        assert_eq!(lines[8], HELP);
        // :shuffle prints the four sides
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_new_game_resets_progress() {
        let text = play("crown\n:new\n:words\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[8], "Board:");
        assert_eq!(lines[13], HELP);
        assert_eq!(lines[14], "no words yet");
    }
}
