use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use worddice::{BuilderInvalidReason, DiceBuilder, DicePool, FlowNetwork, Spelling};

/// Spell each word of WORD_FILE with the dice listed in DICE_FILE, using each die at most once per word.
#[derive(Parser, Debug)]
#[command(name = "worddice", version, long_about = None)]
struct Cli {
    /// One die per line; each character on the line is a face
    dice_file: PathBuf,
    /// One word per line
    word_file: PathBuf,
    /// Print the flow network built for each word before its result
    #[arg(long)]
    dump_graph: bool,
}

#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Unavailable { path: PathBuf, source: io::Error },
    #[error("invalid dice file: {}", describe_invalid(.0))]
    InvalidDice(Vec<BuilderInvalidReason>),
}

fn describe_invalid(reasons: &[BuilderInvalidReason]) -> String {
    reasons.iter()
        .map(|reason| match reason {
            // dice are numbered by line, from 0
            BuilderInvalidReason::EmptyDie(die) => format!("line {} is blank, but every die needs at least one letter", die + 1),
        })
        .join("; ")
}

fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Unavailable { path: path.to_owned(), source })?;
    Ok(contents.lines().map(str::to_owned).collect_vec())
}

/// Build the pool from one die per line. Blank lines at the end of the file are ignored; any other blank line is an error.
fn load_dice(lines: &[String]) -> Result<DicePool, InputError> {
    let used = lines.iter().rposition(|line| !line.is_empty()).map_or(0, |last| last + 1);
    if used < lines.len() {
        warn!("ignoring {} blank line(s) at the end of the dice file", lines.len() - used);
    }

    DiceBuilder::new()
        .add_dice(lines[..used].iter().map(String::as_str))
        .build()
        .map_err(|reasons| InputError::InvalidDice(reasons.clone()))
}

fn render(word: &str, spelling: &Spelling) -> String {
    match spelling {
        Spelling::Spelled(dice) => format!("{}: {}", dice.iter().join(","), word),
        Spelling::Unspellable => format!("Cannot spell {}", word),
    }
}

/// Everything printed for one word: the network dump when asked for, then the verdict.
fn report(dice: &DicePool, word: &str, spelling: &Spelling, dump_graph: bool) -> String {
    let mut out = String::new();
    if dump_graph {
        out.push_str(&format!("Graph for word: {}\n{}\n", word, FlowNetwork::build(dice, word)));
    }
    out.push_str(&render(word, spelling));
    out
}

fn run(cli: &Cli) -> Result<(), InputError> {
    let dice = load_dice(&read_lines(&cli.dice_file)?)?;
    let words = read_lines(&cli.word_file)?;
    info!("loaded {} dice and {} words", dice.len(), words.len());

    let mut spelled = 0;
    for word in &words {
        let spelling = dice.spell(word);
        if spelling.is_spelled() {
            spelled += 1;
        }
        println!("{}", report(&dice, word, &spelling, cli.dump_graph));
    }

    info!("spelled {} of {} words", spelled, words.len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::io::ErrorKind;

    use worddice::{BuilderInvalidReason, DiceBuilder, Spelling};

    use super::{load_dice, read_lines, render, report, InputError};

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn render_spelled() {
        assert_eq!(render("ab", &Spelling::Spelled(vec![1, 0])), "1,0: ab");
        assert_eq!(render("", &Spelling::Spelled(vec![])), ": ");
    }

    #[test]
    fn render_unspellable() {
        assert_eq!(render("zebra", &Spelling::Unspellable), "Cannot spell zebra");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let path = env::temp_dir().join("worddice-no-such-dir").join("dice.txt");
        let err = read_lines(&path).unwrap_err();

        let message = err.to_string();
        match err {
            InputError::Unavailable { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
                assert_eq!(message, format!("cannot read {}: {}", path.display(), source));
            }
            other => panic!("expected an unavailable file, got {:?}", other),
        }
    }

    #[test]
    fn blank_dice_line_is_rejected() {
        let err = load_dice(&lines(&["abc", "", "de"])).unwrap_err();

        assert_eq!(err.to_string(), "invalid dice file: line 2 is blank, but every die needs at least one letter");
        assert!(matches!(err, InputError::InvalidDice(ref reasons) if reasons == &vec![BuilderInvalidReason::EmptyDie(1)]));
    }

    #[test]
    fn trailing_blank_dice_lines_are_ignored() {
        let dice = load_dice(&lines(&["ab", "c", "", ""])).unwrap();
        assert_eq!(dice.len(), 2);

        assert_eq!(load_dice(&lines(&["", ""])).unwrap().len(), 0);
    }

    #[test]
    fn dice_lines_keep_order() {
        let dice = load_dice(&lines(&["xy", "a"])).unwrap();
        assert_eq!(dice.spell("ay"), Spelling::Spelled(vec![1, 0]));
    }

    #[test]
    fn report_with_graph_dump() {
        let dice = DiceBuilder::new().add_dice(["a", "b"]).build().unwrap();
        let spelling = dice.spell("ba");

        assert_eq!(report(&dice, "ba", &spelling, false), "1,0: ba");
        assert_eq!(report(&dice, "ba", &spelling, true), "Graph for word: ba
Node 0: SOURCE Edges to 1 2
Node 1: a Edges to 4
Node 2: b Edges to 3
Node 3: b Edges to 5
Node 4: a Edges to 5
Node 5: SINK Edges to

1,0: ba");
    }
}
