use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use wordle_onestep_solver::*;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the possible answer words, with one word on each line.
    #[arg(short = 'a', long)]
    answers_file: String,

    /// Path to a file that contains every valid guess word, one per line. This should be a
    /// superset of the answers file. Defaults to the answers file.
    #[arg(short = 'g', long)]
    guesses_file: Option<String>,

    /// The word to always open with.
    #[arg(long, default_value = "roate")]
    opening_word: String,

    /// Only guess words that could still be the answer (hard mode).
    #[arg(long)]
    hard_mode: bool,

    /// Directory where opening-cache files are read from and written to.
    #[arg(long, default_value = ".")]
    cache_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the answers file.
    Benchmark,
    /// Run a single game with the given word.
    Single { word: String },
    /// Run an interactive game against the solver.
    Interactive,
    /// Build and store the opening cache for the configured opening word.
    BuildCache,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    let answers = load_word_bank(&args.answers_file)?;
    let guesses = match &args.guesses_file {
        Some(guesses_file) => load_word_bank(guesses_file)?,
        None => answers.clone(),
    };
    println!(
        "There are {} possible answers and {} valid guesses.",
        answers.len(),
        guesses.len()
    );
    if !guesses.contains(&args.opening_word) {
        return Err(Box::new(SolverError::UnknownWord(Box::from(
            args.opening_word.as_str(),
        ))));
    }

    let cache_path = args
        .cache_dir
        .join(OpeningCache::default_file_name(&args.opening_word));

    match &args.command {
        Command::Benchmark => {
            let config = build_config(&args, &cache_path)?;
            run_benchmark(&config, &answers, &guesses)?;
        }
        Command::Single { word } => {
            let config = build_config(&args, &cache_path)?;
            play_single_game(word, config, &answers, &guesses)?;
        }
        Command::Interactive => {
            let config = build_config(&args, &cache_path)?;
            play_interactive_game(config, &answers, &guesses)?;
        }
        Command::BuildCache => {
            let cache = OpeningCache::build(&args.opening_word, &answers, &guesses)?;
            cache.store(&cache_path)?;
            println!(
                "Cached {} second guesses for opening word {} in {}.",
                cache.len(),
                args.opening_word,
                cache_path.display()
            );
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_word_bank(path: &str) -> io::Result<WordBank> {
    let words_reader = io::BufReader::new(File::open(path)?);
    WordBank::from_reader(words_reader)
}

fn build_config(args: &Args, cache_path: &Path) -> io::Result<SolverConfig> {
    let mut config = SolverConfig::new(&args.opening_word);
    if args.hard_mode {
        config.guess_from = GuessFrom::PossibleWords;
        // Hard mode always selects live, since its guess list depends on the pool.
        return Ok(config);
    }
    config.opening_cache = OpeningCache::load(cache_path)?;
    if config.opening_cache.is_none() {
        println!(
            "No cache found for opening word {}. This will result in slower solutions.",
            args.opening_word
        );
    }
    Ok(config)
}

fn run_benchmark(
    config: &SolverConfig,
    answers: &WordBank,
    guesses: &WordBank,
) -> Result<(), Box<dyn Error>> {
    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    for word in answers.iter() {
        let session = SolverSession::new(config.clone(), answers, guesses)?;
        match play_game(word, session)? {
            GameResult::Success(game_guesses) => {
                num_guesses_per_game.push(game_guesses.len() as u32)
            }
            GameResult::Failure(game_guesses) => {
                println!("Failed to guess {} in {} turns.", word, game_guesses.len());
                num_guesses_per_game.push(game_guesses.len() as u32);
            }
            GameResult::UnknownWord => unreachable!("benchmark words come from the answer list"),
        }
    }
    println!("Solved {} words. Results:", answers.len());

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!(
            "|{}|{}|",
            num_round,
            num_games_per_round.get(num_round).unwrap()
        );
    }

    let average: f64 = num_games_per_round
        .iter()
        .fold(0, |acc, (num_guesses, num_games)| {
            acc + (num_guesses * num_games)
        }) as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(
    word: &str,
    config: SolverConfig,
    answers: &WordBank,
    guesses: &WordBank,
) -> Result<(), Box<dyn Error>> {
    let session = SolverSession::new(config, answers, guesses)?;
    match play_game(word, session)? {
        GameResult::Success(game_guesses) => {
            println!("Solved it! It took me {} guesses.", game_guesses.len());
            for guess in game_guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(game_guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                game_guesses.len()
            );
            for guess in game_guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the answers list.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn play_interactive_game(
    config: SolverConfig,
    answers: &WordBank,
    guesses: &WordBank,
) -> Result<(), Box<dyn Error>> {
    let mut session = SolverSession::new(config, answers, guesses)?;
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\""
    );

    let mut round = 1;
    let mut guess = session.get_first_guess()?;
    loop {
        println!("I'm guessing: {}. How did I do?", guess);

        let mut results = read_results_for_guess(&guess);
        while results.is_err() {
            println!("{}", results.unwrap_err());
            results = read_results_for_guess(&guess);
        }

        match session.get_guess(&results.unwrap())? {
            TurnOutcome::Solved => {
                println!("I did it! It took me {} guesses.", round);
                return Ok(());
            }
            TurnOutcome::Failed => {
                println!("I couldn't guess it :(");
                return Ok(());
            }
            TurnOutcome::NextGuess(next_guess) => guess = next_guess,
        }
        round += 1;
    }
}

fn read_results_for_guess(guess: &str) -> io::Result<Vec<LetterResult>> {
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    let input = buffer.trim();

    if guess.chars().count() != input.chars().count() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    input
        .chars()
        .map(|letter| match letter {
            '.' => Ok(LetterResult::NotPresent),
            'y' => Ok(LetterResult::PresentNotHere),
            'g' => Ok(LetterResult::Correct),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Must enter only the letters '.', 'y', or 'g'. Try again.",
            )),
        })
        .collect::<io::Result<Vec<LetterResult>>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_parse_for_every_subcommand() {
        Args::command().debug_assert();

        let args = Args::parse_from(["main", "-a", "answers.txt", "single", "crate"]);
        assert!(matches!(args.command, Command::Single { word } if word == "crate"));

        for subcommand in ["benchmark", "interactive", "build-cache"] {
            Args::parse_from(["main", "-a", "answers.txt", subcommand]);
        }
    }
}
