use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::error::Result;
use word_scramble::game_state::{Game, GameInterface, game_loop};
use word_scramble::logging::{LogTarget, init_logging, log_file_path};
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::{RootWordSource, user_start_words_path};

fn main() -> ExitCode {
    let cli = parse_cli();
    let log_target = if cli.plain {
        LogTarget::Stderr
    } else {
        LogTarget::File(log_file_path())
    };
    init_logging(cli.verbose, log_target);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("word-scramble: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = RootWordSource::resolve(cli.start_words_path.clone(), user_start_words_path());
    let pool = source.load()?;
    log::info!("Root word source {:?} gave {} words", source, pool.len());

    let dictionary = match &cli.dictionary_path {
        Some(path) => WordListDictionary::from_file(path, &cli.language)?,
        None => WordListDictionary::embedded(),
    };
    dictionary.ensure_language(&cli.language)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(pool, dictionary, rng, &cli.language);

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        play(&mut game, &mut interface);
    } else {
        let mut interface = TuiInterface::new()?;
        play(&mut game, &mut interface);
    }
    Ok(())
}

fn play<I: GameInterface>(game: &mut Game<WordListDictionary, StdRng>, interface: &mut I) {
    game_loop(game, interface);
    log::info!("Final score: {}", game.round().score());
}
