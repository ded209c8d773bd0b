use clap::Parser;
use shell_quiz::{Quiz, QuizOptions, data, logging};

/// Multiple-choice quiz on find expressions, checked inside a scratch directory tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();
    logging::init();

    let questions = match data::find_questions() {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };

    let quiz = Quiz::new(questions, QuizOptions::new("📂 FIND QUIZ"));
    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
