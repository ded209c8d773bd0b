use clap::Parser;
use shell_quiz::{Quiz, QuizOptions, data, logging};

/// Multiple-choice quiz on jq filters, checked by running them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();
    logging::init();

    let questions = match data::jq_questions() {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };

    let quiz = Quiz::new(questions, QuizOptions::new("📘 JQ QUIZ"));
    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
