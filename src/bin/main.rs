use crossterm::style::Stylize;
use reading_core::ReadingEngine;
use std::io::{stdin, stdout, Write};

const PROGRESS_PATH: &str = "progress.bin";

fn main() {
    let mut engine = ReadingEngine::from_file_or_new(PROGRESS_PATH);

    println!("Read Better practice console. Type 'exit' to save and quit.");
    println!("---------------------------------------------------------------");

    loop {
        print_progress(&engine);

        print!("\nWord to practice> ");
        stdout().flush().unwrap();
        let word = read_line();
        match word.as_str() {
            "exit" => break,
            "" => continue,
            _ => {}
        }

        let syllables = engine.split_syllables(&word);
        if syllables.is_empty() {
            println!("{}", "That doesn't look like a word. Try again!".yellow());
            continue;
        }
        println!("Syllables: {}", syllables.join(" - ").cyan());

        let mut is_first_try = true;
        loop {
            print!("Say it (type what the recognizer heard, empty to skip)> ");
            stdout().flush().unwrap();
            let attempt = read_line();
            if attempt.is_empty() {
                println!("{}", "Skipped.".yellow());
                break;
            }

            let outcome = engine.record_attempt(&word, &attempt, is_first_try);
            if outcome.result.is_correct {
                println!(
                    "{} similarity {:.2}, +{} points",
                    "Great job!".green().bold(),
                    outcome.result.similarity,
                    outcome.points_earned
                );
                break;
            }
            println!(
                "{} similarity {:.2}, try again",
                "Not quite.".red(),
                outcome.result.similarity
            );
            is_first_try = false;
        }
    }

    println!("\nSaving progress...");
    if let Err(e) = engine.save_progress() {
        eprintln!("[ERROR] Could not save progress: {}", e);
    } else {
        println!("Progress saved to '{}'", PROGRESS_PATH);
    }
}

fn read_line() -> String {
    let mut input = String::new();
    stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn print_progress(engine: &ReadingEngine) {
    let p = &engine.progress;
    println!(
        "\nPoints: {}  Session streak: {}  Daily streak: {}",
        p.total_points.to_string().bold(),
        p.session_streak,
        p.daily_streak
    );
    if !p.badges.is_empty() {
        let names: Vec<&str> = p.badges.iter().map(|b| b.name.as_str()).collect();
        println!("Badges: {}", names.join(", ").magenta());
    }
}
