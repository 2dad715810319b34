//! Basic example of using the crossword engine

use crossword_core::{Generator, GeneratorConfig, PlaySession, WordListEntry};

fn word_list() -> Vec<WordListEntry> {
    let pairs = [
        ("ALGORITHM", "Step-by-step procedure to solve a problem."),
        ("BINARY", "Number system with only 0s and 1s."),
        ("BUG", "Error in a program."),
        ("CACHE", "High-speed data storage between memory and CPU."),
        ("COMPILER", "Program that translates code into machine language."),
        ("CPU", "Brain of the computer (abbr.)."),
        ("DATABASE", "Organized collection of data."),
        ("DEBUG", "To find and remove errors in code."),
        ("ENCRYPTION", "Process of converting data into a code for security."),
        ("FIREWALL", "Security system that controls incoming and outgoing network traffic."),
        ("FUNCTION", "Block of code that performs a specific task."),
        ("HARDWARE", "The physical parts of a computer."),
        ("INPUT", "Data entered into a computer."),
        ("JAVA", "Popular programming language that starts with \"J\"."),
        ("KERNEL", "Core part of an operating system."),
        ("LOOP", "Structure for repeating a set of instructions."),
        ("NETWORK", "Collection of computers connected together."),
        ("OUTPUT", "Data produced by a computer."),
        ("PYTHON", "Programming language named after a snake."),
        ("SERVER", "Computer that provides data to other computers."),
    ];
    pairs
        .iter()
        .map(|(answer, clue)| WordListEntry {
            answer: answer.to_string(),
            clue: clue.to_string(),
        })
        .collect()
}

fn main() {
    // Generate a 20x20 puzzle, requiring every word to cross another
    println!("Generating a crossword...\n");
    let config = GeneratorConfig {
        strict: true,
        ..Default::default()
    };
    let generator = Generator::with_config(config);
    let puzzle = generator
        .generate(&word_list())
        .expect("word list is not empty");

    println!("Solution grid:");
    println!("{}", puzzle.grid());

    println!("Placed {} words", puzzle.placed().len());
    if !puzzle.dropped().is_empty() {
        let names: Vec<&str> = puzzle.dropped().iter().map(|w| w.answer.as_str()).collect();
        println!("Dropped (no legal placement): {}", names.join(", "));
    }

    println!("\nAcross:");
    for entry in puzzle.across() {
        println!("  {}. {} ({})", entry.number, entry.clue, entry.length);
    }
    println!("\nDown:");
    for entry in puzzle.down() {
        println!("  {}. {} ({})", entry.number, entry.clue, entry.length);
    }

    // Play a bit: take three hints, then check progress
    let mut session = PlaySession::with_seed(puzzle, 42);
    for _ in 0..3 {
        if let Some(pos) = session.hint() {
            println!(
                "\nHint: ({}, {}) is '{}'",
                pos.row,
                pos.col,
                session.entry(pos).unwrap()
            );
        }
    }
    let summary = session.check_all();
    println!(
        "\nProgress: {} correct, {} incorrect, {} blank",
        summary.correct, summary.incorrect, summary.blank
    );

    // Reveal everything
    session.reveal_all();
    println!("Revealed. Puzzle complete: {}", session.is_complete());
}
