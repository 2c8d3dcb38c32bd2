//! Menu dispatch tests with scripted console input

use tui_games::core::SimpleRng;
use tui_games::games::guess_the_number::{HIGHEST, LOWEST};
use tui_games::games::{Menu, MenuConfig};

fn run(menu: &mut Menu, commands: &str) -> String {
    let mut input = commands.as_bytes();
    let mut output = Vec::new();
    menu.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn seeded() -> Menu {
    Menu::with_builtin_games(MenuConfig {
        seed: Some(42),
        ..MenuConfig::default()
    })
}

#[test]
fn test_quit_right_away() {
    let text = run(&mut seeded(), "q\n");
    assert!(text.starts_with("What do you want to do?\n1: Play \"Guess the Number\"\n"));
    assert!(text.ends_with("q: Quit\n"));
}

#[test]
fn test_unknown_command_shows_menu_again() {
    let text = run(&mut seeded(), "z\nq\n");
    assert!(text.contains("Sorry I don't know that command!"));
    assert_eq!(text.matches("What do you want to do?").count(), 2);
}

#[test]
fn test_guess_the_number_from_the_menu() {
    let secret = SimpleRng::new(42).next_inclusive(LOWEST, HIGHEST);
    let text = run(&mut seeded(), &format!("1\n{secret}\nq\n"));
    assert!(text.contains("Guess the number between 0 and 100\n"));
    assert!(text.contains("Congrats, you won!\n"));
    assert_eq!(text.matches("What do you want to do?").count(), 2);
}

#[test]
fn test_hangman_from_the_menu() {
    let letters: String = ('a'..='z').map(|c| format!("{c}\n")).collect();
    let text = run(&mut seeded(), &format!("2\n{letters}q\n"));
    assert!(text.contains("The word was "));
    assert!(text.ends_with("q: Quit\n"));
}

#[test]
fn test_end_of_input_leaves_cleanly() {
    let text = run(&mut seeded(), "");
    assert_eq!(text.matches("What do you want to do?").count(), 1);
}

#[test]
fn test_only_the_first_character_of_a_command_line_counts() {
    let secret = SimpleRng::new(42).next_inclusive(LOWEST, HIGHEST);
    // "12" picks game 1; the '2' is not queued as a second command.
    let text = run(&mut seeded(), &format!("12\n{secret}\nquit\n"));
    assert_eq!(text.matches("Guess the number between").count(), 1);
    assert!(text.contains("Congrats, you won!\n"));
    assert_eq!(text.matches("What do you want to do?").count(), 2);
}
