//! Tests for the console front end.

use minimax_tictactoe::{Outcome, Player as Mark};
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;
use strictly_minimax::console::run_console;
use strictly_minimax::{FirstPlayer, GameConfig};

/// Write handle whose contents stay readable after it is moved away.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_bad_input_is_reprompted() {
    let prompts = SharedBuf::default();
    let mut out = Vec::new();
    let input = Cursor::new("abc\n9\n0\n0\n1\n3\n");

    let outcome = run_console(&GameConfig::default(), input, prompts.clone(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Won(Mark::X));

    let prompts = prompts.contents();
    assert_eq!(prompts.matches("Enter your move (0-8): ").count(), 6);
    assert_eq!(
        prompts
            .matches("Invalid input. Enter a number between 0 and 8.")
            .count(),
        2
    );
    assert_eq!(prompts.matches("Invalid move. Try again.").count(), 1);

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.starts_with("0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n"));
    assert!(transcript.contains("Minimax plays 4"));
    assert!(transcript.contains("Minimax plays 2"));
    assert!(transcript.contains("Minimax plays 6"));
    assert!(transcript.contains("Minimax wins!"));
    assert!(transcript.ends_with("Game over! Thanks for playing.\n"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut out = Vec::new();
    let err = run_console(
        &GameConfig::default(),
        Cursor::new(""),
        std::io::sink(),
        &mut out,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_engine_opens_when_configured() {
    let config = GameConfig::default().with_first_player(FirstPlayer::Engine);
    let mut out = Vec::new();
    let result = run_console(&config, Cursor::new(""), std::io::sink(), &mut out);

    assert!(result.is_err());
    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Minimax plays 0\nX|1|2"));
}

#[test]
fn test_engine_playing_o() {
    let config = GameConfig::default().with_engine_mark(Mark::O);
    let mut out = Vec::new();
    // Human X opens in the corner; the engine must take the center.
    let result = run_console(&config, Cursor::new("0\n"), std::io::sink(), &mut out);

    assert!(result.is_err());
    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Minimax plays 4\nX|1|2\n-+-+-\n3|O|5"));
}
