use std::io::BufRead;

use tokio::sync::mpsc;

use crate::error::TrendzError;
use crate::output;
use crate::screen::cancel::CancellationToken;
use crate::screen::state::{QuantityAction, ScreenState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptExit {
    /// `q` or end of input.
    Quit,
    /// The screen was torn down while waiting for input.
    Cancelled,
}

/// Read stdin on a plain thread. Tokio's stdin parks a blocking read that
/// the runtime waits on at shutdown, so Ctrl+C could not end the prompt.
pub fn spawn_stdin_reader() -> mpsc::Receiver<Result<String, std::io::Error>> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Apply `+`, `-`, `a` from `lines` until `q`, end of input, or cancellation.
pub async fn run_quantity_prompt(
    state: &mut ScreenState,
    lines: &mut mpsc::Receiver<Result<String, std::io::Error>>,
    cancel: &CancellationToken,
) -> Result<PromptExit, TrendzError> {
    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = cancel.cancelled() => return Ok(PromptExit::Cancelled),
        };
        let Some(line) = line else {
            return Ok(PromptExit::Quit);
        };
        let line = line?;

        if line.trim() == "q" {
            return Ok(PromptExit::Quit);
        }
        match QuantityAction::parse(&line) {
            Some(action) => {
                state.apply(action);
                println!("{}", output::format_quantity_line(state.quantity()));
            }
            None => eprintln!("Unknown input '{}'. Use +, -, a or q", line.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn applies_actions_until_quit() {
        let (tx, mut rx) = mpsc::channel(8);
        for input in ["+", "+", "-", "a", "+", "q", "+"] {
            tx.send(Ok(input.to_string())).await.unwrap();
        }
        let mut state = ScreenState::new();

        let exit = run_quantity_prompt(&mut state, &mut rx, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(exit, PromptExit::Quit);
        assert_eq!(state.quantity(), 3);
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(Ok("-".to_string())).await.unwrap();
        drop(tx);
        let mut state = ScreenState::new();

        let exit = run_quantity_prompt(&mut state, &mut rx, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(exit, PromptExit::Quit);
        assert_eq!(state.quantity(), 1);
    }

    #[tokio::test]
    async fn cancellation_ends_prompt_while_input_is_pending() {
        // Sender stays alive, so no line ever arrives.
        let (_tx, mut rx) = mpsc::channel::<Result<String, std::io::Error>>(8);
        let cancel = CancellationToken::new();
        let mut state = ScreenState::new();

        let canceller = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                cancel.cancel();
            })
        };

        let exit = tokio::time::timeout(
            Duration::from_secs(1),
            run_quantity_prompt(&mut state, &mut rx, &cancel),
        )
        .await
        .expect("prompt should stop on cancellation")
        .unwrap();

        assert_eq!(exit, PromptExit::Cancelled);
        canceller.await.unwrap();
    }

    #[tokio::test]
    async fn read_errors_surface_as_io_errors() {
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(Err(std::io::Error::other("stdin closed")))
            .await
            .unwrap();
        let mut state = ScreenState::new();

        let err = run_quantity_prompt(&mut state, &mut rx, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TrendzError::Io(_)));
    }
}
