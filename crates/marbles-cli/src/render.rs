//! Text renderer: draws the board on a character grid.
//!
//! Slot centres are snapped to a grid of `GRID_STEP` pixels. The pieces are
//! drawn on the left and the slot numbers on the right, so players can type
//! either a slot number or a coordinate.

use marbles_core::{GameState, Owner, TurnPhase};

/// Pixel distance between neighbouring grid columns/rows
const GRID_STEP: f64 = 30.0;

/// Characters per grid cell
const CELL_WIDTH: usize = 4;

const GAP: &str = "     ";

fn glyph(owner: Owner) -> char {
    match owner {
        Owner::PlayerOne => 'X',
        Owner::PlayerTwo => 'O',
        Owner::Empty => '.',
    }
}

/// Render the board followed by a one-line status
pub fn render_board(game: &GameState) -> String {
    let slots = game.board.slots();
    let mut out = String::new();

    if !slots.is_empty() {
        let min_x = slots.iter().map(|s| s.position.x).fold(f64::INFINITY, f64::min);
        let min_y = slots.iter().map(|s| s.position.y).fold(f64::INFINITY, f64::min);

        let cells: Vec<(usize, usize)> = slots
            .iter()
            .map(|s| {
                let row = ((s.position.y - min_y) / GRID_STEP).round() as usize;
                let col = ((s.position.x - min_x) / GRID_STEP).round() as usize;
                (row, col)
            })
            .collect();

        let rows = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        let blank = " ".repeat(CELL_WIDTH);

        let mut pieces = vec![vec![blank.clone(); cols]; rows];
        let mut labels = vec![vec![blank; cols]; rows];

        let selected = game.selected();
        let destinations = game.legal_destinations();

        for (i, (slot, &(row, col))) in slots.iter().zip(&cells).enumerate() {
            let mark = if destinations.contains(&i) {
                '*'
            } else {
                glyph(slot.owner)
            };

            pieces[row][col] = if selected == Some(i) {
                format!("[{}] ", mark)
            } else {
                format!(" {}  ", mark)
            };
            labels[row][col] = format!("{:>3} ", i);
        }

        for (piece_row, label_row) in pieces.iter().zip(&labels) {
            let line = format!("{}{}{}", piece_row.concat(), GAP, label_row.concat());
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out.push_str(&status_line(game));
    out
}

/// Whose turn it is and what input is expected
pub fn status_line(game: &GameState) -> String {
    let prompt = match game.phase {
        TurnPhase::AwaitingSelection => "your move (X): pick a piece".to_string(),
        TurnPhase::AwaitingDestination { selected } => {
            format!("slot {} selected: pick a destination (*)", selected)
        }
        TurnPhase::ComputerThinking => "computer (O) is thinking...".to_string(),
    };

    format!(
        "Turn {} | {} | difficulty: {}",
        game.turn_number, prompt, game.difficulty
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use marbles_core::GameAction;

    fn board_lines(rendered: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = rendered.lines().collect();
        lines.pop();
        lines
    }

    fn count_char(lines: &[&str], c: char) -> usize {
        lines.iter().map(|l| l.matches(c).count()).sum()
    }

    #[test]
    fn test_render_starting_position() {
        let game = GameState::default();
        let rendered = render_board(&game);
        let lines = board_lines(&rendered);

        assert_eq!(count_char(&lines, 'X'), 10);
        assert_eq!(count_char(&lines, 'O'), 10);
        assert_eq!(count_char(&lines, '.'), 10);
        assert_eq!(count_char(&lines, '*'), 0);

        // Apex slot sits alone on the first row
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["X", "0"]);
        assert!(rendered.ends_with("Turn 1 | your move (X): pick a piece | difficulty: medium"));
    }

    #[test]
    fn test_render_selection_and_destinations() {
        let mut game = GameState::default();
        game.apply_action(GameAction::Activate(7)).unwrap();

        let rendered = render_board(&game);
        let lines = board_lines(&rendered);

        assert_eq!(count_char(&lines, '['), 1);
        assert!(rendered.contains("[X]"));
        assert_eq!(count_char(&lines, '*'), 2);
        assert!(status_line(&game).contains("slot 7 selected"));
    }

    #[test]
    fn test_status_while_computer_thinks() {
        let mut game = GameState::default();
        game.apply_action(GameAction::Activate(6)).unwrap();
        game.apply_action(GameAction::Activate(10)).unwrap();

        assert_eq!(
            status_line(&game),
            "Turn 2 | computer (O) is thinking... | difficulty: medium"
        );
    }
}
