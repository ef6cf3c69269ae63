use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
};

use crate::constants::ASCII_LETTER_A;
use crate::{GameState, Position, WallOrientation};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.board_size();

        let vertical_walls = self
            .walls()
            .iter()
            .filter(|w| w.orientation == WallOrientation::Vertical)
            .map(|w| w.anchor())
            .collect::<HashSet<_>>();
        let vertical_walls_splayed = vertical_walls
            .iter()
            .flat_map(|p| [*p, Position::new(p.row + 1, p.col)])
            .collect::<HashSet<_>>();

        let horizontal_walls = self
            .walls()
            .iter()
            .filter(|w| w.orientation == WallOrientation::Horizontal)
            .map(|w| w.anchor())
            .collect::<HashSet<_>>();
        let horizontal_walls_splayed = horizontal_walls
            .iter()
            .flat_map(|p| [*p, Position::new(p.row, p.col + 1)])
            .collect::<HashSet<_>>();

        writeln!(f)?;

        write!(f, "   +")?;
        for _ in 0..size {
            write!(f, "---+")?;
        }

        writeln!(f)?;

        for row in 0..size {
            write!(f, "{:>2} |", row + 1)?;

            for col in 0..size {
                let position = Position::new(row, col);
                let p = if self.player_1_pos() == position {
                    "1"
                } else if self.player_2_pos() == position {
                    "2"
                } else {
                    " "
                };
                let w = if vertical_walls_splayed.contains(&position) {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", p, w)?;
            }

            writeln!(f)?;

            write!(f, "   +")?;
            for col in 0..size {
                let position = Position::new(row, col);
                let w = if horizontal_walls_splayed.contains(&position) {
                    "■■■"
                } else {
                    "---"
                };
                let c = if horizontal_walls.contains(&position) {
                    "■"
                } else if vertical_walls.contains(&position) {
                    "█"
                } else {
                    "+"
                };
                write!(f, "{}{}", w, c)?;
            }

            writeln!(f)?;
        }

        write!(f, "    ")?;
        for col in 0..size {
            let col_letter = (ASCII_LETTER_A + col as u8) as char;
            write!(f, " {}  ", col_letter)?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "  P1: {}  P2: {}",
            self.player_1_walls_remaining(),
            self.player_2_walls_remaining()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{GameState, Wall};

    #[test]
    fn test_display_initial_board() {
        let output = GameState::new(3, 1).to_string();
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "   +---+---+---+");
        assert_eq!(lines[2], " 1 |   | 2 |   |");
        assert_eq!(lines[6], " 3 |   | 1 |   |");
        assert_eq!(lines[8], "     a   b   c  ");
        assert_eq!(lines[10], "  P1: 1  P2: 1");
    }

    #[test]
    fn test_display_walls() {
        let state = GameState::new(3, 1).with_walls([Wall::horizontal(0, 0), Wall::vertical(1, 0)]);
        let output = state.to_string();
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[3], "   +■■■■■■■+---+");
        assert_eq!(lines[4], " 2 |   █   |   |");
        assert_eq!(lines[5], "   +---█---+---+");
        assert_eq!(lines[6], " 3 |   █ 1 |   |");
    }
}
