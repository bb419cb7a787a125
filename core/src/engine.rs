use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states are final; only a rebuilt board starts a new `Playing` game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game session: the board, its mode, and where play stands.
#[derive(Clone, Debug)]
pub struct Game {
    mode: GameMode,
    placement: Placement,
    board: Board,
    state: GameState,
    opened_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
    stopwatch: Stopwatch,
}

impl Game {
    /// Starts a game on a randomly seeded board.
    pub fn new(mode: GameMode) -> Result<Self> {
        Self::with_seed(mode, Placement::default(), rand::random())
    }

    pub fn with_seed(mode: GameMode, placement: Placement, seed: u64) -> Result<Self> {
        log::debug!("New {:?} game, {}, seed {}", placement, mode, seed);
        let mut board = Board::new(mode);
        placement.place_mines(seed, &mut board, mode.total_mines())?;
        Self::from_board(mode, placement, board)
    }

    /// Fails unless the generator leaves exactly as many mines as `mode` declares.
    pub fn with_generator(mode: GameMode, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Board::new(mode);
        generator.place_mines(&mut board, mode.total_mines())?;
        Self::from_board(mode, Placement::default(), board)
    }

    pub fn from_layout(layout: FixedLayout) -> Result<Self> {
        Self::with_generator(layout.mode(), layout)
    }

    fn from_board(mode: GameMode, placement: Placement, mut board: Board) -> Result<Self> {
        let placed = board.mine_count();
        if placed != mode.total_mines() {
            log::warn!("{} declares {} mines, board holds {}", mode, mode.total_mines(), placed);
            return Err(GameError::MineCountMismatch {
                expected: mode.total_mines(),
                placed,
            });
        }

        compute_adjacency(&mut board);
        Ok(Self {
            mode,
            placement,
            board,
            state: GameState::Playing,
            opened_count: 0,
            flagged_count: 0,
            triggered_mine: None,
            stopwatch: Stopwatch::start(),
        })
    }

    /// Discards the board and deals a fresh random one in the same mode.
    /// The current game is kept if dealing fails.
    pub fn restart(&mut self) -> Result<()> {
        *self = Self::with_seed(self.mode, self.placement, rand::random())?;
        Ok(())
    }

    pub fn change_mode(&mut self, mode: GameMode) -> Result<()> {
        *self = Self::with_seed(mode, self.placement, rand::random())?;
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords).copied()
    }

    pub fn display_at(&self, coords: Coord2) -> Option<DisplayValue> {
        self.board.get(coords).map(Cell::display)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines not yet covered by a flag. Goes negative when over-flagged.
    pub fn remaining_mines(&self) -> isize {
        (self.mode.total_mines() as isize) - (self.flagged_count as isize)
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    /// Whether every non-mine cell is open, checked against the board itself.
    pub fn is_cleared(&self) -> bool {
        self.board
            .cells()
            .filter(|cell| !cell.is_mine())
            .all(|cell| cell.opened)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.ignore_when_finished("flag", coords) {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.board[coords];
        if cell.opened {
            return Ok(FlagOutcome::NoChange);
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::debug!("Flag at {:?} set to {}", coords, cell.flagged);
        Ok(FlagOutcome::Changed)
    }

    /// Opens a cell. Flagged and already opened cells are left untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.ignore_when_finished("reveal", coords) {
            return Ok(RevealOutcome::NoChange);
        }

        Ok(match open_cell(&mut self.board, coords) {
            OpenResult::Blocked => RevealOutcome::NoChange,
            OpenResult::Mine => {
                log::debug!("Hit mine at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.end_game(false);
                RevealOutcome::HitMine
            }
            OpenResult::Safe { opened } => {
                self.opened_count += opened;
                log::debug!("Opened {} cells from {:?}", opened, coords);
                if self.opened_count == self.mode.safe_cells() {
                    debug_assert!(self.is_cleared());
                    self.end_game(true);
                    RevealOutcome::Cleared
                } else {
                    RevealOutcome::Continue
                }
            }
        })
    }

    fn ignore_when_finished(&self, action: &str, coords: Coord2) -> bool {
        if self.state.is_finished() {
            log::debug!(
                "Ignoring {} at {:?}, game already {:?}",
                action,
                coords,
                self.state
            );
            true
        } else {
            false
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        self.stopwatch.stop();
        log::debug!(
            "Game {:?} after {}s",
            self.state,
            self.stopwatch.elapsed_secs()
        );

        for cell in self.board.cells_mut().filter(|cell| cell.is_mine()) {
            if won {
                cell.flagged = true;
            } else {
                cell.opened = true;
                cell.flagged = false;
            }
        }
        self.flagged_count = self.board.flagged_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_layout(FixedLayout::new(size, mines).unwrap()).unwrap()
    }

    fn opened_coords(game: &Game) -> Vec<Coord2> {
        game.board()
            .iter()
            .filter(|(_, cell)| cell.opened)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn new_game_starts_playing_with_all_mines() {
        let game = Game::with_seed(GameMode::EXPERT, Placement::Rejection, 1).unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.board().mine_count(), 99);
        assert_eq!(game.remaining_mines(), 99);
        assert!(game.board().cells().all(|cell| !cell.opened && !cell.flagged));
    }

    #[test]
    fn two_by_two_scenario_clears_on_last_safe_cell() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.reveal((0, 1)).unwrap(), RevealOutcome::Continue);
        assert_eq!(game.reveal((1, 0)).unwrap(), RevealOutcome::Continue);
        assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::Cleared);

        assert_eq!(game.state(), GameState::Won);
        for pos in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(game.display_at(pos), Some(DisplayValue::Digit(1)));
        }
    }

    #[test]
    fn hitting_mine_loses_and_exposes_mines_only() {
        let mut game = game((3, 3), &[(0, 0), (2, 2)]);
        game.reveal((0, 1)).unwrap();
        game.toggle_flag((2, 2)).unwrap();

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::HitMine);

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 0)));
        assert_eq!(opened_coords(&game), vec![(0, 0), (0, 1), (2, 2)]);
        assert!(game.board().cells().all(|cell| !cell.flagged));
        assert_eq!(game.display_at((2, 2)), Some(DisplayValue::Mine));
    }

    #[test]
    fn losing_keeps_flags_on_safe_cells() {
        let mut game = game((2, 3), &[(0, 0)]);
        game.toggle_flag((1, 2)).unwrap();

        game.reveal((0, 0)).unwrap();

        assert!(game.cell_at((1, 2)).unwrap().flagged);
        assert_eq!(game.remaining_mines(), 0);
    }

    #[test]
    fn winning_flags_every_mine() {
        let mut game = game((1, 3), &[(0, 0), (0, 2)]);

        assert_eq!(game.reveal((0, 1)).unwrap(), RevealOutcome::Cleared);

        assert_eq!(game.state(), GameState::Won);
        assert!(game.cell_at((0, 0)).unwrap().flagged);
        assert!(game.cell_at((0, 2)).unwrap().flagged);
        assert!(!game.cell_at((0, 0)).unwrap().opened);
        assert_eq!(game.remaining_mines(), 0);
    }

    #[test]
    fn cascade_can_win_in_one_move() {
        let mut game = game((3, 3), &[(2, 2)]);

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::Cleared);
        assert_eq!(game.display_at((0, 0)), Some(DisplayValue::Blank));
        assert_eq!(game.display_at((1, 1)), Some(DisplayValue::Digit(1)));
        assert_eq!(game.display_at((2, 2)), Some(DisplayValue::Flagged));
    }

    #[test]
    fn flag_counter_tracks_toggles_and_goes_negative() {
        let mut game = game((3, 3), &[(0, 0)]);

        game.toggle_flag((0, 0)).unwrap();
        assert_eq!(game.remaining_mines(), 0);
        game.toggle_flag((0, 1)).unwrap();
        assert_eq!(game.remaining_mines(), -1);
        game.toggle_flag((0, 1)).unwrap();
        assert_eq!(game.remaining_mines(), 0);
        game.toggle_flag((0, 0)).unwrap();
        assert_eq!(game.remaining_mines(), 1);
    }

    #[test]
    fn flagging_opened_cell_is_noop() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        let before = game.board().clone();

        assert_eq!(game.toggle_flag((1, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.board(), &before);
        assert_eq!(game.remaining_mines(), 1);
    }

    #[test]
    fn revealing_flagged_cell_is_noop() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.toggle_flag((0, 0)).unwrap();

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.state(), GameState::Playing);
        assert!(!game.cell_at((0, 0)).unwrap().opened);
    }

    #[test]
    fn second_reveal_changes_nothing() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        let before = game.board().clone();

        assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn finished_game_ignores_moves() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((0, 0)).unwrap();
        let before = game.board().clone();

        assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.toggle_flag((1, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.board(), &before);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn won_game_ignores_moves() {
        let mut game = game((1, 3), &[(0, 0)]);
        assert_eq!(game.reveal((0, 2)).unwrap(), RevealOutcome::Cleared);
        let before = game.board().clone();

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.toggle_flag((0, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.board(), &before);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.remaining_mines(), 0);
    }

    struct SkipMines;

    impl MineGenerator for SkipMines {
        fn place_mines(self, _board: &mut Board, _mines: CellCount) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn generator_placing_too_few_mines_is_rejected() {
        let mode = GameMode::new((1, 3), 1).unwrap();

        assert_eq!(
            Game::with_generator(mode, SkipMines).err(),
            Some(GameError::MineCountMismatch {
                expected: 1,
                placed: 0
            })
        );
    }

    #[test]
    fn out_of_range_moves_are_errors() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(game.toggle_flag((0, 2)), Err(GameError::InvalidCoords));
        assert_eq!(game.display_at((2, 2)), None);
    }

    #[test]
    fn restart_and_mode_change_rebuild_the_board() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((0, 0)).unwrap();

        game.restart().unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.size(), (2, 2));
        assert_eq!(game.board().mine_count(), 1);
        assert_eq!(game.board().opened_count(), 0);

        game.change_mode(GameMode::INTERMEDIATE).unwrap();
        assert_eq!(game.mode(), GameMode::INTERMEDIATE);
        assert_eq!(game.board().mine_count(), 40);
        assert_eq!(game.remaining_mines(), 40);
    }

    #[test]
    fn shuffle_placement_is_reproducible() {
        let a = Game::with_seed(GameMode::INTERMEDIATE, Placement::Shuffle, 9).unwrap();
        let b = Game::with_seed(GameMode::INTERMEDIATE, Placement::Shuffle, 9).unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.board().mine_count(), 40);
    }
}
