//! Match runner.
//!
//! The [`Orchestrator`] plays a series of rounds between two players without
//! any UI. Each round starts from a fresh [`State`]; Side::One opens the
//! first round and the opening side alternates after that.
//!
//! # Round Flow
//!
//! ```text
//! [New State] -> [Request move from active player] -> [Apply move]
//!   -> [Terminal?] --no--> [Request move] ...
//!                  --yes-> [Record result] -> [Notify players] -> [Next round]
//! ```
//!
//! Turn retention lives in [`State::try_apply`]; the orchestrator just asks
//! whoever is active next. Interactive players are not driven here: waiting
//! for input belongs to the surrounding event loop.

use crate::agent::player::{GameResult, Player};
use crate::config::MatchConfig;
use crate::game_repr::{Action, BoardError, Side, State};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub ties: u32,
    /// Boxes taken over all rounds, indexed by [`Side::index`]
    pub boxes: [usize; 2],
}

impl ScoreBoard {
    pub fn record(&mut self, result: GameResult, final_state: &State) {
        match result {
            GameResult::PlayerOneWins => self.player_one_wins += 1,
            GameResult::PlayerTwoWins => self.player_two_wins += 1,
            GameResult::Tie => self.ties += 1,
        }
        for side in [Side::One, Side::Two] {
            self.boxes[side.index()] += final_state.score(side);
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.ties
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::One => self.player_one_wins,
            Side::Two => self.player_two_wins,
        }
    }

    /// Side with more round wins, None when level
    pub fn leader(&self) -> Option<Side> {
        match self.player_one_wins.cmp(&self.player_two_wins) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Runs rounds between two players and keeps the score.
pub struct Orchestrator {
    dots: usize,
    rounds: u32,
    /// Indexed by [`Side::index`]
    players: [Box<dyn Player>; 2],
    state: State,
    round: u32,
    scoreboard: ScoreBoard,
}

impl Orchestrator {
    /// # Panics
    /// If `dots` is below 2.
    pub fn new(
        dots: usize,
        rounds: u32,
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
    ) -> Self {
        Self {
            dots,
            rounds,
            players: [player_one, player_two],
            state: State::with_first_player(dots, Self::starting_side(0)),
            round: 0,
            scoreboard: ScoreBoard::default(),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(
            config.dots,
            config.rounds,
            config.player_one.create_player("Player 1"),
            config.player_two.create_player("Player 2"),
        )
    }

    /// Side opening round `round` (0-based)
    pub fn starting_side(round: u32) -> Side {
        if round % 2 == 0 {
            Side::One
        } else {
            Side::Two
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    /// Rounds finished so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.round >= self.rounds
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    /// Ask the active player for its move.
    ///
    /// # Panics
    /// If the active player is interactive, or the match is already over.
    pub fn request_move(&mut self) -> Action {
        self.assert_in_progress();
        let side = self.state.active_player();
        let player = &mut self.players[side.index()];
        if player.is_interactive() {
            panic!(
                "{} ({}) is interactive and cannot be driven headless",
                player.name(),
                side
            );
        }
        player.decide(&self.state)
    }

    /// Apply `action` for the active player, finishing the round when the
    /// board fills up.
    ///
    /// Returns the round result when this move ended it. An illegal action
    /// leaves the state untouched.
    ///
    /// # Panics
    /// If every round has already been played.
    pub fn process_move(&mut self, action: Action) -> Result<Option<GameResult>, BoardError> {
        self.assert_in_progress();
        let mover = self.state.active_player();
        self.state = self.state.try_apply(action)?;
        log::trace!(
            "round {}: {} played {}",
            self.round + 1,
            self.players[mover.index()].name(),
            action
        );

        if self.state.is_terminal() {
            Ok(Some(self.finish_round()))
        } else {
            Ok(None)
        }
    }

    /// Request and apply one move
    pub fn step(&mut self) -> Result<Option<GameResult>, BoardError> {
        let action = self.request_move();
        self.process_move(action)
    }

    /// Play the current round to the end
    pub fn play_round(&mut self) -> Result<GameResult, BoardError> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Play every remaining round and return the final tally
    pub fn run(&mut self) -> Result<ScoreBoard, BoardError> {
        while !self.is_finished() {
            self.play_round()?;
        }
        log::info!(
            "match over after {} rounds: {} {} - {} {}, {} ties",
            self.scoreboard.rounds_played(),
            self.players[0].name(),
            self.scoreboard.player_one_wins,
            self.scoreboard.player_two_wins,
            self.players[1].name(),
            self.scoreboard.ties
        );
        Ok(self.scoreboard)
    }

    fn assert_in_progress(&self) {
        if self.is_finished() {
            panic!("match is over: all {} rounds have been played", self.rounds);
        }
    }

    fn finish_round(&mut self) -> GameResult {
        let result = GameResult::of(&self.state);
        self.scoreboard.record(result, &self.state);
        for player in self.players.iter_mut() {
            player.game_ended(result);
        }

        log::info!(
            "round {} finished: {} {} - {} {} ({:?})",
            self.round + 1,
            self.players[0].name(),
            self.state.score(Side::One),
            self.state.score(Side::Two),
            self.players[1].name(),
            result
        );

        self.round += 1;
        self.state = State::with_first_player(self.dots, Self::starting_side(self.round));
        result
    }
}
