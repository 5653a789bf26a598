//! The Speed state machine.

use std::time::{Duration, Instant};

use im::Vector;

use super::view::{StackView, TableView};
use crate::cards::{Card, Deck};
use crate::core::{
    GameConfig, HeldCard, IllegalDropPolicy, Intent, Move, MoveRecord, Phase, Player, PlayerId,
    PlayerMap,
};
use crate::error::{IllegalMove, SessionError, SetupError};
use crate::rules::{judge, GameResult};
use crate::zones::{CardStack, StackTarget};

/// One side of the table: who sits there, whether they are ready, and their
/// personal piles. Piles are dealt before anyone joins.
#[derive(Clone, Debug)]
struct Seat {
    player: Option<Player>,
    ready: bool,
    stacks: Vec<CardStack>,
}

impl Seat {
    fn new(config: &GameConfig) -> Self {
        Self {
            player: None,
            ready: false,
            stacks: (0..config.personal_stacks)
                .map(|_| CardStack::new(config.personal_stack_capacity))
                .collect(),
        }
    }

    fn cards_left(&self) -> usize {
        self.stacks.iter().map(CardStack::len).sum()
    }
}

/// A two-player game of Speed.
///
/// Owns every stack on the table and both holding slots. All operations run
/// to completion synchronously; share a game between threads through
/// [`SessionRegistry`](crate::sessions::SessionRegistry), which serializes
/// access behind a single lock.
///
/// ## Example
///
/// ```
/// use speed_engine::cards::Deck;
/// use speed_engine::core::{Phase, Player};
/// use speed_engine::games::speed::Game;
/// use speed_engine::zones::StackTarget;
///
/// let mut game = Game::new(Deck::standard(2)).unwrap();
/// let p1 = game.join(Player::new("Nobody")).unwrap();
/// let p2 = game.join(Player::new("Somebody")).unwrap();
/// game.ready(p1).unwrap();
/// game.ready(p2).unwrap();
/// game.start().unwrap();
/// assert_eq!(game.phase(), Phase::Play);
///
/// let grabbed = game.grab(p1, StackTarget::Own(0));
/// assert!(grabbed.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    seats: PlayerMap<Seat>,
    center: Vec<CardStack>,
    side: Vec<CardStack>,
    /// Undealt remainder of the deck.
    reserve: Deck,
    phase: Phase,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    result: Option<GameResult>,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Deal a standard table from `deck`.
    pub fn new(deck: Deck) -> Result<Self, SetupError> {
        Self::with_config(GameConfig::default(), deck)
    }

    /// Deal a table laid out by `config` from `deck`.
    ///
    /// Personal piles are filled one index at a time, alternating between
    /// the seats (P1 then P2) for each card. Then every center stack gets
    /// `center_cards` cards. Side stacks start empty and whatever is left
    /// of the deck is kept as the reserve.
    pub fn with_config(config: GameConfig, mut deck: Deck) -> Result<Self, SetupError> {
        config.validate()?;
        if deck.remaining() < config.cards_required() {
            log::warn!(
                "deck has {} cards, table needs {}",
                deck.remaining(),
                config.cards_required()
            );
        }

        let mut seats = PlayerMap::new(|_| Seat::new(&config));
        for index in 0..config.personal_stacks {
            for _ in 0..config.personal_stack_capacity {
                for (_, seat) in seats.iter_mut() {
                    seat.stacks[index].push(deck.deal_next()?)?;
                }
            }
        }

        let center_capacity = deck.len().max(config.center_cards);
        let mut center: Vec<CardStack> = (0..config.center_stacks)
            .map(|_| CardStack::new(center_capacity))
            .collect();
        for stack in &mut center {
            for _ in 0..config.center_cards {
                stack.push(deck.deal_next()?)?;
            }
        }

        let side = (0..config.side_stacks)
            .map(|_| CardStack::new(config.side_stack_capacity))
            .collect();

        log::debug!(
            "dealt {} cards, {} left in reserve",
            deck.len() - deck.remaining(),
            deck.remaining()
        );

        Ok(Self {
            config,
            seats,
            center,
            side,
            reserve: deck,
            phase: Phase::PreGame,
            started_at: None,
            finished_at: None,
            result: None,
            history: Vector::new(),
        })
    }

    // === Session ===

    /// Seat a player. The first join gets P1, the second P2.
    pub fn join(&mut self, player: Player) -> Result<PlayerId, SessionError> {
        let (id, seat) = self
            .seats
            .iter_mut()
            .find(|(_, seat)| seat.player.is_none())
            .ok_or(SessionError::NoPlayerSlotsAvailable)?;

        log::info!("{} joined as {}", player.name(), id);
        seat.player = Some(player);
        Ok(id)
    }

    /// Mark a seated player as ready.
    pub fn ready(&mut self, id: PlayerId) -> Result<(), SessionError> {
        let seat = self
            .seats
            .get_mut(id)
            .filter(|seat| seat.player.is_some())
            .ok_or(SessionError::PlayerNotPresent(id))?;

        seat.ready = true;
        Ok(())
    }

    /// Move from `PreGame` to `Play` once both players are ready.
    ///
    /// Succeeds exactly once.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if !self.seats.iter().all(|(_, seat)| seat.ready) {
            return Err(SessionError::PlayersNotReady);
        }
        if self.started_at.is_some() {
            return Err(SessionError::GameAlreadyStarted);
        }

        self.started_at = Some(Instant::now());
        self.advance(Phase::Play);
        Ok(())
    }

    /// Time since `start()`.
    ///
    /// Zero before the game starts; stops advancing once the game is over.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => finished.duration_since(started),
            (Some(started), None) => started.elapsed(),
            (None, _) => Duration::ZERO,
        }
    }

    // === Play ===

    /// Dispatch an intent to `grab`, `drop` or `discard`.
    pub fn apply(&mut self, id: PlayerId, intent: Intent) -> Result<Move, IllegalMove> {
        match intent {
            Intent::Grab(target) => self.grab(id, target),
            Intent::Drop(target) => self.drop(id, target),
            Intent::Discard => self.discard(id),
        }
    }

    /// Pick up the top card of one of the player's own piles.
    ///
    /// Only `StackTarget::Own` is grabbable. A failed grab changes nothing.
    pub fn grab(&mut self, id: PlayerId, target: StackTarget) -> Result<Move, IllegalMove> {
        self.ensure_play()?;
        log::debug!("grab from {} at {}", id, target);

        if let Some(card) = self.player_ref(id)?.holding() {
            return Err(IllegalMove::AlreadyHolding(card));
        }
        self.ensure_exists(id, target)?;

        let StackTarget::Own(index) = target else {
            return Err(IllegalMove::NotGrabbable(target));
        };

        let seat = &mut self.seats[id];
        let card = seat.stacks[index]
            .pop()
            .map_err(|_| IllegalMove::StackEmpty(target))?;
        if let Some(player) = seat.player.as_mut() {
            player.grab_into(card, index)?;
        }

        log::debug!("{} is now holding {}", id, card);
        let outcome = Move::Grabbed { card, from: target };
        self.record(id, Intent::Grab(target), outcome);
        Ok(outcome)
    }

    /// Put the held card on a center stack.
    ///
    /// A target that does not exist is refused before anything moves, so
    /// the card stays in hand. Otherwise the holding slot is emptied first,
    /// whatever the outcome. A legal drop needs the held card to be next to
    /// the target's top card. On a rejected drop the card is lost or handed
    /// back according to [`IllegalDropPolicy`], and the error says which
    /// (see [`IllegalMove::lost_card`]). Win conditions are re-evaluated
    /// after every attempt, including a drop with empty hands.
    pub fn drop(&mut self, id: PlayerId, target: StackTarget) -> Result<Move, IllegalMove> {
        self.ensure_play()?;
        log::debug!("drop from {} onto {}", id, target);

        self.player_ref(id)?;
        if let Err(err) = self.ensure_exists(id, target) {
            self.check_win_conditions();
            return Err(err);
        }

        let Some(held) = self.player_mut(id)?.release_held() else {
            self.check_win_conditions();
            return Err(IllegalMove::NotHolding);
        };

        let outcome = match self.place(held.card, target) {
            Ok(()) => {
                log::debug!("{} placed {} on {}", id, held.card, target);
                let outcome = Move::Placed {
                    card: held.card,
                    onto: target,
                };
                self.record(id, Intent::Drop(target), outcome);
                Ok(outcome)
            }
            Err(err) => {
                self.reject_drop(id, target, held)?;
                Err(err)
            }
        };

        self.check_win_conditions();
        outcome
    }

    /// Let go of the held card without placing it.
    ///
    /// Under `IllegalDropPolicy::Discard` the card is lost; under `Return`
    /// it goes back on the pile it was grabbed from. With empty hands this
    /// is a no-op.
    pub fn discard(&mut self, id: PlayerId) -> Result<Move, IllegalMove> {
        self.ensure_play()?;

        let Some(held) = self.player_mut(id)?.release_held() else {
            return Ok(Move::Discarded(None));
        };

        let outcome = match self.config.illegal_drop {
            IllegalDropPolicy::Discard => Move::Discarded(Some(held.card)),
            IllegalDropPolicy::Return => match self.seats[id].stacks[held.origin].push(held.card) {
                Ok(()) => Move::Returned {
                    card: held.card,
                    to: StackTarget::Own(held.origin),
                },
                Err(err) => {
                    log::warn!("could not return {} to its pile: {}", held.card, err);
                    Move::Discarded(Some(held.card))
                }
            },
        };

        log::debug!("{} let go of {}", id, held.card);
        self.record(id, Intent::Discard, outcome);
        Ok(outcome)
    }

    /// Check both players' piles and end the game if either is empty.
    ///
    /// Only has an effect during `Play`. Returns the result once the game is
    /// over.
    pub fn check_win_conditions(&mut self) -> Option<GameResult> {
        if self.phase != Phase::Play {
            return self.result;
        }

        let cards_left = PlayerMap::new(|id| self.cards_in_play(id));
        log::debug!(
            "cards left: {} {}, {} {}",
            PlayerId::P1,
            cards_left[PlayerId::P1],
            PlayerId::P2,
            cards_left[PlayerId::P2]
        );

        if let Some(result) = judge(&cards_left) {
            match result {
                GameResult::Winner(winner) => log::info!("{} won", winner),
                GameResult::Draw => log::info!("game drawn"),
            }
            self.finished_at = Some(Instant::now());
            self.advance(Phase::PostGame);
            self.result = Some(result);
        }
        self.result
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.seats.get(id).and_then(|seat| seat.player.as_ref())
    }

    #[must_use]
    pub fn is_ready(&self, id: PlayerId) -> bool {
        self.seats.get(id).is_some_and(|seat| seat.ready)
    }

    /// Cards left in a seat's personal piles.
    #[must_use]
    pub fn cards_left(&self, id: PlayerId) -> usize {
        self.seats.get(id).map_or(0, Seat::cards_left)
    }

    /// Look up a stack from `id`'s side of the table.
    #[must_use]
    pub fn stack(&self, id: PlayerId, target: StackTarget) -> Option<&CardStack> {
        match target {
            StackTarget::Center(i) => self.center.get(i),
            StackTarget::Side(i) => self.side.get(i),
            StackTarget::Own(i) => self.seats.get(id)?.stacks.get(i),
            StackTarget::Opponent(i) => self.seats.get(id.opponent())?.stacks.get(i),
        }
    }

    /// The undealt remainder of the deck.
    #[must_use]
    pub fn reserve(&self) -> &Deck {
        &self.reserve
    }

    /// Moves that changed the table, in order.
    ///
    /// A card lost to a rejected drop shows up as `Move::Discarded` under
    /// the `Drop` intent. Rejections that change nothing are not recorded.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Snapshot of the table from `id`'s side, or `None` for an unknown seat.
    #[must_use]
    pub fn view(&self, id: PlayerId) -> Option<TableView> {
        let seat = self.seats.get(id)?;
        let opponent = self.seats.get(id.opponent())?;
        let views = |stacks: &[CardStack]| -> Vec<StackView> {
            stacks.iter().map(StackView::from).collect()
        };

        Some(TableView {
            viewer: id,
            phase: self.phase,
            holding: seat.player.as_ref().and_then(Player::holding),
            own: views(&seat.stacks),
            opponent: views(&opponent.stacks),
            center: views(&self.center),
            side: views(&self.side),
            result: self.result,
            elapsed_ms: u64::try_from(self.duration().as_millis()).unwrap_or(u64::MAX),
        })
    }

    // === Internals ===

    fn advance(&mut self, next: Phase) {
        debug_assert!(self.phase.can_advance_to(next));
        log::info!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Cards a seat still has to get rid of. A card kept in hand after a
    /// rejected drop is still in play under the return policy.
    fn cards_in_play(&self, id: PlayerId) -> usize {
        let seat = &self.seats[id];
        let held = match self.config.illegal_drop {
            IllegalDropPolicy::Discard => 0,
            IllegalDropPolicy::Return => seat
                .player
                .as_ref()
                .map_or(0, |player| usize::from(player.is_holding())),
        };
        seat.cards_left() + held
    }

    fn ensure_play(&self) -> Result<(), IllegalMove> {
        if self.phase == Phase::Play {
            Ok(())
        } else {
            Err(IllegalMove::NotInPlay(self.phase))
        }
    }

    fn ensure_exists(&self, id: PlayerId, target: StackTarget) -> Result<(), IllegalMove> {
        if self.stack(id, target).is_some() {
            Ok(())
        } else {
            log::warn!("{} addressed missing {}", id, target);
            Err(IllegalMove::NoSuchStack(target))
        }
    }

    fn player_ref(&self, id: PlayerId) -> Result<&Player, IllegalMove> {
        self.player(id).ok_or(IllegalMove::PlayerNotPresent(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, IllegalMove> {
        self.seats
            .get_mut(id)
            .and_then(|seat| seat.player.as_mut())
            .ok_or(IllegalMove::PlayerNotPresent(id))
    }

    /// Try to put `card` on `target`. Leaves every stack untouched on error.
    fn place(&mut self, card: Card, target: StackTarget) -> Result<(), IllegalMove> {
        let discarded = self.config.illegal_drop == IllegalDropPolicy::Discard;

        let StackTarget::Center(index) = target else {
            return Err(IllegalMove::NotDroppable { target, discarded });
        };
        let stack = self
            .center
            .get_mut(index)
            .ok_or(IllegalMove::NoSuchStack(target))?;

        let top = stack
            .top()
            .map_err(|_| IllegalMove::CenterEmpty { target, discarded })?;
        if !card.is_next_to(top) {
            return Err(IllegalMove::NotAdjacent {
                card,
                top,
                discarded,
            });
        }
        stack
            .push(card)
            .map_err(|_| IllegalMove::NotDroppable { target, discarded })
    }

    /// Apply the illegal-drop policy to a card whose drop was rejected.
    fn reject_drop(
        &mut self,
        id: PlayerId,
        target: StackTarget,
        held: HeldCard,
    ) -> Result<(), IllegalMove> {
        match self.config.illegal_drop {
            IllegalDropPolicy::Discard => {
                log::debug!("{} lost {}", id, held.card);
                self.record(id, Intent::Drop(target), Move::Discarded(Some(held.card)));
                Ok(())
            }
            IllegalDropPolicy::Return => {
                self.player_mut(id)?.grab_into(held.card, held.origin)?;
                Ok(())
            }
        }
    }

    fn record(&mut self, id: PlayerId, intent: Intent, outcome: Move) {
        let sequence = self.history.len();
        self.history
            .push_back(MoveRecord::new(id, intent, outcome, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StackError;

    fn card(v: u8) -> Card {
        Card::numbered(v).unwrap()
    }

    fn started(config: GameConfig) -> (Game, PlayerId, PlayerId) {
        let deck = Deck::standard(config.wildcards);
        let mut game = Game::with_config(config, deck).unwrap();
        let p1 = game.join(Player::new("Nobody")).unwrap();
        let p2 = game.join(Player::new("Somebody")).unwrap();
        game.ready(p1).unwrap();
        game.ready(p2).unwrap();
        game.start().unwrap();
        (game, p1, p2)
    }

    /// Replace a pile's contents. Test-only table rigging.
    fn rig(game: &mut Game, id: PlayerId, index: usize, cards: &[Card]) {
        let capacity = game.seats[id].stacks[index].capacity();
        let mut stack = CardStack::new(capacity);
        for &c in cards {
            stack.push(c).unwrap();
        }
        game.seats[id].stacks[index] = stack;
    }

    fn rig_center(game: &mut Game, index: usize, top: Card) {
        let capacity = game.center[index].capacity();
        let mut stack = CardStack::new(capacity);
        stack.push(top).unwrap();
        game.center[index] = stack;
    }

    #[test]
    fn test_deal_layout() {
        let game = Game::new(Deck::standard(2)).unwrap();

        for id in PlayerId::all() {
            assert_eq!(game.cards_left(id), 24);
            for i in 0..6 {
                assert_eq!(game.stack(id, StackTarget::Own(i)).unwrap().len(), 4);
            }
        }
        assert_eq!(game.stack(PlayerId::P1, StackTarget::Center(0)).unwrap().len(), 1);
        assert_eq!(game.stack(PlayerId::P1, StackTarget::Center(1)).unwrap().len(), 1);
        assert!(game.stack(PlayerId::P1, StackTarget::Side(0)).unwrap().is_empty());
        assert_eq!(game.reserve().remaining(), 4);
        assert_eq!(game.phase(), Phase::PreGame);
    }

    #[test]
    fn test_deal_alternates_between_seats() {
        let game = Game::new(Deck::standard(2)).unwrap();

        // Fixed order: ranks 1..13 four times each. Pile 0 of each seat takes
        // the first eight cards alternately, so both hold two 1s and two 2s.
        let p1_pile = game.stack(PlayerId::P1, StackTarget::Own(0)).unwrap();
        let p2_pile = game.stack(PlayerId::P2, StackTarget::Own(0)).unwrap();
        assert_eq!(p1_pile.as_slice(), &[card(1), card(1), card(2), card(2)]);
        assert_eq!(p2_pile.as_slice(), &[card(1), card(1), card(2), card(2)]);

        // 48 cards cover ranks 1..12; the center stacks get the first 13s.
        assert_eq!(game.stack(PlayerId::P1, StackTarget::Center(0)).unwrap().top(), Ok(card(13)));
        assert_eq!(game.reserve().undealt(), &[card(13), card(13), Card::wildcard(), Card::wildcard()]);
    }

    #[test]
    fn test_deal_from_short_deck_fails() {
        let deck = Deck::from_cards(vec![card(1); 10]);
        assert_eq!(
            Game::new(deck).unwrap_err(),
            SetupError::Deck(crate::error::DeckError::Exhausted)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_center_stacks(0, 1);
        assert!(matches!(
            Game::with_config(config, Deck::standard(2)),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn test_join_assigns_seats_in_order() {
        let mut game = Game::new(Deck::standard(2)).unwrap();

        assert_eq!(game.join(Player::new("a")), Ok(PlayerId::P1));
        assert_eq!(game.join(Player::new("b")), Ok(PlayerId::P2));
        assert_eq!(
            game.join(Player::new("c")),
            Err(SessionError::NoPlayerSlotsAvailable)
        );
        assert_eq!(game.player(PlayerId::P1).unwrap().name(), "a");
        assert_eq!(game.player(PlayerId::P2).unwrap().name(), "b");
    }

    #[test]
    fn test_ready_requires_seated_player() {
        let mut game = Game::new(Deck::standard(2)).unwrap();
        assert_eq!(
            game.ready(PlayerId::P1),
            Err(SessionError::PlayerNotPresent(PlayerId::P1))
        );

        game.join(Player::new("a")).unwrap();
        assert_eq!(game.ready(PlayerId::P1), Ok(()));
        assert!(game.is_ready(PlayerId::P1));
        assert_eq!(
            game.ready(PlayerId::P2),
            Err(SessionError::PlayerNotPresent(PlayerId::P2))
        );
        assert_eq!(
            game.ready(PlayerId::new(9)),
            Err(SessionError::PlayerNotPresent(PlayerId::new(9)))
        );
    }

    #[test]
    fn test_start_requires_both_ready_and_succeeds_once() {
        let mut game = Game::new(Deck::standard(2)).unwrap();
        assert_eq!(game.start(), Err(SessionError::PlayersNotReady));

        let p1 = game.join(Player::new("a")).unwrap();
        let p2 = game.join(Player::new("b")).unwrap();
        game.ready(p1).unwrap();
        assert_eq!(game.start(), Err(SessionError::PlayersNotReady));
        assert_eq!(game.phase(), Phase::PreGame);

        game.ready(p2).unwrap();
        assert_eq!(game.start(), Ok(()));
        assert_eq!(game.phase(), Phase::Play);
        assert_eq!(game.start(), Err(SessionError::GameAlreadyStarted));
        assert_eq!(game.phase(), Phase::Play);
    }

    #[test]
    fn test_duration() {
        let mut game = Game::new(Deck::standard(2)).unwrap();
        assert_eq!(game.duration(), Duration::ZERO);

        let p1 = game.join(Player::new("a")).unwrap();
        let p2 = game.join(Player::new("b")).unwrap();
        game.ready(p1).unwrap();
        game.ready(p2).unwrap();
        game.start().unwrap();

        let first = game.duration();
        assert!(game.duration() >= first);
    }

    #[test]
    fn test_intents_ignored_before_start() {
        let mut game = Game::new(Deck::standard(2)).unwrap();
        let p1 = game.join(Player::new("a")).unwrap();

        assert_eq!(
            game.grab(p1, StackTarget::Own(0)),
            Err(IllegalMove::NotInPlay(Phase::PreGame))
        );
        assert_eq!(game.cards_left(p1), 24);
    }

    #[test]
    fn test_grab_takes_top_of_own_pile() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(9), card(5)]);

        let outcome = game.grab(p1, StackTarget::Own(0)).unwrap();
        assert_eq!(
            outcome,
            Move::Grabbed {
                card: card(5),
                from: StackTarget::Own(0)
            }
        );
        assert_eq!(game.player(p1).unwrap().holding(), Some(card(5)));
        assert_eq!(game.stack(p1, StackTarget::Own(0)).unwrap().len(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_grab_while_holding_is_rejected() {
        let (mut game, p1, _) = started(GameConfig::default());
        game.grab(p1, StackTarget::Own(0)).unwrap();
        let left = game.cards_left(p1);

        assert!(matches!(
            game.grab(p1, StackTarget::Own(1)),
            Err(IllegalMove::AlreadyHolding(_))
        ));
        assert_eq!(game.cards_left(p1), left);
    }

    #[test]
    fn test_grab_from_empty_pile() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 2, &[]);

        assert_eq!(
            game.grab(p1, StackTarget::Own(2)),
            Err(IllegalMove::StackEmpty(StackTarget::Own(2)))
        );
        assert!(!game.player(p1).unwrap().is_holding());
    }

    #[test]
    fn test_grab_only_from_own_piles() {
        let (mut game, p1, _) = started(GameConfig::default());

        for target in [
            StackTarget::Center(0),
            StackTarget::Side(1),
            StackTarget::Opponent(3),
        ] {
            assert_eq!(game.grab(p1, target), Err(IllegalMove::NotGrabbable(target)));
        }
        assert_eq!(game.cards_left(PlayerId::P2), 24);
    }

    #[test]
    fn test_grab_out_of_range() {
        let (mut game, p1, _) = started(GameConfig::default());

        assert_eq!(
            game.grab(p1, StackTarget::Own(6)),
            Err(IllegalMove::NoSuchStack(StackTarget::Own(6)))
        );
        assert_eq!(
            game.grab(p1, StackTarget::Center(2)),
            Err(IllegalMove::NoSuchStack(StackTarget::Center(2)))
        );
    }

    #[test]
    fn test_grab_uses_acting_players_piles() {
        let (mut game, _, p2) = started(GameConfig::default());
        rig(&mut game, p2, 0, &[card(7)]);

        game.grab(p2, StackTarget::Own(0)).unwrap();
        assert_eq!(game.player(p2).unwrap().holding(), Some(card(7)));
        assert_eq!(game.cards_left(PlayerId::P1), 24);
        assert_eq!(game.cards_left(p2), 20);
    }

    #[test]
    fn test_legal_drop_moves_card_to_center() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(5)]);
        rig_center(&mut game, 0, card(4));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        let outcome = game.drop(p1, StackTarget::Center(0)).unwrap();

        assert_eq!(
            outcome,
            Move::Placed {
                card: card(5),
                onto: StackTarget::Center(0)
            }
        );
        assert_eq!(game.stack(p1, StackTarget::Center(0)).unwrap().top(), Ok(card(5)));
        assert!(!game.player(p1).unwrap().is_holding());
    }

    #[test]
    fn test_drop_wraps_around() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(1)]);
        rig_center(&mut game, 1, card(13));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        assert!(game.drop(p1, StackTarget::Center(1)).is_ok());
    }

    #[test]
    fn test_wildcard_drops_anywhere() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[Card::wildcard()]);
        rig_center(&mut game, 0, card(8));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        assert!(game.drop(p1, StackTarget::Center(0)).is_ok());

        rig(&mut game, p1, 1, &[card(3)]);
        game.grab(p1, StackTarget::Own(1)).unwrap();
        assert!(game.drop(p1, StackTarget::Center(0)).is_ok());
    }

    #[test]
    fn test_illegal_drop_discards_by_default() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(5)]);
        rig_center(&mut game, 0, card(8));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        assert_eq!(
            game.drop(p1, StackTarget::Center(0)),
            Err(IllegalMove::NotAdjacent {
                card: card(5),
                top: card(8),
                discarded: true
            })
        );
        assert!(!game.player(p1).unwrap().is_holding());
        assert_eq!(game.stack(p1, StackTarget::Center(0)).unwrap().len(), 1);
        assert_eq!(game.stack(p1, StackTarget::Own(0)).unwrap().len(), 0);

        let outcomes: Vec<Move> = game.history().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes[1], Move::Discarded(Some(card(5))));
    }

    #[test]
    fn test_illegal_drop_returns_to_hand_under_return_policy() {
        let config = GameConfig::default().with_illegal_drop(IllegalDropPolicy::Return);
        let (mut game, p1, _) = started(config);
        rig(&mut game, p1, 0, &[card(5)]);
        rig_center(&mut game, 0, card(8));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        assert_eq!(
            game.drop(p1, StackTarget::Center(0)),
            Err(IllegalMove::NotAdjacent {
                card: card(5),
                top: card(8),
                discarded: false
            })
        );
        assert_eq!(game.player(p1).unwrap().holding(), Some(card(5)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_drop_onto_non_center_is_rejected() {
        let config = GameConfig::default().with_illegal_drop(IllegalDropPolicy::Return);
        let (mut game, p1, _) = started(config);
        game.grab(p1, StackTarget::Own(0)).unwrap();

        for target in [StackTarget::Side(0), StackTarget::Own(1), StackTarget::Opponent(0)] {
            let err = game.drop(p1, target).unwrap_err();
            assert_eq!(err, IllegalMove::NotDroppable { target, discarded: false });
            assert!(!err.lost_card());
            assert!(game.player(p1).unwrap().is_holding());
        }
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_drop_onto_non_center_loses_card_by_default() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(7)]);
        game.grab(p1, StackTarget::Own(0)).unwrap();

        let target = StackTarget::Side(1);
        let err = game.drop(p1, target).unwrap_err();
        assert_eq!(err, IllegalMove::NotDroppable { target, discarded: true });
        assert!(err.lost_card());
        assert!(!game.player(p1).unwrap().is_holding());

        let last = game.history().last().unwrap();
        assert_eq!(last.intent, Intent::Drop(target));
        assert_eq!(last.outcome, Move::Discarded(Some(card(7))));
        assert_eq!(last.sequence, 1);
    }

    #[test]
    fn test_drop_onto_missing_stack_keeps_card() {
        for policy in [IllegalDropPolicy::Discard, IllegalDropPolicy::Return] {
            let config = GameConfig::default().with_illegal_drop(policy);
            let (mut game, p1, _) = started(config);
            rig(&mut game, p1, 0, &[card(4)]);
            game.grab(p1, StackTarget::Own(0)).unwrap();

            for target in [StackTarget::Center(5), StackTarget::Side(9)] {
                let err = game.drop(p1, target).unwrap_err();
                assert_eq!(err, IllegalMove::NoSuchStack(target));
                assert!(!err.lost_card());
                assert_eq!(game.player(p1).unwrap().holding(), Some(card(4)));
            }
            assert_eq!(game.history().len(), 1);
            assert_eq!(game.phase(), Phase::Play);
        }
    }

    #[test]
    fn test_drop_with_empty_hands() {
        let (mut game, p1, _) = started(GameConfig::default());
        assert_eq!(game.drop(p1, StackTarget::Center(0)), Err(IllegalMove::NotHolding));
        assert_eq!(game.phase(), Phase::Play);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_discard_is_noop_with_empty_hands() {
        let (mut game, p1, _) = started(GameConfig::default());

        assert_eq!(game.discard(p1), Ok(Move::Discarded(None)));
        assert!(!game.player(p1).unwrap().is_holding());
        assert_eq!(game.cards_left(p1), 24);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_discard_loses_card_by_default() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(6)]);
        game.grab(p1, StackTarget::Own(0)).unwrap();

        assert_eq!(game.discard(p1), Ok(Move::Discarded(Some(card(6)))));
        assert!(!game.player(p1).unwrap().is_holding());
        assert_eq!(game.stack(p1, StackTarget::Own(0)).unwrap().len(), 0);
    }

    #[test]
    fn test_discard_returns_card_under_return_policy() {
        let config = GameConfig::default().with_illegal_drop(IllegalDropPolicy::Return);
        let (mut game, p1, _) = started(config);
        rig(&mut game, p1, 3, &[card(6)]);
        game.grab(p1, StackTarget::Own(3)).unwrap();

        assert_eq!(
            game.discard(p1),
            Ok(Move::Returned {
                card: card(6),
                to: StackTarget::Own(3)
            })
        );
        assert_eq!(game.stack(p1, StackTarget::Own(3)).unwrap().top(), Ok(card(6)));
    }

    #[test]
    fn test_unknown_player_rejected() {
        let (mut game, _, _) = started(GameConfig::default());
        let stranger = PlayerId::new(4);

        assert_eq!(
            game.grab(stranger, StackTarget::Own(0)),
            Err(IllegalMove::PlayerNotPresent(stranger))
        );
        assert_eq!(
            game.discard(stranger),
            Err(IllegalMove::PlayerNotPresent(stranger))
        );
    }

    #[test]
    fn test_win_after_last_drop_and_terminal_state() {
        let (mut game, p1, p2) = started(GameConfig::default());
        for i in 0..6 {
            rig(&mut game, p1, i, &[]);
        }
        rig(&mut game, p1, 0, &[card(5)]);
        rig_center(&mut game, 0, card(4));

        game.grab(p1, StackTarget::Own(0)).unwrap();
        assert_eq!(game.phase(), Phase::Play);

        game.drop(p1, StackTarget::Center(0)).unwrap();
        assert_eq!(game.phase(), Phase::PostGame);
        assert_eq!(game.result(), Some(GameResult::Winner(p1)));

        let center_len = game.stack(p2, StackTarget::Center(0)).unwrap().len();
        let p2_left = game.cards_left(p2);
        assert_eq!(
            game.grab(p2, StackTarget::Own(0)),
            Err(IllegalMove::NotInPlay(Phase::PostGame))
        );
        assert_eq!(
            game.drop(p2, StackTarget::Center(0)),
            Err(IllegalMove::NotInPlay(Phase::PostGame))
        );
        assert_eq!(game.discard(p2), Err(IllegalMove::NotInPlay(Phase::PostGame)));
        assert_eq!(game.cards_left(p2), p2_left);
        assert_eq!(game.stack(p2, StackTarget::Center(0)).unwrap().len(), center_len);

        let frozen = game.duration();
        assert_eq!(game.duration(), frozen);
    }

    #[test]
    fn test_second_player_can_win() {
        let (mut game, _, p2) = started(GameConfig::default());
        for i in 0..6 {
            rig(&mut game, p2, i, &[]);
        }

        assert_eq!(game.check_win_conditions(), Some(GameResult::Winner(p2)));
        assert_eq!(game.phase(), Phase::PostGame);
    }

    #[test]
    fn test_simultaneous_empty_is_draw() {
        let (mut game, p1, p2) = started(GameConfig::default());
        for i in 0..6 {
            rig(&mut game, p1, i, &[]);
            rig(&mut game, p2, i, &[]);
        }

        assert_eq!(game.check_win_conditions(), Some(GameResult::Draw));
    }

    #[test]
    fn test_win_check_ignored_before_start() {
        let mut game = Game::new(Deck::standard(2)).unwrap();
        for i in 0..6 {
            rig(&mut game, PlayerId::P1, i, &[]);
        }
        assert_eq!(game.check_win_conditions(), None);
        assert_eq!(game.phase(), Phase::PreGame);
    }

    #[test]
    fn test_apply_dispatches() {
        let (mut game, p1, _) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(5)]);
        rig_center(&mut game, 0, card(6));

        assert!(matches!(
            game.apply(p1, Intent::Grab(StackTarget::Own(0))),
            Ok(Move::Grabbed { .. })
        ));
        assert!(matches!(
            game.apply(p1, Intent::Drop(StackTarget::Center(0))),
            Ok(Move::Placed { .. })
        ));
        assert_eq!(game.apply(p1, Intent::Discard), Ok(Move::Discarded(None)));

        let sequences: Vec<usize> = game.history().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
    }

    #[test]
    fn test_view() {
        let (mut game, p1, p2) = started(GameConfig::default());
        rig(&mut game, p1, 0, &[card(2)]);
        game.grab(p1, StackTarget::Own(0)).unwrap();

        let view = game.view(p1).unwrap();
        assert_eq!(view.viewer, p1);
        assert_eq!(view.phase, Phase::Play);
        assert_eq!(view.holding, Some(card(2)));
        assert_eq!(view.own_cards_left(), 20);
        assert_eq!(view.opponent_cards_left(), 24);
        assert_eq!(view.center.len(), 2);
        assert_eq!(view.side.len(), 2);

        let other = game.view(p2).unwrap();
        assert_eq!(other.holding, None);
        assert_eq!(other.opponent[0].len, 0);

        assert!(game.view(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_empty_center_accepts_nothing() {
        for (policy, discarded) in [
            (IllegalDropPolicy::Discard, true),
            (IllegalDropPolicy::Return, false),
        ] {
            let config = GameConfig::default().with_illegal_drop(policy);
            let (mut game, p1, _) = started(config);
            game.center[0] = CardStack::new(54);
            game.grab(p1, StackTarget::Own(0)).unwrap();

            let target = StackTarget::Center(0);
            let err = game.drop(p1, target).unwrap_err();
            assert_eq!(err, IllegalMove::CenterEmpty { target, discarded });
            assert_eq!(err.lost_card(), discarded);
            assert_eq!(game.player(p1).unwrap().is_holding(), !discarded);
            assert_eq!(game.center[0].top(), Err(StackError::Underflow));
        }
    }
}
