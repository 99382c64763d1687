use super::action::Action;
use super::cancel::Cancel;
use super::config::Config;
use super::error::PlayerError;
use super::error::RoundError;
use super::event::*;
use super::phase::Phase;
use super::player::Player;
use super::prompt::Decision;
use super::rotation::Rotation;
use super::settlement::Settlement;
use super::showdown::Contender;
use super::showdown::Showdown;
use super::sink::Silent;
use super::sink::Sink;
use super::status::Status;
use crate::Chips;
use crate::PlayerId;
use crate::Position;
use crate::cards::Card;
use crate::cards::Dealer;
use crate::cards::Street;
use crate::cards::Strength;
use crate::pots::Ledger;
use std::collections::BTreeMap;
use tokio::time::Instant;

/// One hand of Hold'em, from blinds to payout.
///
/// The round is the only thing that moves chips: it asks one player at
/// a time for an action, commits the answer to that player and to the
/// ledger, and publishes what happened. At any moment the stacks plus
/// [`Round::pot`] add up to what the table started with.
///
/// Seats are fixed once the round starts. Seated players who are not
/// Ready, or have no chips, sit the hand out.
pub struct Round {
    config: Config,
    seats: Vec<Option<Player>>,
    phase: Phase,
    board: Vec<Card>,
    ledger: Ledger,
    committed: Vec<Chips>,
    paid: Chips,
    dealer: Dealer,
    settlements: Vec<Settlement>,
    cancel: Cancel,
    sink: Box<dyn Sink>,
}

impl Round {
    pub fn new(seats: Vec<Option<Player>>, config: Config) -> Result<Self, RoundError> {
        config.validate()?;
        Ok(Self {
            committed: vec![0; seats.len()],
            config,
            seats,
            phase: Phase::Ready,
            board: Vec::with_capacity(5),
            ledger: Ledger::new(),
            paid: 0,
            dealer: Dealer::new(),
            settlements: Vec::new(),
            cancel: Cancel::never(),
            sink: Box::new(Silent),
        })
    }
    pub fn with_dealer(self, dealer: Dealer) -> Self {
        Self { dealer, ..self }
    }
    pub fn with_sink<S>(self, sink: S) -> Self
    where
        S: Sink + 'static,
    {
        Self {
            sink: Box::new(sink),
            ..self
        }
    }
    pub fn with_cancel(self, cancel: Cancel) -> Self {
        Self { cancel, ..self }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn seats(&self) -> &[Option<Player>] {
        &self.seats
    }
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.seats.iter().flatten().find(|p| p.id() == id)
    }
    /// chips committed and not yet paid out
    pub fn pot(&self) -> Chips {
        self.ledger.sum() - self.paid
    }
    /// every chip on the table, stacks and pot
    pub fn chips(&self) -> Chips {
        self.seats.iter().flatten().map(Player::stack).sum::<Chips>() + self.pot()
    }
    /// Hand the players back to the table.
    pub fn into_seats(self) -> Vec<Option<Player>> {
        self.seats
    }
}

impl Round {
    pub fn add_player(&mut self, seat: Position, player: Player) -> Result<(), RoundError> {
        if self.phase.is_after(Phase::Ready) {
            return Err(RoundError::AlreadyStarted(self.phase));
        }
        if self.player(player.id()).is_some() {
            return Err(RoundError::PlayerExists(player.id()));
        }
        match self.seats.get_mut(seat) {
            Some(slot) if slot.is_none() => {
                *slot = Some(player);
                Ok(())
            }
            _ => Err(RoundError::SeatTaken(seat)),
        }
    }
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, RoundError> {
        if self.phase.is_after(Phase::Ready) {
            return Err(RoundError::AlreadyStarted(self.phase));
        }
        self.seats
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|p| p.id() == id))
            .and_then(Option::take)
            .ok_or(RoundError::PlayerNotFound(id))
    }
}

impl Round {
    /// Play the hand through to the end.
    ///
    /// Configuration errors come back before anything is touched. Any
    /// later error leaves the round where it stopped, with committed
    /// chips still committed.
    pub async fn play(&mut self) -> Result<Vec<Settlement>, RoundError> {
        let rotation = self.start()?;
        for street in Street::all().iter().copied() {
            if self.contenders(&rotation).len() < 2 {
                break;
            }
            self.interrupted()?;
            self.street(&rotation, street).await?;
        }
        self.interrupted()?;
        self.showdown(&rotation).await?;
        self.enter(Phase::End);
        Ok(self.settlements.clone())
    }

    fn start(&mut self) -> Result<Rotation, RoundError> {
        if self.phase != Phase::Ready {
            return Err(RoundError::AlreadyStarted(self.phase));
        }
        let occupied = self
            .seats
            .iter()
            .map(|seat| {
                seat.as_ref()
                    .is_some_and(|p| p.status() == Status::Ready && p.stack() > 0)
            })
            .collect::<Vec<bool>>();
        let rotation = Rotation::new(occupied, &self.config)?;
        self.enter(Phase::Started);
        self.dealer.shuffle();
        self.publish(DealerEvent::Shuffle);
        self.deal(&rotation)?;
        self.blinds(&rotation);
        Ok(rotation)
    }

    fn interrupted(&self) -> Result<(), RoundError> {
        match self.cancel.is_cancelled() {
            true => Err(RoundError::Cancelled(self.phase)),
            false => Ok(()),
        }
    }
}

impl Round {
    /// hole cards go round the table starting left of the button
    fn deal(&mut self, rotation: &Rotation) -> Result<(), RoundError> {
        let order = rotation.lap(rotation.after(rotation.button())).collect::<Vec<_>>();
        let holes = self.dealer.deal_hole(order.len());
        for (seat, hole) in order.into_iter().zip(holes) {
            let player = self.occupant_mut(seat);
            player.deal(hole)?;
            let id = player.id();
            self.publish(DealerEvent::HoleCards {
                seat,
                player: id,
                hole,
            });
        }
        Ok(())
    }

    fn blinds(&mut self, rotation: &Rotation) {
        let (small, big) = rotation.blinds();
        let chips = self.post(small, self.config.small_blind());
        self.publish(PlayerEvent::SmallBlind {
            seat: small,
            player: self.occupant(small).id(),
            chips,
        });
        let chips = self.post(big, self.config.big_blind());
        self.publish(PlayerEvent::BigBlind {
            seat: big,
            player: self.occupant(big).id(),
            chips,
        });
    }

    fn post(&mut self, seat: Position, blind: Chips) -> Chips {
        let player = self.occupant_mut(seat);
        let chips = player.post(blind);
        let id = player.id();
        log::debug!("{:<10} posts {}", self.occupant(seat).name(), chips);
        self.ledger.add_chips(id, chips);
        self.committed[seat] += chips;
        chips
    }

    async fn street(&mut self, rotation: &Rotation, street: Street) -> Result<(), RoundError> {
        if street != Street::Pref {
            self.committed.iter_mut().for_each(|c| *c = 0);
        }
        self.enter(Phase::from(street));
        self.reveal(street);
        self.bet(rotation, street).await
    }

    /// burn one, then turn the street's cards face up
    fn reveal(&mut self, street: Street) {
        if street == Street::Pref {
            return;
        }
        let burn = self.dealer.burn();
        self.publish(DealerEvent::Burn(burn));
        let event = match street {
            Street::Flop => {
                let flop = self.dealer.deal_flop();
                self.board.extend(flop);
                DealerEvent::Flop(flop)
            }
            Street::Turn => {
                let turn = self.dealer.deal_turn();
                self.board.push(turn);
                DealerEvent::Turn(turn)
            }
            _ => {
                let river = self.dealer.deal_river();
                self.board.push(river);
                DealerEvent::River(river)
            }
        };
        log::debug!("board {}", self.board.iter().map(Card::to_string).collect::<Vec<_>>().join(" "));
        self.publish(event);
    }

    /// Action closes once every player still able to act has acted at
    /// least once and matched the highest commitment. A bet or raise
    /// reopens it for everybody behind.
    async fn bet(&mut self, rotation: &Rotation, street: Street) -> Result<(), RoundError> {
        let mut max_bet = match street {
            Street::Pref => self.config.big_blind(),
            _ => 0,
        };
        let mut min_raise = self.config.min_bet();
        let mut acted = vec![false; self.seats.len()];
        let mut cursor = rotation.first_to_act(street);
        while self.contenders(rotation).len() > 1 {
            let Some(seat) = self.next_to_act(rotation, cursor, max_bet, &acted) else {
                break;
            };
            let offered = self.offer(seat, max_bet, min_raise);
            let decision = self.solicit(seat, &offered).await?;
            self.apply(seat, decision);
            acted[seat] = true;
            let total = self.committed[seat];
            if decision.action().is_aggressive() && total > max_bet {
                let increment = total - max_bet;
                if increment >= min_raise {
                    min_raise = increment;
                }
                max_bet = total;
            }
            cursor = rotation.after(seat);
        }
        Ok(())
    }

    fn next_to_act(
        &self,
        rotation: &Rotation,
        cursor: Position,
        max_bet: Chips,
        acted: &[bool],
    ) -> Option<Position> {
        let acting = rotation
            .lap(cursor)
            .filter(|seat| self.occupant(*seat).status().is_acting())
            .collect::<Vec<Position>>();
        match acting.as_slice() {
            [only] if self.committed[*only] >= max_bet => None,
            _ => acting
                .iter()
                .copied()
                .find(|seat| !acted[*seat] || self.committed[*seat] < max_bet),
        }
    }

    /// Fold and AllIn always. Then Bet and Check when nothing is bet yet,
    /// Check and Raise when already matched, Call and Raise otherwise.
    /// Amounts the stack cannot exceed are left to AllIn.
    fn offer(&self, seat: Position, max_bet: Chips, min_raise: Chips) -> Vec<Action> {
        let stack = self.occupant(seat).stack();
        let owed = max_bet.saturating_sub(self.committed[seat]);
        let min_bet = self.config.min_bet();
        let mut offered = vec![Action::Fold, Action::AllIn(stack)];
        match (max_bet, owed) {
            (0, _) => {
                if stack > min_bet {
                    offered.push(Action::Bet(min_bet));
                }
                offered.push(Action::Check);
            }
            (_, 0) => {
                offered.push(Action::Check);
                if stack > min_raise {
                    offered.push(Action::Raise(min_raise));
                }
            }
            (_, owed) => {
                if stack > owed {
                    offered.push(Action::Call(owed));
                }
                if stack > owed + min_raise {
                    offered.push(Action::Raise(owed + min_raise));
                }
            }
        }
        offered
    }

    /// Ask until the answer is valid or the deadline passes.
    async fn solicit(&mut self, seat: Position, offered: &[Action]) -> Result<Decision, RoundError> {
        let phase = self.phase;
        let player = self
            .seats
            .get_mut(seat)
            .and_then(Option::as_mut)
            .expect("rotation only visits occupied seats");
        let deadline = Instant::now() + player.timeout();
        loop {
            match player.request(offered, deadline, &mut self.cancel).await {
                Ok(decision) => return Ok(decision),
                Err(e) if e.is_recoverable() => continue,
                Err(PlayerError::Cancelled) => return Err(RoundError::Cancelled(phase)),
                Err(e) => return Err(RoundError::from(e)),
            }
        }
    }

    fn apply(&mut self, seat: Position, decision: Decision) {
        let player = self.occupant(seat);
        let id = player.id();
        log::debug!("{:<10} {}", player.name(), decision.action());
        if decision.chips() > 0 {
            self.ledger.add_chips(id, decision.chips());
            self.committed[seat] += decision.chips();
        }
        self.publish(PlayerEvent::Act {
            seat,
            player: id,
            action: decision.action(),
            defaulted: decision.is_defaulted(),
        });
    }
}

impl Round {
    async fn showdown(&mut self, rotation: &Rotation) -> Result<(), RoundError> {
        self.enter(Phase::Showdown);
        let seats = self.contenders(rotation);
        let mut contenders = Vec::with_capacity(seats.len());
        if let [winner] = seats.as_slice() {
            self.uncontested(*winner).await?;
            contenders.push(Contender {
                seat: *winner,
                player: self.occupant(*winner).id(),
                strength: None,
            });
        } else {
            for seat in seats {
                let player = self.occupant(seat);
                let id = player.id();
                let Some(hole) = player.hole() else {
                    log::warn!("{} reached showdown without cards", player.name());
                    continue;
                };
                let cards = hole
                    .cards()
                    .into_iter()
                    .chain(self.board.iter().copied())
                    .collect::<Vec<Card>>();
                let strength = Strength::best(&cards)?;
                log::info!("{:<10} {}", player.name(), strength);
                self.publish(PlayerEvent::Reveal {
                    seat,
                    player: id,
                    hole,
                    strength: Some(strength.clone()),
                });
                contenders.push(Contender {
                    seat,
                    player: id,
                    strength: Some(strength),
                });
            }
        }
        let rewards = Showdown::from(contenders.clone()).rewards(&self.ledger.settle());
        self.payout(rotation, &contenders, &rewards);
        Ok(())
    }

    /// The last player standing may show their cards or not.
    async fn uncontested(&mut self, seat: Position) -> Result<(), RoundError> {
        let offered = [Action::ShowHoleCards, Action::HideHoleCards];
        let decision = self.solicit(seat, &offered).await?;
        let player = self.occupant(seat);
        let id = player.id();
        let hole = player.hole();
        self.publish(PlayerEvent::Act {
            seat,
            player: id,
            action: decision.action(),
            defaulted: decision.is_defaulted(),
        });
        if let (Action::ShowHoleCards, Some(hole)) = (decision.action(), hole) {
            self.publish(PlayerEvent::Reveal {
                seat,
                player: id,
                hole,
                strength: None,
            });
        }
        Ok(())
    }

    fn payout(
        &mut self,
        rotation: &Rotation,
        contenders: &[Contender],
        rewards: &BTreeMap<PlayerId, Chips>,
    ) {
        for seat in rotation.lap(rotation.after(rotation.button())) {
            let player = self.occupant_mut(seat);
            let id = player.id();
            let reward = rewards.get(&id).copied().unwrap_or_default();
            if reward > 0 {
                player.win(reward);
            } else if player.status().is_contending() {
                player.lose();
            }
            let status = player.status();
            self.paid += reward;
            if reward > 0 {
                log::info!("{:<10} wins {}", self.occupant(seat).name(), reward);
                self.publish(PlayerEvent::Award {
                    seat,
                    player: id,
                    chips: reward,
                });
            }
            self.settlements.push(Settlement {
                seat,
                player: id,
                risked: self.ledger.chips_by(&id),
                reward,
                status,
                strength: contenders
                    .iter()
                    .find(|c| c.player == id)
                    .and_then(|c| c.strength.clone()),
            });
        }
    }
}

impl Round {
    /// non-folded players in seat order starting left of the button
    fn contenders(&self, rotation: &Rotation) -> Vec<Position> {
        rotation
            .lap(rotation.after(rotation.button()))
            .filter(|seat| self.occupant(*seat).status().is_contending())
            .collect()
    }
    fn occupant(&self, seat: Position) -> &Player {
        self.seats
            .get(seat)
            .and_then(Option::as_ref)
            .expect("rotation only visits occupied seats")
    }
    fn occupant_mut(&mut self, seat: Position) -> &mut Player {
        self.seats
            .get_mut(seat)
            .and_then(Option::as_mut)
            .expect("rotation only visits occupied seats")
    }
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        log::info!("{:<9} pot {}", phase, self.pot());
        self.publish(RoundEvent {
            phase,
            snapshot: self.snapshot(),
        });
    }
    fn publish<E>(&self, event: E)
    where
        E: Into<Event>,
    {
        self.sink.publish(event.into());
    }
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self
                .seats
                .iter()
                .enumerate()
                .filter_map(|(seat, p)| p.as_ref().map(|p| (seat, p)))
                .map(|(seat, p)| PlayerInfo {
                    seat,
                    id: p.id(),
                    name: p.name().to_string(),
                    stack: p.stack(),
                    status: p.status(),
                })
                .collect(),
            board: self.board.clone(),
            pot: self.pot(),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} pot {}", self.phase, self.pot())?;
        writeln!(
            f,
            "board {}",
            self.board.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
        )?;
        for (seat, player) in self.seats.iter().enumerate() {
            if let Some(player) = player {
                writeln!(f, "{:<3}{}", seat, player)?;
            }
        }
        Ok(())
    }
}
