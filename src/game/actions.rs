use crate::analysis::HandAnalysis;
use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Declaration, Round, RoundState, Seat, TurnPhase};

impl Round {
    fn ensure_turn(&self, seat: Seat, phase: TurnPhase) -> Result<(), ActionError> {
        if self.state != RoundState::InProgress {
            return Err(ActionError::InvalidState);
        }

        if self.turn != seat {
            return Err(ActionError::NotYourTurn);
        }

        if self.phase != phase {
            return Err(ActionError::WrongPhase);
        }

        Ok(())
    }

    fn end_turn(&mut self) {
        self.turn = self.turn.other();
        self.phase = TurnPhase::Draw;
    }

    /// Draws the top card of the stock.
    ///
    /// An empty stock is rebuilt from the discard pile, leaving its top card
    /// in place. When there is nothing to rebuild it from, the round ends
    /// with no score.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, it is not the seat's
    /// turn to draw, or no cards are left (the round is then scored as
    /// exhausted).
    pub fn draw_stock(&mut self, seat: Seat) -> Result<Card, ActionError> {
        self.ensure_turn(seat, TurnPhase::Draw)?;

        if self.deck.is_empty() {
            let recycled = self.discard.take_all_but_top();
            if recycled.is_empty() {
                tracing::info!("stock exhausted, round ends without score");
                self.state = RoundState::Scored;
                self.result = Some(RoundResult::exhausted());
                return Err(ActionError::StockExhausted);
            }
            tracing::debug!(cards = recycled.len(), "reshuffling discard pile into stock");
            self.deck.refill(recycled);
        }

        let card = self
            .deck
            .deal_one()
            .map_err(|_| ActionError::StockExhausted)?;
        self.hand_mut(seat).add(card)?;
        self.phase = TurnPhase::Discard;

        Ok(card)
    }

    /// Takes the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, it is not the seat's
    /// turn to draw, or the pile is empty.
    pub fn draw_discard(&mut self, seat: Seat) -> Result<Card, ActionError> {
        self.ensure_turn(seat, TurnPhase::Draw)?;

        let card = self.discard.pop_top()?;
        self.hand_mut(seat).add(card)?;
        self.phase = TurnPhase::Discard;

        Ok(card)
    }

    /// Discards a card and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, it is not the seat's
    /// turn to discard, or the card is not in the hand.
    pub fn discard(&mut self, seat: Seat, card: Card) -> Result<(), ActionError> {
        self.ensure_turn(seat, TurnPhase::Discard)?;

        self.hand_mut(seat).remove(card)?;
        self.discard.push(card);
        self.end_turn();

        Ok(())
    }

    /// Discards a card and knocks.
    ///
    /// # Errors
    ///
    /// See [`Round::declare`].
    pub fn knock(&mut self, seat: Seat, card: Card) -> Result<RoundState, ActionError> {
        self.declare(seat, Declaration::Knock, card)
    }

    /// Discards a card and declares gin.
    ///
    /// # Errors
    ///
    /// See [`Round::declare`].
    pub fn gin(&mut self, seat: Seat, card: Card) -> Result<RoundState, ActionError> {
        self.declare(seat, Declaration::Gin, card)
    }

    /// Discards a card and ends play with a knock or gin.
    ///
    /// The remaining hand is checked after the discard. A hand with no
    /// deadwood always ends in [`RoundState::Gin`], even when knocking. A
    /// failed declaration puts the card back and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, it is not the seat's
    /// turn to discard, the card is not in the hand, or the deadwood does not
    /// meet the declaration's threshold.
    pub fn declare(
        &mut self,
        seat: Seat,
        declaration: Declaration,
        card: Card,
    ) -> Result<RoundState, ActionError> {
        self.ensure_turn(seat, TurnPhase::Discard)?;

        self.hand_mut(seat).remove(card)?;
        let analysis = HandAnalysis::of_hand(self.hand(seat), &self.options);
        let valid = match declaration {
            Declaration::Knock => analysis.is_valid_knock(self.options.knock_limit),
            Declaration::Gin => analysis.is_gin(),
        };

        if !valid {
            tracing::debug!(
                ?seat,
                ?declaration,
                deadwood = analysis.deadwood_total(),
                "rejected declaration"
            );
            self.hand_mut(seat).add(card)?;
            return Err(ActionError::InvalidDeclaration);
        }

        self.discard.push(card);
        self.knocker = Some(seat);
        self.state = if analysis.is_gin() {
            RoundState::Gin
        } else {
            RoundState::Knocked
        };

        tracing::info!(
            ?seat,
            state = ?self.state,
            deadwood = analysis.deadwood_total(),
            "round ended by declaration"
        );

        Ok(self.state)
    }
}
