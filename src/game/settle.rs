use crate::error::SettleError;
use crate::result::RoundResult;
use crate::scoring::Showdown;

use super::{Round, RoundState};

impl Round {
    /// Scores a round ended by a knock or gin.
    ///
    /// This function:
    /// 1. Evaluates both hands with the configured selection strategy
    /// 2. Lays the defender's deadwood off on the knocker's melds
    /// 3. Applies the gin, knock or undercut award
    ///
    /// Settling an already scored round returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state == RoundState::Scored {
            return self.result.clone().ok_or(SettleError::InvalidState);
        }

        let Some(knocker) = self.knocker else {
            return Err(SettleError::InvalidState);
        };
        if !matches!(self.state, RoundState::Knocked | RoundState::Gin) {
            return Err(SettleError::InvalidState);
        }

        let defender = knocker.other();
        let showdown = Showdown::evaluate(
            self.hand(knocker).cards(),
            self.hand(defender).cards(),
            &self.options,
        );
        let award = showdown.award;
        let winner = if award.to_knocker { knocker } else { defender };

        let result = RoundResult {
            outcome: award.outcome,
            knocker: Some(knocker),
            winner: Some(winner),
            points: award.points,
            knocker_deadwood: showdown.knocker.deadwood_total(),
            defender_deadwood: showdown.defender_deadwood,
            knocker_melds: showdown.knocker.grouping.melds().to_vec(),
            defender_melds: showdown.defender.grouping.melds().to_vec(),
            layoffs: showdown.layoffs,
        };

        tracing::info!(
            ?winner,
            outcome = ?result.outcome,
            points = result.points,
            "round scored"
        );

        self.state = RoundState::Scored;
        self.result = Some(result.clone());

        Ok(result)
    }
}
