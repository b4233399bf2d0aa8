//! Game configuration options.

use crate::meld::SelectionStrategy;

/// Configuration options for a Gin Rummy game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ginrs::{GameOptions, SelectionStrategy};
///
/// let options = GameOptions::default()
///     .with_knock_limit(7)
///     .with_selection(SelectionStrategy::Optimal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Highest deadwood total that still allows a knock.
    pub knock_limit: u32,
    /// Bonus for going gin.
    pub gin_bonus: u32,
    /// Bonus for the defender when a knock is undercut.
    pub undercut_bonus: u32,
    /// Points needed to win the game.
    pub target_score: u32,
    /// How the scoring grouping is selected from candidate melds.
    pub selection: SelectionStrategy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 10,
            knock_limit: 10,
            gin_bonus: 25,
            undercut_bonus: 15,
            target_score: 100,
            selection: SelectionStrategy::Pivot,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the highest deadwood total that allows a knock.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_knock_limit(5);
    /// assert_eq!(options.knock_limit, 5);
    /// ```
    #[must_use]
    pub const fn with_knock_limit(mut self, limit: u32) -> Self {
        self.knock_limit = limit;
        self
    }

    /// Sets the gin bonus.
    #[must_use]
    pub const fn with_gin_bonus(mut self, bonus: u32) -> Self {
        self.gin_bonus = bonus;
        self
    }

    /// Sets the undercut bonus.
    #[must_use]
    pub const fn with_undercut_bonus(mut self, bonus: u32) -> Self {
        self.undercut_bonus = bonus;
        self
    }

    /// Sets the score needed to win the game.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(250);
    /// assert_eq!(options.target_score, 250);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Sets the meld selection strategy.
    ///
    /// The default pivot heuristic is what scoring and the bot are tuned
    /// against; [`SelectionStrategy::Optimal`] always finds the best grouping.
    #[must_use]
    pub const fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }
}
