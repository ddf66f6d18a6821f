//! Table setup options.

use crate::deck::ShuffleMode;
use crate::player::{MAX_STARTING_CHIPS, STARTING_CHIPS};

/// Setup options for a Pontoon table.
///
/// The playing rules are fixed; these only control how the table is set up.
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::{ShuffleMode, TableOptions};
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_shuffle(ShuffleMode::SwapAny);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips each player starts with.
    pub starting_chips: usize,
    /// How the deck is shuffled before play.
    pub shuffle: ShuffleMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            shuffle: ShuffleMode::Uniform,
        }
    }
}

impl TableOptions {
    /// Sets the chips each player starts with, capped at
    /// [`MAX_STARTING_CHIPS`].
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{MAX_STARTING_CHIPS, TableOptions};
    ///
    /// let options = TableOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    ///
    /// let options = TableOptions::default().with_starting_chips(usize::MAX);
    /// assert_eq!(options.starting_chips, MAX_STARTING_CHIPS);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = if chips > MAX_STARTING_CHIPS {
            MAX_STARTING_CHIPS
        } else {
            chips
        };
        self
    }

    /// Sets the shuffle mode.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{ShuffleMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_shuffle(ShuffleMode::SwapAny);
    /// assert_eq!(options.shuffle, ShuffleMode::SwapAny);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }
}
