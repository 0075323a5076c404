//! Round state types.

/// Round state.
///
/// ```text
/// Dealing -> PlayerTurn -> PlayerBlackjack | PlayerBust | DealerTurn
/// DealerTurn -> DealerBust | DealerStand
/// PlayerBlackjack | PlayerBust | DealerBust | DealerStand -> Resolved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player reached 21.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer stopped drawing at 17 or more.
    DealerStand,
    /// Round has been settled.
    Resolved,
}

impl RoundState {
    /// Returns whether the round can be resolved.
    #[must_use]
    pub const fn is_settleable(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::PlayerBust | Self::DealerBust | Self::DealerStand
        )
    }
}
