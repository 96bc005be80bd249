/// The single error kind the move applier can produce. Search and move
/// generation never construct moves that trip it; it exists for externally
/// supplied moves (interactive input, malformed calls), and the match
/// runner converts it into an immediate loss for the offending side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("endpoint ({r}, {c}) is out of bounds")]
    OutOfBounds { r: i32, c: i32 },

    #[error("source cell ({r}, {c}) is not owned by the mover")]
    SourceNotOwned { r: u8, c: u8 },

    #[error("single-cell move outside the opening phase")]
    NotOpeningPhase,

    #[error("destination ({r}, {c}) is not empty")]
    DestinationOccupied { r: u8, c: u8 },

    #[error("jumped cell ({r}, {c}) does not hold an opposing stone")]
    MidpointNotOpponent { r: u8, c: u8 },
}
