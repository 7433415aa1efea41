use thiserror::Error;

use crate::figure::FigureId;

/// Errors surfaced by document operations.
///
/// The domain is interactive and forgiving: hit-test misses, deletes with an
/// empty selection, and undo/redo at a journal boundary are silent no-ops,
/// not errors. Only operations that name a specific figure can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CadError {
    /// An operation referred to a figure the document no longer contains.
    #[error("no figure with id {0} in the document")]
    UnknownFigure(FigureId),

    /// A text edit named a figure that is not a text figure.
    #[error("figure {0} is not a text figure")]
    NotATextFigure(FigureId),
}
