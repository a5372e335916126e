use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyAngleError {
    #[error("{0} refinement produced a non-finite epoch or value; the series is locally flat near the seed epoch")]
    NonFiniteRefinement(&'static str),
}
