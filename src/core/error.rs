use crate::plant::PlantId;

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// There are no plants, so no day can be assigned.
    #[display("there are no plants to assign the interventions to")]
    EmptyInput,

    /// The optimal sequence refers to a plant that is missing from the catalog.
    ///
    /// This is a bug rather than a user error.
    #[display("plant {_0} is missing from the catalog")]
    UnknownPlant(#[error(not(source))] PlantId),
}
