use crate::player::{Bot, PlayerConfig};

/// Trait for types that build other types.
pub trait Build {
    /// The type to be built.
    type Output;

    /// Build an instance of [`Build::Output`].
    fn build(self) -> Self::Output;
}

impl Build for PlayerConfig {
    type Output = Bot;

    fn build(self) -> Self::Output {
        self.into()
    }
}
