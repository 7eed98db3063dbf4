use crate::prelude::{ElectronDensity, ModelError, SpaceTimePoint};

/// [ElectronDensityModel] is the capability the query loop depends on.
/// Implementors evaluate the free electron concentration at a given
/// [SpaceTimePoint], however they see fit.
pub trait ElectronDensityModel {
    /// Evaluates the electron density at this [SpaceTimePoint].
    fn electron_density(&mut self, point: &SpaceTimePoint)
        -> Result<ElectronDensity, ModelError>;

    /// Short model name
    fn name(&self) -> &'static str;

    /// Readable model description
    fn description(&self) -> &'static str;
}

impl<M: ElectronDensityModel + ?Sized> ElectronDensityModel for Box<M> {
    fn electron_density(
        &mut self,
        point: &SpaceTimePoint,
    ) -> Result<ElectronDensity, ModelError> {
        (**self).electron_density(point)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}
