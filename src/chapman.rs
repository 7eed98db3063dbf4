//! Built-in Chapman layer model
use log::trace;

use crate::{
    prelude::{ElectronDensity, ElectronDensityModel, ModelError, SpaceTimePoint},
    solar::cos_zenith_angle,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plasma frequency to density conversion factor: NmF2 = K * foF2^2,
/// NmF2 in m^-3 and foF2 in MHz.
const PLASMA_FREQ_TO_DENSITY: f64 = 1.24E10;

/// Integral of the normalized alpha-Chapman profile, sqrt(2πe).
const CHAPMAN_INTEGRAL: f64 = 4.132731354122493;

/// [ChapmanParameters] shaping the F2 layer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChapmanParameters {
    /// Peak altitude of the F2 layer (km)
    pub hmf2_km: f64,

    /// Neutral scale height (km)
    pub scale_height_km: f64,

    /// F10.7 solar radio flux (sfu)
    pub f107_sfu: f64,
}

impl Default for ChapmanParameters {
    fn default() -> Self {
        Self {
            hmf2_km: 300.0,
            scale_height_km: 60.0,
            f107_sfu: 100.0,
        }
    }
}

/// [ChapmanModel] describes the ionosphere as a single alpha-Chapman F2 layer,
/// whose peak density follows the solar zenith angle and solar activity.
/// It is a coarse climatology that does not require any data file.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ChapmanModel {
    pub parameters: ChapmanParameters,
}

impl ChapmanModel {
    pub fn new(parameters: ChapmanParameters) -> Self {
        Self { parameters }
    }

    /// Critical frequency of the F2 layer (MHz) at this [SpaceTimePoint]
    pub fn fof2_mhz(&self, point: &SpaceTimePoint) -> f64 {
        let cos_chi = cos_zenith_angle(point).max(0.0);
        let activity = (1.0 + 0.006 * (self.parameters.f107_sfu - 100.0)).max(0.25);
        (3.0 + 6.0 * cos_chi.sqrt()) * activity.sqrt()
    }

    /// Peak density of the F2 layer at this [SpaceTimePoint]
    pub fn nmf2(&self, point: &SpaceTimePoint) -> ElectronDensity {
        let fof2 = self.fof2_mhz(point);
        ElectronDensity::from_per_m3(PLASMA_FREQ_TO_DENSITY * fof2 * fof2)
    }

    /// Vertical Total Electron Content (in TECu) above this location,
    /// obtained by integrating the profile over altitude.
    pub fn vertical_tec(&self, point: &SpaceTimePoint) -> f64 {
        let h_m = self.parameters.scale_height_km * 1.0E3;
        self.nmf2(point).per_m3() * h_m * CHAPMAN_INTEGRAL / 1.0E16
    }

    /// Normalized alpha-Chapman profile, 1.0 at the peak.
    fn profile(&self, altitude_km: f64) -> f64 {
        let z = (altitude_km - self.parameters.hmf2_km) / self.parameters.scale_height_km;
        (0.5 * (1.0 - z - (-z).exp())).exp()
    }
}

impl ElectronDensityModel for ChapmanModel {
    fn electron_density(
        &mut self,
        point: &SpaceTimePoint,
    ) -> Result<ElectronDensity, ModelError> {
        let nmf2 = self.nmf2(point);
        let ne = nmf2 * self.profile(point.altitude_km);

        trace!(
            "{} - nmf2={:.3e} m-3 ne({} km)={:.3e} m-3",
            point.epoch,
            nmf2.per_m3(),
            point.altitude_km,
            ne.per_m3()
        );

        if ne.is_finite() {
            Ok(ne)
        } else {
            Err(ModelError::NonFinite)
        }
    }

    fn name(&self) -> &'static str {
        "chapman"
    }

    fn description(&self) -> &'static str {
        "alpha-Chapman F2 layer driven by solar zenith angle"
    }
}
